//! Bloom HTML encoder
//!
//! Renders the classified book as a Bloom document: a `bloomDataDiv` with the
//! book metadata followed by one `bloom-page` per page. Metadata values are
//! escaped; page text is already markup and is written as-is.

use super::{escape_html, license_url};
use crate::error::ConversionError;
use crate::types::{Book, BookMetadata, Layout, PageContent};
use regex::Regex;
use std::io::Write;
use std::sync::OnceLock;

const FORMAT_VERSION: &str = "2.1";

fn block_tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^<(h[1-6]|p|div|ul|ol|li|blockquote|hr|pre|table|figure|figcaption)[\s>/]")
            .expect("valid block tag regex")
    })
}

/// Which book language a translation group defaults to.
/// Bloom names these `V` (primary) and `N1` (secondary).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Primary,
    Secondary,
}

impl Slot {
    fn placeholder(self) -> &'static str {
        match self {
            Slot::Primary => "V",
            Slot::Secondary => "N1",
        }
    }

    /// Language code this slot stands for in `metadata`
    fn language(self, metadata: &BookMetadata) -> &str {
        match self {
            Slot::Primary => &metadata.l1,
            Slot::Secondary => metadata.l2.as_deref().unwrap_or(&metadata.l1),
        }
    }
}

/// Encoder for Bloom HTML
pub struct BloomEncoder {
    generator: String,
}

impl BloomEncoder {
    pub fn new() -> Self {
        Self {
            generator: "Bloom Markdown Converter".to_string(),
        }
    }

    /// Set the `Generator` meta tag
    pub fn with_generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = generator.into();
        self
    }

    pub fn format_name(&self) -> &str {
        "Bloom HTML"
    }

    pub fn file_extension(&self) -> &str {
        "htm"
    }

    /// Render the whole document
    pub fn render(&self, book: &Book) -> String {
        let metadata = &book.metadata;
        let title = metadata.title().unwrap_or("Untitled");
        let pages = book
            .pages
            .iter()
            .map(|page| self.page(page, metadata))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<!doctype html>
<html>
  <head>
    <meta charset="UTF-8" />
    <meta name="Generator" content="{generator}" />
    <meta name="BloomFormatVersion" content="{FORMAT_VERSION}" />
    <title>{title}</title>
  </head>
  <body>
    {data_div}
    {pages}
  </body>
</html>"#,
            generator = escape_html(&self.generator),
            title = escape_html(title),
            data_div = self.data_div(metadata),
        )
    }

    fn data_div(&self, metadata: &BookMetadata) -> String {
        let mut entries = vec![data_entry("contentLanguage1", "*", &metadata.l1)];

        if let Some(l2) = &metadata.l2 {
            entries.push(data_entry("contentLanguage2", "*", l2));
        }
        if let Some(cover) = &metadata.cover_image {
            entries.push(data_entry("coverImage", "*", cover));
        }
        for (lang, title) in &metadata.all_titles {
            entries.push(data_entry("bookTitle", lang, title));
        }
        if let Some(isbn) = &metadata.isbn {
            entries.push(data_entry("ISBN", "*", isbn));
        }
        if let Some(copyright) = &metadata.copyright {
            entries.push(data_entry("copyright", "*", copyright));
        }
        if let Some(license) = &metadata.license {
            entries.push(data_entry("licenseUrl", "*", license_url(license)));
        }

        format!(
            "<div id=\"bloomDataDiv\">\n{}\n    </div>",
            entries.join("\n")
        )
    }

    fn page(&self, page: &PageContent, metadata: &BookMetadata) -> String {
        match page.layout {
            Layout::ImageOnly => self.image_only_page(page),
            Layout::TextOnly => self.text_only_page(page, metadata),
            Layout::ImageTopTextBottom => {
                let slot = default_slot(page, metadata);
                self.split_page(
                    &image_block(page.image.as_deref()),
                    &text_block(all_entries(page), slot),
                )
            }
            Layout::TextTopImageBottom => {
                let slot = default_slot(page, metadata);
                self.split_page(
                    &text_block(all_entries(page), slot),
                    &image_block(page.image.as_deref()),
                )
            }
            Layout::TextImageText => self.image_in_middle_page(
                page,
                text_block(slot_entries(page, metadata, Slot::Primary), Slot::Primary),
                text_block(slot_entries(page, metadata, Slot::Primary), Slot::Primary),
            ),
            Layout::BilingualTextImageText => self.image_in_middle_page(
                page,
                text_block(slot_entries(page, metadata, Slot::Primary), Slot::Primary),
                text_block(slot_entries(page, metadata, Slot::Secondary), Slot::Secondary),
            ),
        }
    }

    fn image_only_page(&self, page: &PageContent) -> String {
        format!(
            r#"    <div class="bloom-page customPage">
      <div class="marginBox">
        {image}
      </div>
    </div>"#,
            image = image_block(page.image.as_deref()),
        )
    }

    fn text_only_page(&self, page: &PageContent, metadata: &BookMetadata) -> String {
        format!(
            r#"    <div class="bloom-page customPage">
      <div class="marginBox">
        {text}
      </div>
    </div>"#,
            text = text_block(all_entries(page), default_slot(page, metadata)),
        )
    }

    fn split_page(&self, top: &str, bottom: &str) -> String {
        format!(
            r#"    <div class="bloom-page customPage">
      <div class="marginBox">
        <div class="split-pane horizontal-percent">
          <div class="split-pane-component position-top">
            {top}
          </div>
          <div class="split-pane-divider horizontal-divider"></div>
          <div class="split-pane-component position-bottom">
            {bottom}
          </div>
        </div>
      </div>
    </div>"#
        )
    }

    fn image_in_middle_page(&self, page: &PageContent, top: String, bottom: String) -> String {
        format!(
            r#"    <div class="bloom-page customPage">
      <div class="marginBox">
        <div class="split-pane horizontal-percent">
          <div class="split-pane-component position-top">
            {top}
          </div>
          <div class="split-pane-divider horizontal-divider"></div>
          <div class="split-pane-component position-bottom">
            <div class="split-pane-component-inner">
              <div class="split-pane horizontal-percent">
                <div class="split-pane-component position-top">
                  {image}
                </div>
                <div class="split-pane-divider horizontal-divider"></div>
                <div class="split-pane-component position-bottom">
                  {bottom}
                </div>
              </div>
            </div>
          </div>
        </div>
      </div>
    </div>"#,
            image = image_block(page.image.as_deref()),
        )
    }

    /// Render and write the document
    pub fn encode(&self, book: &Book, writer: &mut dyn Write) -> Result<(), ConversionError> {
        writer
            .write_all(self.render(book).as_bytes())
            .map_err(|e| ConversionError::EncodingFailed(e.to_string()))
    }
}

impl Default for BloomEncoder {
    fn default() -> Self {
        Self::new()
    }
}

fn data_entry(key: &str, lang: &str, value: &str) -> String {
    format!(
        r#"      <div data-book="{key}" lang="{}">{}</div>"#,
        escape_html(lang),
        escape_html(value)
    )
}

/// `N1` when the only text on the page is in the secondary language
fn default_slot(page: &PageContent, metadata: &BookMetadata) -> Slot {
    match (&metadata.l2, page.text_blocks.len()) {
        (Some(l2), 1) if page.text_blocks.contains_key(l2) => Slot::Secondary,
        _ => Slot::Primary,
    }
}

fn all_entries(page: &PageContent) -> Vec<(&str, &str)> {
    page.text_blocks
        .iter()
        .map(|(lang, text)| (lang.as_str(), text.as_str()))
        .collect()
}

/// The single entry for the slot's language, if the page has one
fn slot_entries<'a>(page: &'a PageContent, metadata: &BookMetadata, slot: Slot) -> Vec<(&'a str, &'a str)> {
    page.text_blocks
        .get_key_value(slot.language(metadata))
        .map(|(lang, text)| (lang.as_str(), text.as_str()))
        .into_iter()
        .collect()
}

fn image_block(src: Option<&str>) -> String {
    format!(
        r#"<div class="split-pane-component-inner">
              <div class="bloom-canvas bloom-leadingElement bloom-has-canvas-element">
                <div class="bloom-canvas-element bloom-backgroundImage">
                  <div class="bloom-leadingElement bloom-imageContainer">
                    <img src="{}" />
                  </div>
                </div>
              </div>
            </div>"#,
        escape_html(src.unwrap_or(""))
    )
}

/// A translation group; rendered even when `entries` is empty
fn text_block(entries: Vec<(&str, &str)>, slot: Slot) -> String {
    let editables = entries
        .into_iter()
        .map(|(lang, text)| editable(lang, text))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<div class="split-pane-component-inner">
              <div class="bloom-translationGroup" data-default-languages="{}">
{editables}
              </div>
            </div>"#,
        slot.placeholder()
    )
}

fn editable(lang: &str, text: &str) -> String {
    let content = if block_tag_re().is_match(text) {
        text.to_string()
    } else {
        format!("<p>{}</p>", text)
    };
    format!(
        r#"                <div class="bloom-editable" lang="{}">{content}</div>"#,
        escape_html(lang)
    )
}
