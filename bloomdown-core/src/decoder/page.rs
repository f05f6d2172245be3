//! Page parser: turns one page chunk into a classified `PageContent`

use super::assets::ImageCheck;
use super::inline::markdown_to_html;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::layout::classify;
use crate::types::{BookMetadata, ContentToken, PageContent};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

fn image_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"!\[.*?\]\(([^)]+)\)").expect("valid image regex"))
}

fn lang_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<!-- lang=([a-z]{2,3}) -->").expect("valid language marker regex"))
}

/// What a single scan over a page's lines produced
#[derive(Debug, Default)]
struct PageScan {
    image: Option<String>,
    sequence: Vec<ContentToken>,
    text_blocks: BTreeMap<String, String>,
}

/// Language block being accumulated
struct OpenBlock {
    lang: String,
    text: String,
}

impl OpenBlock {
    /// Convert and store the block; a later block in the same language
    /// replaces an earlier one.
    fn flush_into(self, text_blocks: &mut BTreeMap<String, String>) {
        let text = self.text.trim();
        if !text.is_empty() {
            text_blocks.insert(self.lang, markdown_to_html(text));
        }
    }
}

/// Parses page chunks against the book's metadata
pub struct PageParser<'a> {
    metadata: &'a BookMetadata,
    image_check: Option<&'a dyn ImageCheck>,
}

impl<'a> PageParser<'a> {
    pub fn new(metadata: &'a BookMetadata) -> Self {
        Self {
            metadata,
            image_check: None,
        }
    }

    /// Warn about images that the check cannot find
    pub fn with_image_check(mut self, check: &'a dyn ImageCheck) -> Self {
        self.image_check = Some(check);
        self
    }

    /// Parse one page. Returns `None` when the page has neither text nor an
    /// image; a warning is recorded and the caller drops the page.
    pub fn parse(
        &self,
        content: &str,
        page_number: usize,
        diagnostics: &mut Diagnostics,
    ) -> Option<PageContent> {
        let scan = self.scan(content, page_number, diagnostics);

        let has_image = scan.sequence.iter().any(ContentToken::is_image);
        if scan.text_blocks.is_empty() && !has_image {
            diagnostics.push(
                Diagnostic::warning(format!("Page {} has no text or image content", page_number))
                    .on_page(page_number),
            );
            return None;
        }

        let layout = classify(
            &scan.sequence,
            &self.metadata.l1,
            self.metadata.l2.as_deref(),
        );
        tracing::debug!(
            page = page_number,
            tokens = scan.sequence.len(),
            %layout,
            "classified page"
        );

        Some(PageContent {
            layout,
            image: scan.image,
            text_blocks: scan.text_blocks,
        })
    }

    fn scan(&self, content: &str, page_number: usize, diagnostics: &mut Diagnostics) -> PageScan {
        let mut scan = PageScan::default();
        let mut open: Option<OpenBlock> = None;

        for line in content.lines() {
            let trimmed = line.trim();

            if let Some(caps) = image_re().captures(trimmed) {
                let path = &caps[1];
                scan.sequence.push(ContentToken::Image);
                self.check_image(path, page_number, diagnostics);
                if scan.image.is_none() {
                    scan.image = Some(path.to_string());
                }
                continue;
            }

            if let Some(caps) = lang_re().captures(trimmed) {
                if let Some(block) = open.take() {
                    block.flush_into(&mut scan.text_blocks);
                }

                let lang = caps[1].to_string();
                if !self.metadata.knows_language(&lang) {
                    diagnostics.push(
                        Diagnostic::warning(format!(
                            "Language '{}' not found in metadata languages (page {})",
                            lang, page_number
                        ))
                        .on_page(page_number),
                    );
                }
                scan.sequence.push(ContentToken::Text(lang.clone()));
                open = Some(OpenBlock {
                    lang,
                    text: String::new(),
                });
                continue;
            }

            // Lines before the first language marker are ignored
            if let Some(block) = open.as_mut() {
                block.text.push_str(line);
                block.text.push('\n');
            }
        }

        if let Some(block) = open {
            block.flush_into(&mut scan.text_blocks);
        }

        scan
    }

    fn check_image(&self, path: &str, page_number: usize, diagnostics: &mut Diagnostics) {
        if let Some(check) = self.image_check {
            if !check.exists(path) {
                diagnostics.push(
                    Diagnostic::warning(format!("Image not found: {} (page {})", path, page_number))
                        .on_page(page_number),
                );
            }
        }
    }
}
