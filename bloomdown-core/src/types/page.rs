//! Page model: layouts, content tokens and parsed pages

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Page shape chosen by the layout classifier and consumed by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    ImageOnly,
    TextOnly,
    ImageTopTextBottom,
    TextTopImageBottom,
    TextImageText,
    BilingualTextImageText,
}

impl Layout {
    /// Name used in the markup and in statistics
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::ImageOnly => "image-only",
            Layout::TextOnly => "text-only",
            Layout::ImageTopTextBottom => "image-top-text-bottom",
            Layout::TextTopImageBottom => "text-top-image-bottom",
            Layout::TextImageText => "text-image-text",
            Layout::BilingualTextImageText => "bilingual-text-image-text",
        }
    }

    /// Human-readable name ("Text Image Text")
    pub fn display_name(&self) -> String {
        self.as_str()
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a page's content sequence
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentToken {
    /// An image reference
    Image,
    /// A language block marker carrying its code
    Text(String),
}

impl ContentToken {
    pub fn text(code: impl Into<String>) -> Self {
        ContentToken::Text(code.into())
    }

    pub fn is_image(&self) -> bool {
        matches!(self, ContentToken::Image)
    }

    /// Language code of a text token; empty codes count as no text
    pub fn language(&self) -> Option<&str> {
        match self {
            ContentToken::Text(code) if !code.is_empty() => Some(code),
            _ => None,
        }
    }
}

/// A parsed, classified page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageContent {
    pub layout: Layout,

    /// First image referenced on the page, path as written in the source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Language code -> converted markup
    pub text_blocks: BTreeMap<String, String>,
}

impl PageContent {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            image: None,
            text_blocks: BTreeMap::new(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_text(mut self, lang: impl Into<String>, markup: impl Into<String>) -> Self {
        self.text_blocks.insert(lang.into(), markup.into());
        self
    }

    pub fn has_text(&self) -> bool {
        !self.text_blocks.is_empty()
    }
}
