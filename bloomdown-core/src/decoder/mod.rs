//! Decoder for annotated markdown books
//!
//! The input is a frontmatter block followed by a body of pages separated by
//! `<!-- page-break -->`. Each page holds `<!-- lang=xx -->` language blocks
//! and `![alt](path)` image references.

mod assets;
mod frontmatter;
mod inline;
mod page;
mod pages;

pub use assets::{DirectoryImageCheck, ImageCheck};
pub use frontmatter::{load_metadata, split_frontmatter};
pub use inline::markdown_to_html;
pub use page::PageParser;
pub use pages::{split_pages, PAGE_BREAK};

use crate::diagnostics::Diagnostics;
use crate::error::ParseError;
use crate::types::Book;
use std::io::Read;

/// A successfully built book together with its warnings
#[derive(Debug, Clone)]
pub struct Conversion {
    pub book: Book,
    pub diagnostics: Diagnostics,
}

/// Builds a `Book` from annotated markdown
#[derive(Default)]
pub struct BloomDecoder {
    image_check: Option<Box<dyn ImageCheck>>,
}

impl BloomDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable image existence checks
    pub fn with_image_check(mut self, check: impl ImageCheck + 'static) -> Self {
        self.image_check = Some(Box::new(check));
        self
    }

    /// Decode a whole input document.
    ///
    /// Metadata problems are all collected and reported together before any
    /// page is parsed. Page problems are warnings only.
    pub fn decode(&self, content: &str) -> Result<Conversion, ParseError> {
        let mut diagnostics = Diagnostics::new();

        let (frontmatter, body) = match split_frontmatter(content) {
            Some(parts) => parts,
            None => {
                diagnostics.error("No YAML frontmatter found");
                ("", content)
            }
        };

        let metadata = load_metadata(frontmatter, &mut diagnostics);
        let metadata = match metadata {
            Some(metadata) if !diagnostics.has_errors() => metadata,
            _ => return Err(ParseError::ValidationFailed(diagnostics.into_vec())),
        };

        let mut parser = PageParser::new(&metadata);
        if let Some(check) = self.image_check.as_deref() {
            parser = parser.with_image_check(check);
        }

        let pages = split_pages(body)
            .into_iter()
            .enumerate()
            .filter_map(|(i, chunk)| parser.parse(chunk, i + 1, &mut diagnostics))
            .collect();

        tracing::debug!(
            warnings = diagnostics.len(),
            "decoded book '{}'",
            metadata.title().unwrap_or("Untitled")
        );

        Ok(Conversion {
            book: Book::new(metadata).with_pages(pages),
            diagnostics,
        })
    }

    /// Decode from a reader
    pub fn decode_reader(&self, reader: &mut dyn Read) -> Result<Conversion, ParseError> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|e| ParseError::Read(e.to_string()))?;
        self.decode(&content)
    }
}
