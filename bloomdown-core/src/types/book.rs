//! The main Book type - metadata plus classified pages

use super::{BookMetadata, PageContent};
use serde::{Deserialize, Serialize};

/// The complete book representation produced by the decoder and consumed by
/// the renderer. Pages keep their source order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    pub metadata: BookMetadata,

    pub pages: Vec<PageContent>,
}

impl Book {
    pub fn new(metadata: BookMetadata) -> Self {
        Self {
            metadata,
            pages: Vec::new(),
        }
    }

    pub fn with_pages(mut self, pages: Vec<PageContent>) -> Self {
        self.pages = pages;
        self
    }

    /// Title in the primary language
    pub fn title(&self) -> Option<&str> {
        self.metadata.title()
    }
}
