//! Conversion statistics

use crate::types::{Book, Layout};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Summary of a converted book
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    /// Pages in the output
    pub pages: usize,

    /// Distinct language codes with text, sorted
    pub languages: Vec<String>,

    /// Pages with an image
    pub images: usize,

    /// Page count per layout, serialized under the layout's name
    pub layouts: BTreeMap<Layout, usize>,
}

impl ConversionStats {
    pub fn from_book(book: &Book) -> Self {
        let mut languages = BTreeSet::new();
        let mut layouts = BTreeMap::new();
        let mut images = 0;

        for page in &book.pages {
            languages.extend(page.text_blocks.keys().cloned());
            if page.image.is_some() {
                images += 1;
            }
            *layouts.entry(page.layout).or_insert(0) += 1;
        }

        Self {
            pages: book.pages.len(),
            languages: languages.into_iter().collect(),
            images,
            layouts,
        }
    }
}
