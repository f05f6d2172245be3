//! Book metadata types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Validated book metadata from the frontmatter block
///
/// `l1` is always a key of `languages`; so is `l2` when present. A book
/// without `l2` is monolingual by default.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookMetadata {
    /// Language code -> title
    pub all_titles: BTreeMap<String, String>,

    /// Language code -> display name
    pub languages: BTreeMap<String, String>,

    /// Primary language code
    pub l1: String,

    /// Secondary language code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l2: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,

    /// License code (e.g. "CC-BY") or URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright: Option<String>,
}

impl BookMetadata {
    /// Create metadata for a single-language book
    pub fn new(l1: impl Into<String>, language_name: impl Into<String>, title: impl Into<String>) -> Self {
        let l1 = l1.into();
        Self {
            all_titles: BTreeMap::from([(l1.clone(), title.into())]),
            languages: BTreeMap::from([(l1.clone(), language_name.into())]),
            l1,
            l2: None,
            cover_image: None,
            isbn: None,
            license: None,
            copyright: None,
        }
    }

    /// Declare a secondary language with its title
    pub fn with_l2(
        mut self,
        l2: impl Into<String>,
        language_name: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        let l2 = l2.into();
        self.languages.insert(l2.clone(), language_name.into());
        self.all_titles.insert(l2.clone(), title.into());
        self.l2 = Some(l2);
        self
    }

    /// Set the license code or URL
    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = Some(license.into());
        self
    }

    /// Title in the primary language
    pub fn title(&self) -> Option<&str> {
        self.all_titles.get(&self.l1).map(String::as_str)
    }

    /// Whether `code` is declared in the language table
    pub fn knows_language(&self, code: &str) -> bool {
        self.languages.contains_key(code)
    }
}
