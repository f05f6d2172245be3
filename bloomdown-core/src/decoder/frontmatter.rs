//! Frontmatter splitting and metadata loading

use crate::diagnostics::Diagnostics;
use crate::types::BookMetadata;
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::OnceLock;

fn frontmatter_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)\A---\r?\n(.*?)\r?\n---(?:\r?\n(.*))?\z").expect("valid frontmatter regex")
    })
}

/// Split `content` into its raw metadata block and body.
///
/// The metadata block sits between an opening `---` line at the very start
/// and the next `---` line. Returns `None` when there is no such block.
pub fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let caps = frontmatter_re().captures(content)?;
    let frontmatter = caps.get(1).map_or("", |m| m.as_str());
    let body = caps.get(2).map_or("", |m| m.as_str());
    Some((frontmatter, body))
}

/// Frontmatter as written, before validation
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawMetadata {
    all_titles: Option<BTreeMap<String, String>>,
    languages: Option<BTreeMap<String, String>>,
    #[serde(default, deserialize_with = "scalar::optional")]
    l1: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    l2: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    cover_image: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    isbn: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    license: Option<String>,
    #[serde(default, deserialize_with = "scalar::optional")]
    copyright: Option<String>,
}

/// Decode and validate the metadata block.
///
/// Every problem is recorded in `diagnostics`; `None` is returned when any
/// error was found.
pub fn load_metadata(frontmatter: &str, diagnostics: &mut Diagnostics) -> Option<BookMetadata> {
    let raw = if frontmatter.trim().is_empty() {
        RawMetadata::default()
    } else {
        match serde_yaml::from_str::<RawMetadata>(frontmatter) {
            Ok(raw) => raw,
            Err(e) => {
                diagnostics.error(format!("Failed to parse YAML frontmatter: {}", e));
                return None;
            }
        }
    };

    validate(raw, diagnostics)
}

fn validate(raw: RawMetadata, diagnostics: &mut Diagnostics) -> Option<BookMetadata> {
    let l1 = raw.l1.filter(|code| !code.is_empty());
    let l2 = raw.l2.filter(|code| !code.is_empty());

    if raw.all_titles.is_none() {
        diagnostics.error("Missing required field: allTitles");
    }
    if raw.languages.is_none() {
        diagnostics.error("Missing required field: languages");
    }
    if l1.is_none() {
        diagnostics.error("Missing required field: l1");
    }

    if let Some(languages) = &raw.languages {
        if let Some(l1) = l1.as_deref().filter(|code| !languages.contains_key(*code)) {
            diagnostics.error(format!("Primary language '{}' not found in languages", l1));
        }
        if let Some(l2) = l2.as_deref().filter(|code| !languages.contains_key(*code)) {
            diagnostics.error(format!("Secondary language '{}' not found in languages", l2));
        }
    }

    match (raw.all_titles, raw.languages, l1) {
        (Some(all_titles), Some(languages), Some(l1)) if !diagnostics.has_errors() => {
            Some(BookMetadata {
                all_titles,
                languages,
                l1,
                l2,
                cover_image: raw.cover_image,
                isbn: raw.isbn,
                license: raw.license,
                copyright: raw.copyright,
            })
        }
        _ => None,
    }
}

/// Accepts any YAML scalar as a string, so `isbn: 9780123456789` or
/// `copyright: 2025` decode as text.
mod scalar {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    pub fn optional<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<serde_yaml::Value>::deserialize(deserializer)? {
            None | Some(serde_yaml::Value::Null) => Ok(None),
            Some(serde_yaml::Value::String(s)) => Ok(Some(s)),
            Some(serde_yaml::Value::Number(n)) => Ok(Some(n.to_string())),
            Some(serde_yaml::Value::Bool(b)) => Ok(Some(b.to_string())),
            Some(other) => Err(D::Error::custom(format!(
                "expected a string, found {:?}",
                other
            ))),
        }
    }
}
