//! Bloomdown Core Library
//!
//! Converts comment-annotated markdown into Bloom book HTML. The pipeline runs
//! in three stages over the same data: the decoder parses the frontmatter and
//! pages, the layout classifier picks a shape for each page from the order of
//! its images and language blocks, and the encoder renders the classified
//! book as nested Bloom markup.

pub mod decoder;
pub mod diagnostics;
pub mod encoder;
pub mod error;
pub mod layout;
pub mod stats;
pub mod types;

pub use decoder::{BloomDecoder, Conversion, DirectoryImageCheck, ImageCheck};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use encoder::BloomEncoder;
pub use error::{BloomError, ConversionError, ParseError, Result};
pub use layout::classify;
pub use stats::ConversionStats;
pub use types::{Book, BookMetadata, ContentToken, Layout, PageContent};

use std::path::{Path, PathBuf};

/// Convert a markdown document to Bloom HTML without image checks
pub fn convert_str(content: &str) -> Result<String> {
    let conversion = BloomDecoder::new().decode(content)?;
    Ok(BloomEncoder::new().render(&conversion.book))
}

/// Output path for an input file: same directory, `-enriched` dropped from
/// the stem, `.htm` extension
pub fn output_path_for(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().replacen("-enriched", "", 1))
        .unwrap_or_else(|| "book".to_string());
    input.with_file_name(format!("{}.htm", stem))
}
