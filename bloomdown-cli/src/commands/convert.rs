//! Convert command implementation

use anyhow::{Context, Result};
use bloomdown_core::{output_path_for, BloomEncoder, ConversionStats};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Convert a markdown book to Bloom HTML
pub fn convert(input: &str, output: Option<&str>) -> Result<()> {
    let input_path = Path::new(input);
    let output_path = output
        .map(PathBuf::from)
        .unwrap_or_else(|| output_path_for(input_path));

    // Decode first so warnings print before the spinner starts
    let conversion = super::load(input_path)?;
    let book = &conversion.book;

    tracing::info!(
        "Decoded '{}' with {} pages",
        book.title().unwrap_or("Untitled"),
        book.pages.len()
    );

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    let encoder =
        BloomEncoder::new().with_generator(format!("bloomdown {}", env!("CARGO_PKG_VERSION")));
    pb.set_message(format!("Encoding to {}...", encoder.format_name()));

    // File::create truncates an existing output file
    let mut output_file = File::create(&output_path)
        .with_context(|| format!("Failed to create output file: {}", output_path.display()))?;

    encoder
        .encode(book, &mut output_file)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    pb.finish_with_message(format!("Conversion complete: {}", output_path.display()));

    super::info::print_stats(&ConversionStats::from_book(book));

    Ok(())
}
