//! Validate command implementation

use anyhow::Result;
use std::path::Path;

/// Parse a book and report problems without writing output
pub fn validate(input: &str) -> Result<()> {
    let conversion = super::load(Path::new(input))?;

    println!("Validation passed");
    println!("  Pages: {}", conversion.book.pages.len());

    Ok(())
}
