//! CLI command implementations

mod convert;
mod info;
mod validate;

pub use convert::convert;
pub use info::info;
pub use validate::validate;

use anyhow::{bail, Context, Result};
use bloomdown_core::{BloomDecoder, Conversion, DirectoryImageCheck};
use std::fs;
use std::path::Path;

/// Read and decode an input file, checking images next to it
fn load(input: &Path) -> Result<Conversion> {
    if !input.exists() {
        bail!("Input file not found: {}", input.display());
    }

    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input.display()))?;

    let decoder = BloomDecoder::new().with_image_check(DirectoryImageCheck::for_input(input));
    let conversion = decoder.decode(&content)?;

    print_warnings(&conversion);
    Ok(conversion)
}

fn print_warnings(conversion: &Conversion) {
    let warnings: Vec<_> = conversion.diagnostics.warnings().collect();
    if warnings.is_empty() {
        return;
    }

    eprintln!("Warnings:");
    for warning in warnings {
        eprintln!("  {}", warning.message);
    }
}
