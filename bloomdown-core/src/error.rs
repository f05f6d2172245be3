//! Error types for Bloomdown Core

use crate::diagnostics::Diagnostic;
use thiserror::Error;

/// Result type alias using BloomError
pub type Result<T> = std::result::Result<T, BloomError>;

/// Top-level error type for all Bloomdown operations
#[derive(Debug, Error)]
pub enum BloomError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),
}

/// Errors that occur while building the book model from markdown
#[derive(Debug, Error)]
pub enum ParseError {
    /// One or more fatal diagnostics were collected. Every problem found in
    /// the pass is listed, not only the first.
    #[error("Validation failed:\n{}", render_diagnostics(.0))]
    ValidationFailed(Vec<Diagnostic>),

    #[error("Failed to read input: {0}")]
    Read(String),
}

impl ParseError {
    /// The diagnostics carried by a validation failure
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            ParseError::ValidationFailed(diagnostics) => diagnostics,
            ParseError::Read(_) => &[],
        }
    }
}

/// Errors that occur while rendering the book model
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

fn render_diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
