//! Diagnostics collected while building a book

use serde::Serialize;
use std::fmt;

/// How serious a diagnostic is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Reported, conversion continues
    Warning,
    /// Aborts the conversion once the current stage has been checked
    Error,
}

/// A single warning or error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,

    /// Human-readable message
    pub message: String,

    /// 1-based index of the page the diagnostic concerns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            page: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            page: None,
        }
    }

    /// Attach the page number
    pub fn on_page(mut self, page: usize) -> Self {
        self.page = Some(page);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        };
        write!(f, "{}: {}", label, self.message)
    }
}

/// Ordered collection of diagnostics for one conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic, logging it as it arrives
    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Warning => tracing::warn!(page = ?diagnostic.page, "{}", diagnostic.message),
            Severity::Error => tracing::debug!("validation error: {}", diagnostic.message),
        }
        self.entries.push(diagnostic);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(Diagnostic::warning(message));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Diagnostic::error(message));
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(Diagnostic::is_error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(|d| !d.is_error())
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter().filter(|d| d.is_error())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_labels() {
        assert_eq!(
            Diagnostic::warning("Image not found: a.png (page 1)").to_string(),
            "WARNING: Image not found: a.png (page 1)"
        );
        assert_eq!(
            Diagnostic::error("No YAML frontmatter found").to_string(),
            "ERROR: No YAML frontmatter found"
        );
    }

    #[test]
    fn test_errors_and_warnings_are_separated() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.warn("first");
        diagnostics.error("second");
        diagnostics.push(Diagnostic::warning("third").on_page(3));

        assert!(diagnostics.has_errors());
        assert_eq!(diagnostics.len(), 3);
        assert_eq!(diagnostics.warnings().count(), 2);
        assert_eq!(diagnostics.errors().count(), 1);
        assert_eq!(diagnostics.warnings().last().unwrap().page, Some(3));
    }
}
