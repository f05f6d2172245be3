//! Image existence checks

use std::path::{Path, PathBuf};

/// Answers whether an image path referenced from the book exists.
pub trait ImageCheck: Send + Sync {
    fn exists(&self, path: &str) -> bool;
}

/// Resolves image paths against a directory, normally the input file's own.
/// The path written into the output is never rewritten.
#[derive(Debug, Clone)]
pub struct DirectoryImageCheck {
    base_dir: PathBuf,
}

impl DirectoryImageCheck {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Check images relative to the directory containing `input`
    pub fn for_input(input: &Path) -> Self {
        Self::new(input.parent().unwrap_or_else(|| Path::new(".")))
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl ImageCheck for DirectoryImageCheck {
    fn exists(&self, path: &str) -> bool {
        self.base_dir.join(path).exists()
    }
}

impl<F> ImageCheck for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn exists(&self, path: &str) -> bool {
        self(path)
    }
}
