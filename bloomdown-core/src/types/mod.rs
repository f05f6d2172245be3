//! Core types for the book model

mod book;
mod metadata;
mod page;

pub use book::Book;
pub use metadata::BookMetadata;
pub use page::{ContentToken, Layout, PageContent};
