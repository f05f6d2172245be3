//! Info command implementation

use anyhow::Result;
use bloomdown_core::ConversionStats;
use serde::Serialize;
use std::path::Path;

/// Book info output
#[derive(Serialize)]
struct BookInfo {
    title: String,
    l1: String,
    l2: Option<String>,
    #[serde(flatten)]
    stats: ConversionStats,
}

/// Display information about a book
pub fn info(input: &str, json: bool) -> Result<()> {
    let conversion = super::load(Path::new(input))?;
    let book = &conversion.book;

    let info = BookInfo {
        title: book.title().unwrap_or("Untitled").to_string(),
        l1: book.metadata.l1.clone(),
        l2: book.metadata.l2.clone(),
        stats: ConversionStats::from_book(book),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("Title:       {}", info.title);
        match &info.l2 {
            Some(l2) => println!("Languages:   {} / {}", info.l1, l2),
            None => println!("Languages:   {}", info.l1),
        }
        print_stats(&info.stats);
    }

    Ok(())
}

/// Print statistics in the human-readable form
pub fn print_stats(stats: &ConversionStats) {
    println!("Pages:       {}", stats.pages);
    println!(
        "Text in:     {} ({} total)",
        stats.languages.join(", "),
        stats.languages.len()
    );
    println!("Images:      {}", stats.images);
    println!("Layouts:");
    for (layout, count) in &stats.layouts {
        println!("  {}: {}", layout.display_name(), count);
    }
}
