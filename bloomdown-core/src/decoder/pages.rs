//! Page splitting

/// Marker separating pages in the body
pub const PAGE_BREAK: &str = "<!-- page-break -->";

/// Split the body into trimmed, non-empty page chunks.
///
/// Leading, trailing and repeated markers never produce empty pages.
pub fn split_pages(body: &str) -> Vec<&str> {
    body.split(PAGE_BREAK)
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_break_is_one_page() {
        assert_eq!(split_pages("\n<!-- lang=en -->\nHello\n"), vec!["<!-- lang=en -->\nHello"]);
    }

    #[test]
    fn test_single_break() {
        assert_eq!(split_pages("one\n<!-- page-break -->\ntwo"), vec!["one", "two"]);
    }

    #[test]
    fn test_redundant_breaks_collapse() {
        let body = "\n<!-- page-break -->\n<!-- page-break -->\n\none\n\n<!-- page-break -->\n<!-- page-break -->\n<!-- page-break -->\ntwo\n<!-- page-break -->\n";
        assert_eq!(split_pages(body), vec!["one", "two"]);
    }

    #[test]
    fn test_empty_body() {
        assert!(split_pages("").is_empty());
        assert!(split_pages("  \n<!-- page-break -->\n  ").is_empty());
    }
}
