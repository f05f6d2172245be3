//! Encoders for the book model

mod bloom;
mod license;

pub use bloom::BloomEncoder;
pub use license::license_url;

/// Escape text for use in markup content or attribute values
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
