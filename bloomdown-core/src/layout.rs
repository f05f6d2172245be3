//! Page layout classification
//!
//! A page's layout is decided from the order in which images and language
//! blocks appear on it. Only the first and last token of each kind matter:
//! interior repeats never change the result.

use crate::types::{ContentToken, Layout};

/// Classify a page from its content sequence.
///
/// Rules are tried in order:
/// 1. no tokens -> `TextOnly`
/// 2. images only -> `ImageOnly`
/// 3. text only -> `TextOnly`
/// 4. text brackets every image -> `BilingualTextImageText` when the outer
///    text tokens are exactly `l1` then `l2`, otherwise `TextImageText`
/// 5. an image comes first -> `ImageTopTextBottom`
/// 6. otherwise -> `TextTopImageBottom`
pub fn classify(sequence: &[ContentToken], l1: &str, l2: Option<&str>) -> Layout {
    let first_image = sequence.iter().position(ContentToken::is_image);
    let last_image = sequence.iter().rposition(ContentToken::is_image);
    let first_text = sequence.iter().position(|t| t.language().is_some());
    let last_text = sequence.iter().rposition(|t| t.language().is_some());

    let (first_image, last_image, first_text, last_text) =
        match (first_image, last_image, first_text, last_text) {
            (None, _, None, _) => return Layout::TextOnly,
            (Some(_), _, None, _) => return Layout::ImageOnly,
            (None, _, Some(_), _) => return Layout::TextOnly,
            (Some(fi), Some(li), Some(ft), Some(lt)) => (fi, li, ft, lt),
            // a forward hit implies a backward hit
            _ => return Layout::TextOnly,
        };

    if first_text < first_image && last_text > last_image {
        let bilingual = l2.is_some_and(|l2| {
            sequence[first_text].language() == Some(l1) && sequence[last_text].language() == Some(l2)
        });
        return if bilingual {
            Layout::BilingualTextImageText
        } else {
            Layout::TextImageText
        };
    }

    if first_image < first_text {
        Layout::ImageTopTextBottom
    } else {
        Layout::TextTopImageBottom
    }
}
