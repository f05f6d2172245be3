//! Property tests for layout classification

use bloomdown_core::{classify, ContentToken, Layout};
use proptest::prelude::*;

fn token() -> impl Strategy<Value = ContentToken> {
    prop_oneof![
        Just(ContentToken::Image),
        prop::sample::select(vec!["en", "es", "fr"]).prop_map(ContentToken::text),
    ]
}

fn language() -> impl Strategy<Value = ContentToken> {
    prop::sample::select(vec!["en", "es", "fr"]).prop_map(ContentToken::text)
}

/// Keep only the first and last token of each kind, in their original order
fn boundaries(sequence: &[ContentToken]) -> Vec<ContentToken> {
    let mut keep = Vec::new();
    for predicate in [
        (|t: &ContentToken| t.is_image()) as fn(&ContentToken) -> bool,
        |t: &ContentToken| t.language().is_some(),
    ] {
        keep.extend(sequence.iter().position(predicate));
        keep.extend(sequence.iter().rposition(predicate));
    }
    keep.sort_unstable();
    keep.dedup();
    keep.into_iter().map(|i| sequence[i].clone()).collect()
}

proptest! {
    #[test]
    fn images_alone_are_image_only(n in 1usize..8) {
        let sequence = vec![ContentToken::Image; n];
        prop_assert_eq!(classify(&sequence, "en", Some("es")), Layout::ImageOnly);
    }

    #[test]
    fn text_alone_is_text_only(sequence in prop::collection::vec(language(), 0..8)) {
        prop_assert_eq!(classify(&sequence, "en", Some("es")), Layout::TextOnly);
    }

    #[test]
    fn only_boundary_tokens_matter(sequence in prop::collection::vec(token(), 0..12)) {
        let reduced = boundaries(&sequence);
        prop_assert_eq!(
            classify(&sequence, "en", Some("es")),
            classify(&reduced, "en", Some("es"))
        );
        prop_assert_eq!(classify(&sequence, "en", None), classify(&reduced, "en", None));
    }

    #[test]
    fn l1_image_l2_is_bilingual(interior in prop::collection::vec(token(), 0..8)) {
        let mut sequence = vec![ContentToken::text("en"), ContentToken::Image];
        sequence.extend(interior);
        sequence.push(ContentToken::text("es"));

        prop_assert_eq!(
            classify(&sequence, "en", Some("es")),
            Layout::BilingualTextImageText
        );
        prop_assert_eq!(classify(&sequence, "en", None), Layout::TextImageText);
    }
}
