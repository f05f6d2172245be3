//! License code to URL lookup

const LICENSES: &[(&str, &str)] = &[
    ("CC-BY", "http://creativecommons.org/licenses/by/4.0/"),
    ("CC-BY-SA", "http://creativecommons.org/licenses/by-sa/4.0/"),
    ("CC-BY-ND", "http://creativecommons.org/licenses/by-nd/4.0/"),
    ("CC-BY-NC", "http://creativecommons.org/licenses/by-nc/4.0/"),
    ("CC-BY-NC-SA", "http://creativecommons.org/licenses/by-nc-sa/4.0/"),
    ("CC-BY-NC-ND", "http://creativecommons.org/licenses/by-nc-nd/4.0/"),
    ("CC0", "http://creativecommons.org/publicdomain/zero/1.0/"),
];

/// Map a license code to its canonical URL. Unknown codes and URLs pass
/// through unchanged.
pub fn license_url(license: &str) -> &str {
    LICENSES
        .iter()
        .find(|(code, _)| *code == license)
        .map_or(license, |&(_, url)| url)
}
