use std::borrow::Cow;

use percent_encoding::percent_decode_str;

/// Display-only normalization of a `cuisine` tag list: the `;` delimiter
/// becomes `, ` and underscores become spaces. The raw value is otherwise
/// preserved.
pub fn normalize_cuisine(raw: &str) -> String {
    raw.replace(';', ", ").replace('_', " ")
}

/// Strips the `https://` prefix for link display text.
pub fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://").unwrap_or(url)
}

/// Percent-decodes a string for display; returns the input unchanged if the
/// decoded bytes are not valid UTF-8.
pub fn percent_decoded(s: &str) -> String {
    percent_decode_str(s)
        .decode_utf8()
        .map(Cow::into_owned)
        .unwrap_or_else(|_| s.to_string())
}
