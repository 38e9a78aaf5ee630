//! Literal text tokenization helpers for external engine output.

/// Characters treated as whitespace by [`trim`] and [`omit_blank`].
const WHITESPACE: [char; 4] = [' ', '\t', '\n', '\r'];

/// Splits `text` on every non-overlapping literal occurrence of `separator`.
///
/// For a non-empty separator the result joins back to the input:
/// `parts.join(separator) == text`. When the separator never occurs the
/// whole input is returned as a single element.
pub fn split_literal<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    text.split(separator).collect()
}

/// Strips leading and trailing whitespace (space, tab, newline, CR).
///
/// Returns the empty string when the input is empty or all-whitespace.
pub fn trim(text: &str) -> &str {
    text.trim_matches(WHITESPACE)
}

/// Drops elements that are empty or all-whitespace, preserving the relative
/// order of the rest.
pub fn omit_blank<'a>(parts: Vec<&'a str>) -> Vec<&'a str> {
    parts
        .into_iter()
        .filter(|part| !trim(part).is_empty())
        .collect()
}
