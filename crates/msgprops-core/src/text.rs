//! Delimiter-relative substring helpers.
//!
//! Every function except [`extract_wrapped_text`] is total: a missing
//! delimiter yields `None`, and callers that want a fallback value write
//! `.unwrap_or(default)`. An empty delimiter matches at the start of the
//! input for the first-occurrence variants and at the end for the
//! last-occurrence variants.

use crate::error::FormatError;

/// Returns the part of `full` before the first occurrence of `find`.
pub fn before<'a>(full: &'a str, find: &str) -> Option<&'a str> {
    full.find(find).map(|idx| &full[..idx])
}

/// Returns the part of `full` after the first occurrence of `find`.
pub fn after<'a>(full: &'a str, find: &str) -> Option<&'a str> {
    full.find(find).map(|idx| &full[idx + find.len()..])
}

/// Returns the part of `full` before the last occurrence of `find`.
pub fn before_last<'a>(full: &'a str, find: &str) -> Option<&'a str> {
    full.rfind(find).map(|idx| &full[..idx])
}

/// Returns the part of `full` after the last occurrence of `find`.
pub fn after_last<'a>(full: &'a str, find: &str) -> Option<&'a str> {
    full.rfind(find).map(|idx| &full[idx + find.len()..])
}

/// Returns the text between the first `first` and the first `last` that follows it.
///
/// ```
/// use msgprops_core::text::between;
///
/// assert_eq!(between("{x,plural,...}", ",", ","), Some("plural"));
/// assert_eq!(between("{name}", ",", ","), None);
/// ```
pub fn between<'a>(full: &'a str, first: &str, last: &str) -> Option<&'a str> {
    after(full, first).and_then(|rest| before(rest, last))
}

/// Like [`between`], but ends at the last occurrence of `last`.
pub fn between_widest<'a>(full: &'a str, first: &str, last: &str) -> Option<&'a str> {
    after(full, first).and_then(|rest| before_last(rest, last))
}

/// Strips `first` from the start and `last` from the end of `full`.
///
/// The prefix is removed before the suffix is checked, so the two never
/// overlap: `extract_wrapped_text("{", "{", "}")` fails.
pub fn extract_wrapped_text<'a>(
    full: &'a str,
    first: &str,
    last: &str,
) -> Result<&'a str, FormatError> {
    let rest = full
        .strip_prefix(first)
        .ok_or_else(|| FormatError::PrefixMismatch {
            expected: first.to_string(),
            found: full.to_string(),
        })?;

    rest.strip_suffix(last)
        .ok_or_else(|| FormatError::SuffixMismatch {
            expected: last.to_string(),
            found: rest.to_string(),
        })
}
