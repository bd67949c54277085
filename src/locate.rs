//! Locating array and object literals inside the VitePress config.
//!
//! Built on [`crate::lexical::find_matching_bracket`]. Both lookups are
//! purely lexical: a key token followed by a balanced `[...]` span, and a
//! balanced `{...}` inside that span containing a pattern match. Every
//! range is a byte range into one immutable snapshot of the config buffer
//! and must not be applied to any other buffer.

use crate::lexical::find_matching_bracket;
use regex::Regex;

/// Inclusive byte range into the source buffer it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

/// The balanced `[...]` span of a keyed array literal, brackets included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArraySpan {
    /// Byte index of the opening `[`.
    pub start: usize,
    /// Byte index of the matching `]`.
    pub end: usize,
    /// The literal text between `start` and `end`, both brackets included.
    pub text: String,
}

/// Find the first `key` token in `source` and the balanced `[...]` that
/// follows it.
///
/// Returns `None` when the key is absent, no `[` follows it, or the
/// bracket never closes.
pub fn find_array_literal(source: &str, key: &str) -> Option<ArraySpan> {
    let key_idx = source.find(key)?;
    let open = key_idx + source[key_idx..].find('[')?;
    let close = find_matching_bracket(source, open, b'[', b']')?;
    Some(ArraySpan {
        start: open,
        end: close,
        text: source[open..=close].to_string(),
    })
}

/// Find the `{...}` object inside `array` whose text matches `pattern`.
///
/// The walk from the match back to its opening `{` is best-effort and not
/// depth-aware: it assumes the match sits in a shallow, non-nested object.
/// A config nesting similarly-labelled objects inside one nav entry would
/// defeat it; that layout has never occurred and is out of scope.
///
/// The returned range starts at the beginning of the line holding the `{`
/// so a whole-line replacement preserves the file's indentation, and ends
/// at the matching `}`. Ranges that would run past the array's own end are
/// treated as not found.
pub fn find_object_range(source: &str, array: &ArraySpan, pattern: &Regex) -> Option<TextRange> {
    let m = pattern.find(&source[array.start..=array.end])?;
    let match_idx = array.start + m.start();

    let open = source.as_bytes()[array.start..=match_idx]
        .iter()
        .rposition(|&b| b == b'{')
        .map(|p| array.start + p)?;
    let close = find_matching_bracket(source, open, b'{', b'}')?;
    if close > array.end {
        return None;
    }

    let start = source[..open].rfind('\n').map(|p| p + 1).unwrap_or(open);
    Some(TextRange { start, end: close })
}
