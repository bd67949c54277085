//! Bracket matching over JavaScript/TypeScript-like source text.
//!
//! The VitePress config is a `.mts` module. We never parse its grammar —
//! the only structural fact the sync needs is "where does this bracket
//! close", and that can be answered by a single forward pass that knows
//! which characters are inside strings or comments and therefore don't
//! count toward bracket depth.
//!
//! The pass is a small finite-state machine over lexical contexts. A `[`
//! inside `"a [not] bracket"` or behind `//` never changes depth; an
//! unterminated string or comment simply runs the scan off the end of the
//! input, which reports "no match" rather than failing.

/// Lexical context the scan is currently inside.
///
/// Contexts are mutually exclusive; transitions only ever pass through
/// `Normal` (e.g. a quote inside a comment neither opens nor closes a
/// string).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexContext {
    Normal,
    LineComment,
    BlockComment,
    SingleQuoted,
    DoubleQuoted,
    TemplateQuoted,
}

/// Find the byte index of the bracket matching the one at `open_idx`.
///
/// `open_idx` must point at the opening bracket itself; the scan starts
/// there in `Normal` context, so the first byte processed sets depth to 1.
/// Returns `None` when the input ends before depth returns to zero
/// (unbalanced brackets, unterminated string or comment) — and also when
/// `open_idx` does not point at `open`, since depth then underflows on the
/// first `close`.
///
/// All offsets are byte offsets; the bracket pair must be ASCII, so
/// multi-byte UTF-8 sequences can never produce a false match.
pub fn find_matching_bracket(source: &str, open_idx: usize, open: u8, close: u8) -> Option<usize> {
    let bytes = source.as_bytes();
    let mut ctx = LexContext::Normal;
    let mut depth: usize = 0;

    let mut i = open_idx;
    while i < bytes.len() {
        let ch = bytes[i];
        let next = bytes.get(i + 1).copied();
        // One preceding backslash marks a quote as escaped.
        let escaped = i > 0 && bytes[i - 1] == b'\\';

        match ctx {
            LexContext::LineComment => {
                if ch == b'\n' {
                    ctx = LexContext::Normal;
                }
            }
            LexContext::BlockComment => {
                if ch == b'*' && next == Some(b'/') {
                    ctx = LexContext::Normal;
                    i += 1;
                }
            }
            LexContext::SingleQuoted => {
                if ch == b'\'' && !escaped {
                    ctx = LexContext::Normal;
                }
            }
            LexContext::DoubleQuoted => {
                if ch == b'"' && !escaped {
                    ctx = LexContext::Normal;
                }
            }
            LexContext::TemplateQuoted => {
                if ch == b'`' && !escaped {
                    ctx = LexContext::Normal;
                }
            }
            LexContext::Normal => {
                if ch == b'/' && next == Some(b'/') {
                    ctx = LexContext::LineComment;
                    i += 1;
                } else if ch == b'/' && next == Some(b'*') {
                    ctx = LexContext::BlockComment;
                    i += 1;
                } else if ch == b'\'' && !escaped {
                    ctx = LexContext::SingleQuoted;
                } else if ch == b'"' && !escaped {
                    ctx = LexContext::DoubleQuoted;
                } else if ch == b'`' && !escaped {
                    ctx = LexContext::TemplateQuoted;
                } else if ch == open {
                    depth += 1;
                } else if ch == close {
                    depth = depth.checked_sub(1)?;
                    if depth == 0 {
                        return Some(i);
                    }
                }
            }
        }

        i += 1;
    }

    None
}
