//! Width-bounded truncation.
//!
//! A sequence longer than the requested width is cut and ends in [`MARKER`].
//! The marker takes one unit of the width, so when the width is 1 there is no
//! room for both and only the first character is kept. The result never
//! exceeds the width.
//!
//! Two positional renditions are provided: [`truncate`] counts `char`s and
//! always yields valid UTF-8, [`truncate_bytes`] counts raw bytes and knows
//! nothing about encodings. Neither is grapheme aware.

/// Appended to a truncated sequence.
pub const MARKER: char = '.';

/// How many leading units of the input survive, and whether the marker follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cut {
    Whole,
    Keep(usize),
    KeepMarked(usize),
}

const fn plan(len: usize, width: usize) -> Cut {
    if len <= width {
        return Cut::Whole;
    }
    match width {
        0 | 1 => Cut::Keep(width),
        _ => Cut::KeepMarked(width - 1),
    }
}

/// Truncate `input` to at most `width` characters.
///
/// ```
/// use truncator::truncate::truncate;
///
/// assert_eq!(truncate("abc", 5), "abc");
/// assert_eq!(truncate("abcdef", 5), "abcd.");
/// assert_eq!(truncate("abcdef", 1), "a");
/// assert_eq!(truncate("abcdef", 0), "");
/// ```
pub fn truncate(input: &str, width: usize) -> String {
    // Only the first width + 1 chars matter for the length test.
    let len = input.chars().take(width.saturating_add(1)).count();
    match plan(len, width) {
        Cut::Whole => input.to_string(),
        Cut::Keep(n) => input.chars().take(n).collect(),
        Cut::KeepMarked(n) => {
            let mut out: String = input.chars().take(n).collect();
            out.push(MARKER);
            out
        }
    }
}

/// Truncate `input` to at most `width` bytes.
///
/// The cut is purely positional and may split a multi-byte UTF-8 sequence.
pub fn truncate_bytes(input: &[u8], width: usize) -> Vec<u8> {
    match plan(input.len(), width) {
        Cut::Whole => input.to_vec(),
        Cut::Keep(n) => input[..n].to_vec(),
        Cut::KeepMarked(n) => {
            let mut out = Vec::with_capacity(n + 1);
            out.extend_from_slice(&input[..n]);
            out.push(MARKER as u8);
            out
        }
    }
}
