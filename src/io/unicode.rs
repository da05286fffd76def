//! UTF-8 boundary helpers for the bounded line reader.
//!
//! The reader cuts overlong lines at a byte cap; these helpers make sure
//! every cut lands on a boundary that keeps the echoed text valid UTF-8
//! and avoids splitting user-perceived characters.

use unicode_segmentation::UnicodeSegmentation;

/// Returns the longest valid UTF-8 prefix of a byte window.
///
/// A multi-byte sequence cut off at the end of the window is not an error
/// at this layer; the missing bytes may simply not have been read yet.
/// The caller decides whether a zero-length prefix of a non-empty window
/// means the input is genuinely invalid.
///
/// # Examples
///
/// ```
/// use hello_echo::io::unicode::utf8_prefix;
///
/// assert_eq!(utf8_prefix(b"hello"), "hello");
/// // "世" is 0xE4 0xB8 0x96; the window ends mid-character
/// assert_eq!(utf8_prefix(&[b'a', 0xE4, 0xB8]), "a");
/// ```
#[must_use]
pub fn utf8_prefix(bytes: &[u8]) -> &str {
    match std::str::from_utf8(bytes) {
        Ok(s) => s,
        // valid_up_to is always a char boundary, so the slice cannot fail
        Err(e) => std::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or(""),
    }
}

/// Finds the nearest character boundary at or below `pos`.
///
/// # Examples
///
/// ```
/// use hello_echo::io::unicode::floor_char_boundary;
///
/// let s = "a世b";
/// assert_eq!(floor_char_boundary(s, 1), 1); // before '世'
/// assert_eq!(floor_char_boundary(s, 2), 1); // inside '世', backs off
/// assert_eq!(floor_char_boundary(s, 4), 4); // after '世'
/// ```
#[must_use]
pub const fn floor_char_boundary(s: &str, pos: usize) -> usize {
    if pos >= s.len() {
        return s.len();
    }
    let bytes = s.as_bytes();
    let mut boundary = pos;
    // UTF-8 continuation bytes are 10xxxxxx (0x80-0xBF)
    while boundary > 0 && (bytes[boundary] & 0xC0) == 0x80 {
        boundary -= 1;
    }
    boundary
}

/// Returns the largest split point of `s` at or below `cap` bytes.
///
/// The split lands on a grapheme cluster boundary so a cut never
/// separates a base character from its combining marks. When the first
/// cluster alone is wider than the cap, the split falls back to a plain
/// character boundary inside it (the cluster is rendered across two
/// segments, but the bytes stay valid UTF-8).
///
/// Returns `s.len()` when the whole string fits under the cap.
#[must_use]
pub fn split_point(s: &str, cap: usize) -> usize {
    if s.len() <= cap {
        return s.len();
    }

    let mut best = 0;
    for (idx, _) in s.grapheme_indices(true) {
        if idx > cap {
            break;
        }
        best = idx;
    }

    if best == 0 {
        floor_char_boundary(s, cap)
    } else {
        best
    }
}
