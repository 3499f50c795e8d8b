//! Base64 padding repair
//!
//! Many subscription producers strip the trailing `=` characters and some wrap
//! the encoded text at a fixed column. Both are undone here before decoding.

use std::borrow::Cow;

/// Length of one base64 quantum in characters
const QUANTUM: usize = 4;

/// Append `=` until the length is a multiple of four
///
/// Returns the input unchanged (borrowed) when it is already aligned.
///
/// # Examples
///
/// ```
/// # use subscription_census::decoder::repair_padding;
/// assert_eq!(repair_padding("YWJj"), "YWJj");
/// assert_eq!(repair_padding("YWI"), "YWI=");
/// assert_eq!(repair_padding("YQ"), "YQ==");
/// ```
pub fn repair_padding(encoded: &str) -> Cow<'_, str> {
    let missing = encoded.len() % QUANTUM;
    if missing == 0 {
        return Cow::Borrowed(encoded);
    }

    let mut padded = String::with_capacity(encoded.len() + QUANTUM - missing);
    padded.push_str(encoded);
    padded.extend(std::iter::repeat('=').take(QUANTUM - missing));
    Cow::Owned(padded)
}

/// Remove interior ASCII whitespace (line wraps) from an encoded blob
pub fn strip_line_wraps(encoded: &str) -> Cow<'_, str> {
    if !encoded.bytes().any(|b| b.is_ascii_whitespace()) {
        return Cow::Borrowed(encoded);
    }
    Cow::Owned(
        encoded
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect(),
    )
}
