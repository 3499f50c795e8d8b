//! Decoded text -> node list

use crate::types::NodeList;

/// Line boundaries recognised when splitting decoded text
///
/// `\r\n` is covered by splitting on both halves; the empty piece between them
/// is dropped with the other blank lines.
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Whitespace stripped from each node line, including the ASCII separators
/// `\x1c`..=`\x1f` which `char::is_whitespace` does not cover
fn is_node_padding(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Split decoded text into trimmed, non-empty node lines, preserving order
pub fn tokenise(decoded: &str) -> NodeList {
    decoded
        .split(is_line_boundary)
        .map(|line| line.trim_matches(is_node_padding))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>()
        .into()
}
