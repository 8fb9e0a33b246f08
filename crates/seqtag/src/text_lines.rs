//! # Text Line Splitting
//!
//! Line handling shared by the vocab and dataset readers.
//!
//! Line boundaries are `\n`, `\r\n`, a lone `\r`, and the
//! Unicode separators `\x0b`, `\x0c`, `\x1c`, `\x1d`, `\x1e`,
//! `\u{85}`, `\u{2028}`, `\u{2029}`.
//! A final terminator does not produce an extra empty line.

use std::io::Read;

use crate::errors::Result;

/// Is `c` a line boundary character?
pub fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split `text` into lines, dropping the boundaries.
///
/// `\r\n` is a single boundary.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_boundary(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();

        if c == '\r'
            && let Some(&(_, '\n')) = chars.peek()
        {
            chars.next();
            start += 1;
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Read all of `reader` as UTF-8 text.
///
/// ## Returns
/// An I/O error (`InvalidData` for non-UTF-8 input) if the read fails.
pub fn read_text<R: Read>(mut reader: R) -> Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_split_lines_newlines() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\rb\r"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\rb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\n\r\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_split_lines_unicode_boundaries() {
        assert_eq!(split_lines("a\u{2028}b\x0cc"), vec!["a", "b", "c"]);
        assert_eq!(
            split_lines("a\x0bb\x1cc\x1dd\x1ee\u{85}f\u{2029}g"),
            vec!["a", "b", "c", "d", "e", "f", "g"]
        );
        // Tabs are not boundaries.
        assert_eq!(split_lines("a\tb"), vec!["a\tb"]);
    }

    #[test]
    fn test_split_lines_edges() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
        assert_eq!(split_lines("no terminator"), vec!["no terminator"]);
    }

    #[test]
    fn test_read_text() {
        assert_eq!(read_text(Cursor::new("O\rANIMAL\r")).unwrap(), "O\rANIMAL\r");

        let res = read_text(Cursor::new(vec![0xffu8, 0xfe]));
        assert!(matches!(
            res,
            Err(crate::errors::SeqTagError::Io(e)) if e.kind() == std::io::ErrorKind::InvalidData
        ));
    }
}
