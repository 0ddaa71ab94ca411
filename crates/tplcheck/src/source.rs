// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Original script text with per-line offset tracking.
//!
//! [`SourceText`] is an immutable view of the user's uncombined script.
//! All offsets are in whole-document **character** coordinates (not bytes),
//! matching the coordinate space that annotations and the annotation store
//! use for point lookup.

use std::fmt;

/// A single line of the original script.
#[derive(Debug, Clone)]
pub struct SourceLine {
    /// Start offset of this line in whole-document character coordinates.
    pub start: usize,
    /// The line text, without the terminating `\n`.
    ///
    /// A trailing `\r` from CRLF sources is kept; trimmed comparisons in
    /// the mapper neutralize it.
    pub text: String,
}

impl SourceLine {
    /// Number of characters in the line (excluding the terminating `\n`).
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Offset one past the last character of the line.
    pub fn end(&self) -> usize {
        self.start + self.char_len()
    }
}

/// The user's original script, split into lines with known start offsets.
///
/// Built once per validation pass and read-only afterwards.
#[derive(Debug, Clone)]
pub struct SourceText {
    chars: Vec<char>,
    lines: Vec<SourceLine>,
}

impl SourceText {
    /// Creates a source text from a string, splitting lines on `\n`.
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let mut lines = Vec::new();
        let mut start = 0;
        for segment in text.split('\n') {
            let len = segment.chars().count();
            lines.push(SourceLine {
                start,
                text: segment.to_string(),
            });
            start += len + 1; // account for the '\n'
        }
        Self { chars, lines }
    }

    /// Total number of characters in the document.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The character at the given document offset, if in bounds.
    pub fn char_at(&self, offset: usize) -> Option<char> {
        self.chars.get(offset).copied()
    }

    /// Iterates over the lines of the document in order.
    pub fn lines(&self) -> impl Iterator<Item = &SourceLine> {
        self.lines.iter()
    }

    /// Number of lines in the document.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

impl fmt::Display for SourceText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_offsets() {
        let source = SourceText::new("abc\nde\n\nf");
        let lines: Vec<_> = source.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].start, 0);
        assert_eq!(lines[1].start, 4);
        assert_eq!(lines[2].start, 7);
        assert_eq!(lines[3].start, 8);
        assert_eq!(source.len(), 9);
    }

    #[test]
    fn test_crlf_keeps_carriage_return_in_line() {
        let source = SourceText::new("abc\r\nde");
        let lines: Vec<_> = source.lines().collect();
        assert_eq!(lines[0].text, "abc\r");
        assert_eq!(lines[0].char_len(), 4);
        assert_eq!(lines[1].start, 5);
    }

    #[test]
    fn test_char_at_bounds() {
        let source = SourceText::new("ab");
        assert_eq!(source.char_at(0), Some('a'));
        assert_eq!(source.char_at(1), Some('b'));
        assert_eq!(source.char_at(2), None);
    }

    #[test]
    fn test_empty_document_has_one_empty_line() {
        let source = SourceText::new("");
        assert!(source.is_empty());
        assert_eq!(source.line_count(), 1);
        assert_eq!(source.lines().next().unwrap().char_len(), 0);
    }
}
