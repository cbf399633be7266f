//! Source-text utilities for building edits.
//!
//! Realizes the host accessors the edit builders need: slicing an
//! arbitrary byte range, finding the token adjacent to a position, and
//! deleting a list element together with its separator.

use crate::diagnostic::TextEdit;
use memchr::memrchr;
use oxc_span::Span;

pub struct Fixer<'a> {
    source: &'a str,
}

impl<'a> Fixer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Slice of the source text covered by a span.
    pub fn slice(&self, span: Span) -> &'a str {
        self.source
            .get(span.start as usize..span.end as usize)
            .unwrap_or("")
    }

    /// Byte offset of the last token byte strictly before `pos`, skipping
    /// whitespace. Comments between tokens are not skipped backwards; use
    /// `token_after` when scanning over comment-bearing gaps.
    pub fn token_before(&self, pos: u32) -> Option<u32> {
        let bytes = &self.source.as_bytes()[..(pos as usize).min(self.source.len())];
        bytes
            .iter()
            .rposition(|byte| !byte.is_ascii_whitespace())
            .map(|index| index as u32)
    }

    /// Byte offset of the next token byte at or after `pos`, skipping
    /// whitespace and comments.
    pub fn token_after(&self, pos: u32) -> Option<u32> {
        let bytes = self.source.as_bytes();
        let mut index = pos as usize;
        while index < bytes.len() {
            let byte = bytes[index];
            if byte.is_ascii_whitespace() {
                index += 1;
            } else if byte == b'/' && bytes.get(index + 1) == Some(&b'/') {
                index = memchr::memchr(b'\n', &bytes[index..])
                    .map(|offset| index + offset + 1)
                    .unwrap_or(bytes.len());
            } else if byte == b'/' && bytes.get(index + 1) == Some(&b'*') {
                index = memchr::memmem::find(&bytes[index + 2..], b"*/")
                    .map(|offset| index + 2 + offset + 2)
                    .unwrap_or(bytes.len());
            } else {
                return Some(index as u32);
            }
        }
        None
    }

    /// Indentation of the line containing `pos`.
    pub fn line_indent(&self, pos: u32) -> &'a str {
        let bytes = self.source.as_bytes();
        let pos = (pos as usize).min(bytes.len());
        let line_start = memrchr(b'\n', &bytes[..pos]).map(|i| i + 1).unwrap_or(0);
        let mut end = line_start;
        while end < bytes.len() && (bytes[end] == b' ' || bytes[end] == b'\t') {
            end += 1;
        }
        &self.source[line_start..end]
    }

    /// Delete a list element, absorbing one adjacent separator so the list
    /// stays well-formed. Prefers the leading separator; falls back to the
    /// trailing one for the first element.
    pub fn delete_with_separator(&self, span: Span, separator: u8) -> TextEdit {
        let bytes = self.source.as_bytes();
        if let Some(before) = self.token_before(span.start) {
            if bytes[before as usize] == separator {
                return TextEdit::delete(before, span.end);
            }
        }
        if let Some(after) = self.token_after(span.end) {
            if bytes[after as usize] == separator {
                return TextEdit::delete(span.start, after + 1);
            }
        }
        TextEdit::delete(span.start, span.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice() {
        let fixer = Fixer::new("const x = 1;");
        assert_eq!(fixer.slice(Span::new(6, 7)), "x");
    }

    #[test]
    fn test_token_before_skips_whitespace() {
        let fixer = Fixer::new("a  ,   b");
        assert_eq!(fixer.token_before(7), Some(3));
        assert_eq!(fixer.token_before(3), Some(0));
        assert_eq!(fixer.token_before(0), None);
    }

    #[test]
    fn test_token_after_skips_whitespace_and_comments() {
        let fixer = Fixer::new("{ // leading\n  useSignals(); }");
        let offset = fixer.token_after(1).expect("token");
        assert_eq!(&fixer.source[offset as usize..offset as usize + 10], "useSignals");
    }

    #[test]
    fn test_token_after_skips_block_comment() {
        let fixer = Fixer::new("/* x */ y");
        assert_eq!(fixer.token_after(0), Some(8));
    }

    #[test]
    fn test_line_indent() {
        let fixer = Fixer::new("function f() {\n    return 1;\n}");
        let pos = fixer.source.find("return").unwrap() as u32;
        assert_eq!(fixer.line_indent(pos), "    ");
    }

    #[test]
    fn test_delete_with_leading_separator() {
        let source = "f(a, b, c)";
        let fixer = Fixer::new(source);
        let b = source.find('b').unwrap() as u32;
        let edit = fixer.delete_with_separator(Span::new(b, b + 1), b',');
        // Deletes ", b"
        assert_eq!(&source[edit.start as usize..edit.end as usize], ", b");
    }

    #[test]
    fn test_delete_first_element_absorbs_trailing_separator() {
        let source = "f(a, b)";
        let fixer = Fixer::new(source);
        let a = source.find('a').unwrap() as u32;
        let edit = fixer.delete_with_separator(Span::new(a, a + 1), b',');
        assert_eq!(&source[edit.start as usize..edit.end as usize], "a,");
    }

    #[test]
    fn test_delete_sole_element_plain() {
        let source = "f(a)";
        let fixer = Fixer::new(source);
        let a = source.find('a').unwrap() as u32;
        let edit = fixer.delete_with_separator(Span::new(a, a + 1), b',');
        assert_eq!(&source[edit.start as usize..edit.end as usize], "a");
    }
}
