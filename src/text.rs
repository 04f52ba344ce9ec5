//! Text utilities for scanning semi-structured source without a grammar.
//!
//! The extractor does not parse the source language; it recovers structure
//! with two small tools: identifier scanning (UAX #31 via `unicode-ident`)
//! and a balanced-span extractor that matches `{...}` by depth counting.
//!
//! Known limitation: the depth counter does not understand string literals
//! or comments, so a stray `{`/`}` inside either will corrupt the match.

/// Check if a character can start an identifier.
#[inline]
pub fn is_word_start(c: char) -> bool {
    unicode_ident::is_xid_start(c) || c == '_'
}

/// Check if a character is part of a word (identifier).
#[inline]
pub fn is_word_character(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Extract the identifier starting at the beginning of `text`.
///
/// Returns `None` if `text` does not start with a word-start character.
pub fn leading_identifier(text: &str) -> Option<&str> {
    let mut chars = text.char_indices();
    let (_, first) = chars.next()?;
    if !is_word_start(first) {
        return None;
    }
    for (idx, c) in chars {
        if !is_word_character(c) {
            return Some(&text[..idx]);
        }
    }
    Some(text)
}

/// A balanced `{...}` span within a larger string.
///
/// `open` and `close` are byte offsets of the opening and closing brace;
/// the interior is `text[open + 1..close]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalancedSpan {
    pub open: usize,
    pub close: usize,
}

impl BalancedSpan {
    /// The text between (not including) the braces.
    pub fn interior<'a>(&self, text: &'a str) -> &'a str {
        &text[self.open + 1..self.close]
    }
}

/// Find the first balanced `{...}` span at or after `from`.
///
/// Scans for the first `{`, then tracks nesting depth until the matching
/// `}`. Returns `None` if there is no `{` or the braces never balance
/// before the end of the text.
pub fn balanced_span(text: &str, from: usize) -> Option<BalancedSpan> {
    let rel = text[from..].find('{')?;
    let open = from + rel;

    let mut depth = 0usize;
    for (idx, c) in text[open..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(BalancedSpan {
                        open,
                        close: open + idx,
                    });
                }
            }
            _ => {}
        }
    }
    None
}

/// Collapse whitespace runs in `text` to single spaces.
///
/// Used to normalize recovered type strings that spanned multiple lines.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_identifier() {
        assert_eq!(leading_identifier("Foo & {}"), Some("Foo"));
        assert_eq!(leading_identifier("foo_bar:"), Some("foo_bar"));
        assert_eq!(leading_identifier("_private"), Some("_private"));
        assert_eq!(leading_identifier("café)"), Some("café"));
        assert_eq!(leading_identifier("{ x }"), None);
        assert_eq!(leading_identifier(""), None);
    }

    #[test]
    fn test_leading_identifier_whole_string() {
        assert_eq!(leading_identifier("Vehicle"), Some("Vehicle"));
    }

    #[test]
    fn test_balanced_span_simple() {
        let span = balanced_span("= { a: b }", 0).unwrap();
        assert_eq!(span.interior("= { a: b }"), " a: b ");
    }

    #[test]
    fn test_balanced_span_nested() {
        let text = "{ outer: { inner: 1 } } { second: 2 }";
        let span = balanced_span(text, 0).unwrap();
        assert_eq!(span.open, 0);
        assert_eq!(span.interior(text), " outer: { inner: 1 } ");
    }

    #[test]
    fn test_balanced_span_from_offset() {
        let text = "{ first }{ second }";
        let span = balanced_span(text, 9).unwrap();
        assert_eq!(span.interior(text), " second ");
    }

    #[test]
    fn test_balanced_span_unbalanced() {
        assert_eq!(balanced_span("{ never closed", 0), None);
        assert_eq!(balanced_span("no braces here", 0), None);
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(
            collapse_whitespace("{\n    x: number;\n    y: number;\n}"),
            "{ x: number; y: number; }"
        );
        assert_eq!(collapse_whitespace("  string  "), "string");
    }
}
