//! Single-pass span scanner.
//!
//! [`Scanner`] yields [`TokenSpan`]s that borrow nothing past the call: each
//! span is a byte range into the source plus its [`TokenKind`].  The spans of
//! one pass are contiguous and non-overlapping and cover the whole input;
//! text no rule claims comes out as [`TokenKind::Plain`].
//!
//! # Usage
//! ```
//! use pyhl::scanner::scan;
//! use pyhl::types::TokenKind;
//!
//! let spans = scan("def f(): pass");
//! assert_eq!(spans[0].kind, TokenKind::Keyword);
//! ```

pub mod rules;
pub mod words;

use crate::types::{TokenKind, TokenSpan};
use rules::{PRIORITY, Rule};

/// Scan `source` into a complete, gap-free list of spans.
pub fn scan(source: &str) -> Vec<TokenSpan> {
    Scanner::new(source).collect()
}

pub struct Scanner<'src> {
    src: &'src [u8],
    /// Same buffer as a `&str`, for slicing matched words.
    src_str: &'src str,
    /// Start of the next span to emit.
    pos: usize,
    /// A token found past a stretch of plain text, emitted after that text.
    pending: Option<TokenSpan>,
}

impl<'src> Scanner<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            src: source.as_bytes(),
            src_str: source,
            pos: 0,
            pending: None,
        }
    }

    /// Earliest token at or after `from`.  At a given offset rules are tried
    /// in priority order, so a lower-numbered rule always wins a tie.
    fn find_token(&self, from: usize) -> Option<TokenSpan> {
        for pos in from..self.src.len() {
            for rule in PRIORITY {
                if let Some(end) = rule.match_at(self.src, pos) {
                    return Some(self.classify(rule, pos, end));
                }
            }
        }
        None
    }

    fn classify(&self, rule: Rule, start: usize, end: usize) -> TokenSpan {
        let kind = match rule {
            Rule::TripleString => TokenKind::TripleString,
            Rule::Comment => TokenKind::Comment,
            Rule::QuotedString => TokenKind::QuotedString,
            Rule::Decorator => TokenKind::Decorator,
            Rule::Number => TokenKind::Number,
            Rule::Word => words::classify_word(&self.src_str[start..end]),
        };
        TokenSpan::new(start, end, kind)
    }

    /// Length in bytes of the char starting at `pos`.
    fn char_len_at(&self, pos: usize) -> usize {
        self.src_str[pos..]
            .chars()
            .next()
            .map_or(1, char::len_utf8)
    }
}

impl Iterator for Scanner<'_> {
    type Item = TokenSpan;

    fn next(&mut self) -> Option<TokenSpan> {
        if let Some(tok) = self.pending.take() {
            self.pos = tok.end;
            return Some(tok);
        }
        if self.pos >= self.src.len() {
            return None;
        }

        let start = self.pos;
        let Some(tok) = self.find_token(start) else {
            self.pos = self.src.len();
            return Some(TokenSpan::new(start, self.pos, TokenKind::Plain));
        };

        // Never emit a zero-width token; the rules cannot produce one, but a
        // stuck cursor would loop forever.
        debug_assert!(tok.end > tok.start, "zero-width match at {}", tok.start);
        if tok.end <= tok.start {
            self.pos = tok.start + self.char_len_at(tok.start);
            return Some(TokenSpan::new(start, self.pos, TokenKind::Plain));
        }

        if tok.start > start {
            self.pending = Some(tok);
            self.pos = tok.start;
            return Some(TokenSpan::new(start, tok.start, TokenKind::Plain));
        }

        self.pos = tok.end;
        Some(tok)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
