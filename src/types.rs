use serde::Serialize;
use std::fmt;

/// Syntactic category of a span.  Every kind has exactly one rendering rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    TripleString,
    Comment,
    QuotedString,
    Decorator,
    Number,
    Keyword,
    Builtin,
    SelfReference,
    Identifier,
    /// Text between tokens: whitespace, operators, punctuation, and anything
    /// no rule matched.
    Plain,
}

impl TokenKind {
    /// The CSS class a span of this kind is wrapped in, or `None` when the
    /// text is emitted unwrapped.
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            TokenKind::TripleString | TokenKind::QuotedString => Some("s"),
            TokenKind::Comment => Some("c"),
            TokenKind::Decorator => Some("d"),
            TokenKind::Number => Some("n"),
            TokenKind::Keyword => Some("k"),
            TokenKind::Builtin => Some("nb"),
            TokenKind::SelfReference => Some("o"),
            TokenKind::Identifier | TokenKind::Plain => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::TripleString => "triple_string",
            TokenKind::Comment => "comment",
            TokenKind::QuotedString => "quoted_string",
            TokenKind::Decorator => "decorator",
            TokenKind::Number => "number",
            TokenKind::Keyword => "keyword",
            TokenKind::Builtin => "builtin",
            TokenKind::SelfReference => "self_reference",
            TokenKind::Identifier => "identifier",
            TokenKind::Plain => "plain",
        };
        write!(f, "{name}")
    }
}

/// A half-open byte range `[start, end)` of the source with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
    pub kind: TokenKind,
}

impl TokenSpan {
    pub fn new(start: usize, end: usize, kind: TokenKind) -> Self {
        Self { start, end, kind }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The slice of `source` this span covers.
    ///
    /// Span boundaries always fall on ASCII bytes or the end of input, so the
    /// slice is on valid char boundaries.
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        &source[self.start..self.end]
    }
}

impl fmt::Display for TokenSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{} {}", self.start, self.end, self.kind)
    }
}
