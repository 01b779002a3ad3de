//! Token rules and their priority table.
//!
//! Each rule answers one question: does a token of this shape start at byte
//! `pos`, and if so where does it end?  The scanner walks the source and, at
//! each offset, tries the rules in [`PRIORITY`] order; the first rule that
//! matches at the earliest offset wins.
//!
//! Every rule starts on an ASCII byte and only stops on an ASCII byte or at
//! the end of input, so match boundaries are always valid UTF-8 char
//! boundaries.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    TripleString,
    Comment,
    QuotedString,
    Decorator,
    Number,
    Word,
}

/// Rules in the order they are tried at a single offset.
pub const PRIORITY: [Rule; 6] = [
    Rule::TripleString,
    Rule::Comment,
    Rule::QuotedString,
    Rule::Decorator,
    Rule::Number,
    Rule::Word,
];

impl Rule {
    /// Return the end offset of a token of this rule starting at `pos`.
    ///
    /// A returned end is always greater than `pos`.
    pub fn match_at(self, src: &[u8], pos: usize) -> Option<usize> {
        match self {
            Rule::TripleString => triple_string(src, pos),
            Rule::Comment => comment(src, pos),
            Rule::QuotedString => quoted_string(src, pos),
            Rule::Decorator => decorator(src, pos),
            Rule::Number => number(src, pos),
            Rule::Word => word(src, pos),
        }
    }
}

/// Letters, digits and underscore (ASCII only).
#[inline]
pub fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// `pos` sits on a word boundary when the previous byte is not an
/// identifier byte.
#[inline]
fn at_word_start(src: &[u8], pos: usize) -> bool {
    pos == 0 || !is_ident_byte(src[pos - 1])
}

#[inline]
fn at_word_end(src: &[u8], pos: usize) -> bool {
    src.get(pos).is_none_or(|&b| !is_ident_byte(b))
}

fn skip_ident(src: &[u8], mut i: usize) -> usize {
    while i < src.len() && is_ident_byte(src[i]) {
        i += 1;
    }
    i
}

fn skip_digits(src: &[u8], mut i: usize) -> usize {
    while i < src.len() && src[i].is_ascii_digit() {
        i += 1;
    }
    i
}

// ── strings and comments ──────────────────────────────────────────────────────

fn triple_string(src: &[u8], pos: usize) -> Option<usize> {
    let q = *src.get(pos)?;
    if q != b'"' && q != b'\'' {
        return None;
    }
    if src.get(pos + 1) != Some(&q) || src.get(pos + 2) != Some(&q) {
        return None;
    }
    // Nearest closing triple; quotes of either kind inside the body never
    // end the span early.  No escape handling inside triple strings.
    let mut i = pos + 3;
    while i + 3 <= src.len() {
        if src[i] == q && src[i + 1] == q && src[i + 2] == q {
            return Some(i + 3);
        }
        i += 1;
    }
    Some(src.len())
}

fn comment(src: &[u8], pos: usize) -> Option<usize> {
    if src.get(pos) != Some(&b'#') {
        return None;
    }
    let end = src[pos..]
        .iter()
        .position(|&b| b == b'\n' || b == b'\r')
        .map_or(src.len(), |n| pos + n);
    Some(end)
}

fn quoted_string(src: &[u8], pos: usize) -> Option<usize> {
    let q = *src.get(pos)?;
    if q != b'"' && q != b'\'' {
        return None;
    }
    let mut i = pos + 1;
    while i < src.len() {
        match src[i] {
            b'\\' => i += 2,
            b if b == q => return Some(i + 1),
            _ => i += 1,
        }
    }
    // Unterminated: run to the end of input.
    Some(src.len())
}

// ── decorators, numbers, words ────────────────────────────────────────────────

fn decorator(src: &[u8], pos: usize) -> Option<usize> {
    if src.get(pos) != Some(&b'@') {
        return None;
    }
    let end = skip_ident(src, pos + 1);
    (end > pos + 1).then_some(end)
}

fn number(src: &[u8], pos: usize) -> Option<usize> {
    if !src.get(pos)?.is_ascii_digit() || !at_word_start(src, pos) {
        return None;
    }
    let int_end = skip_digits(src, pos);

    // Prefer the fractional form when it is properly delimited.
    if src.get(int_end) == Some(&b'.') && src.get(int_end + 1).is_some_and(u8::is_ascii_digit) {
        let frac_end = skip_digits(src, int_end + 1);
        if at_word_end(src, frac_end) {
            return Some(frac_end);
        }
    }

    at_word_end(src, int_end).then_some(int_end)
}

fn word(src: &[u8], pos: usize) -> Option<usize> {
    let b = *src.get(pos)?;
    if !(b.is_ascii_alphabetic() || b == b'_') || !at_word_start(src, pos) {
        return None;
    }
    Some(skip_ident(src, pos + 1))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
