//! Word classification: keyword, builtin, `self`, or plain identifier.
//!
//! Both word sets are compile-time constants; lookups are exact and
//! case-sensitive (`True` is a keyword, `true` is not).

use crate::types::TokenKind;

/// Standard-library call and type names highlighted as builtins.
pub const BUILTINS: &[&str] = &[
    "print",
    "len",
    "range",
    "enumerate",
    "zip",
    "map",
    "filter",
    "list",
    "dict",
    "set",
    "tuple",
    "int",
    "float",
    "str",
    "bool",
    "super",
    "isinstance",
    "issubclass",
    "type",
    "dir",
    "help",
    "getattr",
    "setattr",
    "hasattr",
];

/// Conventional name of the instance parameter.
pub const SELF_NAME: &str = "self";

/// Reserved words highlighted as keywords.
pub fn is_keyword(word: &str) -> bool {
    matches!(
        word,
        "def"
            | "class"
            | "import"
            | "from"
            | "return"
            | "if"
            | "elif"
            | "else"
            | "for"
            | "while"
            | "try"
            | "except"
            | "finally"
            | "with"
            | "as"
            | "pass"
            | "lambda"
            | "yield"
            | "raise"
            | "assert"
            | "global"
            | "nonlocal"
            | "del"
            | "break"
            | "continue"
            | "and"
            | "or"
            | "not"
            | "in"
            | "is"
            | "True"
            | "False"
            | "None"
            | "async"
            | "await"
    )
}

pub fn is_builtin(word: &str) -> bool {
    BUILTINS.contains(&word)
}

/// Classify a matched word.  Keywords win over builtins, builtins over `self`.
pub fn classify_word(word: &str) -> TokenKind {
    if is_keyword(word) {
        TokenKind::Keyword
    } else if is_builtin(word) {
        TokenKind::Builtin
    } else if word == SELF_NAME {
        TokenKind::SelfReference
    } else {
        TokenKind::Identifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords() {
        for kw in ["def", "class", "lambda", "nonlocal", "True", "None", "async", "await"] {
            assert!(is_keyword(kw), "{kw} should be a keyword");
        }
        for word in ["print", "match", "case", "self", "true", "definitely"] {
            assert!(!is_keyword(word), "{word} should not be a keyword");
        }
    }

    #[test]
    fn test_sets_are_disjoint() {
        for b in BUILTINS {
            assert!(!is_keyword(b), "{b} is both keyword and builtin");
        }
        assert!(!is_keyword(SELF_NAME));
        assert!(!is_builtin(SELF_NAME));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify_word("def"), TokenKind::Keyword);
        assert_eq!(classify_word("None"), TokenKind::Keyword);
        assert_eq!(classify_word("len"), TokenKind::Builtin);
        assert_eq!(classify_word("self"), TokenKind::SelfReference);
        assert_eq!(classify_word("foo"), TokenKind::Identifier);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        assert_eq!(classify_word("true"), TokenKind::Identifier);
        assert_eq!(classify_word("Def"), TokenKind::Identifier);
        assert_eq!(classify_word("Self"), TokenKind::Identifier);
        assert_eq!(classify_word("PRINT"), TokenKind::Identifier);
    }
}
