//! Renderers: HTML fragment, standalone HTML document, ANSI terminal text.
//!
//! The HTML fragment is inserted by callers into a trusted rendering context
//! without further escaping, so every byte of source text passes through
//! [`escape_html_into`] before it reaches the output.

use crate::escape::{escape_html, escape_html_into};
use crate::scanner::scan;
use crate::types::{TokenKind, TokenSpan};
use colored::Colorize;

/// Highlight Python source as an HTML fragment.
///
/// Never fails.  Removing the `<span>` tags from the result and decoding the
/// entities gives back `source` exactly.
pub fn highlight(source: &str) -> String {
    render_html(source, &scan(source))
}

/// Render already-scanned spans as an HTML fragment.
pub fn render_html(source: &str, spans: &[TokenSpan]) -> String {
    let mut out = String::with_capacity(source.len() + source.len() / 2);
    for span in spans {
        let text = span.text(source);
        match span.kind.css_class() {
            Some(class) => {
                out.push_str("<span class=\"");
                out.push_str(class);
                out.push_str("\">");
                escape_html_into(&mut out, text);
                out.push_str("</span>");
            }
            None => escape_html_into(&mut out, text),
        }
    }
    out
}

const STYLESHEET: &str = "\
pre.pyhl { background: #1e1e2e; color: #cdd6f4; padding: 1em; \
font-family: ui-monospace, monospace; white-space: pre-wrap; }
.pyhl .s { color: #a6e3a1; }
.pyhl .c { color: #7f849c; font-style: italic; }
.pyhl .d { color: #94e2d5; }
.pyhl .n { color: #fab387; }
.pyhl .k { color: #cba6f7; font-weight: bold; }
.pyhl .nb { color: #89b4fa; }
.pyhl .o { color: #f38ba8; }
";

/// Wrap one or more highlighted fragments in a complete HTML5 document.
pub fn render_document(title: &str, fragments: &[String]) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>");
    escape_html_into(&mut out, title);
    out.push_str("</title>\n<style>\n");
    out.push_str(STYLESHEET);
    out.push_str("</style>\n</head>\n<body>\n");
    for fragment in fragments {
        out.push_str("<pre class=\"pyhl\">");
        out.push_str(fragment);
        out.push_str("</pre>\n");
    }
    out.push_str("</body>\n</html>\n");
    out
}

/// An HTML comment naming `label`, safe for any label text.
pub fn html_label(label: &str) -> String {
    // `--` may not appear inside a comment; entity escaping leaves it alone.
    format!("<!-- {} -->", escape_html(label).replace("--", "&#45;&#45;"))
}

/// Append `text` with every control character a terminal would act on
/// replaced by U+FFFD.  Tabs, line feeds and the `\r` of a CRLF pair pass
/// through.
fn push_terminal_safe(out: &mut String, text: &str) {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        let keep = !c.is_control()
            || c == '\t'
            || c == '\n'
            || (c == '\r' && chars.peek() == Some(&'\n'));
        out.push(if keep { c } else { char::REPLACEMENT_CHARACTER });
    }
}

/// Render spans with ANSI colours for a terminal.
///
/// Honours `colored`'s global override, so with colouring disabled the result
/// is the source text with only its control characters replaced.
pub fn render_ansi(source: &str, spans: &[TokenSpan]) -> String {
    let mut out = String::with_capacity(source.len() * 2);
    let mut safe = String::new();
    for span in spans {
        safe.clear();
        push_terminal_safe(&mut safe, span.text(source));
        let text = safe.as_str();
        let styled = match span.kind {
            TokenKind::TripleString | TokenKind::QuotedString => text.green(),
            TokenKind::Comment => text.bright_black().italic(),
            TokenKind::Decorator => text.cyan(),
            TokenKind::Number => text.yellow(),
            TokenKind::Keyword => text.magenta().bold(),
            TokenKind::Builtin => text.blue(),
            TokenKind::SelfReference => text.red(),
            TokenKind::Identifier | TokenKind::Plain => {
                out.push_str(text);
                continue;
            }
        };
        out.push_str(&styled.to_string());
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
