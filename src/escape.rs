//! HTML escaping for text placed inside element content or attribute values.

/// Append `text` to `out` with `&`, `<`, `>`, `"` and `'` replaced by their
/// entities.
///
/// A single pass is equivalent to replacing `&` first and the rest after it:
/// entities introduced here are never re-escaped.
pub fn escape_html_into(out: &mut String, text: &str) {
    let mut last = 0;
    for (i, b) in text.bytes().enumerate() {
        let entity = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&#039;",
            _ => continue,
        };
        out.push_str(&text[last..i]);
        out.push_str(entity);
        last = i + 1;
    }
    out.push_str(&text[last..]);
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_html_into(&mut out, text);
    out
}
