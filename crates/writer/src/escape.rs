//! Markup escaping for names and quoted attribute values.

use std::borrow::Cow;

/// Escape `&`, `<` and `>`.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        push_escaped(&mut out, c);
    }
    Cow::Owned(out)
}

/// Escape `value` and wrap it in quotes, ready to follow `name=`.
///
/// Double quotes are preferred. A value containing `"` but no `'` is wrapped
/// in single quotes instead; a value containing both keeps double quotes and
/// writes `"` as `&quot;`.
pub fn quote_attr(value: &str) -> String {
    let has_double = value.contains('"');
    let has_single = value.contains('\'');
    let (quote, escape_double) = match (has_double, has_single) {
        (true, false) => ('\'', false),
        (true, true) => ('"', true),
        _ => ('"', false),
    };

    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for c in value.chars() {
        match c {
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#9;"),
            '"' if escape_double => out.push_str("&quot;"),
            _ => push_escaped(&mut out, c),
        }
    }
    out.push(quote);
    out
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        _ => out.push(c),
    }
}
