//! Text helpers: truncation and label formatting

use serde_json::Value;

use crate::event::stringify;

/// Appended to any text cut short by [`truncate`]
pub const ELLIPSIS: &str = "...";

/// Stringify `value` and cut it to `max_len` characters plus [`ELLIPSIS`]
pub fn truncate(value: &Value, max_len: usize) -> String {
    truncate_str(&stringify(value), max_len)
}

/// Cut `text` to `max_len` characters plus [`ELLIPSIS`] if it is longer
///
/// Lengths are counted in chars, so multi-byte text is never split mid-character.
pub fn truncate_str(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

/// First `n` characters of `text`
pub fn prefix(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((cut, _)) => &text[..cut],
        None => text,
    }
}

/// Header label for an event kind: `tool_use` -> `Tool Use`
pub fn kind_label(kind: &str) -> String {
    title_case(&kind.replace('_', " "))
}

/// Upper-case the first letter of each run of letters, lower-case the rest
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
