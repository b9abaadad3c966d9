//! Markup-stripping text canonicalization.
//!
//! The policy is strip-everything: no tag is ever allowed through, because
//! any markup allowance reopens stored-XSS risk. There is deliberately no
//! "allow limited formatting" mode.

use serde_json::Value;

/// Default code-point ceiling for short free-text fields.
pub const TEXT_MAX_LEN: usize = 500;

/// Default code-point ceiling for long-form notes fields.
pub const NOTES_MAX_LEN: usize = 5000;

/// Remove every `<...>` span plus any stray tag delimiter.
///
/// An unterminated `<` swallows the remainder of the input; a `>` with no
/// opening `<` is dropped. The output never contains `<` or `>`.
fn strip_markup(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_tag = false;
    for c in raw.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if in_tag => {}
            _ => out.push(c),
        }
    }
    out
}

/// Sanitize a short free-text field (500 code-point ceiling).
///
/// Strips all markup, trims surrounding whitespace, and truncates to the
/// ceiling measured in code points — multi-byte characters are never split.
/// Idempotent: re-sanitizing a sanitized value is a no-op.
#[must_use]
pub fn sanitize_text(raw: &str) -> String {
    sanitize_text_with_limit(raw, TEXT_MAX_LEN)
}

/// Sanitize a long-form notes field (5000 code-point ceiling).
///
/// Same stripping policy as [`sanitize_text`], larger ceiling.
#[must_use]
pub fn sanitize_notes(raw: &str) -> String {
    sanitize_text_with_limit(raw, NOTES_MAX_LEN)
}

/// Sanitize free text with a caller-chosen code-point ceiling.
#[must_use]
pub fn sanitize_text_with_limit(raw: &str, max_len: usize) -> String {
    let stripped = strip_markup(raw);
    let trimmed = stripped.trim();
    if trimmed.chars().count() <= max_len {
        return trimmed.to_owned();
    }
    let truncated: String = trimmed.chars().take(max_len).collect();
    // Truncation can expose trailing whitespace; trim it so the result
    // stays idempotent.
    truncated.trim_end().to_owned()
}

/// Sanitize a free-text field arriving as deserialized JSON.
///
/// Externally sourced payloads cannot be trusted to carry the declared
/// shape, so the type check happens here at the boundary: any non-string
/// value yields the empty-string sentinel.
#[must_use]
pub fn sanitize_text_value(raw: &Value, max_len: usize) -> String {
    match raw {
        Value::String(s) => sanitize_text_with_limit(s, max_len),
        Value::Null
        | Value::Bool(_)
        | Value::Number(_)
        | Value::Array(_)
        | Value::Object(_) => String::new(),
    }
}
