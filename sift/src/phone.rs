//! Best-effort phone number cleanup.
//!
//! Phone numbers are display-only, so this validator never hard-fails: the
//! worst possible outcome is the empty string. Callers always get a value
//! they can persist and render.

/// Maximum length of a cleaned phone number, in code points.
pub const PHONE_MAX_LEN: usize = 20;

fn is_phone_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '(' | ')')
}

/// Clean a phone number field.
///
/// Keeps only digits, `+`, space, hyphen, and parentheses, trims, and
/// clamps to 20 code points. Everything else — letters, injection
/// payloads, emoji — is silently dropped.
#[must_use]
pub fn sanitize_phone(raw: &str) -> String {
    let kept: String = raw.chars().filter(|c| is_phone_char(*c)).collect();
    let trimmed = kept.trim();
    if trimmed.chars().count() <= PHONE_MAX_LEN {
        return trimmed.to_owned();
    }
    let clamped: String = trimmed.chars().take(PHONE_MAX_LEN).collect();
    clamped.trim_end().to_owned()
}
