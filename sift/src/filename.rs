//! Upload filename sanitization.
//!
//! The result is always safe to use as a single path segment: the
//! character filter removes `/`, `\`, and every other reserved character,
//! so no traversal sequence can survive, and an unrecognized extension is
//! forced to `txt` rather than passed through.

/// Maximum length of the cleaned base name, in code points.
pub const BASE_MAX_LEN: usize = 50;

/// Extensions that keep their identity; anything else becomes
/// [`FALLBACK_EXTENSION`].
pub const ALLOWED_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "pdf", "doc", "docx", "xls", "xlsx",
];

/// Fail-closed extension for anything not on the allowlist.
pub const FALLBACK_EXTENSION: &str = "txt";

fn is_base_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Sanitize an uploaded filename into `base.ext` form.
///
/// Splits at the last `.` (a dotless name has an empty extension), maps
/// every base character outside `[A-Za-z0-9_-]` to `_`, truncates the base
/// to 50 code points, and lowercases the extension. An extension missing
/// from [`ALLOWED_EXTENSIONS`] — `.exe`, `.html`, anything unknown — is
/// replaced with `txt`. Idempotent.
#[must_use]
pub fn sanitize_filename(raw: &str) -> String {
    let (base, ext) = raw
        .rfind('.')
        .map_or((raw, ""), |i| (&raw[..i], &raw[i + 1..]));

    let cleaned: String = base
        .chars()
        .take(BASE_MAX_LEN)
        .map(|c| if is_base_char(c) { c } else { '_' })
        .collect();

    let ext = ext.to_ascii_lowercase();
    let safe_ext = if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        ext
    } else {
        FALLBACK_EXTENSION.to_owned()
    };

    format!("{cleaned}.{safe_ext}")
}
