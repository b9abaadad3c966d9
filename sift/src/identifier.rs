//! Externally-supplied identifier checking.
//!
//! Identifiers (academy IDs, invite codes, document keys) arrive from
//! outside the trust boundary and are used to derive storage paths and
//! queries, so they get a pass/fail charset check rather than a transform —
//! rewriting an identifier would silently point at a different record.

/// Minimum accepted identifier length.
pub const IDENTIFIER_MIN_LEN: usize = 10;

/// Maximum accepted identifier length.
pub const IDENTIFIER_MAX_LEN: usize = 100;

/// Check an externally-supplied identifier.
///
/// Accepts only ASCII alphanumerics, `_`, and `-`, with a length in
/// `[10, 100]`. This is a predicate, not a sanitizer: a `false` means the
/// identifier must not be used in a path or query.
#[must_use]
pub fn is_valid_identifier(raw: &str) -> bool {
    if raw.len() < IDENTIFIER_MIN_LEN || raw.len() > IDENTIFIER_MAX_LEN {
        return false;
    }
    raw.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
