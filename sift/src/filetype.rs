//! Magic-byte verification for uploaded binary content.
//!
//! An upload's declared MIME type is caller-asserted and therefore
//! untrusted; this module checks that the leading bytes are consistent
//! with the claim. It proves consistency only — the call site still has
//! to check the claim against its own MIME allowlist.

use std::fmt::Write as _;

/// Number of leading bytes compared against the signature table.
pub const SIGNATURE_PREFIX_LEN: usize = 4;

/// Registry of byte-prefix signatures per content type, hex-encoded.
///
/// Built once at process start, never mutated. A content type may carry
/// several signatures (JPEG has five `ffd8ffex` variants); the legacy
/// Office formats share the OLE container prefix and the OOXML formats
/// share the zip prefix.
const SIGNATURES: &[(&str, &[&str])] = &[
    (
        "image/jpeg",
        &["ffd8ffe0", "ffd8ffe1", "ffd8ffe2", "ffd8ffe3", "ffd8ffe8"],
    ),
    ("image/png", &["89504e47"]),
    ("image/gif", &["47494638"]),
    ("application/pdf", &["25504446"]),
    ("application/msword", &["d0cf11e0"]),
    ("application/vnd.ms-excel", &["d0cf11e0"]),
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        &["504b0304"],
    ),
    (
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        &["504b0304"],
    ),
];

fn signatures_for(claimed_type: &str) -> Option<&'static [&'static str]> {
    SIGNATURES
        .iter()
        .find(|(kind, _)| *kind == claimed_type)
        .map(|(_, sigs)| *sigs)
}

/// Check that a buffer's leading bytes match its claimed content type.
///
/// Hex-encodes the first four bytes and tests the prefix against every
/// signature registered for `claimed_type`. Returns `false` when the
/// buffer is shorter than four bytes, and `false` when the claimed type
/// has no registered signature at all — unknown types fail closed, since
/// the whole point of this check is to catch a caller lying about an
/// untrusted upload.
#[must_use]
pub fn validate_file_type(buffer: &[u8], claimed_type: &str) -> bool {
    let Some(sigs) = signatures_for(claimed_type) else {
        return false;
    };
    let Some(prefix) = buffer.get(..SIGNATURE_PREFIX_LEN) else {
        return false;
    };

    let mut hex = String::with_capacity(SIGNATURE_PREFIX_LEN * 2);
    for b in prefix {
        let _ = write!(hex, "{b:02x}");
    }

    sigs.iter().any(|sig| hex.starts_with(sig))
}
