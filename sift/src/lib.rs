//! Trust-boundary sanitization and validation primitives.
//!
//! Every function in this crate is pure, synchronous, and total: for any
//! input — empty, oversized, wrongly shaped, or adversarial — it terminates
//! and returns either a sanitized value or that validator's rejection
//! sentinel. Malformed input never raises.
//!
//! The sentinel policy is deliberately per-field and must not be unified:
//!
//! - [`sanitize_email`] / [`sanitize_url`] return `None` on rejection —
//!   these values are used for addressing and linking, so callers must
//!   block the write.
//! - [`sanitize_phone`] / [`sanitize_currency`] never hard-fail — they
//!   always produce a safe, displayable value (possibly empty / `0.0`).
//! - [`sanitize_text`], [`sanitize_notes`], and [`sanitize_filename`]
//!   always return a safe string.
//! - [`is_valid_identifier`] and [`validate_file_type`] are pass/fail
//!   predicates.
//!
//! The only state in the crate is the static content-signature table and
//! the static filename extension allowlist, both immutable after process
//! start — concurrent use from any number of threads needs no locking.

pub mod email;
pub mod filename;
pub mod filetype;
pub mod identifier;
pub mod number;
pub mod phone;
pub mod text;
pub mod url;

// Re-export the field-level API surface
pub use email::{EmailError, EmailNormalizeOptions, sanitize_email, sanitize_email_with};
pub use filename::sanitize_filename;
pub use filetype::validate_file_type;
pub use identifier::is_valid_identifier;
pub use number::{sanitize_currency, sanitize_number};
pub use phone::sanitize_phone;
pub use text::{sanitize_notes, sanitize_text, sanitize_text_with_limit};
pub use url::{UrlError, sanitize_url};
