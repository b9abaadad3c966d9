//! Email canonicalization and shape validation.
//!
//! The shape rules are a pragmatic RFC 5321 subset: ASCII only, length caps
//! on every component, no quoted local parts, no IP-literal domains.
//! Accepted addresses are trimmed and lowercased, then optionally folded
//! through provider-specific normalization rules.

use thiserror::Error;

/// Maximum total length of an address.
pub const EMAIL_MAX_LEN: usize = 254;
/// Maximum length of the local part (before `@`).
const LOCAL_MAX_LEN: usize = 64;
/// Maximum length of the domain part (after `@`).
const DOMAIN_MAX_LEN: usize = 253;
/// Maximum length of a single domain label.
const LABEL_MAX_LEN: usize = 63;

/// Domains folded by the gmail rules.
const GMAIL_DOMAINS: &[&str] = &["gmail.com", "googlemail.com"];
/// Domains folded by the outlook subaddress rule.
const OUTLOOK_DOMAINS: &[&str] = &["outlook.com", "hotmail.com", "live.com"];
/// Domains folded by the icloud subaddress rule.
const ICLOUD_DOMAINS: &[&str] = &["icloud.com", "me.com"];

/// Errors from email shape validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    /// Input was empty after trimming.
    #[error("address is empty")]
    Empty,

    /// Address exceeds the 254-byte cap.
    #[error("address too long ({0} bytes, max {EMAIL_MAX_LEN})")]
    TooLong(usize),

    /// No `@` separator found.
    #[error("missing '@'")]
    MissingAt,

    /// More than one `@` separator found.
    #[error("multiple '@' characters")]
    MultipleAt,

    /// The local part is empty, too long, has a bad dot position, or
    /// contains a disallowed character.
    #[error("invalid local part: {0}")]
    BadLocalPart(String),

    /// The domain is empty, too long, missing a dot, or has an invalid label.
    #[error("invalid domain: {0}")]
    BadDomain(String),
}

/// Provider-specific normalization toggles.
///
/// The application currently runs with every rule disabled; the toggles
/// exist as configuration because subaddress and dot folding change which
/// addresses compare equal, and that is a per-deployment decision.
#[derive(Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct EmailNormalizeOptions {
    /// Remove dots from the local part of gmail addresses.
    pub gmail_remove_dots: bool,
    /// Strip `+suffix` from the local part of gmail addresses.
    pub gmail_remove_subaddress: bool,
    /// Strip `+suffix` from the local part of outlook/hotmail/live addresses.
    pub outlook_remove_subaddress: bool,
    /// Strip `+suffix` from the local part of icloud/me addresses.
    pub icloud_remove_subaddress: bool,
}

/// Characters permitted in an unquoted local part, besides alphanumerics.
fn is_local_special(c: char) -> bool {
    matches!(
        c,
        '.' | '!'
            | '#'
            | '$'
            | '%'
            | '&'
            | '\''
            | '*'
            | '+'
            | '-'
            | '/'
            | '='
            | '?'
            | '^'
            | '_'
            | '`'
            | '{'
            | '|'
            | '}'
            | '~'
    )
}

fn check_local_part(local: &str) -> Result<(), EmailError> {
    if local.is_empty() {
        return Err(EmailError::BadLocalPart("empty".to_owned()));
    }
    if local.len() > LOCAL_MAX_LEN {
        return Err(EmailError::BadLocalPart(format!(
            "too long ({} bytes, max {LOCAL_MAX_LEN})",
            local.len()
        )));
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return Err(EmailError::BadLocalPart("bad dot position".to_owned()));
    }
    for c in local.chars() {
        if !c.is_ascii_alphanumeric() && !is_local_special(c) {
            return Err(EmailError::BadLocalPart(format!("character '{c}'")));
        }
    }
    Ok(())
}

fn check_domain(domain: &str) -> Result<(), EmailError> {
    if domain.is_empty() {
        return Err(EmailError::BadDomain("empty".to_owned()));
    }
    if domain.len() > DOMAIN_MAX_LEN {
        return Err(EmailError::BadDomain(format!(
            "too long ({} bytes, max {DOMAIN_MAX_LEN})",
            domain.len()
        )));
    }
    if !domain.contains('.') {
        return Err(EmailError::BadDomain("missing dot".to_owned()));
    }
    for label in domain.split('.') {
        check_domain_label(label)?;
    }
    Ok(())
}

fn check_domain_label(label: &str) -> Result<(), EmailError> {
    if label.is_empty() {
        return Err(EmailError::BadDomain("empty label".to_owned()));
    }
    if label.len() > LABEL_MAX_LEN {
        return Err(EmailError::BadDomain(format!(
            "label '{label}' too long (max {LABEL_MAX_LEN})"
        )));
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err(EmailError::BadDomain(format!(
            "label '{label}' starts or ends with '-'"
        )));
    }
    for c in label.chars() {
        if !c.is_ascii_alphanumeric() && c != '-' {
            return Err(EmailError::BadDomain(format!("character '{c}'")));
        }
    }
    Ok(())
}

/// Apply provider normalization rules to an already-lowercased local/domain
/// pair. Returns the folded local part.
fn normalize_local(local: &str, domain: &str, opts: &EmailNormalizeOptions) -> String {
    let mut local = local.to_owned();

    let strip_subaddress = (opts.gmail_remove_subaddress && GMAIL_DOMAINS.contains(&domain))
        || (opts.outlook_remove_subaddress && OUTLOOK_DOMAINS.contains(&domain))
        || (opts.icloud_remove_subaddress && ICLOUD_DOMAINS.contains(&domain));
    if strip_subaddress
        && let Some(plus) = local.find('+')
    {
        local.truncate(plus);
    }

    if opts.gmail_remove_dots && GMAIL_DOMAINS.contains(&domain) {
        local.retain(|c| c != '.');
    }

    local
}

/// Validate and canonicalize an email address.
///
/// Trims, rejects on shape, lowercases, then applies the provider
/// normalization toggles in `opts`.
///
/// # Errors
///
/// Returns [`EmailError`] describing the first shape rule the input broke,
/// including a local part emptied by subaddress folding.
pub fn check_email(raw: &str, opts: &EmailNormalizeOptions) -> Result<String, EmailError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EmailError::Empty);
    }
    if trimmed.len() > EMAIL_MAX_LEN {
        return Err(EmailError::TooLong(trimmed.len()));
    }

    let mut parts = trimmed.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(_), None, _) => return Err(EmailError::MissingAt),
        (_, _, Some(_)) => return Err(EmailError::MultipleAt),
        (Some(local), Some(domain), None) => (local, domain),
        (None, ..) => return Err(EmailError::Empty),
    };

    check_local_part(local)?;
    check_domain(domain)?;

    let local = local.to_ascii_lowercase();
    let domain = domain.to_ascii_lowercase();
    let local = normalize_local(&local, &domain, opts);
    if local.is_empty() {
        return Err(EmailError::BadLocalPart(
            "empty after normalization".to_owned(),
        ));
    }

    Ok(format!("{local}@{domain}"))
}

/// Sanitize an email address with every provider rule disabled.
///
/// Returns the lowercased, trimmed address, or `None` if the shape check
/// fails. A `None` here means the caller must block the write.
#[must_use]
pub fn sanitize_email(raw: &str) -> Option<String> {
    sanitize_email_with(raw, &EmailNormalizeOptions::default())
}

/// Sanitize an email address with explicit provider normalization rules.
#[must_use]
pub fn sanitize_email_with(raw: &str, opts: &EmailNormalizeOptions) -> Option<String> {
    check_email(raw, opts).ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    // ---- acceptance and canonicalization ----

    #[test]
    fn test_simple_address() {
        assert_eq!(
            sanitize_email("user@example.com"),
            Some("user@example.com".to_owned())
        );
    }

    #[test]
    fn test_trims_and_lowercases() {
        assert_eq!(
            sanitize_email("  USER@Example.COM "),
            Some("user@example.com".to_owned())
        );
    }

    #[test]
    fn test_subaddress_and_dots_preserved_by_default() {
        assert_eq!(
            sanitize_email("first.last+tag@gmail.com"),
            Some("first.last+tag@gmail.com".to_owned())
        );
    }

    #[test]
    fn test_hyphenated_domain_and_special_local() {
        assert!(sanitize_email("user_x!%@my-domain.co.uk").is_some());
    }

    // ---- rejection ----

    #[test]
    fn test_rejects_not_an_email() {
        assert_eq!(sanitize_email("not-an-email"), None);
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert_eq!(check_email("", &EmailNormalizeOptions::default()), Err(EmailError::Empty));
        assert_eq!(check_email("   ", &EmailNormalizeOptions::default()), Err(EmailError::Empty));
    }

    #[test]
    fn test_rejects_multiple_at() {
        let err = check_email("a@b@example.com", &EmailNormalizeOptions::default()).unwrap_err();
        assert_eq!(err, EmailError::MultipleAt);
    }

    #[test]
    fn test_rejects_empty_parts() {
        assert!(matches!(
            check_email("@example.com", &EmailNormalizeOptions::default()),
            Err(EmailError::BadLocalPart(_))
        ));
        assert!(matches!(
            check_email("user@", &EmailNormalizeOptions::default()),
            Err(EmailError::BadDomain(_))
        ));
    }

    #[test]
    fn test_rejects_domain_without_dot() {
        assert_eq!(sanitize_email("user@localhost"), None);
    }

    #[test]
    fn test_rejects_bad_dot_positions() {
        assert_eq!(sanitize_email(".user@example.com"), None);
        assert_eq!(sanitize_email("user.@example.com"), None);
        assert_eq!(sanitize_email("u..ser@example.com"), None);
        assert_eq!(sanitize_email("user@.example.com"), None);
        assert_eq!(sanitize_email("user@example..com"), None);
    }

    #[test]
    fn test_rejects_hyphen_edged_label() {
        assert_eq!(sanitize_email("user@-example.com"), None);
        assert_eq!(sanitize_email("user@example-.com"), None);
    }

    #[test]
    fn test_rejects_non_ascii_and_control() {
        assert_eq!(sanitize_email("us\u{e9}r@example.com"), None);
        assert_eq!(sanitize_email("user@ex\u{e4}mple.com"), None);
        assert_eq!(sanitize_email("user\0@example.com"), None);
        assert_eq!(sanitize_email("user\n@example.com"), None);
        assert_eq!(sanitize_email("us er@example.com"), None);
    }

    #[test]
    fn test_length_limits() {
        let local = "a".repeat(64);
        assert!(sanitize_email(&format!("{local}@example.com")).is_some());
        let local = "a".repeat(65);
        assert_eq!(sanitize_email(&format!("{local}@example.com")), None);

        let label = "a".repeat(63);
        assert!(sanitize_email(&format!("u@{label}.com")).is_some());
        let label = "a".repeat(64);
        assert_eq!(sanitize_email(&format!("u@{label}.com")), None);
    }

    // ---- provider normalization toggles ----

    #[test]
    fn test_gmail_remove_dots() {
        let opts = EmailNormalizeOptions {
            gmail_remove_dots: true,
            ..EmailNormalizeOptions::default()
        };
        assert_eq!(
            sanitize_email_with("first.last@gmail.com", &opts),
            Some("firstlast@gmail.com".to_owned())
        );
        // Non-gmail domains are untouched
        assert_eq!(
            sanitize_email_with("first.last@example.com", &opts),
            Some("first.last@example.com".to_owned())
        );
    }

    #[test]
    fn test_gmail_remove_subaddress() {
        let opts = EmailNormalizeOptions {
            gmail_remove_subaddress: true,
            ..EmailNormalizeOptions::default()
        };
        assert_eq!(
            sanitize_email_with("user+tag@googlemail.com", &opts),
            Some("user@googlemail.com".to_owned())
        );
    }

    #[test]
    fn test_outlook_and_icloud_subaddress() {
        let opts = EmailNormalizeOptions {
            outlook_remove_subaddress: true,
            icloud_remove_subaddress: true,
            ..EmailNormalizeOptions::default()
        };
        assert_eq!(
            sanitize_email_with("user+x@hotmail.com", &opts),
            Some("user@hotmail.com".to_owned())
        );
        assert_eq!(
            sanitize_email_with("user+x@me.com", &opts),
            Some("user@me.com".to_owned())
        );
        // gmail toggle is off, so gmail subaddresses survive
        assert_eq!(
            sanitize_email_with("user+x@gmail.com", &opts),
            Some("user+x@gmail.com".to_owned())
        );
    }

    #[test]
    fn test_local_emptied_by_folding_is_rejected() {
        let opts = EmailNormalizeOptions {
            gmail_remove_subaddress: true,
            ..EmailNormalizeOptions::default()
        };
        assert_eq!(sanitize_email_with("+tag@gmail.com", &opts), None);
    }

    // ---- idempotence on accepted outputs ----

    #[test]
    fn test_idempotent_on_accepted() {
        for raw in ["  User+Tag@GMAIL.com ", "a.b@ex.io", "x_y@sub.example.org"] {
            let once = sanitize_email(raw).unwrap();
            assert_eq!(sanitize_email(&once), Some(once.clone()), "raw: {raw}");
        }
    }
}
