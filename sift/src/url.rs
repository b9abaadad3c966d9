//! URL structural validation.
//!
//! Accepts only `http`/`https` URLs with a hostname that would survive DNS:
//! ASCII labels, interior hyphens, at least one dot. A bare
//! `example.com/path` is tolerated and prefixed with `https://`, which is
//! what users actually type into link fields. Everything else — other
//! schemes, `javascript:` payloads, IPv6 literals, embedded whitespace,
//! HTML delimiters — is rejected.

use thiserror::Error;

/// Maximum accepted URL length in bytes.
pub const URL_MAX_LEN: usize = 2048;

/// Maximum length of a single host label.
const LABEL_MAX_LEN: usize = 63;

/// Errors from URL structural validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// Input was empty after trimming.
    #[error("url is empty")]
    Empty,

    /// URL exceeds the length cap.
    #[error("url too long ({0} bytes, max {URL_MAX_LEN})")]
    TooLong(usize),

    /// URL contains whitespace, a control character, or an HTML delimiter.
    #[error("url contains a whitespace, control, or delimiter character")]
    IllegalCharacter,

    /// The scheme is not `http` or `https`.
    #[error("unsupported scheme '{0}'")]
    UnsupportedScheme(String),

    /// The host is empty, dotless, or has an invalid label.
    #[error("invalid host: {0}")]
    InvalidHost(String),

    /// The port is not a number in 1..=65535.
    #[error("invalid port '{0}'")]
    InvalidPort(String),
}

/// Characters rejected anywhere in a URL: whitespace and control
/// characters break the structural checks, and the HTML delimiters would
/// let an accepted URL smuggle markup into a rendered link.
fn is_illegal_char(c: char) -> bool {
    c.is_whitespace() || c.is_control() || matches!(c, '<' | '>' | '"' | '\\' | '`')
}

fn check_host_label(label: &str) -> Result<(), UrlError> {
    if label.is_empty() {
        return Err(UrlError::InvalidHost("empty label".to_owned()));
    }
    if label.len() > LABEL_MAX_LEN {
        return Err(UrlError::InvalidHost(format!(
            "label '{label}' too long (max {LABEL_MAX_LEN})"
        )));
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err(UrlError::InvalidHost(format!(
            "label '{label}' starts or ends with '-'"
        )));
    }
    for c in label.chars() {
        if !c.is_ascii_alphanumeric() && c != '-' {
            return Err(UrlError::InvalidHost(format!("character '{c}'")));
        }
    }
    Ok(())
}

/// Validate the authority section: `[userinfo@]host[:port]`.
fn check_authority(authority: &str) -> Result<(), UrlError> {
    // Userinfo is tolerated but not validated beyond the global
    // character checks; the host is what matters for linking.
    let host_port = authority
        .rfind('@')
        .map_or(authority, |i| &authority[i + 1..]);

    if host_port.starts_with('[') {
        return Err(UrlError::InvalidHost("ipv6 literal".to_owned()));
    }

    let (host, port) = match host_port.rfind(':') {
        Some(i) => (&host_port[..i], Some(&host_port[i + 1..])),
        None => (host_port, None),
    };

    if let Some(port) = port {
        match port.parse::<u16>() {
            Ok(p) if p > 0 => {}
            _ => return Err(UrlError::InvalidPort(port.to_owned())),
        }
    }

    if host.is_empty() {
        return Err(UrlError::InvalidHost("empty".to_owned()));
    }
    if !host.contains('.') {
        return Err(UrlError::InvalidHost(format!("'{host}' has no dot")));
    }
    for label in host.split('.') {
        check_host_label(label)?;
    }
    Ok(())
}

/// Validate a URL and return its canonical form.
///
/// The accepted value is the trimmed input, with `https://` prefixed when
/// the scheme was missing; path and query are preserved verbatim.
///
/// # Errors
///
/// Returns [`UrlError`] describing the first structural rule the input
/// broke.
pub fn check_url(raw: &str) -> Result<String, UrlError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }
    if trimmed.len() > URL_MAX_LEN {
        return Err(UrlError::TooLong(trimmed.len()));
    }
    if trimmed.chars().any(is_illegal_char) {
        return Err(UrlError::IllegalCharacter);
    }

    // A "://" that appears after a path, query, or fragment separator is
    // data (e.g. a redirect target in the query), not a scheme.
    let has_scheme = trimmed
        .split_once("://")
        .is_some_and(|(scheme, _)| !scheme.contains(['/', '?', '#']));
    let candidate = if has_scheme {
        trimmed.to_owned()
    } else {
        format!("https://{trimmed}")
    };

    let Some((scheme, rest)) = candidate.split_once("://") else {
        return Err(UrlError::UnsupportedScheme(String::new()));
    };
    if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
        return Err(UrlError::UnsupportedScheme(scheme.to_owned()));
    }

    let authority_end = rest
        .find(['/', '?', '#'])
        .unwrap_or(rest.len());
    check_authority(&rest[..authority_end])?;

    Ok(candidate)
}

/// Sanitize a URL field.
///
/// Returns the canonical URL, or `None` if the structural check fails.
/// A `None` here means the caller must block the write.
#[must_use]
pub fn sanitize_url(raw: &str) -> Option<String> {
    check_url(raw).ok()
}
