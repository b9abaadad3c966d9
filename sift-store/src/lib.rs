//! Validated reads from ephemeral key-value storage.
//!
//! Local storage accumulates values written by whatever validation rules
//! were current at write time. Rules drift; the store does not. So every
//! read is re-validated against the *current* rules via [`get_validated`]
//! instead of trusting that a past write was clean.
//!
//! The wrapper has exactly three observable outcomes for any key:
//! a value that passed the caller's predicate, or `None` — covering
//! "absent", "failed validation", and "storage fault" alike. A storage
//! fault is logged and normalized to `None`; it never escapes to the
//! caller as an error.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Errors surfaced by a [`KeyValueStore`] backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing storage could not be read or written.
    #[error("storage i/o failure: {0}")]
    Io(#[from] std::io::Error),

    /// The backing data exists but could not be parsed.
    #[error("storage data is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// A string key-value store with ephemeral, local-only semantics.
///
/// Implementations are effectively single-owner per key from the caller's
/// perspective; nothing here promises atomicity across calls.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be read or
    /// its data cannot be parsed.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Read a value and re-validate it against current rules.
///
/// Performs exactly one read and one validation pass — no retry, no
/// write-back. Returns the raw value unchanged only if `validate` accepts
/// it. An absent key, a rejected value, and a storage fault all collapse
/// to `None`; the fault is emitted as a `tracing` warning so the caller's
/// instrumentation sees it without having to handle it.
pub fn get_validated<S, F>(store: &S, key: &str, validate: F) -> Option<String>
where
    S: KeyValueStore + ?Sized,
    F: Fn(&str) -> bool,
{
    match store.get(key) {
        Ok(Some(value)) if validate(&value) => Some(value),
        Ok(Some(_)) => {
            // The value itself is untrusted; log the key only.
            tracing::warn!(key, "stored value failed re-validation, discarding");
            None
        }
        Ok(None) => None,
        Err(err) => {
            tracing::warn!(key, error = %err, "ephemeral store read failed, treating as absent");
            None
        }
    }
}
