//! Label lookup error type.

use thiserror::Error;

/// Error for a single entity label lookup.
///
/// Transport failures carry the underlying cause unmodified; lookup
/// failures name the identifier (and language) that missed. Never retried.
#[derive(Debug, Error)]
pub enum LabelError {
    /// curl reported an error (connection, timeout, etc.).
    #[error("transport: {0}")]
    Transport(#[from] curl::Error),
    /// Response had a non-2xx status.
    #[error("entity request returned HTTP {0}")]
    Http(u32),
    /// Response body was not a well-formed entities envelope.
    #[error("malformed entity response: {0}")]
    Malformed(#[from] serde_json::Error),
    /// Envelope arrived with its success flag unset.
    #[error("entity service reported failure for {id}")]
    ServiceFailure { id: String },
    /// No entity with the requested identifier in the response.
    #[error("no entity {id} in response")]
    EntityNotFound { id: String },
    /// Entity found, but no label under the exact requested language tag.
    #[error("no {lang} label for {id}")]
    LabelNotFound { id: String, lang: String },
    /// The completion channel closed before a result arrived (lookup task
    /// panicked). Still counts as the single terminal resolution.
    #[error("label request dropped before completion")]
    Dropped,
}
