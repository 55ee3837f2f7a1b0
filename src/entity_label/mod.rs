//! Entity label lookup against a remote knowledge-base API.
//!
//! Resolves a human-readable label for a structured entity identifier (a
//! Q-number) in a requested language. One outbound wbgetentities request is
//! issued per call; the response is matched exactly on identifier and
//! language tag. The request carries the server-side language-fallback hint,
//! but a fallback label under a different tag never satisfies the lookup.

mod client;
mod error;
mod matching;
mod parse;
mod request;

pub use client::{EntityLabelClient, DEFAULT_ENDPOINT};
pub use error::LabelError;
pub use matching::find_label;
pub use parse::{EntitiesResponse, Entity, Label};
pub use request::{label_request_url, ACTION_QUERY};
