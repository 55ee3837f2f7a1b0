//! wikilink: link handling core for wiki clients.
//!
//! Normalizes and classifies page links, gates external navigation on the
//! current zero-rating billing state, and resolves human-readable labels for
//! Wikidata entity identifiers. Rendering surfaces, dialog UIs, and the HTTP
//! stack of the host application are collaborators, not part of this crate.

pub mod config;
pub mod logging;

pub mod entity_label;
pub mod link_classifier;
pub mod navigation;
pub mod url_norm;
