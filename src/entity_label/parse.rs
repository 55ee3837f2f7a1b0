//! Minimal wbgetentities response structures for label extraction.

use serde::Deserialize;
use std::collections::HashMap;

/// Response envelope: success flag plus entities keyed by identifier.
#[derive(Debug, Deserialize)]
pub struct EntitiesResponse {
    /// 1 on success; 0 or absent otherwise.
    #[serde(default)]
    pub success: u8,
    #[serde(default)]
    pub entities: HashMap<String, Entity>,
}

impl EntitiesResponse {
    pub fn succeeded(&self) -> bool {
        self.success != 0
    }
}

/// One knowledge-base entity with its labels keyed by language tag.
#[derive(Debug, Deserialize)]
pub struct Entity {
    pub id: String,
    #[serde(default)]
    pub labels: HashMap<String, Label>,
}

/// A single label: the language tag it is in, and its text.
#[derive(Debug, Deserialize)]
pub struct Label {
    pub language: String,
    pub value: String,
}
