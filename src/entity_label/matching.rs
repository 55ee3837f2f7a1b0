//! Exact-match label extraction over a parsed entities response.

use super::error::LabelError;
use super::parse::EntitiesResponse;

/// Extracts the label for `id` in exactly `lang` from a response.
///
/// Both comparisons are exact and case-sensitive. The request asks the
/// server for language fallback, but a fallback label returned under a
/// different tag is never substituted here; only an exact `lang` match
/// succeeds.
pub fn find_label(resp: &EntitiesResponse, id: &str, lang: &str) -> Result<String, LabelError> {
    if !resp.succeeded() {
        return Err(LabelError::ServiceFailure { id: id.to_string() });
    }

    let entity = resp
        .entities
        .values()
        .find(|e| e.id == id)
        .ok_or_else(|| LabelError::EntityNotFound { id: id.to_string() })?;

    entity
        .labels
        .values()
        .find(|l| l.language == lang)
        .map(|l| l.value.clone())
        .ok_or_else(|| LabelError::LabelNotFound {
            id: id.to_string(),
            lang: lang.to_string(),
        })
}
