//! Entity label client: one curl GET per lookup, one-shot async completion.

use std::time::Duration;

use tokio::sync::oneshot;

use super::error::LabelError;
use super::matching::find_label;
use super::parse::EntitiesResponse;
use super::request::label_request_url;

/// Well-known entity-data endpoint. This is fixed and independent of the
/// site being browsed.
pub const DEFAULT_ENDPOINT: &str = "https://www.wikidata.org/w/api.php";

/// Client for label lookups against a wbgetentities endpoint.
///
/// Each lookup is fully independent: no caching, no deduplication of
/// concurrent identical requests, no retries, no cancellation handle.
#[derive(Debug, Clone)]
pub struct EntityLabelClient {
    endpoint: String,
}

impl Default for EntityLabelClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl EntityLabelClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Blocking lookup: one GET, parse, exact match.
    ///
    /// Runs in the current thread; use [`label_for_lang`](Self::label_for_lang)
    /// from async code.
    pub fn fetch_label(&self, id: &str, lang: &str) -> Result<String, LabelError> {
        let url = label_request_url(&self.endpoint, id, lang);
        tracing::debug!(%url, "requesting entity label");
        let body = http_get(&url)?;
        let resp: EntitiesResponse = serde_json::from_slice(&body)?;
        find_label(&resp, id, lang)
    }

    /// Asynchronous lookup for `id`'s label in exactly `lang`.
    ///
    /// Dispatches the blocking fetch on the runtime's blocking pool and
    /// resolves through a consumed one-shot channel, so each call completes
    /// exactly once with success or failure. The await side does no blocking
    /// work and makes no assumption about which thread ran the transport.
    pub async fn label_for_lang(&self, id: &str, lang: &str) -> Result<String, LabelError> {
        let (tx, rx) = oneshot::channel();
        let client = self.clone();
        let id = id.to_string();
        let lang = lang.to_string();
        tokio::task::spawn_blocking(move || {
            let _ = tx.send(client.fetch_label(&id, &lang));
        });
        rx.await.unwrap_or(Err(LabelError::Dropped))
    }
}

/// Performs one GET and returns the body, classifying non-2xx as an error.
fn http_get(url: &str) -> Result<Vec<u8>, LabelError> {
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(Duration::from_secs(30))?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(LabelError::Http(code));
    }

    Ok(body)
}
