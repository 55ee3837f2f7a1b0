//! Label request URL construction (wbgetentities).

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Fixed action query for label lookups: JSON labels with server-side
/// language fallback hinting enabled.
pub const ACTION_QUERY: &str = "action=wbgetentities&format=json&props=labels&languagefallback=1";

/// Characters escaped in query parameter values.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'?');

/// Builds the full request URL for looking up `id`'s label in `lang`.
pub fn label_request_url(endpoint: &str, id: &str, lang: &str) -> String {
    format!(
        "{}?{}&ids={}&languages={}",
        endpoint,
        ACTION_QUERY,
        utf8_percent_encode(id, QUERY_VALUE),
        utf8_percent_encode(lang, QUERY_VALUE),
    )
}
