//! Percent-decoding of encoded page links.

use percent_encoding::percent_decode_str;

/// Percent-decodes a URL-encoded string as UTF-8.
///
/// Total over arbitrary input: if any percent sequence is malformed (bad hex
/// digits, truncated `%X`), or the decoded bytes are not valid UTF-8, the
/// WHOLE original string is returned un-decoded with a debug trace. No
/// partial decoding ever happens.
pub fn decode_url(url: &str) -> String {
    if has_malformed_percent_sequence(url) {
        tracing::debug!(url, "malformed percent sequence, keeping original");
        return url.to_string();
    }
    match percent_decode_str(url).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => {
            tracing::debug!(url, "percent-decoding produced invalid UTF-8, keeping original");
            url.to_string()
        }
    }
}

/// True if any `%` is not followed by exactly two hex digits.
fn has_malformed_percent_sequence(url: &str) -> bool {
    let bytes = url.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let ok = i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !ok {
                return true;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    false
}
