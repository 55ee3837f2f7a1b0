//! Link string normalization.
//!
//! Pure, total transforms over raw link strings: percent-decoding,
//! protocol-relative resolution, wiki prefix and fragment stripping, page
//! title derivation. Safe to call concurrently from anywhere.

mod decode;
mod fragment;
mod prefix;

pub use decode::decode_url;
pub use fragment::{fragment, remove_fragment};
pub use prefix::{remove_internal_link_prefix, remove_link_prefix};

/// Resolves a potentially protocol-relative URL to a fully qualified one.
///
/// A link starting with `//` inherits the scheme of its referring context;
/// `scheme` comes from the active site configuration (see
/// [`crate::config::SiteConfig::scheme`]), never hard-coded.
pub fn resolve_protocol_relative_url(url: &str, scheme: &str) -> String {
    if url.starts_with("//") {
        format!("{scheme}:{url}")
    } else {
        url.to_string()
    }
}

/// Derives a display title from a page link: strips everything through the
/// first `/wiki/`, drops the fragment, and turns underscores into spaces.
///
/// Lossy and non-reversible. Underscore replacement is not a full decode;
/// callers needing percent-decoding must also apply [`decode_url`].
pub fn title_from_url(url: &str) -> String {
    remove_fragment(remove_link_prefix(url)).replace('_', " ")
}

/// Appends a provenance parameter to a canonical page URI, for share and
/// attribution links.
pub fn url_with_provenance(canonical_uri: &str, prov: &str) -> String {
    format!("{canonical_uri}?wprov={prov}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protocol_relative_gets_scheme_prepended() {
        assert_eq!(
            resolve_protocol_relative_url("//en.wikipedia.org/x", "https"),
            "https://en.wikipedia.org/x"
        );
        assert_eq!(
            resolve_protocol_relative_url("//en.wikipedia.org/x", "http"),
            "http://en.wikipedia.org/x"
        );
    }

    #[test]
    fn absolute_and_relative_urls_unchanged() {
        assert_eq!(resolve_protocol_relative_url("https://a/b", "https"), "https://a/b");
        assert_eq!(resolve_protocol_relative_url("/wiki/Cat", "https"), "/wiki/Cat");
    }

    #[test]
    fn title_from_full_url() {
        assert_eq!(
            title_from_url("https://en.wikipedia.org/wiki/Foo_Bar#Section"),
            "Foo Bar"
        );
        assert_eq!(title_from_url("/wiki/Foo_Bar"), "Foo Bar");
    }

    #[test]
    fn title_keeps_percent_encoding() {
        // Underscore replacement only; percent sequences survive.
        assert_eq!(title_from_url("/wiki/Caf%C3%A9"), "Caf%C3%A9");
    }

    #[test]
    fn provenance_parameter_appended() {
        assert_eq!(
            url_with_provenance("https://en.wikipedia.org/wiki/Cat", "sfti1"),
            "https://en.wikipedia.org/wiki/Cat?wprov=sfti1"
        );
    }
}
