//! Internal page link classification.

use url::Url;

/// True iff `url` points at internal wiki page content: the host is present
/// and ends with `wikipedia.org`, and the path starts with `/wiki`.
///
/// This is a conservative allow-list, not full validation. Any subdomain of
/// the suffix is accepted, and the path check is a plain string prefix (not
/// segment-aware), so `/wikibogus` also matches.
pub fn is_valid_page_link(url: &Url) -> bool {
    let host_ok = url
        .host_str()
        .map_or(false, |h| !h.is_empty() && h.ends_with("wikipedia.org"));
    let path = url.path();
    host_ok && !path.is_empty() && path.starts_with("/wiki")
}

/// Parses `raw` and applies [`is_valid_page_link`]; unparseable input is not
/// a page link.
pub fn is_valid_page_link_str(raw: &str) -> bool {
    Url::parse(raw).map(|u| is_valid_page_link(&u)).unwrap_or(false)
}
