//! Wiki link prefix stripping.

const WIKI_PREFIX: &str = "/wiki/";

/// Strips a leading `/wiki/` from an internal link.
///
/// Only a prefix at position 0 is removed; anything else is returned
/// unchanged. For links that may be absolute, use [`remove_link_prefix`].
pub fn remove_internal_link_prefix(link: &str) -> &str {
    link.strip_prefix(WIKI_PREFIX).unwrap_or(link)
}

/// Drops everything up to and including the first `/wiki/` anywhere in the
/// link, so both `/wiki/Cat` and `https://en.wikipedia.org/wiki/Cat` reduce
/// to `Cat`. Unchanged if no `/wiki/` is present.
pub fn remove_link_prefix(link: &str) -> &str {
    match link.find(WIKI_PREFIX) {
        Some(i) => &link[i + WIKI_PREFIX.len()..],
        None => link,
    }
}
