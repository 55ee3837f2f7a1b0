//! Fragment extraction and removal.

/// Removes a trailing fragment: the first `#` and everything after it.
pub fn remove_fragment(link: &str) -> &str {
    match link.find('#') {
        Some(i) => &link[..i],
        None => link,
    }
}

/// Returns the fragment component of a link, or `None` if absent.
///
/// Absolute links go through the URL parser so fragment syntax matches URI
/// rules; relative references the parser rejects fall back to a plain `#`
/// split. Never fails on malformed input.
pub fn fragment(link: &str) -> Option<String> {
    match url::Url::parse(link) {
        Ok(parsed) => parsed.fragment().map(str::to_string),
        Err(_) => link.split_once('#').map(|(_, f)| f.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_fragment_strips_first_hash() {
        assert_eq!(remove_fragment("Foo#Section"), "Foo");
        assert_eq!(remove_fragment("Foo#a#b"), "Foo");
        assert_eq!(remove_fragment("Foo"), "Foo");
        assert_eq!(remove_fragment("#only"), "");
    }

    #[test]
    fn fragment_from_absolute_url() {
        assert_eq!(
            fragment("https://en.wikipedia.org/wiki/Cat#Anatomy").as_deref(),
            Some("Anatomy")
        );
        assert_eq!(fragment("https://en.wikipedia.org/wiki/Cat"), None);
    }

    #[test]
    fn fragment_from_relative_reference() {
        assert_eq!(fragment("/wiki/Cat#Anatomy").as_deref(), Some("Anatomy"));
        assert_eq!(fragment("/wiki/Cat"), None);
    }

    #[test]
    fn fragment_never_fails_on_garbage() {
        assert_eq!(fragment("://not a url"), None);
        assert_eq!(fragment("://not a url#frag").as_deref(), Some("frag"));
    }
}
