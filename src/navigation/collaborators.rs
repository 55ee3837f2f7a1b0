//! Trait seams for the navigation gate's side effects.
//!
//! The gate itself never touches the platform. Launching a browser, showing
//! the exit interstitial, and recording analytics events are all owned by
//! the host application behind these traits, injected at construction.

/// Launches a URL outside the application.
///
/// When no handler on the device can open the URL, implementations must
/// surface a user-visible "cannot open link" notification instead of
/// failing silently or panicking; the gate never sees that condition.
pub trait ExternalBrowser {
    fn launch(&self, url: &str);
}

/// Presents the zero-rating exit interstitial for a URL.
///
/// The presenter fully owns the subsequent flow: it eventually launches the
/// URL or cancels, asynchronously, outside the gate's control.
pub trait InterstitialPresenter {
    fn present(&self, url: &str);
}

/// Fire-and-forget analytics sink for named events with optional payloads.
pub trait EventSink {
    fn event(&self, name: &str, payload: Option<&str>);
}
