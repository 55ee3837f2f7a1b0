//! External navigation gating against the zero-rating billing state.

use super::billing::BillingState;
use super::collaborators::{EventSink, ExternalBrowser, InterstitialPresenter};

/// Event name: external link followed while the carrier identified the
/// connection but no zero-rated wiki matched (rare diagnostic signal).
pub const EVENT_EXTERNAL_LINK_CARRIER: &str = "external_link_carrier";

/// Event name: external link launched automatically under zero-rating with
/// the interstitial preference disabled.
pub const EVENT_EXTERNAL_LINK_AUTO: &str = "external_link_auto";

/// What the gate did with an external link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// Launched immediately (not zero-rated).
    Launched,
    /// Launched immediately under zero-rating, auto event recorded.
    LaunchedAuto,
    /// Handed to the interstitial presenter; nothing launched yet.
    DeferredToInterstitial,
}

/// Decides how an external link leaves the application.
///
/// Stateless: every call is decided fresh against the [`BillingState`]
/// snapshot passed in. Collaborators are injected at construction.
pub struct NavigationGate<'a> {
    browser: &'a dyn ExternalBrowser,
    interstitial: &'a dyn InterstitialPresenter,
    events: &'a dyn EventSink,
}

impl<'a> NavigationGate<'a> {
    pub fn new(
        browser: &'a dyn ExternalBrowser,
        interstitial: &'a dyn InterstitialPresenter,
        events: &'a dyn EventSink,
    ) -> Self {
        Self {
            browser,
            interstitial,
            events,
        }
    }

    /// Routes an external link: straight to the browser, to the browser with
    /// an auto event, or to the exit interstitial.
    pub fn handle_external_link(&self, url: &str, billing: &BillingState) -> NavigationOutcome {
        if !billing.zero_rating_enabled {
            if billing.carrier_identified() {
                // Carrier sees this connection, but the current wiki is not
                // on its zero-rated whitelist.
                self.events.event(EVENT_EXTERNAL_LINK_CARRIER, Some(url));
            }
            tracing::debug!(url, "external link, not zero-rated, launching");
            self.browser.launch(url);
            return NavigationOutcome::Launched;
        }

        if !billing.interstitial_preference_enabled {
            // Launch first; the event never gates the launch.
            tracing::debug!(url, "external link, zero-rated, auto launch");
            self.browser.launch(url);
            self.events.event(EVENT_EXTERNAL_LINK_AUTO, Some(url));
            return NavigationOutcome::LaunchedAuto;
        }

        tracing::debug!(url, "external link, zero-rated, deferring to interstitial");
        self.interstitial.present(url);
        NavigationOutcome::DeferredToInterstitial
    }
}
