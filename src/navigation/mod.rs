//! External navigation gating.
//!
//! When a link must leave the application, the gate reads a snapshot of the
//! zero-rating billing state and either launches the external browser
//! directly, launches and records an automatic-launch event, or defers to
//! the exit interstitial, which owns the rest of the flow.

mod billing;
mod collaborators;
mod gate;

pub use billing::BillingState;
pub use collaborators::{EventSink, ExternalBrowser, InterstitialPresenter};
pub use gate::{
    NavigationGate, NavigationOutcome, EVENT_EXTERNAL_LINK_AUTO, EVENT_EXTERNAL_LINK_CARRIER,
};
