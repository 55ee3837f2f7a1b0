//! Zero-rating billing state snapshot.

/// Read-only snapshot of the process-wide zero-rating billing state.
///
/// Owned and mutated elsewhere (updated from carrier headers on network
/// responses); the gate only ever reads it. Callers take a snapshot per
/// decision, and that snapshot may already be stale by the time a launch
/// completes. No locking is done here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillingState {
    /// True while the current connection is zero-rated on a whitelisted wiki.
    pub zero_rating_enabled: bool,
    /// Carrier identifier reported for this connection, if any.
    pub carrier_identifier: Option<String>,
    /// User preference: show the exit interstitial before leaving a
    /// zero-rated context.
    pub interstitial_preference_enabled: bool,
}

impl BillingState {
    /// True when the carrier identified the connection with a non-empty id.
    pub fn carrier_identified(&self) -> bool {
        self.carrier_identifier
            .as_deref()
            .map_or(false, |id| !id.is_empty())
    }
}
