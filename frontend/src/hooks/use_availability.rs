use buddey_domain::availability::{AvailabilityChecker, AvailabilityTracker, StubAvailabilityChecker};
use gloo::timers::future::TimeoutFuture;
use shared::AvailabilityResponse;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub struct UseAvailabilityResult {
    /// Latest accepted response, if any check has completed
    pub response: Option<AvailabilityResponse>,
    /// A check is in flight
    pub checking: bool,
    /// Start a (new) check for the given postal code
    pub check: Callback<String>,
    /// Drop any response and invalidate in-flight checks
    pub reset: Callback<()>,
}

/// Runs the simulated availability check with the configured latency.
///
/// Every call supersedes the previous one through the tracker's request
/// token, so a stale timer firing after the user edited the postal code
/// again can never overwrite newer state.
#[hook]
pub fn use_availability(tracker: AvailabilityTracker, delay_ms: u32) -> UseAvailabilityResult {
    let response = use_state(|| Option::<AvailabilityResponse>::None);
    let checking = use_state(|| false);

    let check = {
        let response = response.clone();
        let checking = checking.clone();
        let tracker = tracker.clone();

        Callback::from(move |zipcode: String| {
            let response = response.clone();
            let checking = checking.clone();
            let tracker = tracker.clone();
            let token = tracker.begin_check();
            checking.set(true);

            spawn_local(async move {
                TimeoutFuture::new(delay_ms).await;

                let result = StubAvailabilityChecker.check(&zipcode);
                if let Some(result) = tracker.accept(token, result) {
                    response.set(Some(result));
                    checking.set(false);
                }
                // Stale responses are dropped; the newer request owns the state
            });
        })
    };

    let reset = {
        let response = response.clone();
        let checking = checking.clone();

        Callback::from(move |_| {
            // Superseding the token invalidates any in-flight check
            tracker.begin_check();
            response.set(None);
            checking.set(false);
        })
    };

    UseAvailabilityResult {
        response: (*response).clone(),
        checking: *checking,
        check,
        reset,
    }
}
