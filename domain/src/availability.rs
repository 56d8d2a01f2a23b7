//! Simulated service-availability check for a postal code.
//!
//! The checker itself is a collaborator behind a trait so a real lookup
//! can be injected later; the stub always reports available. The tracker
//! guards against the stale-callback race: each check gets a request
//! token, and only the newest token's response is accepted.

use log::debug;
use shared::AvailabilityResponse;
use std::sync::{Arc, Mutex};

/// Inline message shown when a postal code falls outside the service area.
pub const NO_SERVICE_MESSAGE: &str = "Sorry, we leveren momenteel geen service in dit gebied.";

pub trait AvailabilityChecker {
    fn check(&self, zipcode: &str) -> AvailabilityResponse;
}

/// Fixed stub standing in for the real availability service.
#[derive(Clone, Default)]
pub struct StubAvailabilityChecker;

impl AvailabilityChecker for StubAvailabilityChecker {
    fn check(&self, zipcode: &str) -> AvailabilityResponse {
        AvailabilityResponse {
            zipcode: zipcode.to_string(),
            available: true,
            message: None,
        }
    }
}

/// Token identifying one in-flight availability request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Discards responses from superseded availability requests.
#[derive(Clone, Default)]
pub struct AvailabilityTracker {
    latest: Arc<Mutex<u64>>,
}

impl AvailabilityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new request, superseding any in-flight one.
    pub fn begin_check(&self) -> RequestToken {
        let mut latest = self.latest.lock().unwrap();
        *latest += 1;
        RequestToken(*latest)
    }

    /// Accept a response only if its token is still the newest; stale
    /// responses return `None` and must be dropped by the caller.
    pub fn accept(
        &self,
        token: RequestToken,
        response: AvailabilityResponse,
    ) -> Option<AvailabilityResponse> {
        let latest = self.latest.lock().unwrap();
        if token.0 == *latest {
            Some(response)
        } else {
            debug!(
                "availability: dropping stale response for {} (token {} < {})",
                response.zipcode, token.0, *latest
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_always_available() {
        let checker = StubAvailabilityChecker;

        let response = checker.check("1234 AB");
        assert_eq!(response.zipcode, "1234 AB");
        assert!(response.available);
        assert!(response.message.is_none());
    }

    #[test]
    fn test_newest_response_is_accepted() {
        let tracker = AvailabilityTracker::new();
        let checker = StubAvailabilityChecker;

        let token = tracker.begin_check();
        let response = checker.check("1234 AB");
        assert!(tracker.accept(token, response).is_some());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let tracker = AvailabilityTracker::new();
        let checker = StubAvailabilityChecker;

        // The user typed "1234 AB", then edited to "5678 CD" before the
        // first check came back.
        let first = tracker.begin_check();
        let second = tracker.begin_check();

        assert!(tracker.accept(first, checker.check("1234 AB")).is_none());

        let accepted = tracker.accept(second, checker.check("5678 CD")).unwrap();
        assert_eq!(accepted.zipcode, "5678 CD");
    }

    #[test]
    fn test_each_check_supersedes_the_previous() {
        let tracker = AvailabilityTracker::new();
        let checker = StubAvailabilityChecker;

        let tokens: Vec<RequestToken> = (0..5).map(|_| tracker.begin_check()).collect();

        for token in &tokens[..4] {
            assert!(tracker.accept(*token, checker.check("1234 AB")).is_none());
        }
        assert!(tracker.accept(tokens[4], checker.check("1234 AB")).is_some());
    }
}
