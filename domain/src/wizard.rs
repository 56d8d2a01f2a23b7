//! Step state machine for the booking wizard.
//!
//! Steps run 1..=4: postal code, date/slots, job details, contact.
//! Forward movement is gated by the active step's validation; backward
//! movement is free down to step 1, and jumping is only allowed onto a
//! completed step. A step counts as completed exactly when it lies
//! before the current one, so stepping back also rewinds completion.

use log::info;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub const TOTAL_STEPS: u32 = 4;

/// Result of a forward-navigation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum NextOutcome {
    /// The active step failed validation; nothing changed
    Blocked,
    /// Moved to the given step
    Advanced(u32),
    /// The final step validated; the caller should submit the booking
    Submit,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WizardError {
    #[error("ongeldige stap: {0}")]
    InvalidStep(u32),
}

struct WizardState {
    current_step: u32,
    submitted: bool,
}

impl WizardState {
    fn initial() -> Self {
        Self {
            current_step: 1,
            submitted: false,
        }
    }
}

/// Tracks the current wizard step and the terminal submitted state.
#[derive(Clone)]
pub struct WizardService {
    state: Arc<Mutex<WizardState>>,
    total_steps: u32,
}

impl WizardService {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(WizardState::initial())),
            total_steps: TOTAL_STEPS,
        }
    }

    pub fn current_step(&self) -> u32 {
        self.state.lock().unwrap().current_step
    }

    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    pub fn is_submitted(&self) -> bool {
        self.state.lock().unwrap().submitted
    }

    /// A step is completed when the wizard has moved past it.
    pub fn is_completed(&self, step: u32) -> bool {
        step >= 1 && step < self.current_step()
    }

    /// Attempt to advance past the current step. The caller evaluates the
    /// step's validation predicate and passes the outcome.
    pub fn try_next(&self, step_valid: bool) -> NextOutcome {
        if !step_valid {
            return NextOutcome::Blocked;
        }

        let mut state = self.state.lock().unwrap();
        if state.current_step < self.total_steps {
            state.current_step += 1;
            info!("wizard: advanced to step {}", state.current_step);
            NextOutcome::Advanced(state.current_step)
        } else {
            info!("wizard: final step validated, ready to submit");
            NextOutcome::Submit
        }
    }

    /// Step back one panel; no-op on step 1.
    pub fn back(&self) -> u32 {
        let mut state = self.state.lock().unwrap();
        if state.current_step > 1 {
            state.current_step -= 1;
        }
        state.current_step
    }

    /// Jump backward onto a completed step, as via the progress indicator.
    pub fn jump_to(&self, step: u32) -> Result<u32, WizardError> {
        if step < 1 || !self.is_completed(step) {
            return Err(WizardError::InvalidStep(step));
        }

        self.state.lock().unwrap().current_step = step;
        Ok(step)
    }

    /// Enter the terminal submitted pseudo-state (confirmation overlay
    /// visible). Leaving it goes through `reset`.
    pub fn complete_submission(&self) {
        let mut state = self.state.lock().unwrap();
        state.submitted = true;
        info!("wizard: booking submitted");
    }

    /// Return deterministically to the initial state: step 1, nothing
    /// completed, not submitted.
    pub fn reset(&self) {
        *self.state.lock().unwrap() = WizardState::initial();
        info!("wizard: reset to initial state");
    }

    /// Progress-bar fill, 0.0 at step 1 up to 100.0 at the final step.
    pub fn progress_percent(&self) -> f64 {
        let current = self.current_step();
        ((current - 1) as f64 / (self.total_steps - 1) as f64) * 100.0
    }
}

impl Default for WizardService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_step_one() {
        let wizard = WizardService::new();
        assert_eq!(wizard.current_step(), 1);
        assert!(!wizard.is_submitted());
        assert_eq!(wizard.progress_percent(), 0.0);
    }

    #[test]
    fn test_next_blocked_when_invalid() {
        let wizard = WizardService::new();

        assert_eq!(wizard.try_next(false), NextOutcome::Blocked);
        assert_eq!(wizard.current_step(), 1);
        assert!(!wizard.is_completed(1));
    }

    #[test]
    fn test_next_advances_and_marks_completed() {
        let wizard = WizardService::new();

        assert_eq!(wizard.try_next(true), NextOutcome::Advanced(2));
        assert!(wizard.is_completed(1));
        assert_eq!(wizard.try_next(true), NextOutcome::Advanced(3));
        assert_eq!(wizard.try_next(true), NextOutcome::Advanced(4));
        assert_eq!(wizard.progress_percent(), 100.0);
    }

    #[test]
    fn test_final_step_signals_submit() {
        let wizard = WizardService::new();
        for _ in 0..3 {
            wizard.try_next(true);
        }
        assert_eq!(wizard.current_step(), 4);

        assert_eq!(wizard.try_next(true), NextOutcome::Submit);
        // Submit does not move the step; the overlay takes over
        assert_eq!(wizard.current_step(), 4);
    }

    #[test]
    fn test_back_floors_at_one() {
        let wizard = WizardService::new();
        wizard.try_next(true);
        wizard.try_next(true);

        assert_eq!(wizard.back(), 2);
        assert_eq!(wizard.back(), 1);
        assert_eq!(wizard.back(), 1);
    }

    #[test]
    fn test_back_rewinds_completion() {
        let wizard = WizardService::new();
        wizard.try_next(true);
        wizard.try_next(true);
        assert!(wizard.is_completed(2));

        wizard.back();
        assert!(!wizard.is_completed(2));
        assert!(wizard.is_completed(1));
    }

    #[test]
    fn test_jump_only_backward_onto_completed_steps() {
        let wizard = WizardService::new();
        wizard.try_next(true);
        wizard.try_next(true);
        assert_eq!(wizard.current_step(), 3);

        assert_eq!(wizard.jump_to(1), Ok(1));
        assert_eq!(wizard.current_step(), 1);

        // Forward jumps are rejected, including onto the current step
        assert_eq!(wizard.jump_to(1), Err(WizardError::InvalidStep(1)));
        assert_eq!(wizard.jump_to(2), Err(WizardError::InvalidStep(2)));
        assert_eq!(wizard.jump_to(0), Err(WizardError::InvalidStep(0)));
        assert_eq!(wizard.jump_to(9), Err(WizardError::InvalidStep(9)));
    }

    #[test]
    fn test_submission_and_reset() {
        let wizard = WizardService::new();
        for _ in 0..3 {
            wizard.try_next(true);
        }
        assert_eq!(wizard.try_next(true), NextOutcome::Submit);
        wizard.complete_submission();
        assert!(wizard.is_submitted());

        wizard.reset();
        assert_eq!(wizard.current_step(), 1);
        assert!(!wizard.is_submitted());
        for step in 1..=TOTAL_STEPS {
            assert!(!wizard.is_completed(step));
        }
    }

    #[test]
    fn test_progress_percent() {
        let wizard = WizardService::new();
        assert_eq!(wizard.progress_percent(), 0.0);
        wizard.try_next(true);
        assert!((wizard.progress_percent() - 100.0 / 3.0).abs() < 1e-9);
        wizard.try_next(true);
        assert!((wizard.progress_percent() - 200.0 / 3.0).abs() < 1e-9);
    }
}
