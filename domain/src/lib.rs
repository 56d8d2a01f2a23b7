//! Business logic for the Buddey booking wizard.
//!
//! This crate contains all state and rules behind the multi-step booking
//! flow: the slot-selection stores, calendar grid generation, the step
//! state machine, field validation and the submission boundary. The UI
//! only handles presentation concerns; everything here is UI-free and
//! testable natively.

pub mod availability;
pub mod booking;
pub mod calendar;
pub mod shared_slot_selection;
pub mod slot_selection;
pub mod validation;
pub mod wizard;

#[cfg(test)]
mod tests {
    use crate::availability::{AvailabilityChecker, AvailabilityTracker, StubAvailabilityChecker};
    use crate::booking::{BookingService, LocalBookingSubmitter};
    use crate::slot_selection::{SlotSelectionError, SlotSelectionService};
    use crate::validation;
    use crate::wizard::{NextOutcome, WizardService};
    use shared::{BookingConfig, BookingData, TimeSlotId};

    /// Walks the whole happy path across the services, the way the UI
    /// drives them: postal code, three slots (a fourth is rejected), job
    /// details, contact, submit, acknowledge.
    #[test]
    fn test_full_booking_flow() {
        let config = BookingConfig::default();
        let wizard = WizardService::new();
        let slots = SlotSelectionService::new(&config);
        let booking = BookingService::new();
        let tracker = AvailabilityTracker::new();

        // Step 1: postal code plus the simulated availability check
        booking.set_zipcode(&validation::format_zipcode("1234 ab"));
        let token = tracker.begin_check();
        let response = tracker
            .accept(token, StubAvailabilityChecker.check("1234 AB"))
            .unwrap();
        let step1 = validation::validate_step(1, &booking.data(), slots.len(), Some(&response));
        assert!(step1.is_valid);
        assert_eq!(wizard.try_next(step1.is_valid), NextOutcome::Advanced(2));

        // Step 2: slots on three distinct dates, a fourth is rejected
        slots.toggle_active_date("2025-03-10");
        slots.select(TimeSlotId::Morning).unwrap();
        assert!(slots.has_any_slot_for_date("2025-03-10"));
        slots.toggle_active_date("2025-03-11");
        slots.select(TimeSlotId::Afternoon).unwrap();
        slots.toggle_active_date("2025-03-12");
        slots.select(TimeSlotId::Evening).unwrap();

        slots.toggle_active_date("2025-03-13");
        assert_eq!(
            slots.select(TimeSlotId::Morning),
            Err(SlotSelectionError::CapacityExceeded(3))
        );
        assert_eq!(slots.len(), 3);

        booking.set_selected_slots(slots.to_booked_slots());
        let step2 = validation::validate_step(2, &booking.data(), slots.len(), None);
        assert_eq!(wizard.try_next(step2.is_valid), NextOutcome::Advanced(3));

        // Step 3: job details
        booking.set_project_type("Montage");
        booking.set_job_description("Kast ophangen in de woonkamer");
        booking.set_duration("90");
        let step3 = validation::validate_step(3, &booking.data(), slots.len(), None);
        assert_eq!(wizard.try_next(step3.is_valid), NextOutcome::Advanced(4));

        // Step 4: contact details and privacy, then submit
        booking.set_first_name("Jan");
        booking.set_last_name("Jansen");
        booking.set_email("jan@voorbeeld.nl");
        booking.set_address("Dorpsstraat 1");
        booking.set_city("Utrecht");
        booking.set_privacy_accepted(true);

        let step4 = validation::validate_step(4, &booking.data(), slots.len(), None);
        assert_eq!(wizard.try_next(step4.is_valid), NextOutcome::Submit);

        let response = booking.submit(&LocalBookingSubmitter).unwrap();
        assert!(!response.reference_id.is_empty());
        wizard.complete_submission();
        assert!(wizard.is_submitted());

        // Acknowledging the confirmation returns everything to the start
        wizard.reset();
        slots.clear();
        booking.reset();
        assert_eq!(wizard.current_step(), 1);
        assert!(!wizard.is_submitted());
        assert!(slots.is_empty());
        assert_eq!(booking.data(), BookingData::default());
    }
}
