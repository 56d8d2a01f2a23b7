//! Field and per-step validation predicates.

use once_cell::sync::Lazy;
use regex::Regex;
use shared::{AvailabilityResponse, BookingData, BookingValidationError, StepValidation};

static DUTCH_ZIPCODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]{3}\s?[A-Za-z]{2}$").unwrap());

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Whether the input is a valid Dutch postal code (e.g. "1234 AB").
pub fn is_valid_zipcode(zipcode: &str) -> bool {
    DUTCH_ZIPCODE_RE.is_match(zipcode)
}

/// Normalize postal-code input: uppercase, and insert the space once the
/// four digits are typed.
pub fn format_zipcode(input: &str) -> String {
    let mut value = input.to_uppercase();
    if value.len() == 4 && !value.contains(' ') {
        value.push(' ');
    }
    value
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Evaluate the validation predicate for a wizard step.
///
/// `slot_count` is the size of the active slot store; `availability` is
/// the latest accepted availability response, if any. A pending check
/// (no response yet) leaves step 1 invalid without an error to display.
pub fn validate_step(
    step: u32,
    booking: &BookingData,
    slot_count: usize,
    availability: Option<&AvailabilityResponse>,
) -> StepValidation {
    match step {
        1 => validate_zipcode_step(booking, availability),
        2 => {
            if slot_count > 0 {
                StepValidation::valid()
            } else {
                StepValidation::invalid(vec![BookingValidationError::NoSlotsSelected])
            }
        }
        3 => validate_job_details_step(booking),
        4 => validate_contact_step(booking),
        _ => StepValidation::invalid(Vec::new()),
    }
}

fn validate_zipcode_step(
    booking: &BookingData,
    availability: Option<&AvailabilityResponse>,
) -> StepValidation {
    if !is_valid_zipcode(&booking.zipcode) {
        return StepValidation::invalid(vec![BookingValidationError::InvalidPostalCode]);
    }

    match availability {
        Some(response) if response.zipcode == booking.zipcode => {
            if response.available {
                StepValidation::valid()
            } else {
                StepValidation::invalid(vec![BookingValidationError::ServiceUnavailable])
            }
        }
        // No (matching) response yet: the check is still in flight
        _ => StepValidation::invalid(Vec::new()),
    }
}

fn validate_job_details_step(booking: &BookingData) -> StepValidation {
    let mut errors = Vec::new();

    if booking.project_type.trim().is_empty() {
        errors.push(BookingValidationError::EmptyProjectType);
    }
    if booking.job_description.trim().is_empty() {
        errors.push(BookingValidationError::EmptyJobDescription);
    }
    if booking.duration.trim().is_empty() {
        errors.push(BookingValidationError::EmptyDuration);
    }

    if errors.is_empty() {
        StepValidation::valid()
    } else {
        StepValidation::invalid(errors)
    }
}

fn validate_contact_step(booking: &BookingData) -> StepValidation {
    let mut errors = Vec::new();

    let required = [
        ("voornaam", &booking.first_name),
        ("achternaam", &booking.last_name),
        ("e-mailadres", &booking.email),
        ("adres", &booking.address),
        ("woonplaats", &booking.city),
    ];
    for (name, value) in required {
        if value.trim().is_empty() {
            errors.push(BookingValidationError::MissingRequiredField(name.to_string()));
        }
    }

    if !booking.email.trim().is_empty() && !is_valid_email(&booking.email) {
        errors.push(BookingValidationError::InvalidEmail);
    }

    if !booking.privacy_accepted {
        errors.push(BookingValidationError::PrivacyNotAccepted);
    }

    if errors.is_empty() {
        StepValidation::valid()
    } else {
        StepValidation::invalid(errors)
    }
}
