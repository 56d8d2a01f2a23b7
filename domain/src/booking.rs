//! The booking record and the submission boundary.
//!
//! `BookingService` mirrors validated form values into the in-memory
//! `BookingData` record as the user progresses. Submission goes through
//! the injected `BookingSubmitter` collaborator; no real endpoint exists,
//! so the local submitter acknowledges immediately.

use log::info;
use shared::{BookedSlot, BookingData, SubmitBookingResponse};
use std::sync::{Arc, Mutex};
use thiserror::Error;
use uuid::Uuid;

/// Confirmation copy shown in the overlay after submission.
pub const CONFIRMATION_MESSAGE: &str =
    "We hebben je aanvraag ontvangen en nemen zo spoedig mogelijk contact met je op.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("Sorry, we leveren momenteel geen service in dit gebied.")]
    ServiceUnavailable,
    #[error("versturen mislukt: {0}")]
    Failed(String),
}

/// Submission endpoint as an injected collaborator.
pub trait BookingSubmitter {
    fn submit(&self, booking: &BookingData) -> Result<SubmitBookingResponse, SubmitError>;
}

/// Stand-in submitter: acknowledges every booking with a fresh reference.
#[derive(Clone, Default)]
pub struct LocalBookingSubmitter;

impl BookingSubmitter for LocalBookingSubmitter {
    fn submit(&self, booking: &BookingData) -> Result<SubmitBookingResponse, SubmitError> {
        info!(
            "booking: submitting request for {} with {} slot(s)",
            booking.zipcode,
            booking.selected_slots.len()
        );

        Ok(SubmitBookingResponse {
            reference_id: Uuid::new_v4().to_string(),
            success_message: CONFIRMATION_MESSAGE.to_string(),
        })
    }
}

/// Collects validated field values into the booking record.
#[derive(Clone, Default)]
pub struct BookingService {
    data: Arc<Mutex<BookingData>>,
}

impl BookingService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(&self) -> BookingData {
        self.data.lock().unwrap().clone()
    }

    pub fn set_zipcode(&self, zipcode: &str) {
        self.data.lock().unwrap().zipcode = zipcode.to_string();
    }

    pub fn set_selected_slots(&self, slots: Vec<BookedSlot>) {
        self.data.lock().unwrap().selected_slots = slots;
    }

    pub fn set_project_type(&self, value: &str) {
        self.data.lock().unwrap().project_type = value.to_string();
    }

    pub fn set_job_description(&self, value: &str) {
        self.data.lock().unwrap().job_description = value.to_string();
    }

    pub fn set_duration(&self, value: &str) {
        self.data.lock().unwrap().duration = value.to_string();
    }

    pub fn set_first_name(&self, value: &str) {
        self.data.lock().unwrap().first_name = value.to_string();
    }

    pub fn set_last_name(&self, value: &str) {
        self.data.lock().unwrap().last_name = value.to_string();
    }

    pub fn set_email(&self, value: &str) {
        self.data.lock().unwrap().email = value.to_string();
    }

    pub fn set_address(&self, value: &str) {
        self.data.lock().unwrap().address = value.to_string();
    }

    pub fn set_city(&self, value: &str) {
        self.data.lock().unwrap().city = value.to_string();
    }

    pub fn set_privacy_accepted(&self, accepted: bool) {
        self.data.lock().unwrap().privacy_accepted = accepted;
    }

    /// Append a decoded photo; order follows read completion.
    pub fn add_photo(&self, data_url: String) {
        self.data.lock().unwrap().photos.push(data_url);
    }

    /// Remove a photo by exact decoded-value equality. Returns whether
    /// anything was removed.
    pub fn remove_photo(&self, data_url: &str) -> bool {
        let mut data = self.data.lock().unwrap();
        let before = data.photos.len();
        data.photos.retain(|photo| photo != data_url);
        data.photos.len() != before
    }

    pub fn photos(&self) -> Vec<String> {
        self.data.lock().unwrap().photos.clone()
    }

    /// Discard the record, restoring every field to its default.
    pub fn reset(&self) {
        *self.data.lock().unwrap() = BookingData::default();
        info!("booking: record reset");
    }

    /// Hand the assembled record to the submission collaborator.
    pub fn submit(
        &self,
        submitter: &dyn BookingSubmitter,
    ) -> Result<SubmitBookingResponse, SubmitError> {
        let data = self.data();
        submitter.submit(&data)
    }
}
