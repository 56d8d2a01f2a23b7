use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed time-of-day ranges a customer can propose for an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlotId {
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlotId {
    /// All slot types in display order (morning first).
    pub const ALL: [TimeSlotId; 3] = [
        TimeSlotId::Morning,
        TimeSlotId::Afternoon,
        TimeSlotId::Evening,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlotId::Morning => "morning",
            TimeSlotId::Afternoon => "afternoon",
            TimeSlotId::Evening => "evening",
        }
    }

    /// Dutch display label shown next to the checkbox.
    pub fn label(&self) -> &'static str {
        match self {
            TimeSlotId::Morning => "Ochtend",
            TimeSlotId::Afternoon => "Middag",
            TimeSlotId::Evening => "Avond",
        }
    }

    /// Time range shown in the slot summary, e.g. "08:00 - 12:00".
    pub fn display_time(&self) -> &'static str {
        match self {
            TimeSlotId::Morning => "08:00 - 12:00",
            TimeSlotId::Afternoon => "12:00 - 18:00",
            TimeSlotId::Evening => "18:00 - 21:00",
        }
    }

    pub fn parse(value: &str) -> Option<TimeSlotId> {
        match value {
            "morning" => Some(TimeSlotId::Morning),
            "afternoon" => Some(TimeSlotId::Afternoon),
            "evening" => Some(TimeSlotId::Evening),
            _ => None,
        }
    }

    /// Snapshot of this slot type in the shape stored on booking records.
    pub fn info(&self) -> TimeSlotInfo {
        TimeSlotInfo {
            id: *self,
            label: self.label().to_string(),
            time: self.display_time().to_string(),
        }
    }
}

/// Display data for a time-slot type as embedded in booking records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlotInfo {
    pub id: TimeSlotId,
    pub label: String,
    pub time: String,
}

/// A single date + time-slot preference chosen by the user.
///
/// Slot key format: "slot::<YYYY-MM-DD>::<morning|afternoon|evening>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedSlot {
    pub key: String,
    /// ISO date (YYYY-MM-DD) the slot applies to
    pub date: String,
    pub time_slot: TimeSlotInfo,
}

impl SelectedSlot {
    /// Generate the composite key for a (date, slot) pair.
    pub fn generate_key(date: &str, time_slot: TimeSlotId) -> String {
        format!("slot::{}::{}", date, time_slot.as_str())
    }

    /// Parse a composite key back into its (date, slot) components.
    pub fn parse_key(key: &str) -> Result<(String, TimeSlotId), SlotKeyError> {
        let parts: Vec<&str> = key.split("::").collect();
        if parts.len() != 3 || parts[0] != "slot" {
            return Err(SlotKeyError::InvalidFormat);
        }

        let date = parts[1];
        if date.len() != 10 || date.bytes().filter(|b| *b == b'-').count() != 2 {
            return Err(SlotKeyError::InvalidDate);
        }

        let time_slot = TimeSlotId::parse(parts[2]).ok_or(SlotKeyError::InvalidTimeSlot)?;

        Ok((date.to_string(), time_slot))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SlotKeyError {
    InvalidFormat,
    InvalidDate,
    InvalidTimeSlot,
}

impl fmt::Display for SlotKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotKeyError::InvalidFormat => write!(f, "Invalid slot key format"),
            SlotKeyError::InvalidDate => write!(f, "Invalid date in slot key"),
            SlotKeyError::InvalidTimeSlot => write!(f, "Invalid time slot in slot key"),
        }
    }
}

impl std::error::Error for SlotKeyError {}

/// Date-serialized slot snapshot as stored on the booking record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookedSlot {
    /// ISO date (YYYY-MM-DD)
    pub date: String,
    pub time_slot: TimeSlotInfo,
}

/// The accumulated user input destined for submission.
///
/// Fields populate as the user progresses through the wizard steps; the
/// record is reset to defaults after an acknowledged submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingData {
    pub zipcode: String,
    pub selected_slots: Vec<BookedSlot>,
    pub project_type: String,
    pub job_description: String,
    /// Estimated duration in minutes, as the raw select value (e.g. "90")
    pub duration: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    /// Data-URL encoded photos in upload-completion order
    pub photos: Vec<String>,
    pub privacy_accepted: bool,
}

/// Type of calendar day for explicit rendering logic
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CalendarDayType {
    /// Empty padding cell before the start of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
}

/// A single cell in the month grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    /// Day number within the month; 0 for padding cells
    pub day: u32,
    /// ISO date (YYYY-MM-DD); empty for padding cells
    pub iso_date: String,
    pub day_type: CalendarDayType,
    /// Past date, or Sunday in the single-active-date variant
    pub is_disabled: bool,
    /// Cell equals a currently selected date
    pub is_selected: bool,
    /// The store holds at least one slot on this date
    pub has_slot: bool,
}

impl CalendarDay {
    pub fn is_empty(&self) -> bool {
        self.day_type == CalendarDayType::PaddingBefore
    }
}

/// A rendered calendar month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: u32,
    pub days: Vec<CalendarDay>,
    /// Monday-first count of leading padding cells, always 0..=6
    pub first_day_of_week: u32,
}

/// Current focus date for calendar navigation (month/year only).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarFocusDate {
    pub month: u32,
    pub year: u32,
}

/// Result of validating a single wizard step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StepValidation {
    pub is_valid: bool,
    pub errors: Vec<BookingValidationError>,
}

impl StepValidation {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn invalid(errors: Vec<BookingValidationError>) -> Self {
        Self {
            is_valid: false,
            errors,
        }
    }
}

/// Specific validation errors raised by the wizard step gates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum BookingValidationError {
    InvalidPostalCode,
    ServiceUnavailable,
    NoSlotsSelected,
    EmptyProjectType,
    EmptyJobDescription,
    EmptyDuration,
    MissingRequiredField(String),
    InvalidEmail,
    PrivacyNotAccepted,
}

impl BookingValidationError {
    /// User-facing Dutch message for inline display.
    pub fn message(&self) -> String {
        match self {
            BookingValidationError::InvalidPostalCode => {
                "Voer een geldige postcode in (bijv. 1234 AB)".to_string()
            }
            BookingValidationError::ServiceUnavailable => {
                "Sorry, we leveren momenteel geen service in dit gebied.".to_string()
            }
            BookingValidationError::NoSlotsSelected => {
                "Selecteer minimaal één tijdslot".to_string()
            }
            BookingValidationError::EmptyProjectType => "Kies een type klus".to_string(),
            BookingValidationError::EmptyJobDescription => "Beschrijf de klus".to_string(),
            BookingValidationError::EmptyDuration => "Kies aantal uur".to_string(),
            BookingValidationError::MissingRequiredField(field) => {
                format!("Vul het verplichte veld '{}' in", field)
            }
            BookingValidationError::InvalidEmail => {
                "Voer een geldig e-mailadres in".to_string()
            }
            BookingValidationError::PrivacyNotAccepted => {
                "Accepteer het privacybeleid om verder te gaan".to_string()
            }
        }
    }
}

/// Outcome of the (simulated) service-availability check for a postal code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AvailabilityResponse {
    pub zipcode: String,
    pub available: bool,
    /// Set when unavailable; shown inline under the postal-code field
    pub message: Option<String>,
}

/// Acknowledgment returned by the submission boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmitBookingResponse {
    pub reference_id: String,
    pub success_message: String,
}

/// A fixed estimated-duration choice for the job-details step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationOption {
    /// Duration in minutes
    pub value: u32,
    pub label: String,
}

/// The fixed duration choices, 30 minutes up to 4 hours.
pub fn duration_options() -> Vec<DurationOption> {
    [
        (30, "30 minuten"),
        (60, "1 uur"),
        (90, "1,5 uur"),
        (120, "2 uur"),
        (150, "2,5 uur"),
        (180, "3 uur"),
        (210, "3,5 uur"),
        (240, "4 uur"),
    ]
    .into_iter()
    .map(|(value, label)| DurationOption {
        value,
        label: label.to_string(),
    })
    .collect()
}

/// Which selection-cardinality policy the date step uses.
///
/// The two calendar variants share the same grid generation but must stay
/// distinct policies; see the slot-selection services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotPolicy {
    /// One active date at a time, slots attached per individual date
    PerDate,
    /// A single global set of checked slots applied to every selected date
    SharedSet,
}

/// Configuration for the booking wizard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Hard cap on stored slot selections
    pub max_slot_selections: usize,
    /// Simulated availability-check latency
    pub availability_delay_ms: u32,
    pub slot_policy: SlotPolicy,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            max_slot_selections: 3,
            availability_delay_ms: 500,
            slot_policy: SlotPolicy::PerDate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_slot_key() {
        assert_eq!(
            SelectedSlot::generate_key("2025-03-10", TimeSlotId::Morning),
            "slot::2025-03-10::morning"
        );
        assert_eq!(
            SelectedSlot::generate_key("2025-12-01", TimeSlotId::Evening),
            "slot::2025-12-01::evening"
        );
    }

    #[test]
    fn test_parse_slot_key() {
        let (date, slot) = SelectedSlot::parse_key("slot::2025-03-10::morning").unwrap();
        assert_eq!(date, "2025-03-10");
        assert_eq!(slot, TimeSlotId::Morning);

        let (date, slot) = SelectedSlot::parse_key("slot::2025-06-21::afternoon").unwrap();
        assert_eq!(date, "2025-06-21");
        assert_eq!(slot, TimeSlotId::Afternoon);

        // Wrong prefix or arity
        assert!(SelectedSlot::parse_key("2025-03-10::morning").is_err());
        assert!(SelectedSlot::parse_key("slot::2025-03-10").is_err());
        assert!(SelectedSlot::parse_key("booking::2025-03-10::morning").is_err());

        // Malformed date component
        assert_eq!(
            SelectedSlot::parse_key("slot::20250310::morning"),
            Err(SlotKeyError::InvalidDate)
        );

        // Unknown slot id
        assert_eq!(
            SelectedSlot::parse_key("slot::2025-03-10::night"),
            Err(SlotKeyError::InvalidTimeSlot)
        );
    }

    #[test]
    fn test_slot_key_round_trip() {
        for slot in TimeSlotId::ALL {
            let key = SelectedSlot::generate_key("2025-08-07", slot);
            let (date, parsed) = SelectedSlot::parse_key(&key).unwrap();
            assert_eq!(date, "2025-08-07");
            assert_eq!(parsed, slot);
        }
    }

    #[test]
    fn test_time_slot_labels() {
        assert_eq!(TimeSlotId::Morning.label(), "Ochtend");
        assert_eq!(TimeSlotId::Afternoon.label(), "Middag");
        assert_eq!(TimeSlotId::Evening.label(), "Avond");

        assert_eq!(TimeSlotId::Morning.display_time(), "08:00 - 12:00");
        assert_eq!(TimeSlotId::Evening.display_time(), "18:00 - 21:00");
    }

    #[test]
    fn test_time_slot_parse() {
        assert_eq!(TimeSlotId::parse("morning"), Some(TimeSlotId::Morning));
        assert_eq!(TimeSlotId::parse("afternoon"), Some(TimeSlotId::Afternoon));
        assert_eq!(TimeSlotId::parse("evening"), Some(TimeSlotId::Evening));
        assert_eq!(TimeSlotId::parse("night"), None);
        assert_eq!(TimeSlotId::parse(""), None);
    }

    #[test]
    fn test_time_slot_serde_lowercase() {
        let json = serde_json::to_string(&TimeSlotId::Morning).unwrap();
        assert_eq!(json, "\"morning\"");

        let parsed: TimeSlotId = serde_json::from_str("\"evening\"").unwrap();
        assert_eq!(parsed, TimeSlotId::Evening);
    }

    #[test]
    fn test_booking_data_default_is_empty() {
        let data = BookingData::default();
        assert!(data.zipcode.is_empty());
        assert!(data.selected_slots.is_empty());
        assert!(data.photos.is_empty());
        assert!(!data.privacy_accepted);
    }

    #[test]
    fn test_duration_options_table() {
        let options = duration_options();
        assert_eq!(options.len(), 8);
        assert_eq!(options[0].value, 30);
        assert_eq!(options[0].label, "30 minuten");
        assert_eq!(options[7].value, 240);
        assert_eq!(options[7].label, "4 uur");

        // Strictly increasing half-hour steps
        for pair in options.windows(2) {
            assert_eq!(pair[1].value - pair[0].value, 30);
        }
    }

    #[test]
    fn test_booking_config_default() {
        let config = BookingConfig::default();
        assert_eq!(config.max_slot_selections, 3);
        assert_eq!(config.availability_delay_ms, 500);
        assert_eq!(config.slot_policy, SlotPolicy::PerDate);
    }
}
