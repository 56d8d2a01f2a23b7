//! The per-date slot store behind the primary wizard calendar.
//!
//! One date is active at a time; checking a time-slot checkbox attaches
//! that slot to the active date. The store enforces the selection cap and
//! set semantics over the composite (date, slot) key.

use log::{debug, info};
use shared::{BookedSlot, BookingConfig, SelectedSlot, TimeSlotId};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors raised by slot-selection interactions. The messages are the
/// user-facing Dutch alerts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlotSelectionError {
    #[error("U kunt maximaal {0} tijdslots selecteren")]
    CapacityExceeded(usize),
    #[error("Selecteer eerst een datum")]
    NoActiveDate,
}

#[derive(Default)]
struct SlotState {
    /// The calendar day slot checkboxes currently apply to
    active_date: Option<String>,
    /// Composite slot key -> selection record
    slots: BTreeMap<String, SelectedSlot>,
}

/// In-memory store of the user's date/time-slot preferences.
#[derive(Clone)]
pub struct SlotSelectionService {
    state: Arc<Mutex<SlotState>>,
    max_selections: usize,
}

impl SlotSelectionService {
    pub fn new(config: &BookingConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(SlotState::default())),
            max_selections: config.max_slot_selections,
        }
    }

    /// The currently active date, if any.
    pub fn active_date(&self) -> Option<String> {
        self.state.lock().unwrap().active_date.clone()
    }

    /// Toggle the active date: clicking the active date deselects it,
    /// clicking another date moves the highlight there. Callers only pass
    /// dates of enabled calendar cells.
    pub fn toggle_active_date(&self, date: &str) -> Option<String> {
        let mut state = self.state.lock().unwrap();

        if state.active_date.as_deref() == Some(date) {
            state.active_date = None;
        } else {
            state.active_date = Some(date.to_string());
        }

        debug!("slots: active date is now {:?}", state.active_date);
        state.active_date.clone()
    }

    /// Attach a time slot to the active date.
    ///
    /// Selecting an already-stored (date, slot) pair is a no-op that
    /// returns the existing record; the cap only applies to new entries.
    pub fn select(&self, time_slot: TimeSlotId) -> Result<SelectedSlot, SlotSelectionError> {
        let mut state = self.state.lock().unwrap();

        let date = state
            .active_date
            .clone()
            .ok_or(SlotSelectionError::NoActiveDate)?;
        let key = SelectedSlot::generate_key(&date, time_slot);

        if let Some(existing) = state.slots.get(&key) {
            return Ok(existing.clone());
        }

        if state.slots.len() >= self.max_selections {
            return Err(SlotSelectionError::CapacityExceeded(self.max_selections));
        }

        let selected = SelectedSlot {
            key: key.clone(),
            date,
            time_slot: time_slot.info(),
        };
        state.slots.insert(key, selected.clone());

        info!(
            "slots: selected {} ({}/{})",
            selected.key,
            state.slots.len(),
            self.max_selections
        );
        Ok(selected)
    }

    /// Remove a selection by its composite key; absent keys are ignored.
    pub fn deselect(&self, key: &str) -> Option<SelectedSlot> {
        let removed = self.state.lock().unwrap().slots.remove(key);
        if let Some(slot) = &removed {
            info!("slots: removed {}", slot.key);
        }
        removed
    }

    /// Whether the store holds any slot for the given date.
    pub fn has_any_slot_for_date(&self, date: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .slots
            .values()
            .any(|slot| slot.date == date)
    }

    /// Checkbox state for a (date, slot) pair.
    pub fn is_selected(&self, date: &str, time_slot: TimeSlotId) -> bool {
        let key = SelectedSlot::generate_key(date, time_slot);
        self.state.lock().unwrap().slots.contains_key(&key)
    }

    /// All selections sorted ascending by date, then slot order within a
    /// date, regardless of insertion order.
    pub fn snapshot(&self) -> Vec<SelectedSlot> {
        let mut slots: Vec<SelectedSlot> =
            self.state.lock().unwrap().slots.values().cloned().collect();
        slots.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then(a.time_slot.id.cmp(&b.time_slot.id))
        });
        slots
    }

    /// The dates that carry at least one selection, for calendar marking.
    pub fn dates_with_slots(&self) -> BTreeSet<String> {
        self.state
            .lock()
            .unwrap()
            .slots
            .values()
            .map(|slot| slot.date.clone())
            .collect()
    }

    /// Date-serialized snapshot for the booking record.
    pub fn to_booked_slots(&self) -> Vec<BookedSlot> {
        self.snapshot()
            .into_iter()
            .map(|slot| BookedSlot {
                date: slot.date,
                time_slot: slot.time_slot,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every selection and the active date.
    pub fn clear(&self) {
        let mut state = self.state.lock().unwrap();
        state.slots.clear();
        state.active_date = None;
    }
}
