//! The second calendar variant: multiple selected dates sharing one
//! global set of checked time slots.
//!
//! Unlike the per-date store, a checked slot here applies to every
//! selected date uniformly. The divergence between the two policies is
//! deliberate and must not be merged; see DESIGN.md.

use crate::slot_selection::SlotSelectionError;
use log::debug;
use shared::{BookedSlot, BookingConfig, SelectedSlot, TimeSlotId};
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct SharedSlotState {
    dates: BTreeSet<String>,
    slots: BTreeSet<TimeSlotId>,
}

/// Slot store applying a single slot set across all selected dates.
#[derive(Clone)]
pub struct SharedSlotSelectionService {
    state: Arc<Mutex<SharedSlotState>>,
    max_dates: usize,
}

impl SharedSlotSelectionService {
    pub fn new(config: &BookingConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(SharedSlotState::default())),
            max_dates: config.max_slot_selections,
        }
    }

    /// Toggle a date in or out of the selection. Returns whether the date
    /// is selected afterwards.
    pub fn toggle_date(&self, date: &str) -> Result<bool, SlotSelectionError> {
        let mut state = self.state.lock().unwrap();

        if state.dates.remove(date) {
            debug!("shared slots: removed date {}", date);
            return Ok(false);
        }

        if state.dates.len() >= self.max_dates {
            return Err(SlotSelectionError::CapacityExceeded(self.max_dates));
        }

        state.dates.insert(date.to_string());
        debug!("shared slots: added date {}", date);
        Ok(true)
    }

    /// Toggle a time slot in the global set. Requires at least one
    /// selected date, mirroring the primary store's active-date rule.
    pub fn toggle_slot(&self, time_slot: TimeSlotId) -> Result<bool, SlotSelectionError> {
        let mut state = self.state.lock().unwrap();

        if state.dates.is_empty() {
            return Err(SlotSelectionError::NoActiveDate);
        }

        if state.slots.remove(&time_slot) {
            Ok(false)
        } else {
            state.slots.insert(time_slot);
            Ok(true)
        }
    }

    /// Remove the date component of a composite key from the selection.
    /// Used by the summary list's per-item removal.
    pub fn remove_date_by_key(&self, key: &str) -> bool {
        match SelectedSlot::parse_key(key) {
            Ok((date, _)) => self.state.lock().unwrap().dates.remove(&date),
            Err(_) => false,
        }
    }

    pub fn selected_dates(&self) -> BTreeSet<String> {
        self.state.lock().unwrap().dates.clone()
    }

    pub fn checked_slots(&self) -> BTreeSet<TimeSlotId> {
        self.state.lock().unwrap().slots.clone()
    }

    pub fn is_date_selected(&self, date: &str) -> bool {
        self.state.lock().unwrap().dates.contains(date)
    }

    pub fn is_slot_checked(&self, time_slot: TimeSlotId) -> bool {
        self.state.lock().unwrap().slots.contains(&time_slot)
    }

    /// The dates that would carry slots: every selected date, once at
    /// least one slot is checked.
    pub fn dates_with_slots(&self) -> BTreeSet<String> {
        let state = self.state.lock().unwrap();
        if state.slots.is_empty() {
            BTreeSet::new()
        } else {
            state.dates.clone()
        }
    }

    /// Cartesian expansion of selected dates and checked slots, sorted by
    /// date ascending, then slot order.
    pub fn snapshot(&self) -> Vec<SelectedSlot> {
        let state = self.state.lock().unwrap();
        let mut expanded = Vec::with_capacity(state.dates.len() * state.slots.len());

        for date in &state.dates {
            for slot in &state.slots {
                expanded.push(SelectedSlot {
                    key: SelectedSlot::generate_key(date, *slot),
                    date: date.clone(),
                    time_slot: slot.info(),
                });
            }
        }

        expanded
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
        let state = self.state.lock().unwrap();
        state.dates.len() * state.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut state = self.state.lock().unwrap();
        state.dates.clear();
        state.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> SharedSlotSelectionService {
        SharedSlotSelectionService::new(&BookingConfig::default())
    }

    #[test]
    fn test_slot_toggle_requires_a_date() {
        let shared = service();

        assert_eq!(
            shared.toggle_slot(TimeSlotId::Morning),
            Err(SlotSelectionError::NoActiveDate)
        );
    }

    #[test]
    fn test_date_cap() {
        let shared = service();

        for date in ["2025-04-01", "2025-04-02", "2025-04-03"] {
            assert_eq!(shared.toggle_date(date), Ok(true));
        }
        assert_eq!(
            shared.toggle_date("2025-04-04"),
            Err(SlotSelectionError::CapacityExceeded(3))
        );

        // Toggling off an existing date always succeeds
        assert_eq!(shared.toggle_date("2025-04-01"), Ok(false));
        assert_eq!(shared.toggle_date("2025-04-04"), Ok(true));
    }

    #[test]
    fn test_snapshot_is_cartesian_expansion() {
        let shared = service();
        shared.toggle_date("2025-04-02").unwrap();
        shared.toggle_date("2025-04-01").unwrap();
        shared.toggle_slot(TimeSlotId::Evening).unwrap();
        shared.toggle_slot(TimeSlotId::Morning).unwrap();

        let snapshot = shared.snapshot();
        assert_eq!(snapshot.len(), 4);
        assert_eq!(shared.len(), 4);

        // Sorted by date first, slot order within a date
        assert_eq!(snapshot[0].date, "2025-04-01");
        assert_eq!(snapshot[0].time_slot.id, TimeSlotId::Morning);
        assert_eq!(snapshot[1].date, "2025-04-01");
        assert_eq!(snapshot[1].time_slot.id, TimeSlotId::Evening);
        assert_eq!(snapshot[2].date, "2025-04-02");
        assert_eq!(snapshot[3].date, "2025-04-02");
    }

    #[test]
    fn test_dates_with_slots_empty_until_a_slot_is_checked() {
        let shared = service();
        shared.toggle_date("2025-04-01").unwrap();

        assert!(shared.dates_with_slots().is_empty());
        assert!(shared.is_empty());

        shared.toggle_slot(TimeSlotId::Afternoon).unwrap();
        assert!(shared.dates_with_slots().contains("2025-04-01"));
        assert!(!shared.is_empty());
    }

    #[test]
    fn test_remove_date_by_key() {
        let shared = service();
        shared.toggle_date("2025-04-01").unwrap();
        shared.toggle_slot(TimeSlotId::Morning).unwrap();

        let key = shared.snapshot()[0].key.clone();
        assert!(shared.remove_date_by_key(&key));
        assert!(shared.selected_dates().is_empty());

        // Unknown or malformed keys are ignored
        assert!(!shared.remove_date_by_key(&key));
        assert!(!shared.remove_date_by_key("not-a-key"));
    }

    #[test]
    fn test_checkbox_state_helpers() {
        let shared = service();
        shared.toggle_date("2025-04-01").unwrap();
        shared.toggle_slot(TimeSlotId::Morning).unwrap();

        assert!(shared.is_date_selected("2025-04-01"));
        assert!(!shared.is_date_selected("2025-04-02"));
        assert!(shared.is_slot_checked(TimeSlotId::Morning));
        assert!(!shared.is_slot_checked(TimeSlotId::Evening));
    }

    #[test]
    fn test_clear() {
        let shared = service();
        shared.toggle_date("2025-04-01").unwrap();
        shared.toggle_slot(TimeSlotId::Morning).unwrap();

        shared.clear();
        assert!(shared.is_empty());
        assert!(shared.selected_dates().is_empty());
        assert!(shared.checked_slots().is_empty());
    }
}
