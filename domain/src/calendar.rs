//! Calendar domain logic for the booking wizard.
//!
//! All date calculations and month-grid generation live here. Both
//! calendar variants (single-active-date and multi-date) share the same
//! grid generation and differ only in the selection policy they are
//! rendered with; the variant only influences which days are disabled.

use chrono::{Datelike, Local, NaiveDate, Weekday};
use log::debug;
use shared::{CalendarDay, CalendarDayType, CalendarFocusDate, CalendarMonth};
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

/// Which of the two calendar variants the grid is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarVariant {
    /// Primary wizard calendar: one active date, slots per date. Sundays
    /// are not bookable in this variant.
    SingleActiveDate,
    /// Multi-date calendar with a shared slot set across all dates.
    MultiDate,
}

/// Selection state the grid is generated against.
pub struct CalendarContext<'a> {
    /// ISO date (YYYY-MM-DD) used as the past-date cutoff
    pub today: &'a str,
    /// Dates rendered as selected
    pub selected_dates: &'a BTreeSet<String>,
    /// Dates the slot store holds at least one entry for
    pub dates_with_slots: &'a BTreeSet<String>,
    pub variant: CalendarVariant,
}

/// Calendar service that owns the month-navigation cursor and generates
/// day grids. The focus date is kept in memory only.
#[derive(Clone)]
pub struct CalendarService {
    current_focus_date: Arc<Mutex<CalendarFocusDate>>,
}

impl CalendarService {
    /// Create a service focused on the current month.
    pub fn new() -> Self {
        let now = Local::now();
        Self::with_focus(now.month(), now.year() as u32)
    }

    /// Create a service focused on a specific month.
    pub fn with_focus(month: u32, year: u32) -> Self {
        Self {
            current_focus_date: Arc::new(Mutex::new(CalendarFocusDate { month, year })),
        }
    }

    /// Generate the day grid for a month against the given selection state.
    ///
    /// The grid always contains `first_day_of_week` leading padding cells
    /// (Monday-first weekday offset, 0..=6) followed by exactly one cell
    /// per day of the month.
    pub fn generate_calendar_month(
        &self,
        month: u32,
        year: u32,
        ctx: &CalendarContext<'_>,
    ) -> CalendarMonth {
        let days_in_month = self.days_in_month(month, year);
        let first_day = self.first_day_of_month(month, year);

        debug!(
            "calendar: generating {}/{} ({} days, {} padding cells)",
            month, year, days_in_month, first_day
        );

        let mut calendar_days = Vec::with_capacity((first_day + days_in_month) as usize);

        for _ in 0..first_day {
            calendar_days.push(CalendarDay {
                day: 0,
                iso_date: String::new(),
                day_type: CalendarDayType::PaddingBefore,
                is_disabled: false,
                is_selected: false,
                has_slot: false,
            });
        }

        for day in 1..=days_in_month {
            let iso_date = iso_date(year, month, day);
            let is_disabled = self.is_day_disabled(&iso_date, ctx.today, ctx.variant);

            calendar_days.push(CalendarDay {
                day,
                is_disabled,
                is_selected: !is_disabled && ctx.selected_dates.contains(&iso_date),
                has_slot: !is_disabled && ctx.dates_with_slots.contains(&iso_date),
                day_type: CalendarDayType::MonthDay,
                iso_date,
            });
        }

        CalendarMonth {
            month,
            year,
            days: calendar_days,
            first_day_of_week: first_day,
        }
    }

    /// Whether a day cell is rendered disabled: any past date, plus
    /// Sundays in the single-active-date variant.
    pub fn is_day_disabled(&self, iso: &str, today: &str, variant: CalendarVariant) -> bool {
        if iso < today {
            return true;
        }

        if variant == CalendarVariant::SingleActiveDate {
            if let Ok(date) = NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
                return date.weekday() == Weekday::Sun;
            }
        }

        false
    }

    /// Get the number of days in a given month and year
    pub fn days_in_month(&self, month: u32, year: u32) -> u32 {
        match month {
            2 => {
                if self.is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Check if a year is a leap year
    pub fn is_leap_year(&self, year: u32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Monday-first weekday offset of the month's first day (0 = Monday,
    /// ..., 6 = Sunday). This is the leading-padding count of the grid.
    pub fn first_day_of_month(&self, month: u32, year: u32) -> u32 {
        if let Some(date) = NaiveDate::from_ymd_opt(year as i32, month, 1) {
            date.weekday().num_days_from_monday()
        } else {
            0
        }
    }

    /// Dutch month name for the calendar header.
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "januari",
            2 => "februari",
            3 => "maart",
            4 => "april",
            5 => "mei",
            6 => "juni",
            7 => "juli",
            8 => "augustus",
            9 => "september",
            10 => "oktober",
            11 => "november",
            12 => "december",
            _ => "onbekend",
        }
    }

    /// Navigate to the previous month
    pub fn previous_month(&self, current_month: u32, current_year: u32) -> (u32, u32) {
        if current_month == 1 {
            (12, current_year - 1)
        } else {
            (current_month - 1, current_year)
        }
    }

    /// Navigate to the next month
    pub fn next_month(&self, current_month: u32, current_year: u32) -> (u32, u32) {
        if current_month == 12 {
            (1, current_year + 1)
        } else {
            (current_month + 1, current_year)
        }
    }

    /// Get the current focus date for calendar navigation
    pub fn get_focus_date(&self) -> CalendarFocusDate {
        self.current_focus_date.lock().unwrap().clone()
    }

    /// Set the focus date for calendar navigation
    pub fn set_focus_date(&self, month: u32, year: u32) -> Result<CalendarFocusDate, String> {
        if month < 1 || month > 12 {
            return Err(format!("Invalid month: {}. Must be between 1 and 12", month));
        }

        let new_focus_date = CalendarFocusDate { month, year };

        {
            let mut focus_date = self.current_focus_date.lock().unwrap();
            *focus_date = new_focus_date.clone();
        }

        Ok(new_focus_date)
    }

    /// Navigate to the previous month; navigation is unbounded.
    pub fn navigate_previous_month(&self) -> CalendarFocusDate {
        let current_focus = self.get_focus_date();
        let (prev_month, prev_year) = self.previous_month(current_focus.month, current_focus.year);

        // previous_month always returns a valid month
        self.set_focus_date(prev_month, prev_year).unwrap()
    }

    /// Navigate to the next month; navigation is unbounded.
    pub fn navigate_next_month(&self) -> CalendarFocusDate {
        let current_focus = self.get_focus_date();
        let (next_month, next_year) = self.next_month(current_focus.month, current_focus.year);

        // next_month always returns a valid month
        self.set_focus_date(next_month, next_year).unwrap()
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a calendar date as an ISO YYYY-MM-DD string.
pub fn iso_date(year: u32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_ctx(today: &str) -> (BTreeSet<String>, BTreeSet<String>, String) {
        (BTreeSet::new(), BTreeSet::new(), today.to_string())
    }

    #[test]
    fn test_days_in_month() {
        let service = CalendarService::with_focus(6, 2025);

        assert_eq!(service.days_in_month(1, 2025), 31);
        assert_eq!(service.days_in_month(4, 2025), 30);
        assert_eq!(service.days_in_month(2, 2025), 28);
        assert_eq!(service.days_in_month(2, 2024), 29);
    }

    #[test]
    fn test_is_leap_year() {
        let service = CalendarService::with_focus(6, 2025);

        assert!(!service.is_leap_year(2025));
        assert!(service.is_leap_year(2024));
        assert!(!service.is_leap_year(1900));
        assert!(service.is_leap_year(2000));
    }

    #[test]
    fn test_first_day_of_month_is_monday_first() {
        let service = CalendarService::with_focus(6, 2025);

        // March 2025 starts on a Saturday -> 5 leading cells
        assert_eq!(service.first_day_of_month(3, 2025), 5);
        // September 2025 starts on a Monday -> no padding
        assert_eq!(service.first_day_of_month(9, 2025), 0);
        // June 2025 starts on a Sunday -> maximum padding
        assert_eq!(service.first_day_of_month(6, 2025), 6);
    }

    #[test]
    fn test_month_name() {
        let service = CalendarService::with_focus(6, 2025);

        assert_eq!(service.month_name(1), "januari");
        assert_eq!(service.month_name(3), "maart");
        assert_eq!(service.month_name(12), "december");
        assert_eq!(service.month_name(13), "onbekend");
    }

    #[test]
    fn test_grid_cell_counts() {
        let service = CalendarService::with_focus(3, 2025);
        let (selected, with_slots, today) = empty_ctx("2025-03-01");
        let ctx = CalendarContext {
            today: &today,
            selected_dates: &selected,
            dates_with_slots: &with_slots,
            variant: CalendarVariant::SingleActiveDate,
        };

        for (month, year) in [(3u32, 2025u32), (9, 2025), (6, 2025), (2, 2024), (12, 2025)] {
            let grid = service.generate_calendar_month(month, year, &ctx);
            let padding = grid
                .days
                .iter()
                .filter(|d| d.day_type == CalendarDayType::PaddingBefore)
                .count() as u32;
            let month_days = grid
                .days
                .iter()
                .filter(|d| d.day_type == CalendarDayType::MonthDay)
                .count() as u32;

            assert_eq!(padding, grid.first_day_of_week);
            assert!(padding <= 6, "padding must stay within one week");
            assert_eq!(month_days, service.days_in_month(month, year));
        }
    }

    #[test]
    fn test_sundays_disabled_in_single_active_date_variant() {
        let service = CalendarService::with_focus(6, 2025);
        let (selected, with_slots, today) = empty_ctx("2025-06-01");
        let ctx = CalendarContext {
            today: &today,
            selected_dates: &selected,
            dates_with_slots: &with_slots,
            variant: CalendarVariant::SingleActiveDate,
        };

        let grid = service.generate_calendar_month(6, 2025, &ctx);

        // June 2025 Sundays: 1, 8, 15, 22, 29
        for day in [1u32, 8, 15, 22, 29] {
            let cell = grid.days.iter().find(|d| d.day == day).unwrap();
            assert!(cell.is_disabled, "June {} 2025 is a Sunday", day);
        }
        let monday = grid.days.iter().find(|d| d.day == 2).unwrap();
        assert!(!monday.is_disabled);
    }

    #[test]
    fn test_sundays_enabled_in_multi_date_variant() {
        let service = CalendarService::with_focus(6, 2025);
        let (selected, with_slots, today) = empty_ctx("2025-06-01");
        let ctx = CalendarContext {
            today: &today,
            selected_dates: &selected,
            dates_with_slots: &with_slots,
            variant: CalendarVariant::MultiDate,
        };

        let grid = service.generate_calendar_month(6, 2025, &ctx);
        let sunday = grid.days.iter().find(|d| d.day == 8).unwrap();
        assert!(!sunday.is_disabled);
    }

    #[test]
    fn test_past_dates_disabled_in_both_variants() {
        let service = CalendarService::with_focus(6, 2025);
        let (selected, with_slots, today) = empty_ctx("2025-06-15");

        for variant in [CalendarVariant::SingleActiveDate, CalendarVariant::MultiDate] {
            let ctx = CalendarContext {
                today: &today,
                selected_dates: &selected,
                dates_with_slots: &with_slots,
                variant,
            };
            let grid = service.generate_calendar_month(6, 2025, &ctx);

            let past = grid.days.iter().find(|d| d.day == 10).unwrap();
            assert!(past.is_disabled);
            // Today itself stays enabled; the 16th is a Monday
            let today_cell = grid.days.iter().find(|d| d.day == 16).unwrap();
            assert!(!today_cell.is_disabled);
        }
    }

    #[test]
    fn test_selected_and_slot_marking() {
        let service = CalendarService::with_focus(3, 2025);
        let mut selected = BTreeSet::new();
        selected.insert("2025-03-10".to_string());
        let mut with_slots = BTreeSet::new();
        with_slots.insert("2025-03-10".to_string());
        with_slots.insert("2025-03-12".to_string());

        let ctx = CalendarContext {
            today: "2025-03-01",
            selected_dates: &selected,
            dates_with_slots: &with_slots,
            variant: CalendarVariant::SingleActiveDate,
        };
        let grid = service.generate_calendar_month(3, 2025, &ctx);

        let day_10 = grid.days.iter().find(|d| d.day == 10).unwrap();
        assert!(day_10.is_selected);
        assert!(day_10.has_slot);

        let day_12 = grid.days.iter().find(|d| d.day == 12).unwrap();
        assert!(!day_12.is_selected);
        assert!(day_12.has_slot);

        let day_11 = grid.days.iter().find(|d| d.day == 11).unwrap();
        assert!(!day_11.is_selected);
        assert!(!day_11.has_slot);
    }

    #[test]
    fn test_navigation() {
        let service = CalendarService::with_focus(6, 2025);

        assert_eq!(service.previous_month(6, 2025), (5, 2025));
        assert_eq!(service.previous_month(1, 2025), (12, 2024));

        assert_eq!(service.next_month(6, 2025), (7, 2025));
        assert_eq!(service.next_month(12, 2025), (1, 2026));
    }

    #[test]
    fn test_focus_date_navigation() {
        let service = CalendarService::with_focus(1, 2025);

        let focus = service.navigate_previous_month();
        assert_eq!(focus.month, 12);
        assert_eq!(focus.year, 2024);

        service.set_focus_date(12, 2025).unwrap();
        let focus = service.navigate_next_month();
        assert_eq!(focus.month, 1);
        assert_eq!(focus.year, 2026);

        assert!(service.set_focus_date(13, 2025).is_err());
        assert!(service.set_focus_date(0, 2025).is_err());
    }

    #[test]
    fn test_iso_date_formatting() {
        assert_eq!(iso_date(2025, 3, 9), "2025-03-09");
        assert_eq!(iso_date(2025, 12, 31), "2025-12-31");
    }
}
