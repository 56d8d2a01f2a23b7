use chrono::{Datelike, NaiveDate};

/// Get the current date in YYYY-MM-DD format
pub fn current_date() -> String {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year();
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Current (month, year) pair for the initial calendar focus
pub fn current_month_year() -> (u32, u32) {
    use js_sys::Date;
    let now = Date::new_0();
    (now.get_month() + 1, now.get_full_year())
}

/// Dutch month name, lowercase as written in running text
pub fn month_name(month: u32) -> &'static str {
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

/// Dutch weekday name for a Monday-first index (0 = maandag)
fn weekday_name(num_days_from_monday: u32) -> &'static str {
    match num_days_from_monday {
        0 => "maandag",
        1 => "dinsdag",
        2 => "woensdag",
        3 => "donderdag",
        4 => "vrijdag",
        5 => "zaterdag",
        6 => "zondag",
        _ => "onbekend",
    }
}

/// Format an ISO date for the slot summary, e.g. "maandag 10 maart 2025"
pub fn format_slot_date(iso: &str) -> String {
    if let Ok(date) = NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        format!(
            "{} {} {} {}",
            weekday_name(date.weekday().num_days_from_monday()),
            date.day(),
            month_name(date.month()),
            date.year()
        )
    } else {
        iso.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_slot_date() {
        assert_eq!(format_slot_date("2025-03-10"), "maandag 10 maart 2025");
        assert_eq!(format_slot_date("2025-06-01"), "zondag 1 juni 2025");
        assert_eq!(format_slot_date("2025-12-31"), "woensdag 31 december 2025");
    }

    #[test]
    fn test_format_slot_date_falls_back_on_garbage() {
        assert_eq!(format_slot_date("niet-een-datum"), "niet-een-datum");
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "januari");
        assert_eq!(month_name(12), "december");
        assert_eq!(month_name(0), "onbekend");
    }
}
