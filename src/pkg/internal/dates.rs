use chrono::NaiveDateTime;

/// Human-facing format used across listings and mail bodies.
pub fn format_display(dt: &NaiveDateTime) -> String {
    dt.format("%d/%m/%Y %I:%M %p").to_string()
}

/// Value accepted by `datetime-local` form inputs.
pub fn format_iso_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M").to_string()
}

/// Day key used by the calendar view.
pub fn format_day_key(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn sample() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_format_display() {
        assert_eq!(format_display(&sample()), "05/03/2024 02:30 PM");
    }

    #[test]
    fn test_format_iso_datetime() {
        assert_eq!(format_iso_datetime(&sample()), "2024-03-05T14:30");
    }

    #[test]
    fn test_format_day_key() {
        assert_eq!(format_day_key(&sample()), "2024-03-05");
    }

    #[test]
    fn test_morning_uses_am() {
        let dt = NaiveDate::from_ymd_opt(2024, 12, 1)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap();
        assert_eq!(format_display(&dt), "01/12/2024 09:05 AM");
    }
}
