use chrono::{DateTime, Datelike, Utc};

/// English month names, indexed by zero-based month number
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Format a post date for the date line
///
/// With `use_relative`, dates within the last week collapse to "Today",
/// "Yesterday" or "n days ago"; everything else (and the non-relative
/// mode) renders as "Month day, year".
pub fn format_date(date: &DateTime<Utc>, use_relative: bool, now: DateTime<Utc>) -> String {
    if use_relative {
        let days = now
            .date_naive()
            .signed_duration_since(date.date_naive())
            .num_days();

        match days {
            0 => return "Today".to_string(),
            1 => return "Yesterday".to_string(),
            2..=6 => return format!("{} days ago", days),
            _ => {}
        }
    }

    absolute_date(date)
}

fn absolute_date(date: &DateTime<Utc>) -> String {
    let month = MONTH_NAMES[date.month0() as usize];
    format!("{} {}, {}", month, date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(date: &str) -> DateTime<Utc> {
        crate::manifest::parse_date_string(date).unwrap()
    }

    #[test]
    fn test_today_renders_relative() {
        let now = at("2024-06-15 10:00:00");

        assert_eq!(format_date(&at("2024-06-15"), true, now), "Today");
    }

    #[test]
    fn test_yesterday_renders_relative() {
        let now = at("2024-06-15 10:00:00");

        assert_eq!(format_date(&at("2024-06-14"), true, now), "Yesterday");
    }

    #[test]
    fn test_recent_days_render_as_days_ago() {
        let now = at("2024-06-15 10:00:00");

        assert_eq!(format_date(&at("2024-06-12"), true, now), "3 days ago");
        assert_eq!(format_date(&at("2024-06-09"), true, now), "6 days ago");
    }

    #[test]
    fn test_older_dates_render_absolute() {
        let now = at("2024-09-05 10:00:00");
        let date = at("2024-01-05");

        assert_eq!(format_date(&date, true, now), "January 5, 2024");
    }

    #[test]
    fn test_thirty_days_old_renders_absolute() {
        let now = at("2024-06-15 10:00:00");
        let date = now - Duration::days(30);

        assert_eq!(format_date(&date, true, now), "May 16, 2024");
    }

    #[test]
    fn test_non_relative_mode_is_always_absolute() {
        let now = at("2024-06-15 10:00:00");

        assert_eq!(format_date(&at("2024-06-15"), false, now), "June 15, 2024");
    }

    #[test]
    fn test_december_uses_last_table_entry() {
        let now = Utc.with_ymd_and_hms(2025, 1, 20, 0, 0, 0).unwrap();

        assert_eq!(
            format_date(&at("2023-12-31"), true, now),
            "December 31, 2023"
        );
    }
}
