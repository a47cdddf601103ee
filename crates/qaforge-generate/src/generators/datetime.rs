use chrono::{Local, Utc};
use rand::Rng;

use crate::constants::{YEAR_MAX, YEAR_MIN};
use crate::formats::{DateFormat, MONTH_ABBREVIATIONS};

/// Generate a random, calendar-valid date rendered through the given
/// layout.
///
/// The year is uniform in [`YEAR_MIN`]..=[`YEAR_MAX`]; the day respects the
/// month length for the drawn month and year. Layouts carrying a named
/// month (`MMM`) cannot bound the day by month, so the day is drawn from
/// 1..=31.
pub fn date(rng: &mut impl Rng, format: DateFormat) -> String {
    let pattern = format.pattern();
    let year = rng.random_range(YEAR_MIN..=YEAR_MAX);

    let (month_text, month_number) = if format.has_named_month() {
        let idx = rng.random_range(0..MONTH_ABBREVIATIONS.len());
        (MONTH_ABBREVIATIONS[idx].to_string(), None)
    } else {
        let month = rng.random_range(1_u32..=12);
        (format!("{month:02}"), Some(month))
    };

    let max_day = month_number.map_or(31, |month| days_in_month(month, year));
    let day = format!("{:02}", rng.random_range(1..=max_day));

    substitute(pattern, year, &month_text, &day)
}

/// The current calendar date as `year-month-day`.
///
/// Distinct from [`date`]: this never randomizes.
pub fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Generate a random wall-clock time as `HH:MM:SS`.
pub fn time(rng: &mut impl Rng) -> String {
    let hours = rng.random_range(0..24);
    let minutes = rng.random_range(0..60);
    let seconds = rng.random_range(0..60);
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Generate a timestamp in the recent past, with millisecond precision.
pub fn timestamp(rng: &mut impl Rng) -> String {
    let offset = chrono::Duration::milliseconds(rng.random_range(0..1_000_000_000_i64));
    (Local::now() - offset)
        .format("%Y-%m-%d %H:%M:%S%.3f")
        .to_string()
}

/// Generate a Unix timestamp (seconds) in the recent past.
pub fn unix_timestamp(rng: &mut impl Rng) -> i64 {
    Utc::now().timestamp() - rng.random_range(0..1_000_000_000_i64)
}

/// Number of days in the given month, honoring leap years for February.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Standard Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

// Longer tokens first: `yyyy` before `yy`, `MMM` before `MM`. A shorter
// token must never consume part of a longer one.
fn substitute(pattern: &str, year: i32, month: &str, day: &str) -> String {
    let year = year.to_string();
    let short_year = &year[year.len().saturating_sub(2)..];
    pattern
        .replace("yyyy", &year)
        .replace("yy", short_year)
        .replace("MMM", month)
        .replace("MM", month)
        .replace("dd", day)
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn leap_year_rule() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn february_day_bounds() {
        assert_eq!(days_in_month(2, 2024), 29);
        assert_eq!(days_in_month(2, 1900), 28);
        assert_eq!(days_in_month(2, 2000), 29);
        assert_eq!(days_in_month(4, 2024), 30);
        assert_eq!(days_in_month(12, 2024), 31);
    }

    #[test]
    fn numeric_layout_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..200 {
            let value = date(&mut rng, DateFormat::YyyyMmDd);
            let parts: Vec<&str> = value.split('-').collect();
            assert_eq!(parts.len(), 3, "unexpected layout: {value}");
            let year: i32 = parts[0].parse().unwrap();
            let month: u32 = parts[1].parse().unwrap();
            let day: u32 = parts[2].parse().unwrap();
            assert!((YEAR_MIN..=YEAR_MAX).contains(&year));
            assert!((1..=12).contains(&month));
            assert!(day >= 1 && day <= days_in_month(month, year));
        }
    }

    #[test]
    fn named_month_layout_keeps_abbreviation_intact() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        for _ in 0..200 {
            let value = date(&mut rng, DateFormat::YyyyMmmDd);
            let parts: Vec<&str> = value.split('-').collect();
            assert_eq!(parts.len(), 3);
            assert!(
                MONTH_ABBREVIATIONS.contains(&parts[1]),
                "month token corrupted: {value}"
            );
        }
    }

    #[test]
    fn day_first_layouts() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let value = date(&mut rng, DateFormat::DdMmYyyy);
        let parts: Vec<&str> = value.split('-').collect();
        assert_eq!(parts[0].len(), 2);
        assert_eq!(parts[2].len(), 4);

        let value = date(&mut rng, DateFormat::DdMmmYyyySlash);
        let parts: Vec<&str> = value.split('/').collect();
        assert!(MONTH_ABBREVIATIONS.contains(&parts[1]));
    }

    #[test]
    fn today_is_current_and_fixed_layout() {
        let value = today();
        let now = Local::now().date_naive();
        assert_eq!(value, format!("{:04}-{:02}-{:02}", now.year(), now.month(), now.day()));
    }

    #[test]
    fn time_components_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(14);
        for _ in 0..100 {
            let value = time(&mut rng);
            let parts: Vec<u32> = value.split(':').map(|p| p.parse().unwrap()).collect();
            assert!(parts[0] < 24);
            assert!(parts[1] < 60);
            assert!(parts[2] < 60);
        }
    }

    #[test]
    fn timestamps_point_to_the_past() {
        let mut rng = ChaCha8Rng::seed_from_u64(15);
        let now = Utc::now().timestamp();
        let value = unix_timestamp(&mut rng);
        assert!(value <= now);
        assert!(value > now - 1_000_000_001);
    }

    #[test]
    fn timestamp_layout() {
        let mut rng = ChaCha8Rng::seed_from_u64(16);
        let value = timestamp(&mut rng);
        let re = regex::Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3}$").unwrap();
        assert!(re.is_match(&value), "unexpected timestamp layout: {value}");
    }
}
