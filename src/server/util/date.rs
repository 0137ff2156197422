use chrono::{Datelike, NaiveDate};

/// Formats accepted for a date of birth, tried in order.
const DATE_OF_BIRTH_FORMATS: [&str; 5] = ["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%Y/%m/%d", "%d-%m-%Y"];

/// Parses a user supplied date of birth.
///
/// Ambiguous values such as `01/02/2000` resolve to the first matching format,
/// which is day-first.
///
/// # Arguments
/// - `value` - Raw date string, surrounding whitespace ignored
///
/// # Returns
/// - `Some(NaiveDate)` - The first format that parses
/// - `None` - No format matched
pub fn parse_date_of_birth(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_OF_BIRTH_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

/// Completed years between `date_of_birth` and `today`.
///
/// Negative for dates in the future.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}
