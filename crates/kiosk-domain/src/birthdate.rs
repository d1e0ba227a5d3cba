//! Calendar age arithmetic for date-of-birth validation.

use chrono::{Datelike, NaiveDate};

/// Minimum age required to register.
pub const MIN_REGISTRATION_AGE: i32 = 18;

/// Whole years completed between `birth` and `today`: the calendar-year
/// difference, minus one when today's (month, day) precedes the birth
/// (month, day). Birthdays count from the day itself.
pub fn age_on(today: NaiveDate, birth: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// True when a person born on `birth` is at least [`MIN_REGISTRATION_AGE`]
/// years old on `today`.
pub fn is_adult_on(today: NaiveDate, birth: NaiveDate) -> bool {
    age_on(today, birth) >= MIN_REGISTRATION_AGE
}
