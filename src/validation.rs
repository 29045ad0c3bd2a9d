//! Stateless validation utilities for booking input.
//!
//! Every function here is a pure predicate: no error conditions, only
//! boolean results. Callers decide how to react to a failed check.

use chrono::{Local, NaiveDate};

/// First bookable hour of the day (inclusive).
pub const BUSINESS_OPEN_HOUR: u32 = 8;

/// First non-bookable hour of the evening (exclusive upper bound).
pub const BUSINESS_CLOSE_HOUR: u32 = 18;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Check that a `YYYY-MM-DD` date is today or later.
///
/// The comparison is done at local-midnight granularity, so today always
/// passes and yesterday always fails. Unparseable input is rejected.
pub fn date_not_in_past(date: &str) -> bool {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d >= Local::now().date_naive(),
        Err(_) => false,
    }
}

/// Check that a time string is `H:MM` or `HH:MM` with hour 0-23 and
/// minute 00-59.
pub fn valid_time_format(time: &str) -> bool {
    let (hour, minute) = match time.split_once(':') {
        Some(parts) => parts,
        None => return false,
    };

    if hour.is_empty() || hour.len() > 2 || !hour.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    if minute.len() != 2 || !minute.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    let hour_ok = hour.parse::<u32>().map_or(false, |h| h <= 23);
    let minute_ok = minute.parse::<u32>().map_or(false, |m| m <= 59);
    hour_ok && minute_ok
}

/// Check that the hour component of a time falls within business hours
/// (08:00 inclusive to 18:00 exclusive).
///
/// Performs no format validation itself; validate with
/// [`valid_time_format`] first. Garbage input fails the hour parse and is
/// rejected.
pub fn within_business_hours(time: &str) -> bool {
    let hour = match time.split(':').next().and_then(|h| h.parse::<u32>().ok()) {
        Some(h) => h,
        None => return false,
    };
    (BUSINESS_OPEN_HOUR..BUSINESS_CLOSE_HOUR).contains(&hour)
}

/// Permissive email format check: local part, `@`, domain containing at
/// least one dot, no whitespace or extra `@` anywhere.
pub fn valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let (local, domain) = match email.split_once('@') {
        Some(parts) => parts,
        None => return false,
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    // The domain needs a dot with at least one character on each side.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
}

/// Check that a password is non-empty and at least `min_length` characters.
pub fn valid_password_length(password: &str, min_length: usize) -> bool {
    !password.is_empty() && password.chars().count() >= min_length
}
