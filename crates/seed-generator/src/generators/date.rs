//! Date, time and timestamp value generators.

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;

const SECONDS_PER_DAY: u32 = 86_400;

/// Generate a random date in `[start, end]`.
///
/// Returns `start` when the range is empty or inverted.
pub fn generate_date_between<R: Rng + ?Sized>(
    rng: &mut R,
    start: NaiveDate,
    end: NaiveDate,
) -> NaiveDate {
    let span = (end - start).num_days();
    if span <= 0 {
        return start;
    }
    let offset = rng.gen_range(0..=span) as u64;
    start.checked_add_days(Days::new(offset)).unwrap_or(end)
}

/// Generate a random timestamp in `[start, end]` with one-second resolution.
///
/// Returns `start` when the range is empty or inverted.
pub fn generate_datetime_between<R: Rng + ?Sized>(
    rng: &mut R,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> NaiveDateTime {
    let span = (end - start).num_seconds();
    if span <= 0 {
        return start;
    }
    let offset = rng.gen_range(0..=span);
    start + chrono::Duration::seconds(offset)
}

/// Generate a birth date such that the age on `today` is in `[min_age, max_age]`.
pub fn generate_birth_date<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    min_age: u32,
    max_age: u32,
) -> NaiveDate {
    let latest = years_before(today, min_age);
    // One day after the (max_age + 1)th birthday boundary.
    let earliest = years_before(today, max_age + 1)
        .checked_add_days(Days::new(1))
        .unwrap_or(latest);
    generate_date_between(rng, earliest, latest)
}

/// Generate a random time of day with one-second resolution.
pub fn generate_time_of_day<R: Rng + ?Sized>(rng: &mut R) -> NaiveTime {
    let secs = rng.gen_range(0..SECONDS_PER_DAY);
    NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap_or(NaiveTime::MIN)
}

/// Midnight on January 1st of the year containing `now`.
pub fn start_of_year(now: NaiveDateTime) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(now.year(), 1, 1)
        .map(|d| d.and_time(NaiveTime::MIN))
        .unwrap_or(now)
}

fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(years * 12))
        .unwrap_or(NaiveDate::MIN)
}

/// Age in whole years on `today` for someone born on `birth`.
#[cfg(test)]
pub(crate) fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}
