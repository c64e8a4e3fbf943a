//! Random name and date sampling
//!
//! Every sampler takes the random source and, for dates, the reference day
//! explicitly, so a seeded `StdRng` gives repeatable output.

use crate::pools::{FEMALE_FIRST_NAMES, LAST_NAMES, MALE_FIRST_NAMES};
use crate::{CaseFileError, Result};
use chrono::{Datelike, Days, Months, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

/// Pick one entry of a pool uniformly; an empty pool gives ""
pub fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// Random first name for a sex
pub fn first_name<R: Rng + ?Sized>(rng: &mut R, is_male: bool) -> &'static str {
    if is_male {
        pick(rng, MALE_FIRST_NAMES)
    } else {
        pick(rng, FEMALE_FIRST_NAMES)
    }
}

/// Random first name of either sex
pub fn any_first_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    let is_male = rng.gen_bool(0.5);
    first_name(rng, is_male)
}

pub fn last_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, LAST_NAMES)
}

/// Random birth date for someone aged `min_age..=max_age` on `today`
pub fn date_of_birth<R: Rng + ?Sized>(
    rng: &mut R,
    today: NaiveDate,
    min_age: u32,
    max_age: u32,
) -> Result<NaiveDate> {
    let latest = years_before(today, min_age)?;
    let earliest = years_before(today, max_age + 1)?
        .checked_add_days(Days::new(1))
        .ok_or_else(|| CaseFileError::InvalidDate(format!("{max_age} years before {today}")))?;

    let span = (latest - earliest).num_days().max(0) as u64;
    let offset = rng.gen_range(0..=span);
    earliest
        .checked_add_days(Days::new(offset))
        .ok_or_else(|| CaseFileError::InvalidDate(format!("{earliest} + {offset} days")))
}

/// Random date in `(today, today + days]`
pub fn future_date<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate, days: u64) -> Result<NaiveDate> {
    let offset = rng.gen_range(1..=days.max(1));
    today
        .checked_add_days(Days::new(offset))
        .ok_or_else(|| CaseFileError::InvalidDate(format!("{today} + {offset} days")))
}

/// Random date from the first of the current month up to `today`
pub fn date_this_month<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> Result<NaiveDate> {
    let day = rng.gen_range(1..=today.day());
    today
        .with_day(day)
        .ok_or_else(|| CaseFileError::InvalidDate(format!("day {day} of {today}")))
}

/// Whole years between a birth date and `today`
#[cfg(test)]
pub(crate) fn age_on(birth: NaiveDate, today: NaiveDate) -> u32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age as u32
}

fn years_before(date: NaiveDate, years: u32) -> Result<NaiveDate> {
    date.checked_sub_months(Months::new(years * 12))
        .ok_or_else(|| CaseFileError::InvalidDate(format!("{years} years before {date}")))
}
