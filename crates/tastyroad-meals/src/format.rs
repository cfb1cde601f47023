//! Day stamp helpers

use crate::error::MealError;
use chrono::{Datelike, Duration, Local, NaiveDate};

const STAMP_FORMAT: &str = "%Y-%m-%d";

pub fn day_stamp(date: NaiveDate) -> String {
    date.format(STAMP_FORMAT).to_string()
}

pub fn today_stamp() -> String {
    day_stamp(Local::now().date_naive())
}

pub fn parse_day_stamp(stamp: &str) -> Result<NaiveDate, MealError> {
    NaiveDate::parse_from_str(stamp.trim(), STAMP_FORMAT)
        .map_err(|_| MealError::InvalidDayStamp(stamp.to_string()))
}

/// `Friday, Oct 16`; unparseable stamps come back unchanged
pub fn readable_day(stamp: &str) -> String {
    match parse_day_stamp(stamp) {
        Ok(date) => format!("{}, {} {}", date.format("%A"), date.format("%b"), date.day()),
        Err(_) => stamp.to_string(),
    }
}

/// Stamp `delta` days away from `stamp`
pub fn shift_day(stamp: &str, delta: i64) -> Result<String, MealError> {
    let date = parse_day_stamp(stamp)?;
    date.checked_add_signed(Duration::days(delta))
        .map(day_stamp)
        .ok_or_else(|| MealError::InvalidDayStamp(stamp.to_string()))
}
