use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{ParseError, Result};

/// Portuguese day names, Sunday = 0. Long `-feira` forms share the short form's index.
const WEEKDAYS: &[(&str, u32)] = &[
    ("domingo", 0),
    ("segunda", 1),
    ("segunda-feira", 1),
    ("terça", 2),
    ("terça-feira", 2),
    ("terca", 2),
    ("terca-feira", 2),
    ("quarta", 3),
    ("quarta-feira", 3),
    ("quinta", 4),
    ("quinta-feira", 4),
    ("sexta", 5),
    ("sexta-feira", 5),
    ("sábado", 6),
    ("sabado", 6),
];

pub fn weekday_index(name: &str) -> Option<u32> {
    let normalized = name.trim().to_lowercase();
    WEEKDAYS
        .iter()
        .find(|(day, _)| *day == normalized)
        .map(|(_, idx)| *idx)
}

/// First date on or after `anchor` that falls on weekday `target`.
pub fn date_for_weekday(anchor: NaiveDate, target: u32) -> NaiveDate {
    let from = anchor.weekday().num_days_from_sunday();
    let offset = (target + 7 - from) % 7;
    anchor + Duration::days(i64::from(offset))
}

pub fn resolve_day(name: &str, anchor: NaiveDate) -> Result<NaiveDate> {
    let target = weekday_index(name).ok_or_else(|| ParseError::UnknownDayName {
        name: name.to_string(),
    })?;
    Ok(date_for_weekday(anchor, target))
}
