use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{ParseError, Result};

pub const TITLE_MARKER: &str = "Plano de Conteúdo Semanal";

static RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d{2})/(\d{2})\s+a\s+(\d{2})/(\d{2})\)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header<'a> {
    /// Index of the header within the input lines.
    pub index: usize,
    pub line: &'a str,
    pub range: WeekRange,
}

/// Locate the title line and resolve its `(DD/MM a DD/MM)` range in `year`.
pub fn resolve<'a>(lines: &[&'a str], year: i32) -> Result<Header<'a>> {
    let (index, line) = lines
        .iter()
        .enumerate()
        .find(|(_, l)| l.contains(TITLE_MARKER))
        .map(|(i, l)| (i, *l))
        .ok_or(ParseError::MissingHeader)?;

    let range = parse_week_range(line, year)?;
    Ok(Header { index, line, range })
}

/// The year never appears in the header. A range running past December ends
/// in the following year.
pub fn parse_week_range(line: &str, year: i32) -> Result<WeekRange> {
    let malformed = || ParseError::MalformedDateRange {
        line: line.to_string(),
    };
    let caps = RANGE_RE.captures(line).ok_or_else(malformed)?;
    let num = |i: usize| caps[i].parse::<u32>().map_err(|_| malformed());

    let (start_day, start_month) = (num(1)?, num(2)?);
    let (end_day, end_month) = (num(3)?, num(4)?);

    let start = NaiveDate::from_ymd_opt(year, start_month, start_day).ok_or_else(malformed)?;
    let end = match NaiveDate::from_ymd_opt(year, end_month, end_day) {
        Some(end) if end >= start => end,
        _ => NaiveDate::from_ymd_opt(year + 1, end_month, end_day).ok_or_else(malformed)?,
    };

    Ok(WeekRange { start, end })
}
