//! Report date range: an inclusive run of calendar days.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

/// Inclusive `[start, end]` range with daily step, length >= 1.
/// Construction is the single place range validity is checked; everything
/// downstream can assume a well-formed range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if end < start {
            return Err(AppError::InvalidRange(format!(
                "end date {} precedes start date {}",
                end, start
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of day columns in the report.
    pub fn len(&self) -> usize {
        (self.end - self.start).num_days() as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        false // length is always >= 1 by construction
    }

    /// All dates of the range, ascending.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut out = Vec::with_capacity(self.len());
        let mut d = self.start;
        while d <= self.end {
            out.push(d);
            // succ_opt only fails at NaiveDate::MAX
            d = match d.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
        out
    }

    /// ISO column keys, one per date.
    pub fn iso_keys(&self) -> Vec<String> {
        self.dates()
            .iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect()
    }

    /// Parse a `--range` expression.
    ///
    /// Supports:
    /// - YYYY
    /// - YYYY-MM
    /// - YYYY-MM-DD
    /// - any of the above joined by `:` (start:end, same granularity)
    pub fn parse(r: &str) -> AppResult<Self> {
        if let Some((start_raw, end_raw)) = r.split_once(':') {
            let start = start_raw.trim();
            let end = end_raw.trim();

            if start.len() != end.len() {
                return Err(AppError::InvalidRange(
                    "start and end must have the same format".to_string(),
                ));
            }

            let (s, _) = parse_period(start)?;
            let (_, e) = parse_period(end)?;
            Self::new(s, e)
        } else {
            let (s, e) = parse_period(r.trim())?;
            Self::new(s, e)
        }
    }
}

/// Expand a single period expression into its first and last day.
fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p
                .parse()
                .map_err(|_| AppError::InvalidRange(format!("invalid year: {p}")))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1)
                .ok_or_else(|| AppError::InvalidRange(format!("invalid year: {p}")))?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31)
                .ok_or_else(|| AppError::InvalidRange(format!("invalid year: {p}")))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let y: i32 = p[0..4]
                .parse()
                .map_err(|_| AppError::InvalidRange(format!("invalid month: {p}")))?;
            let m: u32 = p[5..7]
                .parse()
                .map_err(|_| AppError::InvalidRange(format!("invalid month: {p}")))?;
            let d1 = NaiveDate::from_ymd_opt(y, m, 1)
                .ok_or_else(|| AppError::InvalidRange(format!("invalid month: {p}")))?;
            let last = month_last_day(y, m)
                .ok_or_else(|| AppError::InvalidRange(format!("invalid month: {p}")))?;
            let d2 = NaiveDate::from_ymd_opt(y, m, last)
                .ok_or_else(|| AppError::InvalidRange(format!("invalid month: {p}")))?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidRange(format!("invalid date: {p}")))?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidRange(format!(
            "unsupported range format: {p}"
        ))),
    }
}

fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
