use crate::core::duration;
use serde::Serialize;

/// Value of one date column in a pivot row.
///
/// A day with worked time carries the hour.MM encoded duration; a day off
/// carries a leave symbol; a day with no evidence at all stays a plain `0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DayCell {
    Duration(f64),
    Leave(String),
    Zero,
}

impl DayCell {
    pub fn is_numeric(&self) -> bool {
        matches!(self, DayCell::Duration(_))
    }

    /// Contribution of this cell to a minute-exact column sum.
    /// Leave cells and the zero sentinel count as 0 minutes.
    pub fn minutes(&self) -> i64 {
        match self {
            DayCell::Duration(v) => duration::to_minutes(*v),
            _ => 0,
        }
    }

    /// Render for tabular output: a number, a short symbol, or literal `0`.
    pub fn display(&self) -> String {
        match self {
            DayCell::Duration(v) => duration::format_hour_min(*v),
            DayCell::Leave(code) => code.clone(),
            DayCell::Zero => "0".to_string(),
        }
    }
}
