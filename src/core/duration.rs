//! hour.MM duration codec.
//!
//! Durations travel through reports as numbers whose integer part is hours
//! and whose two-digit fractional part is *minutes* (5400 s → 1.30, i.e.
//! 1 h 30 m). This is not decimal arithmetic: 1.60 is never a valid value,
//! minutes wrap at 60. Downstream consumers depend on this encoding, so it
//! is kept as-is; all summation goes through integer minutes instead.

/// Encode a number of seconds as hour.MM.
/// Sub-minute seconds are discarded (floor, not rounded); lossy on purpose.
pub fn encode_seconds(seconds: i64) -> f64 {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    hours as f64 + minutes as f64 / 100.0
}

/// Decode an hour.MM value into total minutes.
/// The fractional part must be *rounded*, not truncated: 2.30 is stored as
/// a binary float slightly below 2.3 and truncation would read 29 minutes.
pub fn to_minutes(v: f64) -> i64 {
    let hours = v.floor() as i64;
    let minutes = ((v - v.floor()) * 100.0).round() as i64;
    hours * 60 + minutes
}

/// Encode total minutes as hour.MM.
pub fn from_minutes(minutes: i64) -> f64 {
    let hours = minutes / 60;
    let mins = minutes % 60;
    hours as f64 + mins as f64 / 100.0
}

/// Render an hour.MM value with exactly two fraction digits ("2.30", not
/// the "2.3" a plain float Display would give).
pub fn format_hour_min(v: f64) -> String {
    let total = to_minutes(v);
    format!("{}.{:02}", total / 60, total % 60)
}
