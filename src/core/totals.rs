//! Synthetic totals row, summed minute-exact.

use crate::core::duration;
use crate::core::range::DateRange;
use crate::models::{DayCell, PivotRow};

/// Append the trailing "Totals" row to a finished pivot.
///
/// Every numeric column is converted to integer minutes, summed, then
/// converted back to hour.MM. hour.MM values must never be added as plain
/// decimals: 1.30 + 1.45 reads 2.75, which is 2h75m nonsense (the correct
/// sum is 3.15). Leave cells contribute 0 minutes.
///
/// An empty report stays empty: no totals row for no data. The row is
/// appended at most once and is never fed back into aggregation.
pub fn append_totals(rows: &mut Vec<PivotRow>, range: &DateRange) {
    if rows.is_empty() {
        return;
    }

    let mut total_work_min = 0i64;
    let mut onsite_min = 0i64;
    let mut offsite_min = 0i64;
    let mut day_minutes = vec![0i64; range.len()];

    for row in rows.iter() {
        total_work_min += duration::to_minutes(row.total_work);
        onsite_min += duration::to_minutes(row.onsite);
        offsite_min += duration::to_minutes(row.offsite);

        for (i, cell) in row.days.iter().enumerate() {
            day_minutes[i] += cell.minutes();
        }
    }

    rows.push(PivotRow {
        name: PivotRow::TOTALS_NAME.to_string(),
        role: String::new(),
        team: String::new(),
        total_work: duration::from_minutes(total_work_min),
        onsite: duration::from_minutes(onsite_min),
        offsite: duration::from_minutes(offsite_min),
        days: day_minutes
            .into_iter()
            .map(|m| DayCell::Duration(duration::from_minutes(m)))
            .collect(),
    });
}
