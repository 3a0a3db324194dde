//! Pivot construction: aggregated buckets → ordered report rows.

use crate::core::aggregate::{Aggregates, DayBucket};
use crate::core::duration;
use crate::core::leave::LeaveMap;
use crate::core::range::DateRange;
use crate::models::PivotRow;

/// Build one pivot row per (user, team) key, one day cell per range date.
///
/// Dates with no entries fall back to an empty bucket, which the resolver
/// turns into the `0` sentinel. Output order is (team asc, name asc),
/// byte-lexical, with an explicit sort pass; ordering must not depend on
/// how the aggregate map happens to iterate.
pub fn build(aggregates: &Aggregates, range: &DateRange, leave_map: &LeaveMap) -> Vec<PivotRow> {
    let dates = range.dates();
    let empty = DayBucket::default();

    let mut rows: Vec<PivotRow> = aggregates
        .by_key
        .iter()
        .map(|(key, agg)| {
            let days = dates
                .iter()
                .map(|date| {
                    let bucket = agg.days.get(date).unwrap_or(&empty);
                    leave_map.resolve(bucket.total_seconds, &bucket.activities, &bucket.labels)
                })
                .collect();

            PivotRow {
                name: key.name.clone(),
                role: agg.role.clone(),
                team: key.team.clone(),
                total_work: duration::encode_seconds(agg.total_seconds),
                onsite: duration::encode_seconds(agg.onsite_seconds),
                offsite: duration::encode_seconds(agg.offsite_seconds),
                days,
            }
        })
        .collect();

    rows.sort_by(|a, b| a.cmp_report_order(b));
    rows
}
