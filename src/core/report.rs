//! Report assembly: the thin orchestration layer over the aggregation chain.

use crate::core::aggregate;
use crate::core::duration;
use crate::core::leave::LeaveMap;
use crate::core::range::DateRange;
use crate::core::totals;
use crate::models::{DetailEntryRow, DetailRow, EntryRow, PivotRow};
use std::collections::HashMap;

/// Finished team pivot report.
///
/// `columns` carries the full header: the six leading columns followed by
/// one ISO date key per range day, ascending. `rows` ends with the optional
/// "Totals" row. `skipped_rows` counts entries rejected as malformed.
#[derive(Debug)]
pub struct PivotReport {
    pub columns: Vec<String>,
    pub rows: Vec<PivotRow>,
    pub skipped_rows: usize,
}

impl PivotReport {
    pub const LEADING_COLUMNS: [&'static str; 6] =
        ["name", "role", "team", "total_work", "onsite", "offsite"];

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Run the full pivot chain over an already-fetched, already-filtered row
/// list: aggregate → build rows → append totals.
///
/// Pure and stateless: every call starts from empty aggregation state and
/// owns everything it allocates, so concurrent report computations never
/// interact.
pub fn build_pivot_report(
    entries: &[EntryRow],
    range: &DateRange,
    leave_map: &LeaveMap,
) -> PivotReport {
    let aggregates = aggregate::aggregate(entries);
    let mut rows = crate::core::pivot::build(&aggregates, range, leave_map);
    totals::append_totals(&mut rows, range);

    let mut columns: Vec<String> = PivotReport::LEADING_COLUMNS
        .iter()
        .map(|c| c.to_string())
        .collect();
    columns.extend(range.iso_keys());

    PivotReport {
        columns,
        rows,
        skipped_rows: aggregates.skipped_rows,
    }
}

/// Per-user detail report: no pivot, no leave substitution, no totals row.
///
/// Entries are grouped by (workdate, project, activity, jira_ids,
/// description); one row per distinct group, durations summed. Row order
/// follows the order the feed delivered the entries; no resort.
pub fn build_detail_report(entries: &[DetailEntryRow]) -> Vec<DetailRow> {
    type GroupKey = (String, String, String, String, String);

    let mut index: HashMap<GroupKey, usize> = HashMap::new();
    let mut groups: Vec<(DetailEntryRow, i64)> = Vec::new();

    for entry in entries {
        let key = (
            entry.workdate.format("%Y-%m-%d").to_string(),
            entry.project_name.clone(),
            entry.activity_name.clone(),
            entry.jira_ids.clone(),
            entry.description.clone(),
        );

        match index.get(&key) {
            Some(&i) => groups[i].1 += entry.duration_seconds,
            None => {
                index.insert(key, groups.len());
                groups.push((entry.clone(), entry.duration_seconds));
            }
        }
    }

    groups
        .into_iter()
        .map(|(entry, seconds)| DetailRow {
            name: entry.username.clone(),
            workdate: entry.workdate.format("%-d-%b-%Y").to_string(),
            weekday: entry.weekday.clone(),
            hours: duration::encode_seconds(seconds),
            project: entry.project_name.clone(),
            jira_ids: entry.jira_ids.clone(),
            description: entry.description.clone(),
            component: entry.activity_name,
        })
        .collect()
}
