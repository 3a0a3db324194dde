//! Daily aggregation pass: raw entry rows → per-(user, team, date) buckets.

use crate::models::{EntryRow, Location, ReportKey};
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

/// Everything accumulated for one (key, date) pair.
#[derive(Debug, Default, Clone)]
pub struct DayBucket {
    /// Sum over *all* entries of the day, regardless of location.
    pub total_seconds: i64,
    pub onsite_seconds: i64,
    pub offsite_seconds: i64,
    /// Lower-cased, trimmed activity names seen that day (deduplicated,
    /// insertion order).
    pub activities: Vec<String>,
    /// Label symbols from labeled entries, in row-encounter order.
    /// Collected in the aggregation pass; cell resolution never rescans
    /// the raw entry list.
    pub labels: Vec<String>,
}

impl DayBucket {
    fn absorb(&mut self, row: &EntryRow, location: Location) {
        self.total_seconds += row.duration_seconds;
        match location {
            Location::Onsite => self.onsite_seconds += row.duration_seconds,
            Location::Offsite => self.offsite_seconds += row.duration_seconds,
            // unspecified contributes to the day total only
            Location::Unspecified => {}
        }

        let activity = row.activity_normalized();
        if !activity.is_empty() && !self.activities.contains(&activity) {
            self.activities.push(activity);
        }

        if row.is_labeled
            && let Some(symbol) = &row.label_symbol
            && !symbol.trim().is_empty()
        {
            self.labels.push(symbol.trim().to_string());
        }
    }
}

/// Per-key state: grand totals across the whole range plus the day buckets.
#[derive(Debug, Default, Clone)]
pub struct KeyAggregate {
    pub role: String,
    pub total_seconds: i64,
    pub onsite_seconds: i64,
    pub offsite_seconds: i64,
    pub days: HashMap<NaiveDate, DayBucket>,
}

/// Result of the aggregation pass. The `BTreeMap` on `ReportKey` already
/// yields (team, name) order when iterated.
#[derive(Debug, Default)]
pub struct Aggregates {
    pub by_key: BTreeMap<ReportKey, KeyAggregate>,
    /// Rows rejected as malformed (negative duration or unrecognized
    /// location). One bad row never aborts the report.
    pub skipped_rows: usize,
}

/// Single pass over the delivered rows.
pub fn aggregate(rows: &[EntryRow]) -> Aggregates {
    let mut out = Aggregates::default();

    for row in rows {
        if row.duration_seconds < 0 {
            out.skipped_rows += 1;
            continue;
        }

        let location = match Location::from_raw(&row.location) {
            Some(loc) => loc,
            None => {
                out.skipped_rows += 1;
                continue;
            }
        };

        let key = ReportKey::new(&row.username, &row.team_name);
        let agg = out.by_key.entry(key).or_default();

        if agg.role.is_empty() {
            agg.role = row.role.clone();
        }

        agg.total_seconds += row.duration_seconds;
        match location {
            Location::Onsite => agg.onsite_seconds += row.duration_seconds,
            Location::Offsite => agg.offsite_seconds += row.duration_seconds,
            Location::Unspecified => {}
        }

        agg.days.entry(row.workdate).or_default().absorb(row, location);
    }

    out
}
