use super::day_cell::DayCell;
use serde::Serialize;
use std::cmp::Ordering;

/// Identity of one pivot row.
///
/// Team is part of the identity, not a secondary attribute: a user booked
/// under two teams in the period yields two separate rows. Field order
/// matters: deriving `Ord` on (team, name) gives the byte-lexical report
/// order directly, instead of the old concatenated "user|team" string key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ReportKey {
    pub team: String,
    pub name: String,
}

impl ReportKey {
    pub fn new(name: &str, team: &str) -> Self {
        Self {
            team: team.to_string(),
            name: name.to_string(),
        }
    }
}

/// One output row of the team pivot report: aggregate columns followed by
/// one `DayCell` per date of the requested range.
#[derive(Debug, Clone, Serialize)]
pub struct PivotRow {
    pub name: String,
    pub role: String,
    pub team: String,
    pub total_work: f64, // hour.MM
    pub onsite: f64,     // hour.MM
    pub offsite: f64,    // hour.MM
    pub days: Vec<DayCell>,
}

impl PivotRow {
    pub const TOTALS_NAME: &'static str = "Totals";

    pub fn is_totals(&self) -> bool {
        self.name == Self::TOTALS_NAME
    }

    /// Report order: team ascending, ties broken by name.
    pub fn cmp_report_order(&self, other: &Self) -> Ordering {
        self.team
            .cmp(&other.team)
            .then_with(|| self.name.cmp(&other.name))
    }
}
