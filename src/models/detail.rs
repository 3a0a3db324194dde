use chrono::NaiveDate;
use serde::Serialize;

/// One raw row of the per-user detail feed. The detail query already groups
/// by (workdate, project, activity, jira, description) and sums the duration,
/// so a row here is one work item, not one clock event.
#[derive(Debug, Clone, Serialize)]
pub struct DetailEntryRow {
    pub username: String,
    pub workdate: NaiveDate,
    pub weekday: String,
    pub project_name: String,
    pub activity_name: String,
    pub duration_seconds: i64,
    pub jira_ids: String,
    pub description: String,
}

/// One output row of the per-user detail report.
/// No pivot, no leave substitution, no totals row; row order follows the
/// order entries are delivered by the feed.
#[derive(Debug, Clone, Serialize)]
pub struct DetailRow {
    pub name: String,
    pub workdate: String, // formatted d-Mon-YYYY
    pub weekday: String,
    pub hours: f64, // hour.MM
    pub project: String,
    pub jira_ids: String,
    pub description: String,
    pub component: String,
}
