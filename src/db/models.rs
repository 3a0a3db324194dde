use chrono::NaiveDate;

/// Full `entries` row as written by `add` and read back by the feed
/// queries. Superset of the two core input shapes.
#[derive(Debug, Clone)]
pub struct StoredEntry {
    pub user_id: i64,
    pub username: String,
    pub role: String,
    pub team: String,
    pub workdate: NaiveDate,
    pub location: String,
    pub duration_seconds: i64,
    pub project: String,
    pub activity: String,
    pub jira_ids: String,
    pub description: String,
    pub label_enabled: bool,
    pub label_symbol: Option<String>,
}
