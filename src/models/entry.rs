use chrono::NaiveDate;
use serde::Serialize;

/// Work location of a single timesheet entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Location {
    Onsite,      // on-site
    Offsite,     // off-site
    Unspecified, // no location recorded
}

impl Location {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Location::Onsite => "on-site",
            Location::Offsite => "off-site",
            Location::Unspecified => "",
        }
    }

    /// Parse a raw location value.
    /// Accepts the dashed DB spelling and the plain one; an empty or NULL
    /// value is a valid `Unspecified`. Anything else is rejected by the
    /// aggregator as a malformed row.
    pub fn from_raw(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "on-site" | "onsite" => Some(Location::Onsite),
            "off-site" | "offsite" => Some(Location::Offsite),
            "" | "unspecified" => Some(Location::Unspecified),
            _ => None,
        }
    }
}

/// One raw timesheet entry as delivered by the row feed.
///
/// Rows arrive already filtered (user set, date window, optional project and
/// team, CR filter); the aggregation core never re-applies those filters.
#[derive(Debug, Clone, Serialize)]
pub struct EntryRow {
    pub user_id: i64,
    pub username: String,
    pub role: String,
    pub team_name: String,
    pub workdate: NaiveDate,       // ⇔ entries.workdate (TEXT "YYYY-MM-DD")
    pub location: String,          // raw value, normalized by the aggregator
    pub duration_seconds: i64,     // must be >= 0, rejected otherwise
    pub activity_name: String,
    pub is_labeled: bool,          // ⇔ entries.label_enabled
    pub label_symbol: Option<String>,
}

impl EntryRow {
    /// Activity name the way the leave resolver sees it.
    pub fn activity_normalized(&self) -> String {
        self.activity_name.trim().to_lowercase()
    }
}
