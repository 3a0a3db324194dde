//! Leave code resolution for zero-duration days.

use crate::core::duration;
use crate::models::DayCell;

/// Ordered (matcher, symbol) table used to turn recognized day-off
/// activities into short codes. Declaration order is the precedence order;
/// the table is passed into the report chain, not read from a global.
#[derive(Debug, Clone)]
pub struct LeaveMap {
    entries: Vec<(String, String)>,
}

impl Default for LeaveMap {
    /// The legacy production table.
    fn default() -> Self {
        Self::new(&[
            ("week off", "W"),
            ("week-off", "W"),
            ("comp-off", "C"),
            ("comp off", "C"),
            ("vacation", "V"),
            ("sick", "S"),
            ("emergency", "S"),
            ("sick/emergency", "S"),
            ("change request", "CR"),
            ("changerequest", "CR"),
        ])
    }
}

impl LeaveMap {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(m, s)| (m.to_string(), s.to_string()))
                .collect(),
        }
    }

    /// First symbol whose matcher appears in the given activity set,
    /// scanning in table-declaration order.
    fn match_activities(&self, activities: &[String]) -> Option<&str> {
        self.entries
            .iter()
            .find(|(matcher, _)| activities.iter().any(|a| a == matcher))
            .map(|(_, symbol)| symbol.as_str())
    }

    /// Resolve one (key, date) cell.
    ///
    /// Precedence, fixed and never ambiguous:
    /// 1. any worked time wins over any leave code;
    /// 2. an explicit per-activity label (first one in row order);
    /// 3. the static matcher table;
    /// 4. plain `0`.
    pub fn resolve(
        &self,
        day_total_seconds: i64,
        activities: &[String],
        labeled_symbols: &[String],
    ) -> DayCell {
        if day_total_seconds > 0 {
            return DayCell::Duration(duration::encode_seconds(day_total_seconds));
        }

        if let Some(symbol) = labeled_symbols.first() {
            return DayCell::Leave(symbol.clone());
        }

        match self.match_activities(activities) {
            Some(symbol) => DayCell::Leave(symbol.to_string()),
            None => DayCell::Zero,
        }
    }
}
