//! Feed queries: everything the aggregation core consumes comes from here,
//! already filtered. The core never re-applies these filters.

use crate::core::range::DateRange;
use crate::db::models::StoredEntry;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{DetailEntryRow, EntryRow};
use chrono::NaiveDate;
use rusqlite::{Result, Row, ToSql};

/// Activity name excluded by the CR filter.
pub const CR_SENTINEL: &str = "CR";

/// Upstream filter set applied before rows reach the core.
#[derive(Debug, Default, Clone)]
pub struct EntryFilter {
    pub team: Option<String>,
    pub project: Option<String>,
    /// Restrict to the given usernames. Empty means no user restriction.
    pub users: Vec<String>,
    /// When false (the default), rows booked on the change-request sentinel
    /// activity are excluded from the feed.
    pub include_cr: bool,
}

pub fn insert_entry(pool: &mut DbPool, entry: &StoredEntry) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO entries
            (user_id, username, role, team, workdate, location,
             duration_seconds, project, activity, jira_ids, description,
             label_enabled, label_symbol)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        rusqlite::params![
            entry.user_id,
            entry.username,
            entry.role,
            entry.team,
            entry.workdate.format("%Y-%m-%d").to_string(),
            entry.location,
            entry.duration_seconds,
            entry.project,
            entry.activity,
            entry.jira_ids,
            entry.description,
            entry.label_enabled as i64,
            entry.label_symbol,
        ],
    )?;
    Ok(())
}

/// Row feed for the team pivot report.
pub fn fetch_pivot_entries(
    pool: &mut DbPool,
    range: &DateRange,
    filter: &EntryFilter,
) -> AppResult<Vec<EntryRow>> {
    let (sql_tail, params) = build_filter(range, filter);

    let sql = format!(
        "SELECT user_id, username, role, team, workdate, location,
                duration_seconds, activity, label_enabled, label_symbol
         FROM entries
         WHERE workdate BETWEEN ?1 AND ?2{sql_tail}
         ORDER BY username ASC, workdate ASC, id ASC"
    );

    let mut stmt = pool.conn.prepare(&sql)?;
    let rows = stmt.query_map(
        params
            .iter()
            .map(|p| p.as_ref())
            .collect::<Vec<&dyn ToSql>>()
            .as_slice(),
        map_pivot_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Row feed for the per-user detail report, one row per work item.
pub fn fetch_detail_entries(
    pool: &mut DbPool,
    range: &DateRange,
    filter: &EntryFilter,
) -> AppResult<Vec<DetailEntryRow>> {
    let (sql_tail, params) = build_filter(range, filter);

    let sql = format!(
        "SELECT username, workdate, project, activity,
                SUM(duration_seconds) AS duration_seconds, jira_ids, description
         FROM entries
         WHERE workdate BETWEEN ?1 AND ?2{sql_tail}
         GROUP BY workdate, project, activity, jira_ids, description, username
         ORDER BY project ASC, workdate ASC"
    );

    let mut stmt = pool.conn.prepare(&sql)?;
    let rows = stmt.query_map(
        params
            .iter()
            .map(|p| p.as_ref())
            .collect::<Vec<&dyn ToSql>>()
            .as_slice(),
        map_detail_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Shared WHERE-clause tail for both feeds: date window placeholders plus
/// the optional team/project/CR conditions, in placeholder order.
fn build_filter(range: &DateRange, filter: &EntryFilter) -> (String, Vec<Box<dyn ToSql>>) {
    let mut tail = String::new();
    let mut params: Vec<Box<dyn ToSql>> = vec![
        Box::new(range.start().format("%Y-%m-%d").to_string()),
        Box::new(range.end().format("%Y-%m-%d").to_string()),
    ];

    if let Some(team) = &filter.team {
        params.push(Box::new(team.clone()));
        tail.push_str(&format!(" AND team = ?{}", params.len()));
    }

    if let Some(project) = &filter.project {
        params.push(Box::new(project.clone()));
        tail.push_str(&format!(" AND project = ?{}", params.len()));
    }

    if !filter.users.is_empty() {
        let mut placeholders = Vec::with_capacity(filter.users.len());
        for user in &filter.users {
            params.push(Box::new(user.clone()));
            placeholders.push(format!("?{}", params.len()));
        }
        tail.push_str(&format!(" AND username IN ({})", placeholders.join(", ")));
    }

    if !filter.include_cr {
        params.push(Box::new(CR_SENTINEL.to_string()));
        tail.push_str(&format!(" AND activity <> ?{}", params.len()));
    }

    (tail, params)
}

fn parse_workdate(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(raw.to_string())),
        )
    })
}

fn map_pivot_row(row: &Row) -> Result<EntryRow> {
    let date_str: String = row.get("workdate")?;

    Ok(EntryRow {
        user_id: row.get("user_id")?,
        username: row.get("username")?,
        role: row.get("role")?,
        team_name: row.get("team")?,
        workdate: parse_workdate(&date_str)?,
        location: row.get("location")?,
        duration_seconds: row.get("duration_seconds")?,
        activity_name: row.get("activity")?,
        is_labeled: row.get::<_, i64>("label_enabled")? != 0,
        label_symbol: row.get("label_symbol")?,
    })
}

fn map_detail_row(row: &Row) -> Result<DetailEntryRow> {
    let date_str: String = row.get("workdate")?;
    let workdate = parse_workdate(&date_str)?;

    Ok(DetailEntryRow {
        username: row.get("username")?,
        workdate,
        weekday: workdate.format("%A").to_string(),
        project_name: row.get("project")?,
        activity_name: row.get("activity")?,
        duration_seconds: row.get("duration_seconds")?,
        jira_ids: row.get("jira_ids")?,
        description: row.get("description")?,
    })
}
