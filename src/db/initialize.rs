use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the `entries` table if missing.
///
/// One row per booked work item, mirroring what the upstream tracker
/// records: who, when, where, how long, on what, plus the per-activity
/// label used by the leave resolver.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id          INTEGER NOT NULL,
            username         TEXT NOT NULL,
            role             TEXT NOT NULL DEFAULT '',
            team             TEXT NOT NULL DEFAULT '',
            workdate         TEXT NOT NULL,
            location         TEXT NOT NULL DEFAULT '',
            duration_seconds INTEGER NOT NULL DEFAULT 0,
            project          TEXT NOT NULL DEFAULT '',
            activity         TEXT NOT NULL DEFAULT '',
            jira_ids         TEXT NOT NULL DEFAULT '',
            description      TEXT NOT NULL DEFAULT '',
            label_enabled    INTEGER NOT NULL DEFAULT 0,
            label_symbol     TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_entries_workdate ON entries (workdate);
        CREATE INDEX IF NOT EXISTS idx_entries_username ON entries (username);
        "#,
    )?;
    Ok(())
}
