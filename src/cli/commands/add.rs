use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::models::StoredEntry;
use crate::db::pool::DbPool;
use crate::db::queries::insert_entry;
use crate::errors::{AppError, AppResult};
use crate::models::Location;
use crate::ui::messages::success;
use chrono::NaiveDate;

/// Add one timesheet entry row.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        user_id,
        user,
        role,
        team,
        location,
        seconds,
        project,
        activity,
        jira_ids,
        description,
        label,
    } = cmd
    {
        let workdate = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| AppError::InvalidDate(date.to_string()))?;

        // --loc omitted falls back to the configured default_location.
        let location = location
            .clone()
            .unwrap_or_else(|| cfg.default_location.clone());

        // Unknown locations are rejected at insert time.
        if Location::from_raw(&location).is_none() {
            return Err(AppError::InvalidLocation(format!(
                "'{}'. Use 'on-site', 'off-site' or 'unspecified'",
                location
            )));
        }

        if *seconds < 0 {
            return Err(AppError::Other(format!(
                "duration must be >= 0 seconds, got {seconds}"
            )));
        }

        let entry = StoredEntry {
            user_id: *user_id,
            username: user.clone(),
            role: role.clone(),
            team: team.clone(),
            workdate,
            location,
            duration_seconds: *seconds,
            project: project.clone(),
            activity: activity.clone(),
            jira_ids: jira_ids.clone(),
            description: description.clone(),
            label_enabled: label.is_some(),
            label_symbol: label.clone(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        insert_entry(&mut pool, &entry)?;

        success(format!("Entry added for {} on {}", user, date));
    }
    Ok(())
}
