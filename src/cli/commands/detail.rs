use crate::cli::commands::pivot::render_or_export;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{DateRange, build_detail_report};
use crate::db::pool::DbPool;
use crate::db::queries::{EntryFilter, fetch_detail_entries};
use crate::errors::AppResult;
use crate::export::detail_to_table;

/// Handle the `detail` command: per-user work item report.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Detail {
        user,
        range,
        project,
        include_cr,
        format,
        file,
        force,
    } = cmd
    {
        let range = DateRange::parse(range)?;

        let filter = EntryFilter {
            team: None,
            project: project.clone(),
            users: vec![user.clone()],
            include_cr: *include_cr || cfg.include_cr,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let entries = fetch_detail_entries(&mut pool, &range, &filter)?;
        let rows = build_detail_report(&entries);

        if rows.is_empty() {
            println!("No data for the selected range.");
            return Ok(());
        }

        let out = detail_to_table(&rows);
        render_or_export(&out, format, file, *force)
    } else {
        Ok(())
    }
}
