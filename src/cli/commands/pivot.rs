use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{DateRange, LeaveMap, build_pivot_report};
use crate::db::pool::DbPool;
use crate::db::queries::{EntryFilter, fetch_pivot_entries};
use crate::errors::AppResult;
use crate::export::{ExportFormat, pivot_to_table, write_table};
use crate::ui::messages::warning;
use crate::ui::table;
use std::path::Path;

/// Handle the `pivot` command: fetch the filtered row feed, run the
/// aggregation chain, then print or export the result.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pivot {
        range,
        team,
        project,
        users,
        include_cr,
        format,
        file,
        force,
    } = cmd
    {
        // Range validation happens before any aggregation.
        let range = DateRange::parse(range)?;

        let filter = EntryFilter {
            team: team.clone(),
            project: project.clone(),
            users: users.clone(),
            include_cr: *include_cr || cfg.include_cr,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let entries = fetch_pivot_entries(&mut pool, &range, &filter)?;

        let report = build_pivot_report(&entries, &range, &LeaveMap::default());

        if report.skipped_rows > 0 {
            warning(format!(
                "{} malformed entry row(s) skipped",
                report.skipped_rows
            ));
        }

        if report.is_empty() {
            println!("No data for the selected range.");
            return Ok(());
        }

        let out = pivot_to_table(&report);
        render_or_export(&out, format, file, *force)
    } else {
        Ok(())
    }
}

pub(crate) fn render_or_export(
    out: &crate::export::ReportTable,
    format: &Option<ExportFormat>,
    file: &Option<String>,
    force: bool,
) -> AppResult<()> {
    match (format, file) {
        (Some(fmt), Some(path)) => write_table(out, fmt, Path::new(path), force),
        _ => {
            print!("{}", table::render(out));
            Ok(())
        }
    }
}
