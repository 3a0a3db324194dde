use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rtimesheet
/// CLI application to aggregate timesheet entries into attendance reports
#[derive(Parser)]
#[command(
    name = "rtimesheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Aggregate raw timesheet entries into attendance pivot reports with leave codes and minute-exact totals",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Add one timesheet entry row
    Add {
        /// Work date (YYYY-MM-DD)
        date: String,

        #[arg(long, help = "User id")]
        user_id: i64,

        #[arg(long, help = "Username (report display name)")]
        user: String,

        #[arg(long, default_value = "", help = "Role / job title")]
        role: String,

        #[arg(long, default_value = "", help = "Team name")]
        team: String,

        #[arg(
            long = "loc",
            help = "Location: on-site, off-site, or 'unspecified' (defaults to the configured default_location)"
        )]
        location: Option<String>,

        #[arg(long, help = "Worked duration in seconds")]
        seconds: i64,

        #[arg(long, default_value = "", help = "Project name")]
        project: String,

        #[arg(long, default_value = "", help = "Activity name")]
        activity: String,

        #[arg(long = "jira", default_value = "", help = "Comma-separated Jira ids")]
        jira_ids: String,

        #[arg(long, default_value = "", help = "Free-text description")]
        description: String,

        #[arg(long, help = "Leave label symbol for the day (marks the entry as labeled)")]
        label: Option<String>,
    },

    /// Team pivot report: one row per (user, team), one column per day
    Pivot {
        #[arg(
            long,
            short,
            value_name = "RANGE",
            help = "Report period: YYYY, YYYY-MM, YYYY-MM-DD or start:end"
        )]
        range: String,

        #[arg(long, help = "Restrict to one team")]
        team: Option<String>,

        #[arg(long, help = "Restrict to one project")]
        project: Option<String>,

        #[arg(long = "user", help = "Restrict to the given username(s) (repeatable)")]
        users: Vec<String>,

        #[arg(long = "include-cr", help = "Include change-request sentinel rows")]
        include_cr: bool,

        #[arg(long, value_enum, help = "Export format (prints a table when omitted)")]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE", requires = "format")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Per-user detail report: one row per work item, no pivot
    Detail {
        #[arg(long, help = "Username to report on")]
        user: String,

        #[arg(
            long,
            short,
            value_name = "RANGE",
            help = "Report period: YYYY, YYYY-MM, YYYY-MM-DD or start:end"
        )]
        range: String,

        #[arg(long, help = "Restrict to one project")]
        project: Option<String>,

        #[arg(long = "include-cr", help = "Include change-request sentinel rows")]
        include_cr: bool,

        #[arg(long, value_enum, help = "Export format (prints a table when omitted)")]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE", requires = "format")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
