use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use rusqlite::Connection;

/// Handle the `init` command: create the config directory, the
/// configuration file and the SQLite schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    info(format!("Config file : {}", Config::config_file().display()));
    info(format!("Database    : {}", &cfg.database));

    let conn = Connection::open(&cfg.database)?;
    init_db(&conn)?;

    success(format!("Database initialized at {}", &cfg.database));
    Ok(())
}
