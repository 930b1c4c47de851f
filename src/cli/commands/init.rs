use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::open_pool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    info("Initializing worklog…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Database    : {}", cfg.database));

    let pool = open_pool(&cfg.database, 1)?;
    let applied = pool.with_conn(crate::db::migrate::applied_versions)?;

    success(format!(
        "Database initialized at {} ({} migrations applied)",
        cfg.database,
        applied.len()
    ));
    Ok(())
}
