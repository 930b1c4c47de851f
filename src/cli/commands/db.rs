use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats::db_info;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW, colorize_optional};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        info,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database, 1)?;
        let conn = pool.get()?;

        //
        // 1) MIGRATE
        //
        if *migrate {
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            let applied = run_pending_migrations(&conn)?;
            println!(
                "{}✔ Migration completed ({} applied).{}\n",
                GREEN, applied, RESET
            );
        }

        //
        // 2) INFO
        //
        if *info {
            let summary = db_info(&conn, &cfg.database)?;
            let file_mb = (summary.file_size as f64) / (1024.0 * 1024.0);

            println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, cfg.database, RESET);
            println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);
            println!("{}• Entries:{} {}{}{}", CYAN, RESET, GREEN, summary.entries, RESET);
            println!("{}• Categories:{} {}", CYAN, RESET, summary.categories);
            println!("{}• Total hours:{} {:.1}", CYAN, RESET, summary.total_hours);
            println!("{}• Date range:{}", CYAN, RESET);
            println!("    from: {}", colorize_optional(summary.first_date.as_deref()));
            println!("    to:   {}", colorize_optional(summary.last_date.as_deref()));
            println!();
        }

        //
        // 3) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String =
                conn.query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }
    }

    Ok(())
}
