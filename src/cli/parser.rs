use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for worklog
/// Work-log service with a SQLite store
#[derive(Parser)]
#[command(
    name = "worklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal work-log service: record hours per category and query weekly and per-category totals",
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

    /// Run the HTTP service
    Serve {
        /// Address to listen on (overrides `bind_address` from the config file)
        #[arg(long = "bind", value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, information)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print aggregated statistics
    Stats {
        #[arg(long = "weekly", help = "Show totals for the most recent weeks")]
        weekly: bool,

        #[arg(long = "categories", help = "Show totals per category")]
        categories: bool,
    },

    /// Export all entries to a file
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the file if it exists")]
        force: bool,
    },
}
