use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::LogStore;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = LogStore::open(&cfg.database, 1, cfg.week_start)?;
        ExportLogic::export(&store, *format, file, *force)?;
    }
    Ok(())
}
