use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::kv::SqliteKv;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let kv = SqliteKv::open(&cfg.database)?;
        LogLogic::print_log(kv.conn())?;
    }

    Ok(())
}
