pub mod add;
pub mod config;
pub mod del;
pub mod done;
pub mod edit;
pub mod init;
pub mod list;
pub mod log;
pub mod reorder;
pub mod settings;
pub mod show;
pub mod today;

use crate::config::Config;
use crate::core::store::TodoStore;
use crate::db::kv::SqliteKv;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;

pub type CliStore = TodoStore<SqliteKv>;

/// Open the configured database and load the task list.
pub fn open_store(cfg: &Config) -> AppResult<CliStore> {
    let kv = SqliteKv::open(&cfg.database)?;
    TodoStore::load(kv)
}

/// Record a completed mutation in the internal log.
pub fn audit(store: &CliStore, operation: &str, target: &str, message: &str) {
    ttlog_quiet(store.backend().conn(), operation, target, message);
}
