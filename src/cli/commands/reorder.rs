use crate::cli::commands::{audit, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// Move a task within the stored list.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Move { id, position } = cmd {
        if *position == 0 {
            return Err(AppError::InvalidPosition(*position));
        }

        let mut store = open_store(cfg)?;
        let id = store.resolve(id)?;

        let final_pos = store.move_to(id, position - 1)? + 1;
        let short = store.get(id).map(|t| t.short_id()).unwrap_or_default();
        let message = format!("Moved to position {}", final_pos);

        success(format!("{} [{}]", message, short));
        info("Lists are sorted by due date; the stored order only breaks ties.");
        audit(&store, "move", &short, &message);
    }

    Ok(())
}
