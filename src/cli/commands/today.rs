use crate::cli::commands::{audit, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Put a task in today's list or take it out.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Today { id, on, off } = cmd {
        let mut store = open_store(cfg)?;
        let id = store.resolve(id)?;

        let in_today = if *on || *off {
            store.set_today(id, *on)?;
            *on
        } else {
            store.toggle_today(id)?
        };

        let Some(todo) = store.get(id) else {
            return Ok(());
        };
        let short = todo.short_id();

        let message = if in_today {
            format!("'{}' is in today's list", todo.title)
        } else {
            format!("'{}' removed from today's list", todo.title)
        };

        success(format!("{} [{}]", message, short));
        audit(&store, "today", &short, &message);
    }

    Ok(())
}
