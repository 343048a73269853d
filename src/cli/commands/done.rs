use crate::cli::commands::{audit, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Toggle completion of a task.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Done { id } = cmd {
        let mut store = open_store(cfg)?;
        let id = store.resolve(id)?;

        let done = store.toggle_done(id)?;
        let (short, title) = match store.get(id) {
            Some(t) => (t.short_id(), t.title.clone()),
            None => return Ok(()),
        };

        let (operation, message) = if done {
            ("done", format!("Completed '{}'", title))
        } else {
            ("undone", format!("Back to pending: '{}'", title))
        };

        success(format!("{} [{}]", message, short));
        audit(&store, operation, &short, &message);
    }

    Ok(())
}
