use crate::cli::commands::{audit, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::form::TodoForm;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::date;

/// Edit title, details, estimate or due date of a task.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        title,
        details,
        hours,
        minutes,
        due,
    } = cmd
    {
        let mut store = open_store(cfg)?;
        let id = store.resolve(id)?;
        let Some(todo) = store.get(id) else {
            return Err(AppError::TaskNotFound(id.to_string()));
        };
        let short = todo.short_id();

        //
        // 1. Start from the current values
        //
        let mut form = TodoForm::from_todo(todo);
        let original = form.clone();

        if let Some(t) = title {
            form.title = t.clone();
        }
        if let Some(d) = details {
            form.details = d.clone();
        }
        if let Some(h) = hours {
            form.set_hours(*h);
        }
        if let Some(m) = minutes {
            form.set_minutes(*m);
        }
        if let Some(d) = due {
            form.due_date = date::parse_due(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
        }

        if form == original {
            info("Nothing to change.");
            return Ok(());
        }

        //
        // 2. Submit
        //
        if !store.edit(id, &form)? {
            warning("The title is empty: the task was not changed.");
            return Ok(());
        }

        let message = format!("Edited '{}'", form.title.trim());
        success(format!("{} [{}]", message, short));
        audit(&store, "edit", &short, &message);
    }

    Ok(())
}
