use crate::cli::commands::{audit, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::form::TodoForm;
use crate::errors::{AppError, AppResult};
use crate::models::filter::ListFilter;
use crate::ui::messages::{info, success, warning};
use crate::utils::{date, format_estimate};
use chrono::Local;

/// Add a new task.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        title,
        details,
        hours,
        minutes,
        due,
        today,
    } = cmd
    {
        //
        // 1. Fill the form, starting from its defaults
        //
        let filter = if *today {
            ListFilter::Today
        } else {
            ListFilter::All
        };
        let mut form = TodoForm::new(filter, Local::now());
        form.title = title.clone();

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

        if hours.is_some_and(|h| h != form.hours() as u32)
            || minutes.is_some_and(|m| m != form.minutes() as u32)
        {
            info(format!(
                "Estimate adjusted to {}",
                format_estimate(form.hours(), form.minutes())
            ));
        }

        //
        // 2. Blank titles never reach the store
        //
        if !form.can_submit() {
            warning("The title is empty: nothing was added.");
            return Ok(());
        }

        //
        // 3. Submit
        //
        let mut store = open_store(cfg)?;

        if let Some(id) = store.create(&form)
            && let Some(todo) = store.get(id)
        {
            let short = todo.short_id();
            let message = format!("Added '{}'", todo.title);
            success(format!("{} [{}]", message, short));
            audit(&store, "add", &short, &message);
        }
    }

    Ok(())
}
