use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::views;
use crate::errors::AppResult;
use crate::models::todo::Todo;
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREY, color_for_due, colorize, done_marker};
use crate::utils::formatting::{format_due, strikethrough};
use crate::utils::{format_estimate, mins2readable};
use crate::utils::table::{Column, Table};
use chrono::{DateTime, Local};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        filter,
        pending_only,
    } = cmd
    {
        let filter = filter.unwrap_or(cfg.default_filter);
        let store = open_store(cfg)?;
        let now = Local::now();

        if views::is_empty_view(store.todos(), filter) {
            info(filter.empty_message());
            return Ok(());
        }

        // pending section is always shown, done only when it has rows
        let pending = store.pending(filter);
        print_section(filter.pending_title(), &pending, cfg, &now);

        let planned: i64 = pending.iter().map(|t| t.estimate_minutes()).sum();
        if planned > 0 {
            println!("  Planned effort: {}", mins2readable(planned, false, false));
        }

        if !*pending_only {
            let done = store.done(filter);
            if !done.is_empty() {
                println!();
                print_section(filter.done_title(), &done, cfg, &now);
            }
        }
    }
    Ok(())
}

fn print_section(title: &str, todos: &[&Todo], cfg: &Config, now: &DateTime<Local>) {
    header(title);

    if todos.is_empty() {
        println!("  {}", colorize("(nothing pending)", GREY));
        return;
    }

    let mut table = Table::new(vec![
        Column::new(" "),
        Column::new("ID"),
        Column::new("Title"),
        Column::new("Due"),
        Column::new("Estimate"),
    ]);

    for t in todos {
        let title = if t.is_done {
            colorize(&strikethrough(&t.title), GREY)
        } else {
            t.title.clone()
        };
        let due = colorize(
            &format_due(&t.due_date, &cfg.date_format),
            color_for_due(&t.due_date, now, t.is_done),
        );

        table.add_row(vec![
            done_marker(t.is_done),
            t.short_id(),
            title,
            due,
            format_estimate(t.estimated_hours, t.estimated_minutes),
        ]);
    }

    print!("{}", table.render());
}
