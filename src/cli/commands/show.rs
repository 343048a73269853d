use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::todo::Todo;
use crate::ui::messages::header;
use crate::utils::format_estimate;
use crate::utils::formatting::{bold, format_due};

const DETAILS_WIDTH: usize = 72;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let store = open_store(cfg)?;
        let id = store.resolve(id)?;

        if let Some(todo) = store.get(id) {
            print_detail(todo, cfg);
        }
    }
    Ok(())
}

fn print_detail(todo: &Todo, cfg: &Config) {
    header("Task details");
    println!("{}\n", bold(&todo.title));

    let status = if todo.is_done {
        "✅ Done"
    } else {
        "⏳ Pending"
    };
    let today = if todo.is_today { "yes" } else { "no" };

    println!("ID        : {}", todo.id());
    println!("Status    : {}", status);
    println!("Today     : {}", today);
    println!(
        "Due       : {}",
        format_due(&todo.due_date, &cfg.date_format)
    );
    println!(
        "Estimate  : {}",
        format_estimate(todo.estimated_hours, todo.estimated_minutes)
    );
    println!(
        "Created   : {}",
        todo.created_at().format("%Y-%m-%d %H:%M")
    );

    if !todo.details.trim().is_empty() {
        println!("\nDetails:");
        let opts = textwrap::Options::new(DETAILS_WIDTH)
            .initial_indent("  ")
            .subsequent_indent("  ");
        for line in textwrap::wrap(&todo.details, opts) {
            println!("{}", line);
        }
    }
}
