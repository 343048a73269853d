use crate::cli::commands::{audit, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut store = open_store(cfg)?;
        let id = store.resolve(id)?;

        //
        // Confirmation prompt
        //
        if !*yes {
            let title = store.get(id).map(|t| t.title.clone()).unwrap_or_default();
            let prompt = format!("Delete '{}'? This action is irreversible.", title);
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        //
        // Execute deletion
        //
        let removed = store.delete(id)?;
        let short = removed.short_id();
        let message = format!("Deleted '{}'", removed.title);

        success(format!("{} [{}]", message, short));
        audit(&store, "del", &short, &message);
    }

    Ok(())
}
