use crate::models::filter::ListFilter;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rtodo
#[derive(Parser)]
#[command(
    name = "rtodo",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple personal to-do list: plan today's tasks and keep them on this device",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update, no onboarding)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a new task
    Add {
        /// Task title
        title: String,

        #[arg(long, short = 'd', help = "Free-text details")]
        details: Option<String>,

        #[arg(long = "hours", help = "Estimated hours (0-12)")]
        hours: Option<u32>,

        #[arg(long = "minutes", help = "Estimated minutes (0, 15, 30 or 45)")]
        minutes: Option<u32>,

        #[arg(
            long = "due",
            help = "Due date: YYYY-MM-DD, 'YYYY-MM-DD HH:MM', today or tomorrow"
        )]
        due: Option<String>,

        #[arg(long = "today", short = 't', help = "Put the task in today's list")]
        today: bool,
    },

    /// List tasks: pending first, then done, each sorted by due date
    List {
        #[arg(
            long,
            short,
            value_enum,
            help = "all = tasks not planned for today, today = today's tasks"
        )]
        filter: Option<ListFilter>,

        #[arg(long = "pending", help = "Hide the done section")]
        pending_only: bool,
    },

    /// Show every field of one task
    Show {
        /// Task id (or a unique prefix)
        id: String,
    },

    /// Edit an existing task
    Edit {
        /// Task id (or a unique prefix)
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long, short = 'd')]
        details: Option<String>,

        #[arg(long = "hours", help = "Estimated hours (0-12)")]
        hours: Option<u32>,

        #[arg(long = "minutes", help = "Estimated minutes (0, 15, 30 or 45)")]
        minutes: Option<u32>,

        #[arg(long = "due")]
        due: Option<String>,
    },

    /// Mark a task as done, or back to pending
    Done {
        /// Task id (or a unique prefix)
        id: String,
    },

    /// Put a task in today's list, or take it out
    Today {
        /// Task id (or a unique prefix)
        id: String,

        #[arg(long = "on", conflicts_with = "off", help = "Always put it in today's list")]
        on: bool,

        #[arg(long = "off", help = "Always take it out of today's list")]
        off: bool,
    },

    /// Delete a task
    Del {
        /// Task id (or a unique prefix)
        id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Move a task to another position of the stored list
    Move {
        /// Task id (or a unique prefix)
        id: String,

        /// New position, starting at 1
        position: usize,
    },

    /// Settings: app info, privacy policy, onboarding
    Settings {
        #[arg(long = "open-privacy", help = "Open the privacy policy in the browser")]
        open_privacy: bool,

        #[arg(
            long = "reset-onboarding",
            help = "Show the welcome screen again on the next run"
        )]
        reset_onboarding: bool,
    },
}

impl Commands {
    /// Commands that count as "using the app" and may show the first-run
    /// overlay.
    pub fn shows_onboarding(&self) -> bool {
        !matches!(
            self,
            Commands::Init | Commands::Config { .. } | Commands::Log { .. } | Commands::Settings { .. }
        )
    }
}
