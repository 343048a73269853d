use super::todo::Todo;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which working set a list view shows.
///
/// `All` shows the tasks that are *not* in today's list, so the two filters
/// partition the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ListFilter {
    #[default]
    All,
    Today,
}

impl ListFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListFilter::All => "all",
            ListFilter::Today => "today",
        }
    }

    pub fn admits(&self, todo: &Todo) -> bool {
        match self {
            ListFilter::All => !todo.is_today,
            ListFilter::Today => todo.is_today,
        }
    }

    pub fn pending_title(&self) -> &'static str {
        match self {
            ListFilter::All => "Planned",
            ListFilter::Today => "Today's plan",
        }
    }

    pub fn done_title(&self) -> &'static str {
        match self {
            ListFilter::All => "Done",
            ListFilter::Today => "Done today",
        }
    }

    /// Message shown when both sections are empty.
    pub fn empty_message(&self) -> &'static str {
        match self {
            ListFilter::All => "Add your first task",
            ListFilter::Today => "No tasks for today",
        }
    }
}
