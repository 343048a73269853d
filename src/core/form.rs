use crate::models::estimate::{clamp_hours, snap_minutes};
use crate::models::filter::ListFilter;
use crate::models::todo::Todo;
use chrono::{DateTime, Local};

/// Field values of the add/edit form.
///
/// Estimates can only hold values the pickers offer, so the setters clamp.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoForm {
    pub title: String,
    pub details: String,
    hours: u8,
    minutes: u8,
    pub due_date: DateTime<Local>,
    pub is_today: bool,
}

impl TodoForm {
    /// Blank form as opened from a list showing `filter`.
    pub fn new(filter: ListFilter, now: DateTime<Local>) -> Self {
        Self {
            title: String::new(),
            details: String::new(),
            hours: 0,
            minutes: 0,
            due_date: now,
            is_today: filter == ListFilter::Today,
        }
    }

    /// Form pre-filled with an existing task, for editing.
    pub fn from_todo(todo: &Todo) -> Self {
        Self {
            title: todo.title.clone(),
            details: todo.details.clone(),
            hours: todo.estimated_hours,
            minutes: todo.estimated_minutes,
            due_date: todo.due_date,
            is_today: todo.is_today,
        }
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn set_hours(&mut self, hours: u32) {
        self.hours = clamp_hours(hours);
    }

    pub fn set_minutes(&mut self, minutes: u32) {
        self.minutes = snap_minutes(minutes);
    }

    pub fn trimmed_title(&self) -> Option<String> {
        let t = self.title.trim();
        (!t.is_empty()).then(|| t.to_string())
    }

    /// Whether the submit action is enabled.
    pub fn can_submit(&self) -> bool {
        self.trimmed_title().is_some()
    }

    /// Build a new task, or `None` when the title is blank.
    pub fn build(&self, now: DateTime<Local>) -> Option<Todo> {
        let title = self.trimmed_title()?;
        let mut todo = Todo::new(title, now);
        todo.details = self.details.clone();
        todo.estimated_hours = self.hours;
        todo.estimated_minutes = self.minutes;
        todo.due_date = self.due_date;
        todo.is_today = self.is_today;
        Some(todo)
    }

    /// Overwrite the editable fields of `todo`. Completion and today
    /// membership are left alone. Returns `false` without touching anything
    /// when the title is blank.
    pub fn apply_to(&self, todo: &mut Todo) -> bool {
        let Some(title) = self.trimmed_title() else {
            return false;
        };
        todo.title = title;
        todo.details = self.details.clone();
        todo.estimated_hours = self.hours;
        todo.estimated_minutes = self.minutes;
        todo.due_date = self.due_date;
        true
    }
}
