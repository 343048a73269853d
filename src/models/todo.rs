use super::estimate::{clamp_hours, snap_minutes, stored_count, total_minutes};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One to-do item.
///
/// `id` and `created_at` are fixed at construction and only exposed through
/// getters; everything else is edited in place by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "TodoRecord")]
pub struct Todo {
    id: Uuid,
    pub title: String,
    pub details: String,
    pub estimated_hours: u8,
    pub estimated_minutes: u8,
    pub due_date: DateTime<Local>,
    created_at: DateTime<Local>,
    pub is_done: bool,
    pub is_today: bool,
}

impl Todo {
    /// New pending task, due at its creation time.
    pub fn new(title: impl Into<String>, created_at: DateTime<Local>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            details: String::new(),
            estimated_hours: 0,
            estimated_minutes: 0,
            due_date: created_at,
            created_at,
            is_done: false,
            is_today: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    /// First 8 hex digits of the id, enough to address a task from the CLI.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }

    pub fn estimate_minutes(&self) -> i64 {
        total_minutes(self.estimated_hours, self.estimated_minutes)
    }
}

/// Stored shape of a task. Every field except `id` and `title` may be
/// missing in blobs written by older versions.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TodoRecord {
    id: Uuid,
    title: String,
    #[serde(default)]
    details: String,
    #[serde(default)]
    estimated_hours: f64,
    #[serde(default)]
    estimated_minutes: f64,
    due_date: Option<DateTime<Local>>,
    created_at: Option<DateTime<Local>>,
    #[serde(default)]
    is_done: bool,
    #[serde(default)]
    is_today: bool,
}

impl From<TodoRecord> for Todo {
    fn from(rec: TodoRecord) -> Self {
        let created_at = rec.created_at.unwrap_or_else(Local::now);
        Self {
            id: rec.id,
            title: rec.title,
            details: rec.details,
            estimated_hours: clamp_hours(stored_count(rec.estimated_hours)),
            estimated_minutes: snap_minutes(stored_count(rec.estimated_minutes)),
            due_date: rec.due_date.unwrap_or(created_at),
            created_at,
            is_done: rec.is_done,
            is_today: rec.is_today,
        }
    }
}
