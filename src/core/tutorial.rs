//! The two explanatory tasks inserted on the very first run.

use crate::models::todo::Todo;
use chrono::{DateTime, Local};

pub fn tutorial_todos(now: DateTime<Local>) -> Vec<Todo> {
    let mut first = Todo::new("Welcome! Complete a task with `rtodo done <id>`", now);
    first.details = "Run `rtodo today <id>` to put a task in today's list, \
                     and `rtodo del <id>` to delete it. The id is the short code \
                     shown in `rtodo list`."
        .to_string();

    let mut second = Todo::new("This task is in today's list", now);
    second.details = "`rtodo list --filter today` shows only today's tasks. \
                      Run `rtodo today <id>` again to take a task out of today."
        .to_string();
    second.is_today = true;

    vec![first, second]
}
