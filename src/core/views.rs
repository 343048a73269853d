//! Derived list views. Nothing here is stored; callers get borrows into the
//! store's list.

use crate::models::filter::ListFilter;
use crate::models::todo::Todo;

fn sorted_by_due<'a>(mut todos: Vec<&'a Todo>) -> Vec<&'a Todo> {
    // stable: equal due dates keep list order
    todos.sort_by_key(|t| t.due_date);
    todos
}

/// Unfinished tasks admitted by `filter`, earliest due first.
pub fn pending(todos: &[Todo], filter: ListFilter) -> Vec<&Todo> {
    sorted_by_due(
        todos
            .iter()
            .filter(|t| filter.admits(t) && !t.is_done)
            .collect(),
    )
}

/// Finished tasks admitted by `filter`, earliest due first.
pub fn done(todos: &[Todo], filter: ListFilter) -> Vec<&Todo> {
    sorted_by_due(
        todos
            .iter()
            .filter(|t| filter.admits(t) && t.is_done)
            .collect(),
    )
}

pub fn is_empty_view(todos: &[Todo], filter: ListFilter) -> bool {
    !todos.iter().any(|t| filter.admits(t))
}
