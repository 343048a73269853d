//! First-run overlay. Its flag lives next to the task data but is
//! independent of it: resetting one never touches the other.

use crate::db::kv::KeyValueStore;
use crate::errors::AppResult;
use crate::ui::messages::header;

pub const ONBOARDING_SHOWN_KEY: &str = "onboarding_shown_key";

const OVERLAY: &[&str] = &[
    "rtodo keeps your tasks on this device.",
    "",
    "  rtodo add \"Buy milk\"        add a task (--today to plan it for today)",
    "  rtodo list --filter today   show today's tasks",
    "  rtodo done <id>             mark a task done, or undo it",
    "  rtodo today <id>            move a task in or out of today",
    "  rtodo del <id>              delete a task",
    "",
    "Two tutorial tasks are waiting in your list.",
];

pub fn should_show<S: KeyValueStore>(kv: &S) -> bool {
    !kv.get_flag(ONBOARDING_SHOWN_KEY)
}

pub fn mark_shown<S: KeyValueStore>(kv: &mut S) -> AppResult<()> {
    kv.set_flag(ONBOARDING_SHOWN_KEY, true)
}

pub fn reset<S: KeyValueStore>(kv: &mut S) -> AppResult<()> {
    kv.remove(ONBOARDING_SHOWN_KEY)
}

/// Print the overlay if it has never been shown. Returns whether it was
/// printed.
pub fn show_if_first_run<S: KeyValueStore>(kv: &mut S) -> AppResult<bool> {
    if !should_show(kv) {
        return Ok(false);
    }

    header("Welcome to rtodo");
    for line in OVERLAY {
        println!("{}", line);
    }
    println!();

    mark_shown(kv)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::{TODOS_KEY, TodoStore};
    use crate::db::kv::MemoryKv;

    #[test]
    fn shown_once_until_reset() {
        let mut kv = MemoryKv::new();
        assert!(show_if_first_run(&mut kv).unwrap());
        assert!(!show_if_first_run(&mut kv).unwrap());

        reset(&mut kv).unwrap();
        assert!(should_show(&kv));
    }

    #[test]
    fn independent_of_task_data() {
        let mut kv = MemoryKv::new();
        mark_shown(&mut kv).unwrap();

        let store = TodoStore::load(kv).unwrap();
        let mut kv = store.into_backend();
        assert!(kv.get(TODOS_KEY).unwrap().is_some());
        assert!(!should_show(&kv));

        reset(&mut kv).unwrap();
        assert!(kv.get(TODOS_KEY).unwrap().is_some());
    }
}
