//! The task store: single in-memory source of truth for the ordered task
//! list, mirrored to a [`KeyValueStore`] as one JSON blob.
//!
//! Every mutation goes through the same path: apply the change, rewrite the
//! whole list to storage, then notify observers. There is no batching and no
//! pending state.

use crate::core::form::TodoForm;
use crate::core::tutorial::tutorial_todos;
use crate::core::views;
use crate::db::kv::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::filter::ListFilter;
use crate::models::todo::Todo;
use chrono::{DateTime, Local};
use uuid::Uuid;

pub const TODOS_KEY: &str = "todos_key";
pub const TUTORIAL_SEEDED_KEY: &str = "tutorial_seeded_key";

type Observer = Box<dyn FnMut(&[Todo])>;

pub struct TodoStore<S: KeyValueStore> {
    backend: S,
    todos: Vec<Todo>,
    persisted: bool,
    observers: Vec<Observer>,
}

impl<S: KeyValueStore> TodoStore<S> {
    /// Load the saved list, seeding the tutorial tasks on the first run.
    ///
    /// Fails only when the backend cannot be read; nothing is written then.
    pub fn load(backend: S) -> AppResult<Self> {
        Self::load_at(backend, Local::now())
    }

    /// Like [`TodoStore::load`] with an explicit clock reading for the
    /// tutorial tasks.
    pub fn load_at(backend: S, now: DateTime<Local>) -> AppResult<Self> {
        // missing or undecodable data is the same as an empty list
        let todos = match backend.get(TODOS_KEY)? {
            Some(bytes) => serde_json::from_slice::<Vec<Todo>>(&bytes).unwrap_or_default(),
            None => Vec::new(),
        };
        let seeded = backend.read_flag(TUTORIAL_SEEDED_KEY)?;

        let mut store = Self {
            backend,
            todos,
            persisted: true,
            observers: Vec::new(),
        };

        if !seeded {
            store.seed_tutorial(now);
        }

        Ok(store)
    }

    /// The flag goes first: if it cannot be written the tutorial is left
    /// out of this run, so a later run never finds it saved twice.
    fn seed_tutorial(&mut self, now: DateTime<Local>) {
        if self.backend.set_flag(TUTORIAL_SEEDED_KEY, true).is_err() {
            self.persisted = false;
            return;
        }
        self.todos.splice(0..0, tutorial_todos(now));
        self.save();
    }

    fn try_save(&mut self) -> AppResult<()> {
        let blob = serde_json::to_vec(&self.todos)?;
        self.backend.set(TODOS_KEY, &blob)
    }

    /// Rewrite the whole list to storage. A failed write is dropped: the
    /// in-memory list stays authoritative and `is_persisted()` reports
    /// `false` until a later save succeeds.
    pub fn save(&mut self) {
        self.persisted = self.try_save().is_ok();
    }

    fn commit(&mut self) {
        self.save();
        for observer in &mut self.observers {
            observer(&self.todos);
        }
    }

    /// Register a callback run after every mutation, once the list is saved.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&[Todo]) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn get(&self, id: Uuid) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id() == id)
    }

    /// Position of a task in the list, 0-based.
    pub fn position(&self, id: Uuid) -> Option<usize> {
        self.todos.iter().position(|t| t.id() == id)
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    pub fn pending(&self, filter: ListFilter) -> Vec<&Todo> {
        views::pending(&self.todos, filter)
    }

    pub fn done(&self, filter: ListFilter) -> Vec<&Todo> {
        views::done(&self.todos, filter)
    }

    /// Resolve a full id or a unique prefix of one (hyphens optional).
    pub fn resolve(&self, query: &str) -> AppResult<Uuid> {
        let q = query.trim().to_lowercase().replace('-', "");
        if q.is_empty() {
            return Err(AppError::TaskNotFound(query.to_string()));
        }

        let mut matches = self
            .todos
            .iter()
            .map(Todo::id)
            .filter(|id| id.simple().to_string().starts_with(&q));

        match (matches.next(), matches.next()) {
            (Some(id), None) => Ok(id),
            (Some(_), Some(_)) => Err(AppError::AmbiguousId(query.to_string())),
            (None, _) => Err(AppError::TaskNotFound(query.to_string())),
        }
    }

    fn find_mut(&mut self, id: Uuid) -> AppResult<&mut Todo> {
        self.todos
            .iter_mut()
            .find(|t| t.id() == id)
            .ok_or_else(|| AppError::TaskNotFound(id.to_string()))
    }

    // ---------------------------
    // Mutations
    // ---------------------------

    /// Append a task built from `form`. Blank titles are a no-op.
    pub fn create(&mut self, form: &TodoForm) -> Option<Uuid> {
        let todo = form.build(Local::now())?;
        let id = todo.id();
        self.todos.push(todo);
        self.commit();
        Some(id)
    }

    /// Flip completion; returns the new state.
    pub fn toggle_done(&mut self, id: Uuid) -> AppResult<bool> {
        let todo = self.find_mut(id)?;
        todo.is_done = !todo.is_done;
        let state = todo.is_done;
        self.commit();
        Ok(state)
    }

    /// Flip today membership; returns the new state.
    pub fn toggle_today(&mut self, id: Uuid) -> AppResult<bool> {
        let todo = self.find_mut(id)?;
        todo.is_today = !todo.is_today;
        let state = todo.is_today;
        self.commit();
        Ok(state)
    }

    pub fn set_today(&mut self, id: Uuid, value: bool) -> AppResult<()> {
        self.find_mut(id)?.is_today = value;
        self.commit();
        Ok(())
    }

    /// Overwrite title, details, estimate and due date. Returns `false` and
    /// changes nothing when the form's title is blank.
    pub fn edit(&mut self, id: Uuid, form: &TodoForm) -> AppResult<bool> {
        if !form.apply_to(self.find_mut(id)?) {
            return Ok(false);
        }
        self.commit();
        Ok(true)
    }

    /// Remove one task; the others keep their relative order.
    pub fn delete(&mut self, id: Uuid) -> AppResult<Todo> {
        let idx = self
            .position(id)
            .ok_or_else(|| AppError::TaskNotFound(id.to_string()))?;
        let removed = self.todos.remove(idx);
        self.commit();
        Ok(removed)
    }

    /// Move a task to `position` (0-based); positions past the end move it
    /// to the end. Returns the final position.
    pub fn move_to(&mut self, id: Uuid, position: usize) -> AppResult<usize> {
        let from = self
            .position(id)
            .ok_or_else(|| AppError::TaskNotFound(id.to_string()))?;
        let todo = self.todos.remove(from);
        let to = position.min(self.todos.len());
        self.todos.insert(to, todo);
        self.commit();
        Ok(to)
    }
}
