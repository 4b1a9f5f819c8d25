//! The task store: the single authoritative holder of tasks and UI selection.
//!
//! A [`TaskStore`] owns the task sequence, the selected date and the active
//! category filter. It is constructed explicitly and handed to its consumers;
//! nothing else keeps a copy of the task data. Every mutation runs to
//! completion and then writes a full snapshot through the store's
//! [`Persistence`] backend (write-through, no batching).
//!
//! The store performs no field validation. Callers validate input first, see
//! [`crate::libs::validation`].
//!
//! ```rust
//! use taskcal::libs::persistence::MemorySlot;
//! use taskcal::libs::store::TaskStore;
//! use taskcal::libs::task::{Category, NewTask};
//! use chrono::NaiveDate;
//!
//! let mut store = TaskStore::open(MemorySlot::new());
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let id = store.add_task(NewTask::new("Pay rent", date, Category::Issue));
//! assert!(store.task(&id).is_some());
//! ```

use super::persistence::Persistence;
use super::task::{Category, FilterCategory, NewTask, Task, TaskPatch};
use chrono::{Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Id of the built-in sample task.
pub const SEED_TASK_ID: &str = "1";

/// Complete store state; also the snapshot wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    pub tasks: Vec<Task>,
    pub selected_date: NaiveDate,
    pub filter_category: FilterCategory,
}

impl StoreState {
    /// Default state: one sample task dated `today`, no filter.
    pub fn seed(today: NaiveDate) -> Self {
        StoreState {
            tasks: vec![Task {
                id: SEED_TASK_ID.to_string(),
                title: "Sample Task".to_string(),
                description: Some("This is a sample task".to_string()),
                date: today,
                category: Category::Info,
                created_at: Utc::now(),
            }],
            selected_date: today,
            filter_category: FilterCategory::All,
        }
    }
}

/// A snapshot as read back from storage.
///
/// Any field may be missing from the stored blob; missing fields keep the
/// value of the state it is merged over.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default)]
    pub tasks: Option<Vec<Task>>,
    #[serde(default)]
    pub selected_date: Option<NaiveDate>,
    #[serde(default)]
    pub filter_category: Option<FilterCategory>,
}

impl PersistedState {
    pub fn merge_over(self, base: StoreState) -> StoreState {
        StoreState {
            tasks: self.tasks.unwrap_or(base.tasks),
            selected_date: self.selected_date.unwrap_or(base.selected_date),
            filter_category: self.filter_category.unwrap_or(base.filter_category),
        }
    }
}

impl From<StoreState> for PersistedState {
    fn from(state: StoreState) -> Self {
        PersistedState {
            tasks: Some(state.tasks),
            selected_date: Some(state.selected_date),
            filter_category: Some(state.filter_category),
        }
    }
}

pub struct TaskStore<P: Persistence> {
    state: StoreState,
    persistence: P,
    last_issued_id: i64,
}

impl<P: Persistence> TaskStore<P> {
    /// Loads the persisted snapshot, falling back to the seed state for today.
    pub fn open(persistence: P) -> Self {
        Self::open_at(persistence, Local::now().date_naive())
    }

    /// Like [`TaskStore::open`] with an explicit "today" for the seed state.
    pub fn open_at(persistence: P, today: NaiveDate) -> Self {
        let seed = StoreState::seed(today);
        let state = match persistence.load() {
            Some(persisted) => {
                tracing::debug!("restored task state from storage");
                persisted.merge_over(seed)
            }
            None => {
                tracing::debug!("no stored task state, starting from seed");
                seed
            }
        };
        Self::with_state(state, persistence)
    }

    /// Wraps an existing state without reading storage.
    pub fn with_state(state: StoreState, persistence: P) -> Self {
        TaskStore {
            state,
            persistence,
            last_issued_id: 0,
        }
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.state.tasks.iter().find(|task| task.id == id)
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.state.selected_date
    }

    pub fn filter_category(&self) -> FilterCategory {
        self.state.filter_category
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Appends a new task and returns its id.
    pub fn add_task(&mut self, input: NewTask) -> String {
        let id = self.next_id();
        let task = Task {
            id: id.clone(),
            title: input.title,
            description: input.description,
            date: input.date,
            category: input.category,
            created_at: Utc::now(),
        };
        tracing::debug!(id = %task.id, date = %task.date, category = %task.category, "adding task");
        self.state.tasks.push(task);
        self.persist();
        id
    }

    /// Merges `patch` into the task with `id`.
    ///
    /// Returns `false` and changes nothing (not even storage) when no task
    /// has that id.
    pub fn edit_task(&mut self, id: &str, patch: &TaskPatch) -> bool {
        let Some(task) = self.state.tasks.iter_mut().find(|task| task.id == id) else {
            tracing::debug!(id, "edit ignored, no such task");
            return false;
        };
        task.apply(patch);
        self.persist();
        true
    }

    /// Removes the task with `id`; returns whether one was removed.
    ///
    /// The snapshot is written whether or not a task matched.
    pub fn delete_task(&mut self, id: &str) -> bool {
        let before = self.state.tasks.len();
        self.state.tasks.retain(|task| task.id != id);
        let removed = self.state.tasks.len() != before;
        if !removed {
            tracing::debug!(id, "delete found no such task");
        }
        self.persist();
        removed
    }

    pub fn set_selected_date(&mut self, date: NaiveDate) {
        self.state.selected_date = date;
        self.persist();
    }

    pub fn set_filter_category(&mut self, value: FilterCategory) {
        self.state.filter_category = value;
        self.persist();
    }

    fn persist(&mut self) {
        self.persistence.save(&self.state);
    }

    /// Millisecond timestamp token, strictly increasing within the process and
    /// never equal to an id already in the collection.
    fn next_id(&mut self) -> String {
        let mut candidate = Utc::now().timestamp_millis().max(self.last_issued_id + 1);
        while self.state.tasks.iter().any(|task| task.id == candidate.to_string()) {
            candidate += 1;
        }
        self.last_issued_id = candidate;
        candidate.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::persistence::MemorySlot;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn next_id_skips_ids_already_taken() {
        let taken = (Utc::now().timestamp_millis() + 1_000).to_string();
        let mut state = StoreState::seed(date(2024, 1, 1));
        state.tasks[0].id = taken.clone();
        let mut store = TaskStore::with_state(state, MemorySlot::new());
        store.last_issued_id = taken.parse::<i64>().unwrap() - 1;

        let id = store.add_task(NewTask::new("Follow-up", date(2024, 1, 1), Category::Info));
        assert_ne!(id, taken);
        assert_eq!(id.parse::<i64>().unwrap(), taken.parse::<i64>().unwrap() + 1);
    }

    #[test]
    fn edit_of_unknown_id_does_not_write() {
        let mut store = TaskStore::open_at(MemorySlot::new(), date(2024, 1, 1));
        assert!(!store.edit_task("999", &TaskPatch::default().title("Nope")));
        assert_eq!(store.persistence().writes(), 0);
    }

    #[test]
    fn partial_snapshot_keeps_seed_fields() {
        let slot = MemorySlot::with_raw(r#"{"filterCategory":"issue"}"#);
        let store = TaskStore::open_at(slot, date(2024, 3, 5));
        assert_eq!(store.filter_category(), FilterCategory::Only(Category::Issue));
        assert_eq!(store.selected_date(), date(2024, 3, 5));
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].id, SEED_TASK_ID);
    }
}
