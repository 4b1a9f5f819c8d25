//! Core library modules for taskcal.
//!
//! ## Layout
//!
//! - **Model**: `task` (tasks, categories, filters, patches)
//! - **State**: `store` (the task store) and `persistence` (snapshot slots)
//! - **Derived views**: `query` (calendar and list selections) and
//!   `analytics` (counts, 7-day history, completion rate)
//! - **Input**: `validation` for form values before they reach the store
//! - **Infrastructure**: `config`, `data_storage`, `error`, `messages`
//! - **Presentation**: `formatter` and `view` for terminal output
//!
//! ## Usage
//!
//! ```rust
//! use taskcal::libs::analytics::completion_stats;
//! use taskcal::libs::persistence::MemorySlot;
//! use taskcal::libs::store::TaskStore;
//!
//! let store = TaskStore::open(MemorySlot::new());
//! let stats = completion_stats(store.tasks(), store.filter_category());
//! assert_eq!(stats.total, 1);
//! ```

pub mod analytics;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod persistence;
pub mod query;
pub mod store;
pub mod task;
pub mod validation;
pub mod view;
