//! SQLite layer for taskcal.
//!
//! The database holds named storage slots; the task store keeps its whole
//! snapshot in one of them. Connections are migrated on open.
//!
//! ```rust,no_run
//! use taskcal::db::{db::Db, slots::Slots};
//!
//! let slots = Slots::from_db(Db::new()?);
//! slots.write("taskManagerState", "{}")?;
//! # Ok::<(), taskcal::libs::error::StorageError>(())
//! ```

/// Connection management and initialization.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// Key/value slots holding serialized blobs.
pub mod slots;
