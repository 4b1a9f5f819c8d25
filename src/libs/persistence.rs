//! Snapshot persistence for the task store.
//!
//! A [`Persistence`] backend keeps exactly one serialized [`StoreState`] in a
//! named durable slot. Loading never fails: a missing, unreadable or malformed
//! snapshot is reported and treated as absent. Saving never fails either: an
//! error is reported and the in-memory store stays authoritative.
//!
//! Backends:
//!
//! - [`SqliteSlot`]: a key/value row in the SQLite data file (default).
//! - [`FileSlot`]: a single JSON file in the data directory.
//! - [`MemorySlot`]: a process-local slot, serialized through JSON like the
//!   durable ones.

use super::config::{StorageBackend, StorageConfig};
use super::data_storage::DataStorage;
use super::error::StorageResult;
use super::messages::Message;
use super::store::{PersistedState, StoreState};
use crate::db::slots::Slots;
use crate::{msg_debug, msg_warning};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Slot key the application stores its state under.
pub const DEFAULT_SLOT_KEY: &str = "taskManagerState";

/// Durable slot holding the store snapshot.
pub trait Persistence {
    /// Reads the stored snapshot, or `None` when it is absent or unusable.
    fn load(&self) -> Option<PersistedState>;

    /// Overwrites the stored snapshot. Failures are reported, not returned.
    fn save(&mut self, state: &StoreState);
}

fn decode(slot: &str, raw: Option<String>) -> Option<PersistedState> {
    let raw = raw?;
    match serde_json::from_str::<PersistedState>(&raw) {
        Ok(state) => Some(state),
        Err(e) => {
            msg_warning!(Message::StateLoadFailed(slot.to_string(), e.to_string()));
            None
        }
    }
}

fn report_load_error(slot: &str, result: StorageResult<Option<String>>) -> Option<String> {
    match result {
        Ok(raw) => raw,
        Err(e) => {
            msg_warning!(Message::StateLoadFailed(slot.to_string(), e.to_string()));
            None
        }
    }
}

fn report_save_error(slot: &str, result: StorageResult<()>) {
    match result {
        Ok(()) => msg_debug!(Message::StateSaved(slot.to_string())),
        Err(e) => msg_warning!(Message::StateSaveFailed(slot.to_string(), e.to_string())),
    }
}

/// Snapshot slot stored in the `slots` table of the SQLite database.
pub struct SqliteSlot {
    slots: Option<Slots>,
    key: String,
}

impl SqliteSlot {
    /// Opens the slot in the platform database.
    ///
    /// When the database can not be opened the slot degrades to a no-op and
    /// the store runs purely in memory.
    pub fn open(key: &str) -> Self {
        let slots = match Slots::new() {
            Ok(slots) => Some(slots),
            Err(e) => {
                msg_warning!(Message::StorageUnavailable(e.to_string()));
                None
            }
        };
        Self { slots, key: key.to_string() }
    }

    pub fn with_slots(slots: Slots, key: &str) -> Self {
        Self {
            slots: Some(slots),
            key: key.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_available(&self) -> bool {
        self.slots.is_some()
    }

    fn try_save(&self, state: &StoreState) -> StorageResult<()> {
        let Some(slots) = &self.slots else {
            return Ok(());
        };
        let raw = serde_json::to_string(state)?;
        slots.write(&self.key, &raw)
    }
}

impl Persistence for SqliteSlot {
    fn load(&self) -> Option<PersistedState> {
        let slots = self.slots.as_ref()?;
        let raw = report_load_error(&self.key, slots.read(&self.key));
        decode(&self.key, raw)
    }

    fn save(&mut self, state: &StoreState) {
        report_save_error(&self.key, self.try_save(state));
    }
}

/// Snapshot slot stored as a pretty-printed JSON file.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn slot_name(&self) -> String {
        self.path.display().to_string()
    }

    fn try_read(&self) -> StorageResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(None),
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn try_save(&self, state: &StoreState) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(state)?;

        // Write-then-rename keeps the previous snapshot intact on a failed write.
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, raw)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl Persistence for FileSlot {
    fn load(&self) -> Option<PersistedState> {
        let slot = self.slot_name();
        let raw = report_load_error(&slot, self.try_read());
        decode(&slot, raw)
    }

    fn save(&mut self, state: &StoreState) {
        report_save_error(&self.slot_name(), self.try_save(state));
    }
}

/// Process-local slot. Snapshots still go through JSON.
#[derive(Debug, Default, Clone)]
pub struct MemorySlot {
    raw: Option<String>,
    writes: usize,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with `raw`, which may be malformed on purpose.
    pub fn with_raw(raw: &str) -> Self {
        Self {
            raw: Some(raw.to_string()),
            writes: 0,
        }
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Number of successful saves so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Persistence for MemorySlot {
    fn load(&self) -> Option<PersistedState> {
        decode("memory", self.raw.clone())
    }

    fn save(&mut self, state: &StoreState) {
        match serde_json::to_string(state) {
            Ok(raw) => {
                self.raw = Some(raw);
                self.writes += 1;
            }
            Err(e) => msg_warning!(Message::StateSaveFailed("memory".to_string(), e.to_string())),
        }
    }
}

/// Opens the backend selected by `config` in the platform data directory.
pub fn open_persistence(config: &StorageConfig) -> Box<dyn Persistence> {
    match config.backend {
        StorageBackend::Sqlite => Box::new(SqliteSlot::open(&config.slot_key)),
        StorageBackend::File => match DataStorage::new().get_path(&format!("{}.json", config.slot_key)) {
            Ok(path) => Box::new(FileSlot::new(path)),
            Err(e) => {
                msg_warning!(Message::StorageUnavailable(e.to_string()));
                Box::new(MemorySlot::new())
            }
        },
    }
}

impl<P: Persistence + ?Sized> Persistence for Box<P> {
    fn load(&self) -> Option<PersistedState> {
        (**self).load()
    }

    fn save(&mut self, state: &StoreState) {
        (**self).save(state)
    }
}
