//! Configuration management for taskcal.
//!
//! The configuration is a JSON file (`config.json`) in the platform data
//! directory resolved by [`DataStorage`]. Every section is optional; a missing
//! file or section means defaults.
//!
//! ```rust,no_run
//! use taskcal::libs::config::Config;
//!
//! let config = Config::read()?;
//! let storage = config.storage_or_default();
//! println!("Tasks are kept under key {}", storage.slot_key);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::persistence::DEFAULT_SLOT_KEY;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Where the store snapshot is kept.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Row in the SQLite data file.
    #[default]
    Sqlite,
    /// Standalone JSON file next to the config.
    File,
}

impl StorageBackend {
    pub const ALL: [StorageBackend; 2] = [StorageBackend::Sqlite, StorageBackend::File];
}

impl Display for StorageBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Sqlite => f.write_str("sqlite"),
            StorageBackend::File => f.write_str("file"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    /// Name of the durable slot holding the snapshot.
    #[serde(default = "default_slot_key")]
    pub slot_key: String,
}

fn default_slot_key() -> String {
    DEFAULT_SLOT_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        StorageConfig {
            backend: StorageBackend::default(),
            slot_key: default_slot_key(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn storage_or_default(&self) -> StorageConfig {
        self.storage.clone().unwrap_or_default()
    }

    /// Interactive setup, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.storage_or_default();

        msg_print!(Message::ConfigModuleStorage);
        let backends: Vec<String> = StorageBackend::ALL.iter().map(|b| b.to_string()).collect();
        let selected = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStorageBackend.to_string())
            .items(&backends)
            .default(StorageBackend::ALL.iter().position(|b| *b == default.backend).unwrap_or(0))
            .interact()?;

        config.storage = Some(StorageConfig {
            backend: StorageBackend::ALL[selected],
            slot_key: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSlotKey.to_string())
                .default(default.slot_key)
                .interact_text()?,
        });

        Ok(config)
    }
}
