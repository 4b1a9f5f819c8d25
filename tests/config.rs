#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use taskcal::libs::config::{Config, StorageBackend, StorageConfig};
    use taskcal::libs::data_storage::DataStorage;
    use taskcal::libs::persistence::{open_persistence, DEFAULT_SLOT_KEY};
    use taskcal::libs::store::TaskStore;
    use taskcal::libs::task::{Category, NewTask};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the platform data directory at a temporary home.
    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    // Single test: every step depends on the process-wide HOME override.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_and_configured_storage(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.storage_or_default().backend, StorageBackend::Sqlite);
        assert_eq!(config.storage_or_default().slot_key, DEFAULT_SLOT_KEY);

        let config = Config {
            storage: Some(StorageConfig {
                backend: StorageBackend::File,
                slot_key: "work".to_string(),
            }),
        };
        config.save().unwrap();
        let read_back = Config::read().unwrap();
        assert_eq!(read_back, config);

        // Missing fields in the file fall back to defaults.
        let partial: Config = serde_json::from_str(r#"{"storage":{"backend":"file"}}"#).unwrap();
        assert_eq!(partial.storage_or_default().slot_key, DEFAULT_SLOT_KEY);

        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let storage = read_back.storage_or_default();
        let id = {
            let mut store = TaskStore::open_at(open_persistence(&storage), day);
            store.add_task(NewTask::new("Pay rent", day, Category::Issue))
        };
        assert!(DataStorage::new().get_path("work.json").unwrap().exists());
        let store = TaskStore::open_at(open_persistence(&storage), day);
        assert!(store.task(&id).is_some());

        let sqlite = StorageConfig::default();
        let id = {
            let mut store = TaskStore::open_at(open_persistence(&sqlite), day);
            store.add_task(NewTask::new("Water plants", day, Category::Info))
        };
        let store = TaskStore::open_at(open_persistence(&sqlite), day);
        assert!(store.task(&id).is_some());
        assert_eq!(store.tasks().len(), 2);
    }
}
