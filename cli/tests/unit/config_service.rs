//! Unit tests for the configuration service, backed by an in-memory store.

#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use stackctl::application::ports::ConfigStore;
use stackctl::application::services::config_service::{load_config, set_value};
use stackctl::domain::StackctlConfig;

#[derive(Default)]
struct MemoryStore {
    saved: Mutex<Option<StackctlConfig>>,
    saves: Mutex<usize>,
}

impl ConfigStore for MemoryStore {
    fn load(&self) -> Result<StackctlConfig> {
        Ok(self
            .saved
            .lock()
            .expect("lock")
            .clone()
            .unwrap_or_default())
    }

    fn save(&self, config: &StackctlConfig) -> Result<()> {
        *self.saved.lock().expect("lock") = Some(config.clone());
        *self.saves.lock().expect("lock") += 1;
        Ok(())
    }

    fn path(&self) -> Result<PathBuf> {
        Ok(PathBuf::from("/tmp/stackctl-test/config.yaml"))
    }
}

#[test]
fn test_load_config_defaults_when_nothing_stored() {
    let config = load_config(&MemoryStore::default()).expect("load");
    assert_eq!(config.stack.compose_file, "docker-compose.yml");
    assert_eq!(config.privilege.helper, "sudo");
}

#[test]
fn test_set_value_persists_and_returns_updated_config() {
    let store = MemoryStore::default();
    let config = set_value(&store, "privilege.helper", "doas").expect("valid");
    assert_eq!(config.privilege.helper, "doas");
    assert_eq!(load_config(&store).expect("load").privilege.helper, "doas");
}

#[test]
fn test_set_value_keeps_other_keys() {
    let store = MemoryStore::default();
    set_value(&store, "stack.compose_file", "deploy/compose.yml").expect("valid");
    set_value(&store, "privilege.helper", "doas").expect("valid");
    let config = load_config(&store).expect("load");
    assert_eq!(config.stack.compose_file, "deploy/compose.yml");
    assert_eq!(config.privilege.helper, "doas");
}

#[test]
fn test_set_value_invalid_input_writes_nothing() {
    let store = MemoryStore::default();
    assert!(set_value(&store, "privilege.helper", "su").is_err());
    assert!(set_value(&store, "stack.compose_file", "../outside.yml").is_err());
    assert!(set_value(&store, "stack.name", "x").is_err());
    assert_eq!(*store.saves.lock().expect("lock"), 0);
}
