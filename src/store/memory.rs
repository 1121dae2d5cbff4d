use crate::store::SecretStore;
use anyhow::Result;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory secret store used by tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SecretStore for MemoryStore {
    fn get(&self, name: &str) -> Result<Option<String>> {
        Ok(self.inner.read().unwrap().get(name).cloned())
    }

    fn put(&self, name: &str, value: &str) -> Result<()> {
        self.inner
            .write()
            .unwrap()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }
}
