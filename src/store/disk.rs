use crate::store::SecretStore;
use anyhow::{Context, Result};
use fjall::{Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use std::path::Path;
use tracing::debug;

/// Credential store persisted under the application data directory, so a
/// saved API key survives across sessions.
pub struct DiskStore {
    keyspace: Keyspace,
    partition: PartitionHandle,
}

impl DiskStore {
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {}", path.display()))?;

        let keyspace = fjall::Config::new(path.join("secrets"))
            .open()
            .with_context(|| format!("Failed to open secret store at {}", path.display()))?;
        let partition =
            keyspace.open_partition("credentials", PartitionCreateOptions::default())?;

        Ok(Self {
            keyspace,
            partition,
        })
    }
}

impl SecretStore for DiskStore {
    fn get(&self, name: &str) -> Result<Option<String>> {
        match self.partition.get(name)? {
            Some(bytes) => {
                debug!("Found stored credential {}", name);
                let value = String::from_utf8(bytes.to_vec())
                    .context("Stored credential is not valid UTF-8")?;
                Ok(Some(value))
            }
            None => {
                debug!("No stored credential {}", name);
                Ok(None)
            }
        }
    }

    fn put(&self, name: &str, value: &str) -> Result<()> {
        self.partition.insert(name, value)?;
        self.keyspace.persist(PersistMode::SyncAll)?;
        debug!("Stored credential {}", name);
        Ok(())
    }
}
