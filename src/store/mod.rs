pub mod disk;
pub mod memory;

use anyhow::Result;

pub use disk::DiskStore;
pub use memory::MemoryStore;

/// Name under which the quote service API key is stored.
pub const API_KEY: &str = "api_key";

/// Small named-secret store backing the quote service credential.
pub trait SecretStore: Send + Sync {
    fn get(&self, name: &str) -> Result<Option<String>>;
    fn put(&self, name: &str, value: &str) -> Result<()>;
}
