//! Key-value persistence seam
//!
//! The registry persists whole collections as string values under fixed
//! keys. Any backend that can get, set and remove a string by key can
//! host it.

mod atomic;
mod files;
mod memory;
mod sqlite;

pub use files::FileKv;
pub use memory::MemoryKv;
pub use sqlite::SqliteKv;

use crate::errors::Result;

/// String-keyed storage of whole values
pub trait KvStore {
    /// Read the value stored under `key`, `None` when absent
    ///
    /// # Errors
    ///
    /// Fails when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Fails when the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing an absent key is not an error
    ///
    /// # Errors
    ///
    /// Fails when the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<()>;
}

impl<K: KvStore + ?Sized> KvStore for Box<K> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
