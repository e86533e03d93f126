//! clubreg store - persistence layer
//!
//! Provides:
//! - The `KvStore` seam: whole values read and written by string key
//! - Backends: SQLite (with migrations), one-file-per-key, in-memory
//! - A versioned JSON codec for collections that fails closed on bad data
//! - Hydration and persistence of the `"clubs"` and `"events"` collections

pub mod codec;
pub mod db;
pub mod errors;
pub mod kv;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use kv::{FileKv, KvStore, MemoryKv, SqliteKv};
pub use repo::{CLUBS_KEY, EVENTS_KEY};
