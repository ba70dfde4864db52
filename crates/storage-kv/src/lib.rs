//! Durable key-value storage abstraction for configuration records.

mod error;
pub mod store;

pub use error::StoreError;
pub use store::{FsStore, KvStore, MemoryStore};
