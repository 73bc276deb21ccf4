//! Platform abstraction layer for native/web compatibility.
//!
//! [`Storage`] abstracts where calculator snapshots live:
//! - native: one JSON file per snapshot under the data directory
//! - web: browser LocalStorage
//! - memory: an in-process map, for tests and runs that must not persist

mod memory;
mod storage;

#[cfg(feature = "native")]
pub mod native;

#[cfg(feature = "web")]
pub mod web;

pub use memory::MemoryStorage;
pub use storage::{Storage, StorageError};

// Re-export platform-specific implementations
#[cfg(feature = "native")]
pub use native::NativeStorage;

#[cfg(feature = "web")]
pub use web::WebStorage;
