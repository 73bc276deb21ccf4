//! Storage abstraction for platform-independent persistence.
//!
//! Storage is a flat key/value space of serialized snapshots. Keys are the fixed
//! logical names of the calculators; values are opaque strings.

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    /// I/O error (permission denied, disk full, etc.)
    Io(String),
    /// Serialization error
    Serialize(String),
    /// Storage not available (e.g., LocalStorage disabled)
    NotAvailable(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
            StorageError::NotAvailable(msg) => write!(f, "Storage not available: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Platform-independent storage interface.
pub trait Storage {
    /// Read the value stored under `key`, `None` when nothing was stored yet
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `contents` under `key`, replacing any previous value
    fn write(&self, key: &str, contents: &str) -> Result<(), StorageError>;

    /// Drop the value stored under `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
