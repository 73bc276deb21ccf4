//! Native storage implementation using the filesystem.
//!
//! Directory structure:
//! ~/.fincalc/
//!   fincalc.log
//!   snapshots/
//!     emergencyFundData.json
//!     millionData.json
//!     compoundInterestData.json

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::platform::storage::{Storage, StorageError};

/// Filesystem storage rooted at a data directory.
pub struct NativeStorage {
    root: PathBuf,
}

impl NativeStorage {
    /// Create a new native storage with the given root path.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the default data directory path (~/.fincalc/)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fincalc")
    }

    /// Get the root path of the storage directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn snapshots_dir(&self) -> PathBuf {
        self.root.join("snapshots")
    }

    fn snapshot_path(&self, key: &str) -> PathBuf {
        self.snapshots_dir()
            .join(format!("{}.json", sanitize_filename(key)))
    }
}

impl Storage for NativeStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.snapshot_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(format!("Failed to read {}: {}", key, e))),
        }
    }

    fn write(&self, key: &str, contents: &str) -> Result<(), StorageError> {
        fs::create_dir_all(self.snapshots_dir()).map_err(|e| {
            StorageError::Io(format!("Failed to create snapshots directory: {}", e))
        })?;

        // Write through a temporary file so a crash never leaves half a snapshot
        let path = self.snapshot_path(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, contents)
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", key, e)))?;
        fs::rename(&tmp, &path)
            .map_err(|e| StorageError::Io(format!("Failed to replace {}: {}", key, e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.snapshot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(format!("Failed to remove {}: {}", key, e))),
        }
    }
}

/// Keep keys usable as file names on every platform
fn sanitize_filename(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}
