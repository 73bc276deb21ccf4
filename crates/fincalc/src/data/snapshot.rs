//! Calculator input snapshots.
//!
//! Each calculator persists its last valid input as one JSON document under a
//! fixed key. A snapshot that cannot be read or parsed is treated as absent:
//! the calculator starts again from its defaults.

use serde::Serialize;
use serde::de::DeserializeOwned;

use fincalc_core::model::{CompoundInterestInput, EmergencyFundInput, FirstMillionInput};

use crate::platform::{Storage, StorageError};

/// The three calculators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculatorKind {
    EmergencyFund,
    FirstMillion,
    CompoundInterest,
}

impl CalculatorKind {
    pub const ALL: [CalculatorKind; 3] = [
        CalculatorKind::EmergencyFund,
        CalculatorKind::FirstMillion,
        CalculatorKind::CompoundInterest,
    ];

    /// Logical storage key of the calculator's snapshot
    pub fn storage_key(&self) -> &'static str {
        match self {
            CalculatorKind::EmergencyFund => "emergencyFundData",
            CalculatorKind::FirstMillion => "millionData",
            CalculatorKind::CompoundInterest => "compoundInterestData",
        }
    }

    pub fn from_storage_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.storage_key() == key)
    }
}

/// An input record that can be persisted between runs
pub trait Snapshot: Serialize + DeserializeOwned + Default {
    const KIND: CalculatorKind;
}

impl Snapshot for EmergencyFundInput {
    const KIND: CalculatorKind = CalculatorKind::EmergencyFund;
}

impl Snapshot for FirstMillionInput {
    const KIND: CalculatorKind = CalculatorKind::FirstMillion;
}

impl Snapshot for CompoundInterestInput {
    const KIND: CalculatorKind = CalculatorKind::CompoundInterest;
}

/// Loads and saves snapshots through any [`Storage`] backend.
pub struct SnapshotStore<S> {
    storage: S,
}

impl<S: Storage> SnapshotStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Load the stored input, or the defaults when there is no usable snapshot.
    pub fn load<T: Snapshot>(&self) -> T {
        let key = T::KIND.storage_key();
        let content = match self.storage.read(key) {
            Ok(Some(content)) => content,
            Ok(None) => {
                tracing::debug!(key, "No snapshot stored, using defaults");
                return T::default();
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read snapshot, using defaults");
                return T::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(input) => {
                tracing::debug!(key, "Snapshot loaded");
                input
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "Ignoring malformed snapshot, using defaults");
                T::default()
            }
        }
    }

    pub fn save<T: Snapshot>(&self, input: &T) -> Result<(), StorageError> {
        let key = T::KIND.storage_key();
        let json = serde_json::to_string(input)
            .map_err(|e| StorageError::Serialize(format!("Failed to serialize {}: {}", key, e)))?;
        self.storage.write(key, &json)?;
        tracing::debug!(key, "Snapshot saved");
        Ok(())
    }

    /// Forget the stored input of one calculator
    pub fn clear(&self, kind: CalculatorKind) -> Result<(), StorageError> {
        self.storage.remove(kind.storage_key())
    }
}
