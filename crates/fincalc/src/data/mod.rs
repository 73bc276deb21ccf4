pub mod snapshot;

pub use snapshot::{CalculatorKind, Snapshot, SnapshotStore};
