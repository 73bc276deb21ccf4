//! Personal finance calculators
//!
//! Front end for the `fincalc_core` engines. It provides:
//! - Input snapshots that survive between runs (filesystem or browser storage)
//! - Plain-text reports with pt-BR wording and currency formatting
//! - A growth chart for compound interest projections
//! - The `fincalc` command-line interface (native builds)
//! - A JavaScript-facing calculator API backed by LocalStorage (web builds)

// ============================================================================
// Core modules
// ============================================================================

pub mod app;
pub mod data;
pub mod logging;
pub mod platform;

// ============================================================================
// Presentation modules
// ============================================================================

pub mod chart;
pub mod messages;
pub mod report;
pub mod util;

// ============================================================================
// Platform entry points
// ============================================================================

#[cfg(feature = "native")]
pub mod cli;

#[cfg(feature = "web")]
pub mod web;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use app::{App, Run};
pub use data::{CalculatorKind, SnapshotStore};
pub use logging::init_logging;
