//! Personal-finance estimation library
//!
//! This crate provides the numeric core behind three independent calculators:
//! - Emergency fund sizing from monthly expenses and an employment profile
//! - The monthly contribution needed to reach a first million
//! - Compound interest projection with optional monthly contributions,
//!   including a sampled value series for charts and exports
//!
//! Every engine is stateless and implements [`Calculator`]: `validate` collects
//! every violated constraint at once, `compute` runs the closed-form formula, and
//! `calculate` gates the second behind the first.
//!
//! ```ignore
//! use fincalc_core::{Calculator, EmergencyFundEngine};
//! use fincalc_core::model::{EmergencyFundInput, Profile};
//!
//! let input = EmergencyFundInput { monthly_expenses: 3_000.0, profile: Profile::Clt };
//! let result = EmergencyFundEngine::calculate(&input)?;
//! assert_eq!(result.ideal_reserve, 18_000.0);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod calculator;
pub mod compound_interest;
pub mod emergency_fund;
pub mod error;
pub mod first_million;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use calculator::Calculator;
pub use compound_interest::{CompoundInterestEngine, SeriesSampler};
pub use emergency_fund::EmergencyFundEngine;
pub use error::{Field, FieldError, ValidationErrorKind, ValidationErrors};
pub use first_million::{FirstMillionEngine, TARGET_FUTURE_VALUE};
