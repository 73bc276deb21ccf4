//! Engine tests
//!
//! Tests are organized by calculator:
//! - `emergency_fund` - Reserve sizing and its validation gate
//! - `first_million` - Contribution solver, clamp and breakdown
//! - `compound_interest` - Projection totals and series sampling
//! - `properties` - Property-based checks shared across engines

mod properties;
