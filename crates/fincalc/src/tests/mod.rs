//! End-to-end tests for the calculator front end
//!
//! - `workflow` - Runs through the app against real filesystem storage
//! - `reports` - Full report text for the documented scenarios

#[cfg(feature = "native")]
mod workflow;
