//! Error types for the validator.
//!
//! This module defines the single error path of the system: an unmet
//! grammar expectation. It includes:
//!
//! - An error structure carrying source position information
//! - One variant per kind of unmet expectation
//! - Display formatting matching the diagnostic line printed by the driver

pub mod errors;
