//! # Engine Module
//!
//! Configuration, error handling and progress reporting for the analysis
//! workflows.
//!
//! - **Configuration** ([`config`]) - Weighting windows and unbound-channel policy
//! - **Error Handling** ([`error`]) - [`error::EngineError`], wrapping numeric and
//!   configuration failures with channel context
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting

pub mod config;
pub mod error;
pub mod progress;
