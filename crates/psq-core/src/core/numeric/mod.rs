//! # Numeric Module
//!
//! Shared numeric helpers for the scoring core: ordering checks on sampled
//! axes, cumulative trapezoidal integration, and the [`NumericError`]
//! taxonomy raised whenever an array contract is violated.

pub mod error;
pub mod integrate;
pub mod ordering;

pub use error::NumericError;
