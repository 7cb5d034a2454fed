//! # Core Module
//!
//! The stateless numeric foundation of PSQ.
//!
//! ## Architecture
//!
//! - **Numerics** ([`numeric`]) - Ordering checks, cumulative trapezoidal integration, errors
//! - **Data Models** ([`models`]) - Energy curves, Fermi-Dirac windows, channel curve pairs
//! - **Weighting** ([`weighting`]) - The two-window energy-domain weighting profile
//! - **Scoring** ([`scoring`]) - Per-channel transferability scores and their aggregate
//!
//! Every function in this module is pure: it reads its arguments, returns a
//! value or a [`numeric::NumericError`], and touches no shared state.

pub mod models;
pub mod numeric;
pub mod scoring;
pub mod weighting;
