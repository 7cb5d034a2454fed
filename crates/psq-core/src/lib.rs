//! # PSQ Core Library
//!
//! Scores the transferability of a pseudopotential by comparing all-electron
//! (AE) and pseudized (PS) atan-logarithmic-derivative curves, channel by
//! channel, over an energy window.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Pure numerics over in-memory arrays: the
//!   Fermi-Dirac weighting profile, cumulative trapezoidal integration, and
//!   per-channel scoring. Nothing here allocates shared state or performs I/O.
//!
//! - **[`engine`]: Configuration and Plumbing.** Analysis parameters with a
//!   validating builder, the engine error type, and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Runs the complete analysis over a
//!   [`core::models::channel::CurveSet`] supplied by an external parser.
//!
//! ```ignore
//! use psq::engine::{config::AnalysisConfig, progress::ProgressReporter};
//! use psq::workflows;
//!
//! let report = workflows::score::run(&curve_set, &AnalysisConfig::default(), &ProgressReporter::new())?;
//! for channel in &report.channels {
//!     println!("l={}: {}", channel.l, channel.score);
//! }
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
