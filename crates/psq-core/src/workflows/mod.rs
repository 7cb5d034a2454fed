//! # Workflows Module
//!
//! High-level entry points that tie the [`crate::core`] numerics and the
//! [`crate::engine`] configuration together.
//!
//! - **Scoring Workflow** ([`score`]) - Builds the weighting profile once,
//!   scores every channel of a [`crate::core::models::channel::CurveSet`],
//!   and aggregates the results into a [`score::TransferabilityReport`].

pub mod score;
