//! # Scoring Module
//!
//! Transferability scoring of pseudized curves against their all-electron
//! references.
//!
//! For each angular-momentum channel the absolute AE/PS difference is
//! multiplied by the weighting profile and integrated cumulatively over the
//! energy axis, normalized by the domain span. Channels above `lmax` are
//! down-weighted. Summing the per-channel curves gives the aggregate signal.
//!
//! ## Key Components
//!
//! - [`difference`] - Aligns AE and PS curves and computes their difference
//! - [`transferability`] - [`transferability::score_channel`], the per-channel score
//! - [`aggregate`] - Elementwise sum of channel curves
//!
//! ```ignore
//! use psq::core::scoring::transferability::score_channel;
//!
//! let score = score_channel(&axis, &ae, &ps, weights.values(), l, lmax, 0.1)?;
//! println!("l={}: {}", score.l, score.score);
//! ```

pub mod aggregate;
pub mod difference;
pub mod transferability;
