//! # Core Models Module
//!
//! Data structures handed to the scoring core by external collaborators.
//!
//! ## Key Components
//!
//! - [`curve`] - Sampled `(energy, value)` curves with sorting helpers
//! - [`window`] - Fermi-Dirac windows that define the energy-domain weighting
//! - [`channel`] - Per-channel AE/PS curve pairs, convergence curves, cutoff
//!   hints, and the [`channel::CurveSet`] bundle for one analysis
//!
//! ```ignore
//! use psq::core::models::{channel::ChannelCurves, curve::EnergyCurve};
//!
//! let ae = EnergyCurve::new(energies.clone(), ae_values)?;
//! let ps = EnergyCurve::new(energies, ps_values)?;
//! let channel = ChannelCurves::new(0, ae, ps);
//! ```

pub mod channel;
pub mod curve;
pub mod window;
