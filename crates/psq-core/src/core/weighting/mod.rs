//! # Weighting Module
//!
//! Builds the energy-domain weighting profile used by transferability scoring.
//!
//! Two Fermi-Dirac windows are anchored at different energies. Below the
//! midpoint of their centers the profile follows the first window, at and above
//! it the second. With the reference configuration (a mirrored window at 0 Ha
//! and a direct one at 6 Ha) the profile is close to 1 between the centers and
//! falls to 0 outside them.
//!
//! - [`fermi_dirac`] - The logistic window functions
//! - [`profile`] - [`profile::build_weights`] and the [`profile::WeightCurve`] it returns

pub(crate) mod fermi_dirac;
pub mod profile;
