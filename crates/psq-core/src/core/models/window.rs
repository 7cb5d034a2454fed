use crate::core::numeric::NumericError;
use crate::core::weighting::fermi_dirac;
use serde::Serialize;

/// A logistic step used as one half of the energy-domain weighting profile.
///
/// The direct form `1 / (1 + exp((e - center) / width))` falls from 1 to 0
/// through `center`; the mirrored form `1 - direct` rises from 0 to 1. Both
/// evaluate to exactly 0.5 at the center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FermiDiracWindow {
    center: f64,
    width: f64,
    mirrored: bool,
}

impl FermiDiracWindow {
    /// Creates a window after validating its parameters.
    ///
    /// # Arguments
    ///
    /// * `center` - Energy at which the window equals 0.5, in Hartree.
    /// * `width` - Logistic smearing width (sigma), in Hartree.
    /// * `mirrored` - Whether to use the complement `1 - logistic`.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::InvalidInput`] if `center` is not finite or
    /// `width` is not a finite positive number.
    pub fn new(center: f64, width: f64, mirrored: bool) -> Result<Self, NumericError> {
        if !center.is_finite() {
            return Err(NumericError::InvalidInput(format!(
                "window center must be finite, got {}",
                center
            )));
        }
        if !(width.is_finite() && width > 0.0) {
            return Err(NumericError::InvalidInput(format!(
                "window width must be a finite positive number, got {}",
                width
            )));
        }
        Ok(Self {
            center,
            width,
            mirrored,
        })
    }

    /// Lower window of the reference analysis: mirrored, centered at 0 Ha.
    pub fn reference_low() -> Self {
        Self {
            center: 0.0,
            width: 0.25,
            mirrored: true,
        }
    }

    /// Upper window of the reference analysis: direct, centered at 6 Ha.
    pub fn reference_high() -> Self {
        Self {
            center: 6.0,
            width: 0.25,
            mirrored: false,
        }
    }

    pub fn center(&self) -> f64 {
        self.center
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn is_mirrored(&self) -> bool {
        self.mirrored
    }

    #[inline]
    pub fn evaluate(&self, energy: f64) -> f64 {
        fermi_dirac::window_value(energy, self.center, self.width, self.mirrored)
    }

    /// Midpoint between two window centers, where the weighting profile
    /// switches from `self` to `other`.
    pub fn midpoint(&self, other: &Self) -> f64 {
        (self.center + other.center) / 2.0
    }
}
