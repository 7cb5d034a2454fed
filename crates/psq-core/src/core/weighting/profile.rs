use crate::core::models::window::FermiDiracWindow;
use crate::core::numeric::NumericError;
use crate::core::numeric::ordering::ensure_ascending;
use serde::Serialize;
use tracing::{instrument, trace};

/// Energy-domain weights aligned 1:1 with an ascending energy axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightCurve {
    values: Vec<f64>,
    midpoint: f64,
}

impl WeightCurve {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Energy at which the profile switches from the low to the high window.
    pub fn midpoint(&self) -> f64 {
        self.midpoint
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// Builds the weighting profile for `energy_axis` from two windows.
///
/// Energies strictly below the midpoint of the two window centers take the
/// value of `low`; energies at or above it take the value of `high`. The
/// switch is hard, not blended.
/// Selection is done per element, so the output order always matches the
/// input order.
///
/// # Errors
///
/// Returns [`NumericError::InvalidInput`] if `energy_axis` is not ascending.
#[instrument(level = "debug", skip(energy_axis), fields(samples = energy_axis.len()))]
pub fn build_weights(
    energy_axis: &[f64],
    low: &FermiDiracWindow,
    high: &FermiDiracWindow,
) -> Result<WeightCurve, NumericError> {
    ensure_ascending(energy_axis)?;

    let midpoint = low.midpoint(high);
    trace!("Weight profile switches windows at {} Ha.", midpoint);

    let values = energy_axis
        .iter()
        .map(|&e| {
            if e < midpoint {
                low.evaluate(e)
            } else {
                high.evaluate(e)
            }
        })
        .collect();

    Ok(WeightCurve { values, midpoint })
}
