use super::difference::ChannelDifference;
use crate::core::models::channel::{AngularMomentum, is_unbound};
use crate::core::numeric::NumericError;
use crate::core::numeric::integrate::{MIN_INTEGRATION_SAMPLES, normalized_cumulative_trapezoid};
use crate::core::numeric::ordering::ensure_ascending;
use serde::Serialize;

/// Down-weighting factor applied to unbound channels in the reference analysis.
pub const DEFAULT_UNBOUND_WEIGHT: f64 = 0.1;

/// Transferability score of a single angular-momentum channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelScore {
    /// The angular-momentum index `l` of the scored channel.
    pub l: AngularMomentum,
    /// Whether the channel is at or below `lmax`.
    pub bound: bool,
    /// Running normalized integral of the weighted difference, one value per
    /// energy sample, after unbound down-weighting.
    pub cumulative: Vec<f64>,
    /// Last element of `cumulative`.
    pub score: f64,
    /// Final value before unbound down-weighting.
    pub raw_score: f64,
}

/// Scores one channel against its weighting profile.
///
/// Computes `|ae - ps| * weights`, integrates it cumulatively with the
/// trapezoid rule (starting from 0 at the first sample), and divides by the
/// domain span `energy_axis[last] - energy_axis[0]`. Channels with
/// `channel_l >= lmax + 1` are multiplied by `unbound_weight`.
///
/// # Arguments
///
/// * `energy_axis` - Ascending sample energies shared by all arrays.
/// * `ae_values` - All-electron curve values on `energy_axis`.
/// * `ps_values` - Pseudized curve values on `energy_axis`.
/// * `weights` - Weighting profile values on `energy_axis`.
/// * `channel_l` - Angular momentum of the channel.
/// * `lmax` - Highest bound angular momentum.
/// * `unbound_weight` - Factor applied to unbound channels.
///
/// # Errors
///
/// * [`NumericError::InvalidInput`] for length mismatches, a non-ascending
///   axis, or a negative or non-finite `unbound_weight`.
/// * [`NumericError::InsufficientSamples`] for fewer than two samples.
/// * [`NumericError::DegenerateDomain`] when the axis has zero width.
#[allow(clippy::too_many_arguments)]
pub fn score_channel(
    energy_axis: &[f64],
    ae_values: &[f64],
    ps_values: &[f64],
    weights: &[f64],
    channel_l: AngularMomentum,
    lmax: AngularMomentum,
    unbound_weight: f64,
) -> Result<ChannelScore, NumericError> {
    let n = energy_axis.len();
    if ae_values.len() != n {
        return Err(NumericError::length_mismatch("AE curve", n, ae_values.len()));
    }
    if ps_values.len() != n {
        return Err(NumericError::length_mismatch("PS curve", n, ps_values.len()));
    }
    if weights.len() != n {
        return Err(NumericError::length_mismatch("weight curve", n, weights.len()));
    }
    if n < MIN_INTEGRATION_SAMPLES {
        return Err(NumericError::InsufficientSamples {
            found: n,
            required: MIN_INTEGRATION_SAMPLES,
        });
    }
    ensure_ascending(energy_axis)?;
    if !(unbound_weight.is_finite() && unbound_weight >= 0.0) {
        return Err(NumericError::InvalidInput(format!(
            "unbound weight must be a finite non-negative number, got {}",
            unbound_weight
        )));
    }

    let product: Vec<f64> = ae_values
        .iter()
        .zip(ps_values)
        .zip(weights)
        .map(|((ae, ps), w)| (ae - ps).abs() * w)
        .collect();

    let mut cumulative = normalized_cumulative_trapezoid(energy_axis, &product)?;
    let raw_score = cumulative[n - 1];

    let bound = !is_unbound(channel_l, lmax);
    if !bound {
        cumulative.iter_mut().for_each(|v| *v *= unbound_weight);
    }
    let score = cumulative[n - 1];

    Ok(ChannelScore {
        l: channel_l,
        bound,
        cumulative,
        score,
        raw_score,
    })
}

/// Scores an aligned [`ChannelDifference`].
pub fn score_difference(
    difference: &ChannelDifference,
    weights: &[f64],
    lmax: AngularMomentum,
    unbound_weight: f64,
) -> Result<ChannelScore, NumericError> {
    score_channel(
        &difference.energies,
        &difference.ae,
        &difference.ps,
        weights,
        difference.l,
        lmax,
        unbound_weight,
    )
}
