use crate::core::models::channel::{AngularMomentum, ChannelCurves};
use crate::core::numeric::NumericError;
use crate::core::numeric::ordering::ensure_ascending;
use serde::Serialize;

/// Relative tolerance used when checking that two curves share a sampling.
pub const ENERGY_MATCH_TOLERANCE: f64 = 1e-9;

/// Pointwise AE/PS difference of one channel on an ascending energy axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelDifference {
    pub l: AngularMomentum,
    /// Ascending energy axis shared by both curves.
    pub energies: Vec<f64>,
    /// AE values on `energies`.
    pub ae: Vec<f64>,
    /// PS values on `energies`.
    pub ps: Vec<f64>,
    /// `|AE - PS|`, the integrand of the transferability score.
    pub absolute: Vec<f64>,
    /// `AE - PS`, kept for display.
    pub signed: Vec<f64>,
}

#[inline]
fn energies_match(a: f64, b: f64) -> bool {
    (a - b).abs() <= ENERGY_MATCH_TOLERANCE * a.abs().max(1.0)
}

fn ensure_same_sampling(
    what: &str,
    expected: &[f64],
    found: &[f64],
) -> Result<(), NumericError> {
    if expected.len() != found.len() {
        return Err(NumericError::length_mismatch(what, expected.len(), found.len()));
    }
    match expected
        .iter()
        .zip(found)
        .position(|(&a, &b)| !energies_match(a, b))
    {
        None => Ok(()),
        Some(i) => Err(NumericError::InvalidInput(format!(
            "{} is sampled at {} where {} was expected (index {})",
            what, found[i], expected[i], i
        ))),
    }
}

/// Aligns the AE and PS curves of `channel` and computes their difference.
///
/// Both curves are reordered by the AE energies, so the result is ascending
/// even when the source arrays were not. When `reference_axis` is given, the
/// sorted channel axis must match it, which is what lets channels be summed
/// elementwise later.
///
/// # Errors
///
/// Returns [`NumericError::InvalidInput`] if the AE and PS curves are not
/// sampled at the same energies, if the channel axis differs from
/// `reference_axis`, or if the energies cannot be ordered (NaN).
pub fn channel_difference(
    channel: &ChannelCurves,
    reference_axis: Option<&[f64]>,
) -> Result<ChannelDifference, NumericError> {
    if channel.ae.len() != channel.ps.len() {
        return Err(NumericError::InvalidInput(format!(
            "channel l={} has {} AE samples but {} PS samples",
            channel.l,
            channel.ae.len(),
            channel.ps.len()
        )));
    }

    let order = channel.ae.sort_order();
    let ae = channel.ae.reordered(&order);
    let ps = channel.ps.reordered(&order);

    ensure_ascending(ae.energies())?;
    ensure_same_sampling(
        &format!("PS curve of channel l={}", channel.l),
        ae.energies(),
        ps.energies(),
    )?;
    if let Some(reference) = reference_axis {
        ensure_same_sampling(
            &format!("channel l={}", channel.l),
            reference,
            ae.energies(),
        )?;
    }

    let signed: Vec<f64> = ae
        .values()
        .iter()
        .zip(ps.values())
        .map(|(a, p)| a - p)
        .collect();
    let absolute = signed.iter().map(|d| d.abs()).collect();

    Ok(ChannelDifference {
        l: channel.l,
        energies: ae.energies().to_vec(),
        ae: ae.values().to_vec(),
        ps: ps.values().to_vec(),
        absolute,
        signed,
    })
}
