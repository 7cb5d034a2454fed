use crate::core::models::channel::{
    AngularMomentum, ChannelCurves, ConvergenceCurve, CurveSet, CutoffHints,
};
use crate::core::scoring::aggregate::aggregate_scores;
use crate::core::scoring::difference::{ChannelDifference, channel_difference};
use crate::core::scoring::transferability::{ChannelScore, score_difference};
use crate::core::weighting::profile::{WeightCurve, build_weights};
use crate::engine::config::AnalysisConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of a transferability analysis over all channels of a curve set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransferabilityReport {
    /// Highest bound angular momentum used to classify channels.
    pub lmax: AngularMomentum,
    /// Shared ascending energy axis of every curve below.
    pub energies: Vec<f64>,
    /// Weighting profile on `energies`.
    pub weights: WeightCurve,
    /// Aligned AE/PS differences, ordered by ascending `l`.
    pub differences: Vec<ChannelDifference>,
    /// Per-channel scores, ordered by ascending `l`.
    pub channels: Vec<ChannelScore>,
    /// Elementwise sum of the channel cumulative curves.
    pub aggregate: Vec<f64>,
    pub hints: Option<CutoffHints>,
    pub convergence: Vec<ConvergenceCurve>,
}

impl TransferabilityReport {
    /// Final value of the aggregate curve.
    pub fn total_score(&self) -> f64 {
        self.aggregate.last().copied().unwrap_or(0.0)
    }

    pub fn channel(&self, l: AngularMomentum) -> Option<&ChannelScore> {
        self.channels.iter().find(|score| score.l == l)
    }
}

/// Runs the full scoring pipeline over `curve_set`.
///
/// The weighting profile is built once on the sorted energies of the PS curve
/// of the lowest channel, and every channel must be sampled on that axis.
/// Channels are then scored independently and summed into the aggregate.
#[instrument(skip_all, name = "transferability_workflow", fields(lmax = curve_set.lmax))]
pub fn run(
    curve_set: &CurveSet,
    config: &AnalysisConfig,
    reporter: &ProgressReporter,
) -> Result<TransferabilityReport, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Building Weight Profile",
    });
    let channels = ordered_channels(&curve_set.channels)?;
    info!(
        "Scoring {} channel(s) with lmax = {}.",
        channels.len(),
        curve_set.lmax
    );

    let energies = channels[0].ps.sorted().energies().to_vec();
    let weights = build_weights(
        &energies,
        &config.weighting.low_window,
        &config.weighting.high_window,
    )?;
    debug!(
        samples = energies.len(),
        midpoint = weights.midpoint(),
        "Weight profile built."
    );
    reporter.report(Progress::PhaseFinish);

    reporter.report(Progress::PhaseStart {
        name: "Scoring Channels",
    });
    reporter.report(Progress::TaskStart {
        total_steps: channels.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = channels.iter();

    #[cfg(feature = "parallel")]
    let iterator = channels.par_iter();

    let scored: Vec<(ChannelDifference, ChannelScore)> = iterator
        .map(|channel| {
            let result = score_one(
                channel,
                &energies,
                &weights,
                curve_set.lmax,
                config.unbound_weight,
            );
            reporter.report(Progress::TaskIncrement);
            result
        })
        .collect::<Result<_, _>>()?;
    reporter.report(Progress::TaskFinish);

    let (differences, scores): (Vec<_>, Vec<_>) = scored.into_iter().unzip();
    let aggregate = aggregate_scores(&scores)?;

    for score in &scores {
        info!("l={}: {}", score.l, score.score);
        if !score.bound {
            debug!(
                l = score.l,
                raw_score = score.raw_score,
                "Unbound channel down-weighted by {}.",
                config.unbound_weight
            );
        }
        reporter.report(Progress::Message(format!("l={}: {}", score.l, score.score)));
    }
    reporter.report(Progress::PhaseFinish);

    let report = TransferabilityReport {
        lmax: curve_set.lmax,
        energies,
        weights,
        differences,
        channels: scores,
        aggregate,
        hints: curve_set.hints,
        convergence: curve_set.convergence.clone(),
    };
    info!(
        total_score = report.total_score(),
        "Transferability analysis complete."
    );
    Ok(report)
}

fn ordered_channels(channels: &[ChannelCurves]) -> Result<Vec<&ChannelCurves>, EngineError> {
    if channels.is_empty() {
        return Err(EngineError::NoChannels);
    }
    let mut seen = HashSet::with_capacity(channels.len());
    for channel in channels {
        if !seen.insert(channel.l) {
            return Err(EngineError::DuplicateChannel(channel.l));
        }
    }
    let mut ordered: Vec<&ChannelCurves> = channels.iter().collect();
    ordered.sort_by_key(|channel| channel.l);
    Ok(ordered)
}

fn score_one(
    channel: &ChannelCurves,
    energies: &[f64],
    weights: &WeightCurve,
    lmax: AngularMomentum,
    unbound_weight: f64,
) -> Result<(ChannelDifference, ChannelScore), EngineError> {
    let with_context = |source| EngineError::Channel {
        l: channel.l,
        source,
    };
    let difference = channel_difference(channel, Some(energies)).map_err(with_context)?;
    let score = score_difference(&difference, weights.values(), lmax, unbound_weight)
        .map_err(with_context)?;
    Ok((difference, score))
}
