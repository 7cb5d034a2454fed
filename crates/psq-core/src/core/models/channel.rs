use super::curve::EnergyCurve;
use serde::Serialize;

/// Angular-momentum quantum number of a channel.
pub type AngularMomentum = u32;

/// The all-electron and pseudized curves of one angular-momentum channel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelCurves {
    /// The angular-momentum index `l` of this channel.
    pub l: AngularMomentum,
    /// The all-electron reference curve.
    pub ae: EnergyCurve,
    /// The pseudized curve compared against `ae`.
    pub ps: EnergyCurve,
}

impl ChannelCurves {
    pub fn new(l: AngularMomentum, ae: EnergyCurve, ps: EnergyCurve) -> Self {
        Self { l, ae, ps }
    }

    /// Whether this channel lies above the highest bound angular momentum.
    #[inline]
    pub fn is_unbound(&self, lmax: AngularMomentum) -> bool {
        is_unbound(self.l, lmax)
    }
}

/// A channel is unbound when `l >= lmax + 1`.
#[inline]
pub fn is_unbound(l: AngularMomentum, lmax: AngularMomentum) -> bool {
    l > lmax
}

/// A kinetic-energy-vs-cutoff convergence curve for one channel.
///
/// Carried through the analysis untouched so that display layers can show it
/// next to the transferability score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvergenceCurve {
    pub l: AngularMomentum,
    pub curve: EnergyCurve,
}

/// Low and high cutoff-energy hints extracted by an external parser.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CutoffHints {
    pub low: f64,
    pub high: f64,
}

/// Everything an external parser supplies for a single analysis.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CurveSet {
    /// Highest bound angular momentum reported by the generator.
    pub lmax: AngularMomentum,
    pub channels: Vec<ChannelCurves>,
    pub convergence: Vec<ConvergenceCurve>,
    pub hints: Option<CutoffHints>,
}

impl CurveSet {
    pub fn new(lmax: AngularMomentum) -> Self {
        Self {
            lmax,
            ..Default::default()
        }
    }

    pub fn with_channel(mut self, channel: ChannelCurves) -> Self {
        self.channels.push(channel);
        self
    }

    pub fn with_convergence(mut self, curve: ConvergenceCurve) -> Self {
        self.convergence.push(curve);
        self
    }

    pub fn with_hints(mut self, hints: CutoffHints) -> Self {
        self.hints = Some(hints);
        self
    }
}
