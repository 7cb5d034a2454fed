use crate::core::models::window::FermiDiracWindow;
use crate::core::scoring::transferability::DEFAULT_UNBOUND_WEIGHT;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// The two Fermi-Dirac windows that make up the weighting profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightingConfig {
    /// Window used below the midpoint of the two centers.
    pub low_window: FermiDiracWindow,
    /// Window used at and above the midpoint.
    pub high_window: FermiDiracWindow,
}

impl Default for WeightingConfig {
    fn default() -> Self {
        Self {
            low_window: FermiDiracWindow::reference_low(),
            high_window: FermiDiracWindow::reference_high(),
        }
    }
}

/// Tunable parameters of a transferability analysis.
///
/// The bound/unbound cutoff `lmax` is not part of the configuration: it is a
/// property of the generated pseudopotential and travels with the curve data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisConfig {
    pub weighting: WeightingConfig,
    /// Factor applied to the cumulative score of unbound channels.
    pub unbound_weight: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            weighting: WeightingConfig::default(),
            unbound_weight: DEFAULT_UNBOUND_WEIGHT,
        }
    }
}

#[derive(Default)]
pub struct AnalysisConfigBuilder {
    low_window: Option<FermiDiracWindow>,
    high_window: Option<FermiDiracWindow>,
    unbound_weight: Option<f64>,
}

impl AnalysisConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn low_window(mut self, window: FermiDiracWindow) -> Self {
        self.low_window = Some(window);
        self
    }
    pub fn high_window(mut self, window: FermiDiracWindow) -> Self {
        self.high_window = Some(window);
        self
    }
    pub fn unbound_weight(mut self, weight: f64) -> Self {
        self.unbound_weight = Some(weight);
        self
    }

    pub fn build(self) -> Result<AnalysisConfig, ConfigError> {
        let weighting = WeightingConfig {
            low_window: self
                .low_window
                .ok_or(ConfigError::MissingParameter("low_window"))?,
            high_window: self
                .high_window
                .ok_or(ConfigError::MissingParameter("high_window"))?,
        };
        let unbound_weight = self
            .unbound_weight
            .ok_or(ConfigError::MissingParameter("unbound_weight"))?;
        if !(unbound_weight > 0.0 && unbound_weight <= 1.0) {
            return Err(ConfigError::InvalidParameter {
                name: "unbound_weight",
                reason: format!("must lie in (0, 1], got {}", unbound_weight),
            });
        }
        Ok(AnalysisConfig {
            weighting,
            unbound_weight,
        })
    }
}
