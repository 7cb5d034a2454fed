use psq::core::models::channel::{AngularMomentum, CutoffHints};
use psq::engine::config as core_config;

pub struct AppConfig {
    pub core_config: core_config::AnalysisConfig,
    /// Highest bound angular momentum, when known from the file or the CLI.
    pub lmax: Option<AngularMomentum>,
    pub hints: Option<CutoffHints>,
}
