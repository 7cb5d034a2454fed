use thiserror::Error;

use super::config::ConfigError;
use crate::core::models::channel::AngularMomentum;
use crate::core::numeric::NumericError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid analysis configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Numeric evaluation failed: {source}")]
    Numeric {
        #[from]
        source: NumericError,
    },

    #[error("Scoring failed for channel l={l}: {source}")]
    Channel {
        l: AngularMomentum,
        #[source]
        source: NumericError,
    },

    #[error("No angular-momentum channels were supplied")]
    NoChannels,

    #[error("Channel l={0} was supplied more than once")]
    DuplicateChannel(AngularMomentum),
}

impl EngineError {
    /// The numeric contract violation behind this error, if any.
    pub fn numeric_cause(&self) -> Option<&NumericError> {
        match self {
            Self::Numeric { source } | Self::Channel { source, .. } => Some(source),
            _ => None,
        }
    }
}
