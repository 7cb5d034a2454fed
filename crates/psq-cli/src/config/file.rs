use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileWindowConfig {
    pub center: Option<f64>,
    pub width: Option<f64>,
    pub mirrored: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileWeightingConfig {
    pub low_window: Option<FileWindowConfig>,
    pub high_window: Option<FileWindowConfig>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileChannelsConfig {
    pub lmax: Option<u32>,
    pub unbound_weight: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileHintsConfig {
    pub ecut_low: Option<f64>,
    pub ecut_high: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub weighting: Option<FileWeightingConfig>,
    pub channels: Option<FileChannelsConfig>,
    pub hints: Option<FileHintsConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading analysis configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn window_mut(&mut self, high: bool) -> &mut FileWindowConfig {
        let weighting = self.weighting.get_or_insert_with(Default::default);
        let window = if high {
            &mut weighting.high_window
        } else {
            &mut weighting.low_window
        };
        window.get_or_insert_with(Default::default)
    }
}
