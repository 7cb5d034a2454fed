use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileWindowConfig};
use super::models::AppConfig;
use crate::cli::AnalysisArgs;
use crate::error::{CliError, Result};
use crate::utils::parser::{self, ParseError};
use psq::core::models::channel::{AngularMomentum, CutoffHints};
use psq::core::models::window::FermiDiracWindow;
use psq::engine::config as core_config;

/// Per-command values that take precedence over everything else.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandOverrides {
    pub lmax: Option<AngularMomentum>,
    pub ecut_low: Option<f64>,
    pub ecut_high: Option<f64>,
}

pub fn build_config(args: &AnalysisArgs, overrides: CommandOverrides) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let weighting_file = file_config.weighting.take().unwrap_or_default();
    let low_window = merge_window(
        weighting_file.low_window,
        "weighting.low-window",
        (
            defaults.low_window_center,
            defaults.low_window_width,
            defaults.low_window_mirrored,
        ),
    )?;
    let high_window = merge_window(
        weighting_file.high_window,
        "weighting.high-window",
        (
            defaults.high_window_center,
            defaults.high_window_width,
            defaults.high_window_mirrored,
        ),
    )?;

    let channels_file = file_config.channels.take().unwrap_or_default();
    let unbound_weight = args
        .unbound_weight
        .or(channels_file.unbound_weight)
        .unwrap_or(defaults.unbound_weight);
    let lmax = overrides.lmax.or(channels_file.lmax);

    let hints_file = file_config.hints.take().unwrap_or_default();
    let hints = merge_hints(
        overrides.ecut_low.or(hints_file.ecut_low),
        overrides.ecut_high.or(hints_file.ecut_high),
    )?;

    let core_config = core_config::AnalysisConfigBuilder::new()
        .low_window(low_window)
        .high_window(high_window)
        .unbound_weight(unbound_weight)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        core_config,
        lmax,
        hints,
    })
}

fn merge_window(
    file_val: Option<FileWindowConfig>,
    section: &str,
    (center, width, mirrored): (f64, f64, bool),
) -> Result<FermiDiracWindow> {
    let file_val = file_val.unwrap_or_default();
    FermiDiracWindow::new(
        file_val.center.unwrap_or(center),
        file_val.width.unwrap_or(width),
        file_val.mirrored.unwrap_or(mirrored),
    )
    .map_err(|e| CliError::Config(format!("`{}`: {}", section, e)))
}

fn merge_hints(low: Option<f64>, high: Option<f64>) -> Result<Option<CutoffHints>> {
    match (low, high) {
        (Some(low), Some(high)) => Ok(Some(CutoffHints { low, high })),
        (None, None) => Ok(None),
        (Some(_), None) => Err(CliError::Config(
            "`hints.ecut-low` was given without `hints.ecut-high`".to_string(),
        )),
        (None, Some(_)) => Err(CliError::Config(
            "`hints.ecut-high` was given without `hints.ecut-low`".to_string(),
        )),
    }
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    if set_values.is_empty() {
        return Ok(config);
    }
    let to_config_error = |e: ParseError| CliError::Config(e.to_string());

    for assignment in set_values {
        let (key, value_str) = parser::parse_assignment(assignment).map_err(to_config_error)?;
        let float = || parser::parse_value::<f64>(key, value_str, "float").map_err(to_config_error);

        match key {
            "weighting.low-window.center" => config.window_mut(false).center = Some(float()?),
            "weighting.low-window.width" => config.window_mut(false).width = Some(float()?),
            "weighting.low-window.mirrored" => {
                config.window_mut(false).mirrored = Some(
                    parser::parse_value(key, value_str, "boolean").map_err(to_config_error)?,
                );
            }
            "weighting.high-window.center" => config.window_mut(true).center = Some(float()?),
            "weighting.high-window.width" => config.window_mut(true).width = Some(float()?),
            "weighting.high-window.mirrored" => {
                config.window_mut(true).mirrored = Some(
                    parser::parse_value(key, value_str, "boolean").map_err(to_config_error)?,
                );
            }
            "channels.lmax" => {
                config.channels.get_or_insert_with(Default::default).lmax = Some(
                    parser::parse_value(key, value_str, "integer").map_err(to_config_error)?,
                );
            }
            "channels.unbound-weight" => {
                config
                    .channels
                    .get_or_insert_with(Default::default)
                    .unbound_weight = Some(float()?);
            }
            "hints.ecut-low" => {
                config.hints.get_or_insert_with(Default::default).ecut_low = Some(float()?);
            }
            "hints.ecut-high" => {
                config.hints.get_or_insert_with(Default::default).ecut_high = Some(float()?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
