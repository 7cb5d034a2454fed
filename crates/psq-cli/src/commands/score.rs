use crate::cli::ScoreArgs;
use crate::config::{AppConfig, CommandOverrides, build_config};
use crate::error::{CliError, Result};
use crate::input::load_curve_set;
use crate::report::save_report;
use crate::utils::progress::CliProgressHandler;
use psq::core::models::channel::CurveSet;
use psq::engine::progress::ProgressReporter;
use psq::workflows::{self, score::TransferabilityReport};
use tracing::{info, warn};

pub async fn run(args: ScoreArgs) -> Result<()> {
    let overrides = CommandOverrides {
        lmax: args.lmax,
        ecut_low: args.ecut_low,
        ecut_high: args.ecut_high,
    };
    info!("Merging configuration from defaults, file and CLI arguments...");
    let AppConfig {
        core_config,
        lmax,
        hints,
    } = build_config(&args.analysis, overrides)?;
    let lmax = lmax.ok_or_else(|| {
        CliError::Config("`lmax` must be given with --lmax or `channels.lmax`".to_string())
    })?;

    info!("Loading curve table from {:?}", &args.input);
    let curve_set = load_curve_set(&args.input, lmax, hints)?;
    if all_channels_unbound(&curve_set) {
        warn!("No channel is bound for lmax = {}.", lmax);
    }

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Scoring {} channel(s)...", curve_set.channels.len());
    let report = tokio::task::block_in_place(|| {
        workflows::score::run(&curve_set, &core_config, &reporter)
    })?;

    print_summary(&report);

    if let Some(output) = &args.output {
        save_report(output, &report)?;
        println!("✓ Report written to: {}", output.display());
    }

    Ok(())
}

fn all_channels_unbound(curve_set: &CurveSet) -> bool {
    !curve_set.channels.is_empty()
        && curve_set
            .channels
            .iter()
            .all(|c| c.is_unbound(curve_set.lmax))
}

fn print_summary(report: &TransferabilityReport) {
    for line in summary_lines(report) {
        println!("{}", line);
    }
}

fn summary_lines(report: &TransferabilityReport) -> Vec<String> {
    let mut lines: Vec<String> = report
        .channels
        .iter()
        .map(|channel| {
            if channel.bound {
                format!("l={}: {}", channel.l, channel.score)
            } else {
                format!(
                    "l={}: {} (unbound, unweighted {})",
                    channel.l, channel.score, channel.raw_score
                )
            }
        })
        .collect();
    lines.push(format!("total: {}", report.total_score()));
    if let Some(hints) = report.hints {
        lines.push(format!(
            "cutoff hints: low = {} Ha, high = {} Ha",
            hints.low, hints.high
        ));
    }
    for curve in &report.convergence {
        lines.push(format!(
            "convergence l={}: {} sample(s)",
            curve.l,
            curve.curve.len()
        ));
    }
    lines
}
