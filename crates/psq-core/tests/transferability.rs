use approx::{assert_abs_diff_eq, assert_relative_eq};
use psq::core::models::channel::{ChannelCurves, CurveSet};
use psq::core::models::curve::EnergyCurve;
use psq::core::models::window::FermiDiracWindow;
use psq::core::numeric::NumericError;
use psq::core::scoring::transferability::score_channel;
use psq::core::weighting::profile::build_weights;
use psq::engine::config::{AnalysisConfig, AnalysisConfigBuilder};
use psq::engine::progress::ProgressReporter;
use psq::workflows;

fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    let step = (stop - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}

#[test]
fn reference_profile_on_coarse_axis() {
    let axis = [0.0, 2.0, 4.0, 6.0, 8.0, 10.0];
    let weights = build_weights(
        &axis,
        &FermiDiracWindow::new(0.0, 0.25, true).unwrap(),
        &FermiDiracWindow::new(6.0, 0.25, false).unwrap(),
    )
    .unwrap();

    assert_eq!(weights.values()[0], 0.5);
    assert_eq!(weights.values()[3], 0.5);
    assert_abs_diff_eq!(weights.values()[1], 1.0, epsilon = 1e-3);
    assert_abs_diff_eq!(weights.values()[2], 1.0, epsilon = 1e-3);
    assert_abs_diff_eq!(weights.values()[4], 0.0, epsilon = 1e-3);
    assert_abs_diff_eq!(weights.values()[5], 0.0, epsilon = 1e-3);
}

#[test]
fn unit_difference_with_unit_weights_scores_one() {
    let axis = [0.0, 2.0, 4.0, 6.0, 8.0, 10.0];
    let score = score_channel(&axis, &[1.0; 6], &[0.0; 6], &[1.0; 6], 0, 1, 0.1).unwrap();
    assert_relative_eq!(score.score, 1.0, epsilon = 1e-12);
}

#[test]
fn degenerate_axis_never_yields_non_finite_score() {
    let result = score_channel(&[3.0, 3.0], &[1.0, 1.0], &[0.0, 0.0], &[1.0, 1.0], 0, 0, 0.1);
    assert!(matches!(result, Err(NumericError::DegenerateDomain { .. })));
}

#[test]
fn pseudized_curve_with_high_energy_error_is_barely_penalized() {
    // A PS curve that only deviates far above the upper window center should
    // score much lower than one deviating inside the weighted band.
    let axis = linspace(-2.0, 12.0, 281);
    let ae: Vec<f64> = axis.iter().map(|e| (e * 0.3).atan()).collect();
    let ps_high: Vec<f64> = axis
        .iter()
        .zip(&ae)
        .map(|(e, a)| if *e > 9.0 { a + 1.0 } else { *a })
        .collect();
    let ps_band: Vec<f64> = axis
        .iter()
        .zip(&ae)
        .map(|(e, a)| if (2.0..4.0).contains(e) { a + 1.0 } else { *a })
        .collect();

    let curve_set = |ps: &[f64]| {
        CurveSet::new(0).with_channel(ChannelCurves::new(
            0,
            EnergyCurve::new(axis.clone(), ae.clone()).unwrap(),
            EnergyCurve::new(axis.clone(), ps.to_vec()).unwrap(),
        ))
    };

    let config = AnalysisConfig::default();
    let reporter = ProgressReporter::new();
    let high = workflows::score::run(&curve_set(&ps_high), &config, &reporter).unwrap();
    let band = workflows::score::run(&curve_set(&ps_band), &config, &reporter).unwrap();

    assert!(high.total_score() < 1e-3);
    assert!(band.total_score() > 0.1);
}

#[test]
fn custom_unbound_weight_flows_through_workflow() {
    let axis = linspace(0.0, 10.0, 11);
    let make = |l| {
        ChannelCurves::new(
            l,
            EnergyCurve::new(axis.clone(), vec![2.0; 11]).unwrap(),
            EnergyCurve::new(axis.clone(), vec![1.0; 11]).unwrap(),
        )
    };
    let set = CurveSet::new(0).with_channel(make(0)).with_channel(make(1));

    let half = AnalysisConfigBuilder::new()
        .low_window(FermiDiracWindow::reference_low())
        .high_window(FermiDiracWindow::reference_high())
        .unbound_weight(0.5)
        .build()
        .unwrap();
    let report = workflows::score::run(&set, &half, &ProgressReporter::new()).unwrap();

    let bound = report.channel(0).unwrap();
    let unbound = report.channel(1).unwrap();
    assert_relative_eq!(unbound.raw_score, bound.score, max_relative = 1e-12);
    assert_relative_eq!(unbound.score, 0.5 * bound.score, max_relative = 1e-12);
}
