use crate::cli::WeightsArgs;
use crate::config::{CommandOverrides, build_config};
use crate::error::{CliError, Result};
use psq::core::weighting::profile::{WeightCurve, build_weights};
use tracing::info;

const MIN_GRID_POINTS: usize = 2;

pub async fn run(args: WeightsArgs) -> Result<()> {
    let app_config = build_config(&args.analysis, CommandOverrides::default())?;
    let weighting = &app_config.core_config.weighting;

    let energies = uniform_grid(args.emin, args.emax, args.points)?;
    let weights = build_weights(&energies, &weighting.low_window, &weighting.high_window)
        .map_err(|e| CliError::Core(e.into()))?;
    info!(
        "Built weight profile on {} points, switching at {} Ha.",
        weights.len(),
        weights.midpoint()
    );

    for line in weight_table(&energies, &weights) {
        println!("{}", line);
    }
    Ok(())
}

fn uniform_grid(emin: f64, emax: f64, points: usize) -> Result<Vec<f64>> {
    if !emin.is_finite() || !emax.is_finite() {
        return Err(CliError::Argument(
            "--emin and --emax must be finite".to_string(),
        ));
    }
    if emax <= emin {
        return Err(CliError::Argument(format!(
            "--emax ({}) must be greater than --emin ({})",
            emax, emin
        )));
    }
    if points < MIN_GRID_POINTS {
        return Err(CliError::Argument(format!(
            "--points must be at least {}, got {}",
            MIN_GRID_POINTS, points
        )));
    }

    let step = (emax - emin) / (points - 1) as f64;
    let mut grid: Vec<f64> = (0..points).map(|i| emin + step * i as f64).collect();
    if let Some(last) = grid.last_mut() {
        *last = emax;
    }
    Ok(grid)
}

fn weight_table(energies: &[f64], weights: &WeightCurve) -> Vec<String> {
    std::iter::once("energy,weight".to_string())
        .chain(
            energies
                .iter()
                .zip(weights.values())
                .map(|(e, w)| format!("{},{}", e, w)),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use psq::core::models::window::FermiDiracWindow;

    #[test]
    fn uniform_grid_includes_both_end_points() {
        let grid = uniform_grid(-1.0, 1.0, 5).unwrap();
        assert_eq!(grid, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn uniform_grid_rejects_bad_arguments() {
        assert!(matches!(
            uniform_grid(1.0, 1.0, 10),
            Err(CliError::Argument(_))
        ));
        assert!(matches!(
            uniform_grid(0.0, 1.0, 1),
            Err(CliError::Argument(_))
        ));
        assert!(matches!(
            uniform_grid(f64::NAN, 1.0, 10),
            Err(CliError::Argument(_))
        ));
    }

    #[test]
    fn weight_table_has_header_and_one_row_per_energy() {
        let energies = uniform_grid(0.0, 6.0, 3).unwrap();
        let weights = build_weights(
            &energies,
            &FermiDiracWindow::reference_low(),
            &FermiDiracWindow::reference_high(),
        )
        .unwrap();

        let table = weight_table(&energies, &weights);
        assert_eq!(table.len(), 4);
        assert_eq!(table[0], "energy,weight");
        assert_eq!(table[1], "0,0.5");
        assert_eq!(table[3], "6,0.5");
    }
}
