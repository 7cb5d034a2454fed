use crate::error::{CliError, Result};
use psq::core::models::channel::{
    AngularMomentum, ChannelCurves, ConvergenceCurve, CurveSet, CutoffHints,
};
use psq::core::models::curve::EnergyCurve;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    Ae,
    Ps,
    Kinetic,
}

#[derive(Debug, Deserialize)]
struct CurveRecord {
    kind: CurveKind,
    l: AngularMomentum,
    energy: f64,
    value: f64,
}

#[derive(Default)]
struct ChannelPoints {
    ae: Vec<(f64, f64)>,
    ps: Vec<(f64, f64)>,
    kinetic: Vec<(f64, f64)>,
}

/// Reads a curve table with the columns `kind,l,energy,value`.
///
/// Rows belonging to one curve may appear in any order; the scoring core
/// sorts them by energy.
pub fn read_curve_table(
    reader: impl Read,
    lmax: AngularMomentum,
    hints: Option<CutoffHints>,
) -> anyhow::Result<CurveSet> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut by_channel: BTreeMap<AngularMomentum, ChannelPoints> = BTreeMap::new();
    for (row, record) in csv_reader.deserialize::<CurveRecord>().enumerate() {
        let record = record.map_err(|e| anyhow::anyhow!("row {}: {}", row + 1, e))?;
        let points = by_channel.entry(record.l).or_default();
        let target = match record.kind {
            CurveKind::Ae => &mut points.ae,
            CurveKind::Ps => &mut points.ps,
            CurveKind::Kinetic => &mut points.kinetic,
        };
        target.push((record.energy, record.value));
    }

    let mut curve_set = CurveSet::new(lmax);
    curve_set.hints = hints;
    for (l, points) in by_channel {
        match (points.ae.is_empty(), points.ps.is_empty()) {
            (false, false) => {
                debug!(
                    "Channel l={}: {} AE and {} PS samples.",
                    l,
                    points.ae.len(),
                    points.ps.len()
                );
                curve_set.channels.push(ChannelCurves::new(
                    l,
                    EnergyCurve::from_points(points.ae),
                    EnergyCurve::from_points(points.ps),
                ));
            }
            (true, true) => {}
            (false, true) => {
                anyhow::bail!("channel l={} has AE samples but no PS samples", l);
            }
            (true, false) => {
                anyhow::bail!("channel l={} has PS samples but no AE samples", l);
            }
        }
        if !points.kinetic.is_empty() {
            curve_set.convergence.push(ConvergenceCurve {
                l,
                curve: EnergyCurve::from_points(points.kinetic),
            });
        }
    }

    if curve_set.channels.is_empty() {
        warn!("Curve table contains no AE/PS channel data.");
    }
    Ok(curve_set)
}

pub fn load_curve_set(
    path: &Path,
    lmax: AngularMomentum,
    hints: Option<CutoffHints>,
) -> Result<CurveSet> {
    debug!("Loading curve table from {:?}", path);
    let file = std::fs::File::open(path)?;
    read_curve_table(file, lmax, hints).map_err(|source| CliError::FileParsing {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const TABLE: &str = "\
kind,l,energy,value
# l = 0
ae,0,0.0,1.0
ps,0,0.0,0.5
ae,0,1.0,2.0
ps,0,1.0,2.0
# l = 1, rows out of order
ps,1,1.0,0.0
ae,1,1.0,1.0
ae,1,0.0,1.0
ps,1,0.0,1.0
kinetic,0,20.0,0.01
kinetic,0,30.0,0.001
";

    #[test]
    fn reads_channels_and_convergence_curves() {
        let hints = CutoffHints {
            low: 30.0,
            high: 40.0,
        };
        let set = read_curve_table(TABLE.as_bytes(), 0, Some(hints)).unwrap();

        assert_eq!(set.lmax, 0);
        assert_eq!(set.hints, Some(hints));
        assert_eq!(set.channels.len(), 2);
        assert_eq!(set.channels[0].l, 0);
        assert_eq!(set.channels[0].ae.energies(), &[0.0, 1.0]);
        assert_eq!(set.channels[0].ps.values(), &[0.5, 2.0]);
        assert_eq!(set.channels[1].l, 1);
        assert_eq!(set.channels[1].ae.energies(), &[1.0, 0.0]);

        assert_eq!(set.convergence.len(), 1);
        assert_eq!(set.convergence[0].l, 0);
        assert_eq!(set.convergence[0].curve.len(), 2);
    }

    #[test]
    fn kinetic_only_channel_is_not_scored() {
        let table = "kind,l,energy,value\nkinetic,2,10.0,0.1\n";
        let set = read_curve_table(table.as_bytes(), 1, None).unwrap();
        assert!(set.channels.is_empty());
        assert_eq!(set.convergence.len(), 1);
    }

    #[test]
    fn channel_missing_ps_curve_is_rejected() {
        let table = "kind,l,energy,value\nae,0,0.0,1.0\nae,0,1.0,1.0\n";
        let err = read_curve_table(table.as_bytes(), 0, None).unwrap_err();
        assert!(err.to_string().contains("no PS samples"));
    }

    #[test]
    fn unknown_kind_is_rejected_with_row_number() {
        let table = "kind,l,energy,value\nae,0,0.0,1.0\nxx,0,0.0,1.0\n";
        let err = read_curve_table(table.as_bytes(), 0, None).unwrap_err();
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn load_curve_set_wraps_parse_errors_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("curves.csv");
        fs::write(&path, "kind,l,energy,value\nae,zero,0.0,1.0\n").unwrap();

        let result = load_curve_set(&path, 0, None);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn load_curve_set_reports_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_curve_set(&dir.path().join("absent.csv"), 0, None);
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
