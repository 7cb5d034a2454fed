use crate::error::{CliError, Result};
use psq::workflows::score::TransferabilityReport;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Writes `report` as CSV: one row per energy sample with the weight, the
/// aggregate and one cumulative column per channel (`l0`, `l1`, ...).
pub fn write_report<W: Write>(writer: W, report: &TransferabilityReport) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec![
        "energy".to_string(),
        "weight".to_string(),
        "aggregate".to_string(),
    ];
    header.extend(report.channels.iter().map(|c| format!("l{}", c.l)));
    csv_writer.write_record(&header)?;

    let weights = report.weights.values();
    for (i, energy) in report.energies.iter().enumerate() {
        let mut row = Vec::with_capacity(header.len());
        row.push(energy.to_string());
        row.push(weights[i].to_string());
        row.push(report.aggregate[i].to_string());
        row.extend(report.channels.iter().map(|c| c.cumulative[i].to_string()));
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

pub fn save_report(path: &Path, report: &TransferabilityReport) -> Result<()> {
    debug!("Writing transferability report to {:?}", path);
    let file = std::fs::File::create(path)?;
    write_report(file, report).map_err(|e| CliError::Other(e.into()))
}
