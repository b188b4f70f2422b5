//! `energy-report readings` — every sampled reading of the snapshot.

use std::io::Write;

use energy_report_core::{
    EnergyReading, ReportError, extract_energy_segment, read_report, write_readings_json,
};
use log::{info, warn};

pub fn run<W: Write>(
    report_path: &str,
    marker: &str,
    threshold: f64,
    output_path: Option<&str>,
    out: &mut W,
) -> Result<(), ReportError> {
    let contents = read_report(report_path)?;
    let segment = extract_energy_segment(&contents, marker);
    if !segment.marker_found() {
        warn!("marker {marker} not found in {report_path}; energy segment is empty");
    }
    let readings = segment.readings()?;

    write_table(&readings, threshold, out).map_err(ReportError::Output)?;

    if let Some(path) = output_path {
        write_readings_json(&readings, path)?;
        info!("readings written to {path}");
    }
    Ok(())
}

fn write_table<W: Write>(
    readings: &[EnergyReading],
    threshold: f64,
    out: &mut W,
) -> std::io::Result<()> {
    writeln!(out, "{:<20} {:>14}", "Node", "Energy")?;
    writeln!(out, "{}", "-".repeat(40))?;
    for reading in readings {
        writeln!(out, "{}", format_reading(reading, threshold))?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "{} reading(s), {} below {threshold}",
        readings.len(),
        readings.iter().filter(|r| r.value < threshold).count()
    )
}

fn format_reading(reading: &EnergyReading, threshold: f64) -> String {
    let flag = if reading.value < threshold { "  DEAD" } else { "" };
    format!("{:<20} {:>14.2}{flag}", truncate(&reading.label, 20), reading.value)
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}
