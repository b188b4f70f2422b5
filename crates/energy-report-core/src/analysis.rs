//! Final-snapshot statistics: average remaining energy and dead-node count.
//!
//! The average divides the sum of sampled readings by the node count the
//! caller supplies. The two quantities are never reconciled; a mismatch is
//! only logged.

use std::fmt;
use std::path::Path;

use log::{debug, warn};
use serde::Serialize;

use crate::error::{ReportError, Result};
use crate::report::{
    DEFAULT_MARKER, EnergySegment, extract_energy_segment, read_report, write_file,
};

/// Readings strictly below this are dead nodes.
pub const DEFAULT_THRESHOLD: f64 = 600.0;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Which snapshot to analyze and where the dead-node cut-off sits.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    pub marker: String,
    pub threshold: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Statistics for one report snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergySummary {
    pub node_count: u32,
    /// Number of readings the walk sampled (not necessarily `node_count`).
    pub readings: usize,
    pub total_energy: f64,
    /// Unrounded; rounding happens only when displayed.
    pub average_remaining_energy: f64,
    pub dead_nodes: usize,
    pub threshold: f64,
    pub marker: String,
    pub marker_found: bool,
    pub segment_len: usize,
}

impl EnergySummary {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the summary as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.to_json()?;
        write_file(path, &json)
    }
}

impl fmt::Display for EnergySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Average remaining energy = {:.2}",
            self.average_remaining_energy
        )?;
        write!(f, "Number of dead nodes = {}", self.dead_nodes)
    }
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// Sum of every sampled reading. An empty walk sums to positive zero.
pub fn total_energy(segment: &EnergySegment<'_>) -> Result<f64> {
    segment.values().try_fold(0.0, |acc, value| Ok(acc + value?))
}

/// Sum of sampled readings divided by `node_count`.
///
/// Readings are parsed before the node count is checked, so a bad token is
/// reported even when `node_count` is zero.
pub fn average_remaining_energy(segment: &EnergySegment<'_>, node_count: u32) -> Result<f64> {
    let total = total_energy(segment)?;
    if node_count == 0 {
        return Err(ReportError::ZeroNodeCount);
    }
    Ok(total / f64::from(node_count))
}

/// Count of sampled readings strictly below `threshold`.
pub fn dead_node_count(segment: &EnergySegment<'_>, threshold: f64) -> Result<usize> {
    let mut dead = 0;
    for value in segment.values() {
        if value? < threshold {
            dead += 1;
        }
    }
    Ok(dead)
}

/// Parse a node count as typed by a user. Surrounding whitespace is ignored.
/// Zero parses; it fails later as a division by zero.
pub fn parse_node_count(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| ReportError::InvalidNodeCount(trimmed.to_string()))
}

// ---------------------------------------------------------------------------
// Full pipeline
// ---------------------------------------------------------------------------

/// Compute both statistics over an already extracted segment.
pub fn analyze_segment(
    segment: &EnergySegment<'_>,
    node_count: u32,
    config: &AnalyzerConfig,
) -> Result<EnergySummary> {
    let sampled = segment.readings()?;
    let total = sampled.iter().fold(0.0, |acc, reading| acc + reading.value);
    if node_count == 0 {
        return Err(ReportError::ZeroNodeCount);
    }
    let average = total / f64::from(node_count);
    let dead_nodes = sampled
        .iter()
        .filter(|reading| reading.value < config.threshold)
        .count();
    let readings = sampled.len();

    if readings != node_count as usize {
        warn!("sampled {readings} reading(s) but averaging over {node_count} node(s)");
    }
    debug!("average {average}, {dead_nodes} dead node(s) below {}", config.threshold);

    Ok(EnergySummary {
        node_count,
        readings,
        total_energy: total,
        average_remaining_energy: average,
        dead_nodes,
        threshold: config.threshold,
        marker: config.marker.clone(),
        marker_found: segment.marker_found(),
        segment_len: segment.len(),
    })
}

/// Extract the segment from report text and analyze it.
pub fn analyze_report(
    contents: &str,
    node_count: u32,
    config: &AnalyzerConfig,
) -> Result<EnergySummary> {
    let segment = extract_energy_segment(contents, &config.marker);
    if !segment.marker_found() {
        warn!("marker {} not found in report; energy segment is empty", config.marker);
    }
    analyze_segment(&segment, node_count, config)
}

/// Read the report at `path` and analyze it.
pub fn analyze_report_file(
    path: impl AsRef<Path>,
    node_count: u32,
    config: &AnalyzerConfig,
) -> Result<EnergySummary> {
    let contents = read_report(path)?;
    analyze_report(&contents, node_count, config)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
