//! `energy-report analyze` — the two-line final-snapshot report.

use std::io::{BufRead, Write};

use energy_report_core::{
    DEFAULT_MARKER, DEFAULT_REPORT_FILE, DEFAULT_THRESHOLD, ReportError, analyze_report_file,
};
use log::info;

pub struct AnalyzeCommandConfig<'a> {
    pub report_path: &'a str,
    /// Prompted for on `input` when `None`.
    pub nodes: Option<u32>,
    pub marker: &'a str,
    pub threshold: f64,
    pub output_path: Option<&'a str>,
}

impl Default for AnalyzeCommandConfig<'_> {
    fn default() -> Self {
        Self {
            report_path: DEFAULT_REPORT_FILE,
            nodes: None,
            marker: DEFAULT_MARKER,
            threshold: DEFAULT_THRESHOLD,
            output_path: None,
        }
    }
}

pub fn run<R: BufRead, W: Write>(
    cfg: AnalyzeCommandConfig<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<(), ReportError> {
    // The node count is read before the report is opened.
    let node_count = match cfg.nodes {
        Some(n) => n,
        None => super::prompt_node_count(input, out)?,
    };

    let config = super::analyzer_config(cfg.marker, cfg.threshold);
    info!("analyzing {} for {node_count} node(s)", cfg.report_path);
    let summary = analyze_report_file(cfg.report_path, node_count, &config)?;

    writeln!(out, "{summary}").map_err(ReportError::Output)?;

    if let Some(path) = cfg.output_path {
        summary.write_json(path)?;
        info!("summary written to {path}");
    }
    Ok(())
}
