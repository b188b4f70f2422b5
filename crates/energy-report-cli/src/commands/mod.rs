pub mod analyze;
pub mod readings;

use std::io::{BufRead, Write};

use energy_report_core::{AnalyzerConfig, ReportError, parse_node_count};

/// Prompt shown before reading the node count from stdin.
pub const NODE_COUNT_PROMPT: &str = "Enter number of nodes: ";

/// Write the prompt, read one line, and parse it as a node count.
/// End of input reads as an empty line and fails to parse.
pub fn prompt_node_count<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> Result<u32, ReportError> {
    write!(out, "{NODE_COUNT_PROMPT}").map_err(ReportError::Prompt)?;
    out.flush().map_err(ReportError::Prompt)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(ReportError::Prompt)?;
    parse_node_count(&line)
}

/// Build the analyzer configuration from CLI flags.
pub fn analyzer_config(marker: &str, threshold: f64) -> AnalyzerConfig {
    AnalyzerConfig {
        marker: marker.to_string(),
        threshold,
    }
}
