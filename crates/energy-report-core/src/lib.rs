//! # energy-report-core
//!
//! **Final-snapshot energy statistics for DTN simulator reports.**
//!
//! An energy level report lists, at each snapshot tick, a `[time]` marker
//! followed by `label value` pairs. This crate cuts the report at the
//! final-snapshot marker (`[43200]` by default), walks the remaining tokens with
//! a fixed stride, and reports the average remaining energy and the number of
//! nodes below the dead-node threshold.
//!
//! ## Quick Start
//!
//! ```
//! use energy_report_core::{AnalyzerConfig, analyze_report};
//!
//! let report = "[0] n0 4800 n1 4800 n2 4800\n[43200] n0 4100 n1 550.5 n2 700\n";
//! let summary = analyze_report(report, 2, &AnalyzerConfig::default()).unwrap();
//!
//! assert_eq!(summary.dead_nodes, 1);
//! assert_eq!(
//!     summary.to_string(),
//!     "Average remaining energy = 625.25\nNumber of dead nodes = 1"
//! );
//! ```
//!
//! ## Pipeline
//!
//! Report text → tokens → energy segment → readings → summary
//!
//! The node count used for the average comes from the caller and is never
//! checked against the number of readings the walk samples.

pub mod analysis;
pub mod error;
pub mod report;

pub use analysis::{
    AnalyzerConfig, DEFAULT_THRESHOLD, EnergySummary, analyze_report, analyze_report_file,
    analyze_segment, average_remaining_energy, dead_node_count, parse_node_count, total_energy,
};
pub use error::{ReportError, Result};
pub use report::{
    DEFAULT_MARKER, DEFAULT_REPORT_FILE, EnergyReading, EnergySegment, extract_energy_segment,
    read_report, write_readings_json,
};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
