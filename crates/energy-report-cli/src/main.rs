//! CLI for energy-report — average remaining energy and dead nodes from a
//! DTN simulator energy level report.

mod commands;

use std::io;

use clap::{Parser, Subcommand};
use energy_report_core::{DEFAULT_MARKER, DEFAULT_REPORT_FILE, DEFAULT_THRESHOLD};

#[derive(Parser)]
#[command(name = "energy-report")]
#[command(about = "energy-report — final-snapshot energy statistics for DTN simulation reports")]
#[command(version = energy_report_core::VERSION)]
struct Cli {
    /// Without a subcommand, prompts for the node count and analyzes the
    /// default report in the working directory.
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Average remaining energy and number of dead nodes at the final snapshot
    Analyze {
        /// Energy level report to read
        #[arg(long, default_value = DEFAULT_REPORT_FILE)]
        report: String,

        /// Number of nodes to average over (prompted for when omitted)
        #[arg(long)]
        nodes: Option<u32>,

        /// Snapshot marker token; everything after its first occurrence is analyzed
        #[arg(long, default_value = DEFAULT_MARKER)]
        marker: String,

        /// Readings strictly below this count as dead nodes
        #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,

        /// Also write the summary as JSON
        #[arg(long)]
        output: Option<String>,
    },

    /// List every sampled reading with its label and dead-node flag
    Readings {
        /// Energy level report to read
        #[arg(long, default_value = DEFAULT_REPORT_FILE)]
        report: String,

        /// Snapshot marker token; everything after its first occurrence is analyzed
        #[arg(long, default_value = DEFAULT_MARKER)]
        marker: String,

        /// Readings strictly below this count as dead nodes
        #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,

        /// Also write the readings as JSON
        #[arg(long)]
        output: Option<String>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();

    let result = match cli.command {
        None => commands::analyze::run(
            commands::analyze::AnalyzeCommandConfig::default(),
            &mut input,
            &mut out,
        ),
        Some(Commands::Analyze {
            report,
            nodes,
            marker,
            threshold,
            output,
        }) => commands::analyze::run(
            commands::analyze::AnalyzeCommandConfig {
                report_path: &report,
                nodes,
                marker: &marker,
                threshold,
                output_path: output.as_deref(),
            },
            &mut input,
            &mut out,
        ),
        Some(Commands::Readings {
            report,
            marker,
            threshold,
            output,
        }) => commands::readings::run(&report, &marker, threshold, output.as_deref(), &mut out),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
