pub mod handlers;

use crate::presentation::cli::Cli;
use clap::Parser;
use precomp_core::error::Result;
use precomp_core::report::style::ColorChoice;
use precomp_core::select::ExtensionSet;
use precomp_core::{Algorithm, ReportOptions, RunOptions};
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let extensions = if cli.extensions.is_empty() {
        ExtensionSet::default()
    } else {
        ExtensionSet::new(&cli.extensions)
    };
    let algorithms = if cli.algorithms.is_empty() {
        Algorithm::ALL.to_vec()
    } else {
        cli.algorithms.into_iter().map(Algorithm::from).collect()
    };
    let opts = RunOptions {
        root: cli.root,
        extensions,
        algorithms,
        show_progress: !cli.no_progress,
        jobs: cli.jobs,
    };

    if cli.clean {
        handlers::handle_clean(opts)
    } else {
        let output = ReportOptions {
            color: ColorChoice::from(cli.color).apply(),
            format: cli.format.into(),
        };
        handlers::handle_report(opts, output)
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
