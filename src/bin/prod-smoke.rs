use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use prod_smoke::build_info;
use prod_smoke::config::{
    DEFAULT_BASE_URL, DEFAULT_LOG_FILTER, DEFAULT_TIMEOUT_SECS, TesterConfig,
};
use prod_smoke::health::{ProductionTester, print_report};

/// Run production smoke tests against a deployed service
#[derive(Parser, Debug)]
#[command(name = "prod-smoke", version, long_version = build_info::LONG_VERSION, about)]
struct Args {
    /// Base URL of the production application
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    url: String,

    /// Print the full report as JSON after the summary
    #[arg(long)]
    verbose: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // Diagnostics go to stderr so stdout carries only the report
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = TesterConfig::new(&args.url).with_timeout(Duration::from_secs(args.timeout));
    let tester = ProductionTester::new(config).context("Failed to initialise production tester")?;

    let report = tester.run_all();
    print_report(&report, args.verbose).context("Failed to render report")?;

    Ok(ExitCode::from(report.exit_code()))
}
