//! Smoke checks against a deployed web service
//!
//! This module probes a fixed set of endpoints, useful for:
//! - Gating a deployment in CI
//! - Verifying a rollout after release
//! - Spotting a grossly slow health endpoint
//!
//! # Example
//!
//! ```no_run
//! use prod_smoke::config::TesterConfig;
//! use prod_smoke::health::{ProductionTester, format_report};
//!
//! let tester = ProductionTester::new(TesterConfig::new("https://staging.example.com"))?;
//! let report = tester.run_all();
//!
//! print!("{}", format_report(&report));
//! std::process::exit(report.exit_code().into());
//! # Ok::<(), prod_smoke::error::TesterError>(())
//! ```

pub mod check;
pub mod checks;
pub mod reporter;
pub mod runner;

pub use check::{CheckStatus, Method, Probe, ProbeOutcome, TestResult};
pub use reporter::{format_json, format_report, print_report};
pub use runner::{ConnectivityResults, ProductionTester, RunReport};

use crate::config::TesterConfig;
use crate::error::TesterError;

/// Runs the full suite against `base_url` with default settings
pub fn run_all_checks(base_url: &str) -> Result<RunReport, TesterError> {
    Ok(ProductionTester::new(TesterConfig::new(base_url))?.run_all())
}
