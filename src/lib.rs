//! Production smoke tests
//!
//! Probes a deployed web service over HTTP and reports a CI-friendly
//! pass/fail result.

/// Build-time information (version, target, compiler)
pub mod build_info;

/// Tester configuration and defaults
pub mod config;

pub mod error;

/// Connectivity, endpoint and latency checks plus reporting
pub mod health;
