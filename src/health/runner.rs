//! Sequential runner for the production checks

use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::check::{Method, Probe, ProbeOutcome, TestResult};
use super::checks::{
    CRITICAL_ENDPOINTS, ConnectivityCheck, PERFORMANCE_CHECKS, PerformanceSample,
    PerformanceSummary,
};
use crate::build_info;
use crate::config::TesterConfig;
use crate::error::TesterError;

/// Outcomes of the four boolean connectivity checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConnectivityResults {
    pub health_endpoint: bool,
    pub api_health: bool,
    pub database_connection: bool,
    pub redis_connection: bool,
}

impl ConnectivityResults {
    /// Result of a single check
    pub fn get(&self, check: ConnectivityCheck) -> bool {
        match check {
            ConnectivityCheck::Health => self.health_endpoint,
            ConnectivityCheck::ApiHealth => self.api_health,
            ConnectivityCheck::Database => self.database_connection,
            ConnectivityCheck::Cache => self.redis_connection,
        }
    }

    /// True when every critical check passed
    pub fn critical_passed(&self) -> bool {
        ConnectivityCheck::ALL
            .into_iter()
            .filter(|check| check.is_critical())
            .all(|check| self.get(check))
    }
}

/// Everything observed during one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    #[serde(flatten)]
    pub connectivity: ConnectivityResults,
    pub critical_endpoints: Vec<TestResult>,
    pub performance: PerformanceSummary,
    /// Health, API health and database all passed
    pub overall_success: bool,
}

impl RunReport {
    pub fn new(
        connectivity: ConnectivityResults,
        critical_endpoints: Vec<TestResult>,
        performance: PerformanceSummary,
    ) -> Self {
        Self {
            overall_success: connectivity.critical_passed(),
            connectivity,
            critical_endpoints,
            performance,
        }
    }

    /// Returns true if every critical check passed
    pub fn is_healthy(&self) -> bool {
        self.overall_success
    }

    /// Returns the process exit code for this report
    /// 0 = critical checks passed, 1 = at least one failed
    pub fn exit_code(&self) -> u8 {
        if self.overall_success { 0 } else { 1 }
    }
}

/// Timing of one answered request
struct Exchange {
    status: u16,
    /// Until the response headers arrived
    headers: Duration,
    /// Until the body was fully read
    total: Duration,
}

/// Runs the fixed check suite against one deployment
///
/// Every request is sequential and shares one client. Network failures are
/// logged and recorded, never returned.
pub struct ProductionTester {
    config: TesterConfig,
    client: Client,
}

impl ProductionTester {
    /// Builds the shared HTTP client for `config`
    pub fn new(config: TesterConfig) -> Result<Self, TesterError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(build_info::user_agent())
            .build()?;

        Ok(Self { config, client })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Sends one probe and drains the body so the connection returns to the pool
    fn send(&self, probe: &dyn Probe) -> Result<Exchange, reqwest::Error> {
        let url = self.config.url_for(probe.path());
        let request = match probe.method() {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };
        let request = match probe.body() {
            Some(body) => request.json(&body),
            None => request,
        };

        let start = Instant::now();
        let response = request.send()?;
        let headers = start.elapsed();
        let status = response.status().as_u16();
        let body = response.bytes()?;
        let total = start.elapsed();

        debug!(
            probe = probe.name(),
            method = probe.method().as_str(),
            status,
            body_bytes = body.len(),
            headers_ms = headers.as_millis() as u64,
            total_ms = total.as_millis() as u64,
            "Probe answered"
        );
        Ok(Exchange {
            status,
            headers,
            total,
        })
    }

    /// Runs one connectivity check and classifies what happened
    pub fn probe(&self, check: ConnectivityCheck) -> ProbeOutcome {
        match self.send(&check) {
            Ok(Exchange { status, .. }) => {
                let outcome = ProbeOutcome::classify(&check, status);
                if !outcome.is_healthy() {
                    warn!(
                        check = check.name(),
                        path = check.path(),
                        status,
                        "Check unhealthy"
                    );
                }
                outcome
            }
            Err(e) => {
                let error = format!("{:#}", anyhow::Error::from(e));
                warn!(check = check.name(), path = check.path(), %error, "Check unreachable");
                ProbeOutcome::Unreachable { error }
            }
        }
    }

    pub fn check_health(&self) -> bool {
        self.probe(ConnectivityCheck::Health).is_healthy()
    }

    pub fn check_api_health(&self) -> bool {
        self.probe(ConnectivityCheck::ApiHealth).is_healthy()
    }

    pub fn check_database(&self) -> bool {
        self.probe(ConnectivityCheck::Database).is_healthy()
    }

    pub fn check_cache(&self) -> bool {
        self.probe(ConnectivityCheck::Cache).is_healthy()
    }

    /// Probes each critical endpoint once; a failure never stops the sweep
    pub fn check_critical_endpoints(&self) -> Vec<TestResult> {
        CRITICAL_ENDPOINTS
            .iter()
            .map(|endpoint| match self.send(endpoint) {
                Ok(Exchange { status, headers, .. }) => {
                    let result = TestResult::responded(endpoint, status, headers);
                    if !result.success {
                        warn!(path = endpoint.path, status, "Endpoint failed");
                    }
                    result
                }
                Err(e) => {
                    let error = format!("{:#}", anyhow::Error::from(e));
                    warn!(path = endpoint.path, %error, "Endpoint error");
                    TestResult::transport_failure(endpoint, error)
                }
            })
            .collect()
    }

    /// Times sequential GETs against the sampled endpoints
    ///
    /// Only 200 responses are timed, up to the end of the body; anything
    /// else is skipped.
    pub fn measure_performance(&self) -> PerformanceSummary {
        let attempts = self.config.performance_samples;

        let samples = PERFORMANCE_CHECKS
            .iter()
            .map(|check| {
                let mut timings = Vec::with_capacity(attempts);
                for _ in 0..attempts {
                    match self.send(check) {
                        Ok(Exchange { status: 200, total, .. }) => timings.push(total),
                        Ok(_) => {}
                        Err(e) => {
                            warn!(
                                path = check.path(),
                                error = %format!("{:#}", anyhow::Error::from(e)),
                                "Performance probe failed"
                            );
                        }
                    }
                }
                PerformanceSample::from_timings(check.path(), attempts, &timings)
            })
            .collect();

        PerformanceSummary::from_samples(samples)
    }

    /// Runs every check in fixed order and assembles the report
    pub fn run_all(&self) -> RunReport {
        info!(base_url = %self.config.base_url, "Starting production tests");

        let connectivity = ConnectivityResults {
            health_endpoint: self.check_health(),
            api_health: self.check_api_health(),
            database_connection: self.check_database(),
            redis_connection: self.check_cache(),
        };
        let critical_endpoints = self.check_critical_endpoints();
        let performance = self.measure_performance();

        let report = RunReport::new(connectivity, critical_endpoints, performance);
        info!(
            overall_success = report.overall_success,
            samples = report.performance.total_samples(),
            "Production tests finished"
        );
        report
    }
}
