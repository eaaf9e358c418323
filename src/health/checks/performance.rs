//! Response-time sampling
//!
//! A fixed-size synchronous probe: a handful of sequential requests per
//! endpoint. Good enough to catch a service that is grossly slow, not a
//! statistically meaningful benchmark.

use std::time::Duration;

use serde::Serialize;

use super::ConnectivityCheck;

/// Endpoints sampled in the performance pass, in order
pub const PERFORMANCE_CHECKS: [ConnectivityCheck; 2] =
    [ConnectivityCheck::Health, ConnectivityCheck::ApiHealth];

/// Latency statistics for one endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceSample {
    pub endpoint: String,
    /// Requests issued
    pub attempts: usize,
    /// Requests that returned 200 and were timed
    pub samples: usize,
    /// Mean seconds over collected samples; `None` when nothing was collected
    pub avg_response_time: Option<f64>,
    pub max_response_time: Option<f64>,
    pub min_response_time: Option<f64>,
    /// `samples / attempts`
    pub success_rate: f64,
}

impl PerformanceSample {
    /// Builds statistics from the timings of successful attempts
    ///
    /// Failed attempts are absent from `timings`, not zero-valued.
    pub fn from_timings(endpoint: impl Into<String>, attempts: usize, timings: &[Duration]) -> Self {
        let secs: Vec<f64> = timings.iter().map(Duration::as_secs_f64).collect();

        let (avg, min, max) = if secs.is_empty() {
            (None, None, None)
        } else {
            let sum: f64 = secs.iter().sum();
            let min = secs.iter().copied().fold(f64::INFINITY, f64::min);
            let max = secs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            (Some(sum / secs.len() as f64), Some(min), Some(max))
        };

        let success_rate = if attempts == 0 {
            0.0
        } else {
            secs.len() as f64 / attempts as f64
        };

        Self {
            endpoint: endpoint.into(),
            attempts,
            samples: secs.len(),
            avg_response_time: avg,
            max_response_time: max,
            min_response_time: min,
            success_rate,
        }
    }
}

/// Results of the whole performance pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceSummary {
    pub performance_tests: Vec<PerformanceSample>,
    /// Mean of the per-endpoint averages; 0 when no endpoint collected a sample
    pub overall_avg_response_time: f64,
}

impl PerformanceSummary {
    pub fn from_samples(performance_tests: Vec<PerformanceSample>) -> Self {
        let averages: Vec<f64> = performance_tests
            .iter()
            .filter_map(|sample| sample.avg_response_time)
            .collect();

        let overall_avg_response_time = if averages.is_empty() {
            0.0
        } else {
            averages.iter().sum::<f64>() / averages.len() as f64
        };

        Self {
            performance_tests,
            overall_avg_response_time,
        }
    }

    /// Total timed samples across all endpoints
    pub fn total_samples(&self) -> usize {
        self.performance_tests.iter().map(|s| s.samples).sum()
    }
}
