//! Tester configuration
//!
//! A small typed struct populated from CLI flags. There are no config files
//! and no environment overrides; the probe matrix itself is fixed.

use std::time::Duration;

/// Base URL probed when `--url` is not given
pub const DEFAULT_BASE_URL: &str = "https://your-app.azurewebsites.net";

/// Per-request timeout applied to every probe
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Number of sequential requests per endpoint in the performance pass
pub const DEFAULT_PERFORMANCE_SAMPLES: usize = 5;

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "prod_smoke=info";

/// Configuration for a single test run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TesterConfig {
    /// Base URL under test, without a trailing slash
    pub base_url: String,
    /// Timeout for each HTTP request
    pub timeout: Duration,
    /// Attempts per endpoint in the performance pass
    pub performance_samples: usize,
}

impl TesterConfig {
    /// Creates a config for `base_url` with default timeout and sample count
    ///
    /// Trailing slashes are stripped so paths can be appended verbatim.
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.as_ref()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            performance_samples: DEFAULT_PERFORMANCE_SAMPLES,
        }
    }

    /// Overrides the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the number of performance attempts per endpoint
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.performance_samples = samples;
        self
    }

    /// Joins the base URL with an absolute endpoint path
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for TesterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_string()
}
