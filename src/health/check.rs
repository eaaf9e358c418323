//! Core probe trait and result types

use std::time::Duration;

use serde::Serialize;

/// Pass/fail status of a named check, as shown in the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed
    Pass,
    /// Check failed
    Fail,
}

impl CheckStatus {
    /// Maps a boolean check result to a status
    pub fn from_passed(passed: bool) -> Self {
        if passed {
            CheckStatus::Pass
        } else {
            CheckStatus::Fail
        }
    }

    /// Returns true if the check passed
    pub fn is_ok(&self) -> bool {
        matches!(self, CheckStatus::Pass)
    }

    /// Returns the glyph and label as a colored string
    pub fn as_colored_str(&self) -> String {
        use colored::Colorize;
        match self {
            CheckStatus::Pass => "✅ PASS".green().to_string(),
            CheckStatus::Fail => "❌ FAIL".red().to_string(),
        }
    }
}

/// HTTP method used by a probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// A single HTTP request against the service under test
pub trait Probe {
    /// Short name used in log output
    fn name(&self) -> &'static str;

    /// Absolute path appended to the base URL
    fn path(&self) -> &'static str;

    fn method(&self) -> Method {
        Method::Get
    }

    /// JSON body sent with the request, if any
    fn body(&self) -> Option<serde_json::Value> {
        None
    }

    /// Whether `status` counts as a pass for this probe
    fn accepts(&self, status: u16) -> bool;
}

/// What a connectivity probe observed
///
/// Separates "reachable but unhealthy" from "unreachable"; the boolean
/// checks collapse both into `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The service answered with an accepted status
    Healthy { status: u16 },
    /// The service answered, but with a status outside the accepted set
    Unhealthy { status: u16 },
    /// No HTTP response was received (DNS, connect, timeout, bad URL)
    Unreachable { error: String },
}

impl ProbeOutcome {
    /// Classifies a received status against the probe's accepted set
    pub fn classify(probe: &dyn Probe, status: u16) -> Self {
        if probe.accepts(status) {
            ProbeOutcome::Healthy { status }
        } else {
            ProbeOutcome::Unhealthy { status }
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, ProbeOutcome::Healthy { .. })
    }

    /// Status code, if a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            ProbeOutcome::Healthy { status } | ProbeOutcome::Unhealthy { status } => Some(*status),
            ProbeOutcome::Unreachable { .. } => None,
        }
    }
}

/// Recorded result of one critical-endpoint probe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestResult {
    pub endpoint: String,
    pub method: Method,
    /// `None` when the request never produced a response
    pub status_code: Option<u16>,
    pub success: bool,
    /// Seconds until the response headers arrived
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TestResult {
    /// Result for a probe that received a response
    pub fn responded(probe: &dyn Probe, status: u16, elapsed: Duration) -> Self {
        Self {
            endpoint: probe.path().to_string(),
            method: probe.method(),
            status_code: Some(status),
            success: probe.accepts(status),
            response_time: Some(elapsed.as_secs_f64()),
            error: None,
        }
    }

    /// Result for a probe whose request failed in transport
    pub fn transport_failure(probe: &dyn Probe, error: impl Into<String>) -> Self {
        Self {
            endpoint: probe.path().to_string(),
            method: probe.method(),
            status_code: None,
            success: false,
            response_time: None,
            error: Some(error.into()),
        }
    }

    pub fn status(&self) -> CheckStatus {
        CheckStatus::from_passed(self.success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OnlyOk;

    impl Probe for OnlyOk {
        fn name(&self) -> &'static str {
            "only ok"
        }

        fn path(&self) -> &'static str {
            "/ok"
        }

        fn accepts(&self, status: u16) -> bool {
            status == 200
        }
    }

    #[test]
    fn status_from_boolean() {
        assert!(CheckStatus::from_passed(true).is_ok());
        assert_eq!(CheckStatus::from_passed(false), CheckStatus::Fail);
    }

    #[test]
    fn classify_separates_healthy_and_unhealthy() {
        assert_eq!(
            ProbeOutcome::classify(&OnlyOk, 200),
            ProbeOutcome::Healthy { status: 200 }
        );
        let outcome = ProbeOutcome::classify(&OnlyOk, 503);
        assert_eq!(outcome, ProbeOutcome::Unhealthy { status: 503 });
        assert!(!outcome.is_healthy());
        assert_eq!(outcome.status(), Some(503));
    }

    #[test]
    fn unreachable_has_no_status() {
        let outcome = ProbeOutcome::Unreachable {
            error: "connection refused".into(),
        };
        assert!(!outcome.is_healthy());
        assert_eq!(outcome.status(), None);
    }

    #[test]
    fn responded_result_applies_accepted_set() {
        let result = TestResult::responded(&OnlyOk, 404, Duration::from_millis(1500));
        assert_eq!(result.endpoint, "/ok");
        assert_eq!(result.status_code, Some(404));
        assert!(!result.success);
        assert_eq!(result.response_time, Some(1.5));
        assert!(result.error.is_none());
    }

    #[test]
    fn transport_failure_has_error_and_no_status() {
        let result = TestResult::transport_failure(&OnlyOk, "timed out");
        assert_eq!(result.status_code, None);
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("timed out"));
        assert_eq!(result.status(), CheckStatus::Fail);
    }

    #[test]
    fn transport_failure_serializes_null_status() {
        let result = TestResult::transport_failure(&OnlyOk, "refused");
        let value = serde_json::to_value(&result).unwrap();
        assert!(value["status_code"].is_null());
        assert_eq!(value["method"], "GET");
        assert_eq!(value["error"], "refused");
        assert!(value.get("response_time").is_none());
    }
}
