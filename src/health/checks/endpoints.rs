//! Critical application endpoints and their accepted statuses

use serde_json::json;

use crate::health::check::{Method, Probe};

/// An application endpoint probed once per run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriticalEndpoint {
    pub path: &'static str,
    pub method: Method,
    /// Statuses treated as a pass
    pub accepted: &'static [u16],
}

/// The fixed sweep, in run order
///
/// Unauthenticated requests are expected to be rejected cleanly: a 401 on
/// protected reads, a validation error on an empty login.
pub const CRITICAL_ENDPOINTS: [CriticalEndpoint; 3] = [
    CriticalEndpoint {
        path: "/api/users",
        method: Method::Get,
        accepted: &[200, 401],
    },
    CriticalEndpoint {
        path: "/api/auth/login",
        method: Method::Post,
        accepted: &[400, 422],
    },
    CriticalEndpoint {
        path: "/api/config",
        method: Method::Get,
        accepted: &[200, 401],
    },
];

impl Probe for CriticalEndpoint {
    fn name(&self) -> &'static str {
        self.path
    }

    fn path(&self) -> &'static str {
        self.path
    }

    fn method(&self) -> Method {
        self.method
    }

    // POST probes carry an empty JSON object
    fn body(&self) -> Option<serde_json::Value> {
        match self.method {
            Method::Post => Some(json!({})),
            Method::Get => None,
        }
    }

    fn accepts(&self, status: u16) -> bool {
        self.accepted.contains(&status)
    }
}
