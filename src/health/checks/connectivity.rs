//! Health and dependency connectivity checks

use crate::health::check::Probe;

/// One of the four boolean connectivity checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityCheck {
    /// `GET /health`
    Health,
    /// `GET /api/health`
    ApiHealth,
    /// `GET /api/health/database`
    Database,
    /// `GET /api/health/redis`
    Cache,
}

impl ConnectivityCheck {
    /// All checks in the order they run
    pub const ALL: [ConnectivityCheck; 4] = [
        ConnectivityCheck::Health,
        ConnectivityCheck::ApiHealth,
        ConnectivityCheck::Database,
        ConnectivityCheck::Cache,
    ];

    /// Critical checks decide the overall result; the cache check does not
    pub fn is_critical(self) -> bool {
        !matches!(self, ConnectivityCheck::Cache)
    }

    /// Label used in the printed summary
    pub fn label(self) -> &'static str {
        match self {
            ConnectivityCheck::Health => "Health Endpoint",
            ConnectivityCheck::ApiHealth => "API Health",
            ConnectivityCheck::Database => "Database Connection",
            ConnectivityCheck::Cache => "Redis Connection",
        }
    }
}

impl Probe for ConnectivityCheck {
    fn name(&self) -> &'static str {
        match self {
            ConnectivityCheck::Health => "health endpoint",
            ConnectivityCheck::ApiHealth => "api health",
            ConnectivityCheck::Database => "database connection",
            ConnectivityCheck::Cache => "redis connection",
        }
    }

    fn path(&self) -> &'static str {
        match self {
            ConnectivityCheck::Health => "/health",
            ConnectivityCheck::ApiHealth => "/api/health",
            ConnectivityCheck::Database => "/api/health/database",
            ConnectivityCheck::Cache => "/api/health/redis",
        }
    }

    fn accepts(&self, status: u16) -> bool {
        status == 200
    }
}
