//! Built-in probes for the service under test

pub mod connectivity;
pub mod endpoints;
pub mod performance;

pub use connectivity::ConnectivityCheck;
pub use endpoints::{CRITICAL_ENDPOINTS, CriticalEndpoint};
pub use performance::{PERFORMANCE_CHECKS, PerformanceSample, PerformanceSummary};
