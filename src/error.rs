use thiserror::Error;

/// Errors that stop a run before any probe is sent
///
/// Network failures during a run are never surfaced here; they are recorded
/// on the individual results instead.
#[derive(Debug, Error)]
pub enum TesterError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
