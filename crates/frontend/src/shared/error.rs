use thiserror::Error;

/// Failures from calls against the external REST API.
///
/// None of these are fatal: the screen stays interactive, prior state is
/// left intact and the message is surfaced to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Http(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}
