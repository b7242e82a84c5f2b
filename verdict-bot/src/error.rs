//! Poll-cycle error taxonomy
//!
//! Every variant except [`PollError::MissingCredentials`] is recoverable:
//! the poller reports it and retries after the fixed interval.

use thiserror::Error;
use verdict_client::ClientError;
use verdict_core::CoreError;

/// Result type alias for poller operations
pub type Result<T> = std::result::Result<T, PollError>;

#[derive(Debug, Error)]
pub enum PollError {
    /// One or more secrets are absent; the process must stop
    #[error("missing environment variables: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    /// The homework API answered with something other than 200
    #[error("upstream unavailable: API responded with status {status}")]
    UpstreamUnavailable { status: u16 },

    /// The API payload is missing keys or has the wrong shape
    #[error("malformed API response: {0}")]
    MalformedResponse(String),

    /// The newest homework carries a status outside the known set
    #[error("unknown homework status: {0:?}")]
    UnknownStatus(String),

    /// The messaging service did not accept the message
    #[error("notification unavailable: {0}")]
    NotificationUnavailable(String),

    /// The request to the homework API never completed
    #[error("request to homework API failed: {0}")]
    Request(ClientError),
}

impl PollError {
    /// Classifies a failure of the homework API call
    pub fn from_api(error: ClientError) -> Self {
        match error {
            ClientError::ApiError { status, .. } => Self::UpstreamUnavailable { status },
            ClientError::ParseError(message) => Self::MalformedResponse(message),
            other => Self::Request(other),
        }
    }

    /// Classifies a failure of the messaging call
    pub fn from_notifier(error: ClientError) -> Self {
        Self::NotificationUnavailable(error.to_string())
    }
}

impl From<CoreError> for PollError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::MalformedResponse(message) => Self::MalformedResponse(message),
            CoreError::UnknownStatus(status) => Self::UnknownStatus(status),
        }
    }
}

#[cfg(test)]
impl PollError {
    /// Whether the process should stop instead of retrying
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingCredentials(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_missing_credentials_is_fatal() {
        assert!(PollError::MissingCredentials(vec!["TELEGRAM_TOKEN"]).is_fatal());
        assert!(!PollError::UpstreamUnavailable { status: 500 }.is_fatal());
        assert!(!PollError::UnknownStatus("x".into()).is_fatal());
        assert!(!PollError::NotificationUnavailable("x".into()).is_fatal());
    }

    #[test]
    fn test_api_status_maps_to_upstream_unavailable() {
        let err = PollError::from_api(ClientError::api_error(500, "boom"));
        assert!(matches!(err, PollError::UpstreamUnavailable { status: 500 }));
        assert!(err.to_string().contains("upstream unavailable"));
    }

    #[test]
    fn test_unparseable_body_is_malformed() {
        let err = PollError::from_api(ClientError::ParseError("eof".into()));
        assert!(matches!(err, PollError::MalformedResponse(_)));
    }

    #[test]
    fn test_core_errors_keep_their_category() {
        let err: PollError = CoreError::UnknownStatus("pending".into()).into();
        assert_eq!(err.to_string(), "unknown homework status: \"pending\"");

        let err: PollError = CoreError::malformed("missing key `homeworks`").into();
        assert!(matches!(err, PollError::MalformedResponse(_)));
    }

    #[test]
    fn test_missing_credentials_names_variables() {
        let err = PollError::MissingCredentials(vec!["PRACTICUM_TOKEN", "TELEGRAM_CHAT_ID"]);
        assert_eq!(
            err.to_string(),
            "missing environment variables: PRACTICUM_TOKEN, TELEGRAM_CHAT_ID"
        );
    }
}
