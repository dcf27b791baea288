use thiserror::Error;

use crate::shared::constants::{CLASSIFICATION_FAILED_MESSAGE, TRANSPORT_FAILED_MESSAGE};

/// Remote classification failures. Both variants carry the message shown in
/// the error banner; the constructors substitute the generic fallback when
/// the underlying source had nothing to say.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// The backend answered and rejected the request.
    #[error("{0}")]
    RequestFailed(String),
    /// No usable answer: connection failure, timeout, or a malformed body.
    #[error("{0}")]
    TransportFailed(String),
}

impl ClassifyError {
    pub fn request(message: Option<String>) -> Self {
        Self::RequestFailed(
            message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| CLASSIFICATION_FAILED_MESSAGE.to_owned()),
        )
    }

    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::TransportFailed(if message.is_empty() {
            TRANSPORT_FAILED_MESSAGE.to_owned()
        } else {
            message
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_keeps_server_message() {
        let err = ClassifyError::request(Some("bad video".to_owned()));
        assert_eq!(err.to_string(), "bad video");
    }

    #[test]
    fn test_request_falls_back_when_absent_or_empty() {
        assert_eq!(
            ClassifyError::request(None).to_string(),
            "Classification failed"
        );
        assert_eq!(
            ClassifyError::request(Some(String::new())).to_string(),
            "Classification failed"
        );
    }

    #[test]
    fn test_transport_keeps_source_message() {
        let err = ClassifyError::transport("connection refused");
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn test_transport_falls_back_when_empty() {
        assert_eq!(
            ClassifyError::transport("").to_string(),
            "An error occurred while processing your request"
        );
    }
}
