//! Service layer error types
//!
//! Wraps transport errors and turns `success: false` envelopes into
//! `Rejected`, so handlers only pick the message shown to the player.

use thiserror::Error;

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Transport, status or decoding failure
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Server answered with `success: false`
    #[error("Server rejected the request: {0}")]
    Rejected(String),

    /// A successful envelope lacked a field the client needs
    #[error("Response is missing '{0}'")]
    MissingField(&'static str),
}

impl ServiceError {
    /// Builds a rejection from the envelope's `error`/`message`, or `fallback`.
    pub fn rejected(
        error: Option<String>,
        message: Option<String>,
        fallback: &str,
    ) -> Self {
        let text = error
            .filter(|e| !e.is_empty())
            .or(message.filter(|m| !m.is_empty()))
            .unwrap_or_else(|| fallback.to_string());
        Self::Rejected(text)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    /// Server-provided text for rejections, `fallback` for everything else.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_prefers_error_then_message() {
        assert_eq!(
            ServiceError::rejected(Some("e".into()), Some("m".into()), "f"),
            ServiceError::Rejected("e".into())
        );
        assert_eq!(
            ServiceError::rejected(Some(String::new()), Some("m".into()), "f"),
            ServiceError::Rejected("m".into())
        );
        assert_eq!(
            ServiceError::rejected(None, None, "f"),
            ServiceError::Rejected("f".into())
        );
    }

    #[test]
    fn transport_errors_use_the_fallback_message() {
        let err = ServiceError::from(ApiError::RequestFailed("connection refused".into()));
        assert_eq!(err.user_message("네트워크 오류"), "네트워크 오류");
        assert_eq!(
            ServiceError::Rejected("이미 9월입니다.".into()).user_message("x"),
            "이미 9월입니다."
        );
    }
}
