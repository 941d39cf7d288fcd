//! Session-specific error types.

use thiserror::Error;

use crate::domain::foundation::SessionId;

/// Session-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// No live session carries this id.
    #[error("Session not found: {0}")]
    NotFound(SessionId),
    /// The presented id is not a session id at all.
    #[error("Invalid session id: {0}")]
    InvalidId(String),
}

impl SessionError {
    pub fn not_found(id: SessionId) -> Self {
        SessionError::NotFound(id)
    }

    pub fn invalid_id(raw: impl Into<String>) -> Self {
        SessionError::InvalidId(raw.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_displays_id() {
        let id = SessionId::new();
        let err = SessionError::not_found(id);
        assert_eq!(err.to_string(), format!("Session not found: {}", id));
    }

    #[test]
    fn invalid_id_displays_raw_value() {
        let err = SessionError::invalid_id("abc");
        assert_eq!(err.to_string(), "Invalid session id: abc");
    }
}
