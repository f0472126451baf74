//! Lookup failure taxonomy.
//!
//! Every failure is caught at the handler boundary and converted into a JSON
//! `{"error": "..."}` body with a matching status code. Nothing propagates
//! past the handler and no failure is fatal to the process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Failure modes of a single lookup.
///
/// Error messages are the user-facing Spanish strings the service has always
/// returned; clients key off the status code, not the text.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// Caller omitted the identifier or sent only whitespace.
    #[error("Se debe proporcionar un id o nombre de Pokémon")]
    InvalidInput,

    /// Upstream answered with a non-success status.
    #[error("Pokémon no encontrado")]
    NotFound,

    /// Upstream body did not match the expected record shape.
    #[error("Error interno del servidor: {0}")]
    UpstreamParse(String),

    /// Transport-level failure talking to upstream.
    #[error("Error interno del servidor: {0}")]
    Internal(String),
}

impl LookupError {
    pub fn status(&self) -> StatusCode {
        match self {
            LookupError::InvalidInput => StatusCode::BAD_REQUEST,
            LookupError::NotFound => StatusCode::NOT_FOUND,
            LookupError::UpstreamParse(_) | LookupError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(LookupError::InvalidInput.status(), StatusCode::BAD_REQUEST);
        assert_eq!(LookupError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            LookupError::UpstreamParse("bad".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            LookupError::Internal("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_message_carries_cause() {
        let err = LookupError::Internal("connection refused".into());
        assert_eq!(
            err.to_string(),
            "Error interno del servidor: connection refused"
        );
    }
}
