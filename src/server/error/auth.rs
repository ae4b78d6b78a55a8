use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization` header.
    #[error("Authorization header is missing.")]
    MissingToken,

    /// `Authorization` header is present but is not a `Bearer` credential.
    #[error("Authorization header must use the Bearer scheme.")]
    InvalidScheme,

    /// The issuer reports the token as inactive (expired, revoked or unknown).
    #[error("Bearer token is not active.")]
    InactiveToken,

    /// The token was not issued for this API.
    ///
    /// # Fields
    /// - Audience this API expects
    #[error("Bearer token is not valid for audience '{0}'.")]
    AudienceMismatch(String),

    /// The token lacks the scope required to call this API.
    ///
    /// # Fields
    /// - Scope this API requires
    #[error("Bearer token is missing required scope '{0}'.")]
    ScopeMissing(String),

    /// The introspection endpoint could not be reached or answered with an error.
    ///
    /// # Fields
    /// - Description of the transport or protocol failure
    #[error("Token introspection failed: {0}")]
    IntrospectionFailed(String),
}

/// Converts authentication errors into HTTP responses.
///
/// Rejected credentials become `401 Unauthorized` with the error message as a plain-text
/// body. A failed introspection call is an infrastructure problem rather than a client
/// mistake and is answered with a generic `500 Internal Server Error`.
///
/// # Returns
/// - 401 Unauthorized - For missing, malformed or rejected tokens
/// - 500 Internal Server Error - For introspection transport failures
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::IntrospectionFailed(_) => {
                super::InternalServerError(self).into_response()
            }
            err => {
                tracing::warn!("Rejected request: {}", err);
                (StatusCode::UNAUTHORIZED, err.to_string()).into_response()
            }
        }
    }
}
