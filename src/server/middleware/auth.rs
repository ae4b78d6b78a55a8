use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::server::{
    error::{auth::AuthError, AppError},
    service::auth::TokenVerifier,
    state::AppState,
};

pub struct AuthGuard<'a> {
    verifier: &'a dyn TokenVerifier,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(verifier: &'a dyn TokenVerifier, headers: &'a HeaderMap) -> Self {
        Self { verifier, headers }
    }

    /// Requires a valid `Authorization: Bearer <token>` header.
    ///
    /// # Returns
    /// - `Ok(())` - The token was accepted by the verifier
    /// - `Err(AuthError::MissingToken)` - No `Authorization` header
    /// - `Err(AuthError::InvalidScheme)` - Header is not a non-empty bearer credential
    /// - `Err(AuthError)` - Verifier rejected the token or could not be reached
    pub async fn require(&self) -> Result<(), AppError> {
        let Some(header) = self.headers.get(AUTHORIZATION) else {
            return Err(AuthError::MissingToken.into());
        };

        let token = header
            .to_str()
            .ok()
            .and_then(|value| value.split_once(' '))
            .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
            .map(|(_, token)| token.trim())
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::InvalidScheme)?;

        self.verifier.verify(token).await?;

        Ok(())
    }
}

/// Middleware rejecting requests without an accepted bearer token.
///
/// Runs before any handler on the resource routes, so a rejected request never reaches
/// validation or the database.
pub async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    AuthGuard::new(state.token_verifier.as_ref(), request.headers())
        .require()
        .await?;

    Ok(next.run(request).await)
}
