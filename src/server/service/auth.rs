//! Bearer token verification.
//!
//! Resource routes accept a request only when its bearer token passes a `TokenVerifier`.
//! The production verifier asks the issuer about the token through OAuth 2.0 token
//! introspection (RFC 7662) and then checks audience and scope locally.

use async_trait::async_trait;
use oauth2::{
    basic::BasicTokenType, AccessToken, EmptyExtraTokenFields,
    StandardTokenIntrospectionResponse, TokenIntrospectionResponse,
};

use crate::server::{error::auth::AuthError, state::OAuth2Client};

/// Decides whether a bearer token grants access to the API.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Verifies a raw bearer token (without the `Bearer ` prefix).
    ///
    /// # Returns
    /// - `Ok(())` - The token grants access
    /// - `Err(AuthError)` - The token is rejected, or verification could not be performed
    async fn verify(&self, token: &str) -> Result<(), AuthError>;
}

/// Verifies tokens by introspecting them at the issuer.
pub struct IntrospectionTokenVerifier {
    /// OAuth2 client configured with the issuer's introspection endpoint.
    oauth_client: OAuth2Client,
    /// HTTP client used for introspection requests.
    http_client: reqwest::Client,
    /// Audience the token must have been issued for.
    audience: String,
    /// Scope the token must carry.
    scope: String,
}

impl IntrospectionTokenVerifier {
    /// Creates a new IntrospectionTokenVerifier.
    ///
    /// # Arguments
    /// - `oauth_client` - Client with the introspection URL and API credentials set
    /// - `http_client` - HTTP client for calls to the issuer
    /// - `audience` - Required audience
    /// - `scope` - Required scope
    ///
    /// # Returns
    /// - `IntrospectionTokenVerifier` - New verifier instance
    pub fn new(
        oauth_client: OAuth2Client,
        http_client: reqwest::Client,
        audience: String,
        scope: String,
    ) -> Self {
        Self {
            oauth_client,
            http_client,
            audience,
            scope,
        }
    }
}

#[async_trait]
impl TokenVerifier for IntrospectionTokenVerifier {
    async fn verify(&self, token: &str) -> Result<(), AuthError> {
        let token = AccessToken::new(token.to_string());

        let response = self
            .oauth_client
            .introspect(&token)
            .request_async(&self.http_client)
            .await
            .map_err(|e| AuthError::IntrospectionFailed(e.to_string()))?;

        check_introspection(&response, &self.audience, &self.scope)
    }
}

/// Checks an introspection response against the API's audience and scope.
///
/// # Arguments
/// - `response` - Introspection response from the issuer
/// - `audience` - Audience the token must list
/// - `scope` - Scope the token must carry
///
/// # Returns
/// - `Ok(())` - Token is active, issued for `audience` and carries `scope`
/// - `Err(AuthError::InactiveToken)` - Issuer reports the token inactive
/// - `Err(AuthError::AudienceMismatch)` - `audience` is not among the token's audiences
/// - `Err(AuthError::ScopeMissing)` - `scope` is not among the token's scopes
pub fn check_introspection(
    response: &StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    audience: &str,
    scope: &str,
) -> Result<(), AuthError> {
    if !response.active() {
        return Err(AuthError::InactiveToken);
    }

    let has_audience = response
        .aud()
        .is_some_and(|auds| auds.iter().any(|aud| aud == audience));
    if !has_audience {
        return Err(AuthError::AudienceMismatch(audience.to_string()));
    }

    let has_scope = response
        .scopes()
        .is_some_and(|scopes| scopes.iter().any(|s| s.as_str() == scope));
    if !has_scope {
        return Err(AuthError::ScopeMissing(scope.to_string()));
    }

    Ok(())
}
