//! Session validation port.
//!
//! The application never derives identity itself: an adapter validates the
//! incoming credential and hands back an `AuthenticatedUser`, which flows
//! into handlers as explicit context.

use crate::domain::foundation::{AuthenticatedUser, AuthError};
use async_trait::async_trait;

/// Validates a bearer token and resolves the acting user.
#[async_trait]
pub trait SessionValidator: Send + Sync {
    /// Validate a token, returning the authenticated user on success.
    ///
    /// # Errors
    ///
    /// - `InvalidToken` / `TokenExpired` when the credential is bad
    /// - `ServiceUnavailable` when the provider cannot be reached
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError>;
}
