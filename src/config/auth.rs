//! Authentication configuration

use serde::Deserialize;

/// Auth configuration.
///
/// The server validates sessions through the `SessionValidator` port; for
/// development the static validator is seeded from these values so a known
/// token resolves to a known user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Token accepted by the static validator (development only)
    pub dev_token: Option<String>,

    /// User the development token resolves to
    pub dev_user_id: Option<String>,
}

impl AuthConfig {
    /// The (token, user id) pair to seed the static validator with, if
    /// both halves are configured.
    pub fn dev_credentials(&self) -> Option<(&str, &str)> {
        match (self.dev_token.as_deref(), self.dev_user_id.as_deref()) {
            (Some(token), Some(user_id)) => Some((token, user_id)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_need_both_halves() {
        let config = AuthConfig {
            dev_token: Some("secret".to_string()),
            dev_user_id: None,
        };
        assert!(config.dev_credentials().is_none());

        let config = AuthConfig {
            dev_token: Some("secret".to_string()),
            dev_user_id: Some("dev-user".to_string()),
        };
        assert_eq!(config.dev_credentials(), Some(("secret", "dev-user")));
    }
}
