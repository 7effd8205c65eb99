//! Credential management for Nomics API authentication.

use secrecy::{ExposeSecret, SecretString};

/// The demo key published in the Nomics documentation.
///
/// Only useful for trying out free-plan endpoints and for tests. Check the
/// docs for the latest demo key, or use a private key for paid endpoints.
pub const DEMO_API_KEY: &str = "demo-6410726746980cead2a17c9db9ef29af";

/// A Nomics API key.
///
/// The key is stored behind [`secrecy::SecretString`] so it never shows up in
/// `Debug` output or accidental logging.
#[derive(Clone)]
pub struct ApiKey {
    key: SecretString,
}

impl ApiKey {
    /// Create an API key from a string.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: SecretString::from(key.into()),
        }
    }

    /// Read the key from the `NOMICS_API_KEY` environment variable.
    ///
    /// Returns `None` if the variable is not set.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_var("NOMICS_API_KEY")
    }

    /// Read the key from a custom environment variable.
    ///
    /// Returns `None` if the variable is not set.
    pub fn try_from_env_var(var: &str) -> Option<Self> {
        std::env::var(var).ok().map(Self::new)
    }

    /// Get the key for appending to a request.
    ///
    /// This method exposes the secret - use carefully.
    pub(crate) fn expose(&self) -> &str {
        self.key.expose_secret()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKey").field("key", &"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_debug_redacted() {
        let key = ApiKey::new("super_secret_key");
        let debug_str = format!("{:?}", key);
        assert!(!debug_str.contains("super_secret_key"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_api_key_expose() {
        let key = ApiKey::new(DEMO_API_KEY);
        assert_eq!(key.expose(), DEMO_API_KEY);
    }
}
