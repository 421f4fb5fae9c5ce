//! Auth configuration types

use std::collections::HashMap;
use std::fmt;

/// Authentication configuration
#[derive(Clone, Default)]
pub enum AuthConfig {
    /// No authentication required
    #[default]
    None,

    /// Django REST framework token auth (`Authorization: Token <token>`)
    Token {
        /// The API token
        token: String,
    },

    /// Bearer token authentication
    Bearer {
        /// The bearer token
        token: String,
    },

    /// Custom headers
    CustomHeaders {
        /// Headers to add to each request
        headers: HashMap<String, String>,
    },
}

impl AuthConfig {
    /// Paperless token auth
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token {
            token: token.into(),
        }
    }

    /// Value of the `Authorization` header this config produces, if any
    pub fn authorization(&self) -> Option<String> {
        match self {
            AuthConfig::Token { token } => Some(format!("Token {token}")),
            AuthConfig::Bearer { token } => Some(format!("Bearer {token}")),
            AuthConfig::None | AuthConfig::CustomHeaders { .. } => None,
        }
    }
}

// Tokens never end up in logs.
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthConfig::None => f.write_str("None"),
            AuthConfig::Token { .. } => f.debug_struct("Token").field("token", &"***").finish(),
            AuthConfig::Bearer { .. } => f.debug_struct("Bearer").field("token", &"***").finish(),
            AuthConfig::CustomHeaders { headers } => {
                let names: Vec<&String> = headers.keys().collect();
                f.debug_struct("CustomHeaders")
                    .field("headers", &names)
                    .finish()
            }
        }
    }
}
