//! Authentication module
//!
//! Supports: Paperless `Token` auth, Bearer, Custom Headers
//!
//! Credentials are static. The `Authenticator` only decorates outgoing
//! requests; there is no login flow and no token refresh.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::AuthConfig;
