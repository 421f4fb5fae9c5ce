//! HTTP client module
//!
//! Provides the single-request HTTP plumbing used by every API call.
//!
//! # Features
//!
//! - **URL Construction**: Paths are resolved under `<base_url>/api`
//! - **Default Headers**: API version negotiation and language
//! - **Authentication**: Integration with auth module
//! - **Error Reporting**: Non-success statuses become `Error::RequestFailed`

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};

#[cfg(test)]
mod tests;
