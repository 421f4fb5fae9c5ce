//! # Paperless Client
//!
//! A thin, Rust-native client for the Paperless-ngx document management
//! REST API.
//!
//! ## Features
//!
//! - **Transparent Pagination**: List operations walk every page and return one collection
//! - **Field Filtering**: Restrict list payloads to the fields you need
//! - **Documents**: Fetch, search, download, upload and bulk edit
//! - **Tags, Correspondents, Document Types**: List and create, plus tag update/delete
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use paperless_client::{PaperlessClient, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = PaperlessClient::new("http://localhost:8000", "my-api-token")?;
//!
//!     let tags = client.list_tags(&["id", "name", "document_count"]).await?;
//!     for tag in &tags.results {
//!         println!("{} ({} documents)", tag["name"], tag["document_count"]);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                      PaperlessClient                      │
//! │  list_*() → AggregatedList   get/create/update/delete     │
//! └───────────────────────────────────────────────────────────┘
//!                 │                            │
//! ┌───────────────┴──────────┐   ┌─────────────┴─────────────┐
//! │    PaginatedFetcher      │   │        HttpClient         │
//! │  page=1,2,… until next   │──▶│  /api root, auth, status  │
//! │  is null or page empty   │   │  checks, JSON decoding    │
//! └──────────────────────────┘   └───────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication
pub mod auth;

/// HTTP client plumbing
pub mod http;

/// Cursor pagination
pub mod pagination;

/// Paperless API operations
pub mod api;

/// Client settings
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use api::PaperlessClient;
pub use config::ClientSettings;
pub use error::{Error, Result};
pub use pagination::{AggregatedList, PaginatedFetcher};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
