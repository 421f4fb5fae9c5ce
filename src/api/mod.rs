//! Paperless REST API
//!
//! [`PaperlessClient`] maps each API operation onto one HTTP request, or onto
//! a full pagination walk for list operations.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use paperless_client::api::PaperlessClient;
//!
//! # async fn example() -> paperless_client::Result<()> {
//! let client = PaperlessClient::new("http://localhost:8000", "my-api-token")?;
//!
//! let tags = client.list_tags(&["id", "name"]).await?;
//! println!("{} tags", tags.count);
//!
//! let inbox = client.list_documents("?tags__id__all=1").await?;
//! println!("{} documents in the inbox", inbox.count);
//! # Ok(())
//! # }
//! ```

mod client;
mod documents;

pub use client::{fields_query, PaperlessClient};
pub use documents::{
    bulk_edit_objects_body, BulkEditRequest, CreatedAt, DocumentMetadata, DocumentUpload,
};
