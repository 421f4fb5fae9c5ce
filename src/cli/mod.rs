//! CLI module
//!
//! Command-line interface for a Paperless server.
//!
//! # Commands
//!
//! - `tags`, `correspondents`, `document-types`, `documents` - Fetch every item of a list
//! - `document`, `search`, `download`, `upload` - Single document operations
//! - `create-tag`, `update-tag`, `delete-tag`, `create-correspondent`, `create-document-type`
//! - `field-filter-report` - Compare full and field-filtered tag listings

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
