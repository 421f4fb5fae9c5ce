//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Paperless-ngx API client
#[derive(Parser, Debug)]
#[command(name = "paperless-client")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Server root URL, e.g. http://localhost:8000
    #[arg(short, long, global = true, env = "PAPERLESS_URL")]
    pub url: Option<String>,

    /// API token
    #[arg(short, long, global = true, env = "PAPERLESS_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all tags
    Tags {
        /// Only return these fields (comma-separated)
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,
    },

    /// List all correspondents
    Correspondents {
        /// Only return these fields (comma-separated)
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,
    },

    /// List all document types
    DocumentTypes {
        /// Only return these fields (comma-separated)
        #[arg(long, value_delimiter = ',')]
        fields: Vec<String>,
    },

    /// List all documents
    Documents {
        /// Filter query appended to the documents path, e.g. "?tags__id__all=3"
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Show a single document
    Document {
        /// Document id
        id: u64,
    },

    /// Full-text search
    Search {
        /// Search text
        text: String,
    },

    /// Download a document
    Download {
        /// Document id
        id: u64,

        /// Fetch the original file instead of the archived version
        #[arg(long)]
        original: bool,

        /// Destination file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Upload a document
    Upload {
        /// File to upload
        file: PathBuf,

        #[arg(long)]
        title: Option<String>,

        /// Creation date (YYYY-MM-DD) or RFC 3339 timestamp
        #[arg(long)]
        created: Option<String>,

        /// Correspondent id
        #[arg(long)]
        correspondent: Option<u64>,

        /// Document type id
        #[arg(long)]
        document_type: Option<u64>,

        /// Storage path id
        #[arg(long)]
        storage_path: Option<u64>,

        /// Tag id (repeatable)
        #[arg(long = "tag")]
        tags: Vec<u64>,

        /// Archive serial number
        #[arg(long)]
        asn: Option<u64>,

        /// Custom field id (repeatable)
        #[arg(long = "custom-field")]
        custom_fields: Vec<u64>,
    },

    /// Create a tag from a JSON object
    CreateTag {
        /// Tag JSON, e.g. '{"name": "taxes"}'
        json: String,
    },

    /// Replace a tag with a JSON object
    UpdateTag {
        /// Tag id
        id: u64,
        /// Tag JSON
        json: String,
    },

    /// Delete a tag
    DeleteTag {
        /// Tag id
        id: u64,
    },

    /// Create a correspondent from a JSON object
    CreateCorrespondent {
        /// Correspondent JSON
        json: String,
    },

    /// Create a document type from a JSON object
    CreateDocumentType {
        /// Document type JSON
        json: String,
    },

    /// Fetch all tags with and without field filtering and compare the payloads
    FieldFilterReport,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON (one document per line)
    Json,
    /// Indented JSON
    Pretty,
}
