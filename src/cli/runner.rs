//! CLI runner - executes commands

use crate::api::{CreatedAt, DocumentMetadata, DocumentUpload, PaperlessClient};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ClientSettings;
use crate::error::{Error, Result, ResultExt};
use crate::pagination::AggregatedList;
use serde_json::{json, Value};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::info;

/// Fields requested by `field-filter-report`
const REPORT_FIELDS: &[&str] = &["id", "name", "document_count"];

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = self.client()?;

        match &self.cli.command {
            Commands::Tags { fields } => {
                let tags = client.list_tags(&as_strs(fields)).await?;
                self.output_list(&tags)
            }
            Commands::Correspondents { fields } => {
                let list = client.list_correspondents(&as_strs(fields)).await?;
                self.output_list(&list)
            }
            Commands::DocumentTypes { fields } => {
                let list = client.list_document_types(&as_strs(fields)).await?;
                self.output_list(&list)
            }
            Commands::Documents { query } => {
                let documents = client.list_documents(query).await?;
                self.output_list(&documents)
            }
            Commands::Document { id } => {
                let document = client.get_document(*id).await?;
                self.output_message(&document);
                Ok(())
            }
            Commands::Search { text } => {
                let found = client.search_documents(text).await?;
                self.output_message(&found);
                Ok(())
            }
            Commands::Download {
                id,
                original,
                output,
            } => self.download(&client, *id, *original, output).await,
            Commands::Upload {
                file,
                title,
                created,
                correspondent,
                document_type,
                storage_path,
                tags,
                asn,
                custom_fields,
            } => {
                let metadata = DocumentMetadata {
                    title: title.clone(),
                    created: created
                        .as_deref()
                        .map(str::parse::<CreatedAt>)
                        .transpose()?,
                    correspondent: *correspondent,
                    document_type: *document_type,
                    storage_path: *storage_path,
                    tags: tags.clone(),
                    archive_serial_number: *asn,
                    custom_fields: custom_fields.clone(),
                };
                let upload = DocumentUpload::from_path(file).await?.metadata(metadata);
                let task = client.post_document(upload).await?;
                self.output_message(&json!({ "task_id": task }));
                Ok(())
            }
            Commands::CreateTag { json } => {
                let created = client.create_tag(&parse_json_arg(json)?).await?;
                self.output_message(&created);
                Ok(())
            }
            Commands::UpdateTag { id, json } => {
                let updated = client.update_tag(*id, &parse_json_arg(json)?).await?;
                self.output_message(&updated);
                Ok(())
            }
            Commands::DeleteTag { id } => {
                client.delete_tag(*id).await?;
                self.output_message(&json!({ "deleted": id }));
                Ok(())
            }
            Commands::CreateCorrespondent { json } => {
                let created = client.create_correspondent(&parse_json_arg(json)?).await?;
                self.output_message(&created);
                Ok(())
            }
            Commands::CreateDocumentType { json } => {
                let created = client.create_document_type(&parse_json_arg(json)?).await?;
                self.output_message(&created);
                Ok(())
            }
            Commands::FieldFilterReport => self.field_filter_report(&client).await,
        }
    }

    /// Resolve settings from file, flags and environment
    fn settings(&self) -> Result<ClientSettings> {
        let settings = match &self.cli.config {
            Some(path) => ClientSettings::from_file(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
            None => ClientSettings::default(),
        };

        Ok(settings.with_overrides(self.cli.url.clone(), self.cli.token.clone()))
    }

    fn client(&self) -> Result<PaperlessClient> {
        let settings = self.settings()?;
        PaperlessClient::from_settings(&settings)
    }

    async fn download(
        &self,
        client: &PaperlessClient,
        id: u64,
        original: bool,
        output: &Path,
    ) -> Result<()> {
        let bytes = client.download_document(id, original).await?;
        tokio::fs::write(output, &bytes).await?;
        info!(id, bytes = bytes.len(), path = %output.display(), "Document downloaded");
        self.output_message(&json!({
            "id": id,
            "path": output.display().to_string(),
            "bytes": bytes.len(),
        }));
        Ok(())
    }

    /// Fetch all tags twice, once in full and once restricted to a few
    /// fields, and report how much smaller the filtered payload is.
    async fn field_filter_report(&self, client: &PaperlessClient) -> Result<()> {
        info!("Fetching full tag data");
        let started = Instant::now();
        let full = client.list_tags(&[]).await?;
        let full_elapsed = started.elapsed();
        let full_size = serde_json::to_string(&full)?.len();
        info!(
            count = full.count,
            bytes = full_size,
            elapsed_ms = full_elapsed.as_millis() as u64,
            "Full tag data fetched"
        );

        info!(fields = ?REPORT_FIELDS, "Fetching filtered tag data");
        let started = Instant::now();
        let filtered = client.list_tags(REPORT_FIELDS).await?;
        let filtered_elapsed = started.elapsed();
        let filtered_size = serde_json::to_string(&filtered)?.len();
        info!(
            count = filtered.count,
            bytes = filtered_size,
            elapsed_ms = filtered_elapsed.as_millis() as u64,
            "Filtered tag data fetched"
        );

        let report = build_filter_report(
            &full,
            full_size,
            full_elapsed,
            &filtered,
            filtered_size,
            filtered_elapsed,
        );
        self.output_message(&report);
        Ok(())
    }

    fn output_list(&self, list: &AggregatedList<Value>) -> Result<()> {
        let value = serde_json::to_value(list)?;
        self.output_message(&value);
        Ok(())
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

fn as_strs(fields: &[String]) -> Vec<&str> {
    fields.iter().map(String::as_str).collect()
}

fn parse_json_arg(raw: &str) -> Result<Value> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| Error::config(format!("Invalid JSON argument: {e}")))?;
    if !value.is_object() {
        return Err(Error::config("JSON argument must be an object"));
    }
    Ok(value)
}

/// Percentage by which `filtered` is smaller than `full`, two decimals
fn reduction_percent(full: usize, filtered: usize) -> f64 {
    if full == 0 {
        return 0.0;
    }
    let saved = full.saturating_sub(filtered) as f64;
    (saved / full as f64 * 10_000.0).round() / 100.0
}

fn build_filter_report(
    full: &AggregatedList<Value>,
    full_size: usize,
    full_elapsed: Duration,
    filtered: &AggregatedList<Value>,
    filtered_size: usize,
    filtered_elapsed: Duration,
) -> Value {
    json!({
        "full": {
            "count": full.count,
            "bytes": full_size,
            "elapsed_ms": full_elapsed.as_millis() as u64,
            "sample": full.results.first(),
        },
        "filtered": {
            "fields": REPORT_FIELDS,
            "count": filtered.count,
            "bytes": filtered_size,
            "elapsed_ms": filtered_elapsed.as_millis() as u64,
            "sample": filtered.results.first(),
        },
        "bytes_saved": full_size.saturating_sub(filtered_size),
        "reduction_percent": reduction_percent(full_size, filtered_size),
        "same_count": full.results.len() == filtered.results.len(),
    })
}
