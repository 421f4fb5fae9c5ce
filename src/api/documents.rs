//! Document upload and bulk edit payloads

use crate::error::{Error, Result};
use crate::types::{BulkEditMethod, JsonObject, JsonValue, ObjectId, ObjectOperation, ObjectType};
use chrono::{DateTime, FixedOffset, NaiveDate};
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

// ============================================================================
// Upload metadata
// ============================================================================

/// Creation timestamp sent with an upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatedAt {
    /// Calendar date, e.g. `2024-03-01`
    Date(NaiveDate),
    /// Full timestamp with offset
    DateTime(DateTime<FixedOffset>),
}

impl fmt::Display for CreatedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreatedAt::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            CreatedAt::DateTime(ts) => f.write_str(&ts.to_rfc3339()),
        }
    }
}

impl FromStr for CreatedAt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
            return Ok(CreatedAt::DateTime(ts));
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(CreatedAt::Date)
            .map_err(|_| {
                Error::config(format!(
                    "invalid created value '{s}': expected YYYY-MM-DD or an RFC 3339 timestamp"
                ))
            })
    }
}

/// Optional metadata attached to an uploaded document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub title: Option<String>,
    pub created: Option<CreatedAt>,
    pub correspondent: Option<ObjectId>,
    pub document_type: Option<ObjectId>,
    pub storage_path: Option<ObjectId>,
    pub tags: Vec<ObjectId>,
    pub archive_serial_number: Option<u64>,
    pub custom_fields: Vec<ObjectId>,
}

impl DocumentMetadata {
    /// Form fields for the metadata, in submission order.
    ///
    /// Unset values are omitted; `tags` and `custom_fields` repeat once per id.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();

        if let Some(title) = self.title.as_ref().filter(|t| !t.is_empty()) {
            fields.push(("title", title.clone()));
        }
        if let Some(created) = &self.created {
            fields.push(("created", created.to_string()));
        }
        if let Some(id) = self.correspondent {
            fields.push(("correspondent", id.to_string()));
        }
        if let Some(id) = self.document_type {
            fields.push(("document_type", id.to_string()));
        }
        if let Some(id) = self.storage_path {
            fields.push(("storage_path", id.to_string()));
        }
        for tag in &self.tags {
            fields.push(("tags", tag.to_string()));
        }
        if let Some(asn) = self.archive_serial_number {
            fields.push(("archive_serial_number", asn.to_string()));
        }
        for field in &self.custom_fields {
            fields.push(("custom_fields", field.to_string()));
        }

        fields
    }
}

/// A file to upload together with its metadata
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    /// File name reported to the server
    pub file_name: String,
    /// Raw file content
    pub content: Vec<u8>,
    /// MIME type of the content, if known
    pub mime_type: Option<String>,
    /// Optional metadata
    pub metadata: DocumentMetadata,
}

impl DocumentUpload {
    /// Create an upload from in-memory content
    pub fn new(file_name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
            mime_type: None,
            metadata: DocumentMetadata::default(),
        }
    }

    /// Read an upload from disk
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map_or_else(|| "document".to_string(), |n| n.to_string_lossy().to_string());
        Ok(Self::new(file_name, content))
    }

    /// Set the MIME type
    #[must_use]
    pub fn mime_type(mut self, mime: impl Into<String>) -> Self {
        self.mime_type = Some(mime.into());
        self
    }

    /// Set the metadata
    #[must_use]
    pub fn metadata(mut self, metadata: DocumentMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Build the multipart form: the binary `document` part, then metadata
    pub fn into_form(self) -> Result<Form> {
        let fields = self.metadata.form_fields();

        let mut part = Part::bytes(self.content).file_name(self.file_name);
        if let Some(mime) = &self.mime_type {
            part = part.mime_str(mime)?;
        }

        let mut form = Form::new().part("document", part);
        for (name, value) in fields {
            form = form.text(name, value);
        }
        Ok(form)
    }
}

// ============================================================================
// Bulk edit
// ============================================================================

/// Body of `POST /documents/bulk_edit/`
#[derive(Debug, Clone, Serialize)]
pub struct BulkEditRequest<'a> {
    pub documents: &'a [ObjectId],
    pub method: BulkEditMethod,
    pub parameters: JsonValue,
}

/// Body of `POST /bulk_edit_objects/`; extra parameters sit at the top level
pub fn bulk_edit_objects_body(
    objects: &[ObjectId],
    object_type: ObjectType,
    operation: ObjectOperation,
    parameters: JsonObject,
) -> Result<JsonValue> {
    let mut body = JsonObject::new();
    body.insert("objects".to_string(), serde_json::to_value(objects)?);
    body.insert("object_type".to_string(), serde_json::to_value(object_type)?);
    body.insert("operation".to_string(), serde_json::to_value(operation)?);
    body.extend(parameters);
    Ok(JsonValue::Object(body))
}
