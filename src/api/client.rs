//! Paperless API client
//!
//! One method per API operation. List operations go through the shared
//! [`PaginatedFetcher`]; everything else is a single request.

use super::documents::{bulk_edit_objects_body, BulkEditRequest, DocumentUpload};
use crate::auth::AuthConfig;
use crate::config::ClientSettings;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::pagination::{AggregatedList, PaginatedFetcher};
use crate::types::{
    BulkEditMethod, JsonObject, JsonValue, ObjectId, ObjectOperation, ObjectType, Resource,
};
use bytes::Bytes;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::info;

/// Client for a single Paperless server
#[derive(Debug)]
pub struct PaperlessClient {
    http: HttpClient,
}

impl PaperlessClient {
    /// Create a client for `base_url` authenticated with an API token
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        url::Url::parse(&base_url)?;

        let config = HttpClientConfig::builder().base_url(base_url).build();
        let http = HttpClient::with_auth(config, AuthConfig::token(token))?;
        Ok(Self { http })
    }

    /// Create a client from validated settings
    pub fn from_settings(settings: &ClientSettings) -> Result<Self> {
        settings.validate()?;

        let config = HttpClientConfig::builder()
            .base_url(settings.base_url.clone())
            .api_version(settings.api_version)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build();
        let http = HttpClient::with_auth(config, AuthConfig::token(settings.token.clone()))?;
        Ok(Self { http })
    }

    /// The underlying HTTP client
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Fetch every item of a list resource.
    ///
    /// `query` is appended verbatim to the collection path and may already
    /// carry its own `?...` parameters.
    pub async fn list<T>(&self, resource: Resource, query: &str) -> Result<AggregatedList<T>>
    where
        T: DeserializeOwned + Send,
    {
        PaginatedFetcher::new(&self.http)
            .fetch_all(resource.path(), query)
            .await
    }

    // ========================================================================
    // Documents
    // ========================================================================

    /// All documents matching an optional filter query (e.g. `?tags__id__all=3`)
    pub async fn list_documents(&self, query: &str) -> Result<AggregatedList<JsonValue>> {
        self.list(Resource::Documents, query).await
    }

    /// A single document
    pub async fn get_document(&self, id: ObjectId) -> Result<JsonValue> {
        self.http.get_json(&Resource::Documents.object_path(id)).await
    }

    /// Full-text search; returns the first result page as sent by the server
    pub async fn search_documents(&self, text: &str) -> Result<JsonValue> {
        self.http
            .get_json_with_config(
                Resource::Documents.path(),
                RequestConfig::new().query("query", text),
            )
            .await
    }

    /// Download a document's archived version, or the original file
    pub async fn download_document(&self, id: ObjectId, original: bool) -> Result<Bytes> {
        let mut config = RequestConfig::new();
        if original {
            config = config.query("original", "true");
        }
        self.http
            .get_bytes(&format!("{}download/", Resource::Documents.object_path(id)), config)
            .await
    }

    /// Upload a document; the server answers with the consumption task id
    pub async fn post_document(&self, upload: DocumentUpload) -> Result<JsonValue> {
        info!(file = %upload.file_name, bytes = upload.content.len(), "Uploading document");
        let form = upload.into_form()?;
        let response = self
            .http
            .send_multipart("/documents/post_document/", form)
            .await?;
        Ok(response.json().await?)
    }

    /// Apply one bulk edit method to a set of documents
    pub async fn bulk_edit_documents(
        &self,
        documents: &[ObjectId],
        method: BulkEditMethod,
        parameters: JsonValue,
    ) -> Result<JsonValue> {
        let body = BulkEditRequest {
            documents,
            method,
            parameters,
        };
        self.post_json("/documents/bulk_edit/", &body).await
    }

    // ========================================================================
    // Tags
    // ========================================================================

    /// All tags, optionally restricted to the given fields
    pub async fn list_tags(&self, fields: &[&str]) -> Result<AggregatedList<JsonValue>> {
        self.list(Resource::Tags, &fields_query(fields)).await
    }

    pub async fn create_tag<B: Serialize + ?Sized>(&self, data: &B) -> Result<JsonValue> {
        self.post_json(Resource::Tags.path(), data).await
    }

    pub async fn update_tag<B: Serialize + ?Sized>(
        &self,
        id: ObjectId,
        data: &B,
    ) -> Result<JsonValue> {
        let body = serde_json::to_value(data)?;
        self.http
            .request_json(
                Method::PUT,
                &Resource::Tags.object_path(id),
                RequestConfig::new().json(body),
            )
            .await
    }

    pub async fn delete_tag(&self, id: ObjectId) -> Result<()> {
        self.http
            .request(
                Method::DELETE,
                &Resource::Tags.object_path(id),
                RequestConfig::new(),
            )
            .await?;
        Ok(())
    }

    // ========================================================================
    // Correspondents
    // ========================================================================

    /// All correspondents, optionally restricted to the given fields
    pub async fn list_correspondents(&self, fields: &[&str]) -> Result<AggregatedList<JsonValue>> {
        self.list(Resource::Correspondents, &fields_query(fields))
            .await
    }

    pub async fn create_correspondent<B: Serialize + ?Sized>(&self, data: &B) -> Result<JsonValue> {
        self.post_json(Resource::Correspondents.path(), data).await
    }

    // ========================================================================
    // Document types
    // ========================================================================

    /// All document types, optionally restricted to the given fields
    pub async fn list_document_types(&self, fields: &[&str]) -> Result<AggregatedList<JsonValue>> {
        self.list(Resource::DocumentTypes, &fields_query(fields))
            .await
    }

    pub async fn create_document_type<B: Serialize + ?Sized>(
        &self,
        data: &B,
    ) -> Result<JsonValue> {
        self.post_json(Resource::DocumentTypes.path(), data).await
    }

    // ========================================================================
    // Bulk object operations
    // ========================================================================

    /// Apply one operation to many tags, correspondents, document types or
    /// storage paths. `parameters` are merged into the top level of the body.
    pub async fn bulk_edit_objects(
        &self,
        objects: &[ObjectId],
        object_type: ObjectType,
        operation: ObjectOperation,
        parameters: JsonObject,
    ) -> Result<JsonValue> {
        let body = bulk_edit_objects_body(objects, object_type, operation, parameters)?;
        self.post_json("/bulk_edit_objects/", &body).await
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, data: &B) -> Result<JsonValue> {
        let body = serde_json::to_value(data)?;
        self.http
            .request_json(Method::POST, path, RequestConfig::new().json(body))
            .await
    }
}

/// `?fields=a,b,c` for a field filter, empty when no fields are requested.
///
/// Names are joined as given, without percent-encoding; Paperless field
/// names are plain identifiers.
pub fn fields_query(fields: &[&str]) -> String {
    if fields.is_empty() {
        String::new()
    } else {
        format!("?fields={}", fields.join(","))
    }
}
