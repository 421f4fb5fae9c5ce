//! Common types used throughout the Paperless client
//!
//! This module contains shared type definitions, type aliases,
//! and the small enums that name API resources and bulk operations.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Numeric id of a Paperless object
pub type ObjectId = u64;

// ============================================================================
// Resources
// ============================================================================

/// A list-type resource exposed by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Documents,
    Tags,
    Correspondents,
    DocumentTypes,
}

impl Resource {
    /// Collection path relative to `/api`
    pub fn path(self) -> &'static str {
        match self {
            Resource::Documents => "/documents/",
            Resource::Tags => "/tags/",
            Resource::Correspondents => "/correspondents/",
            Resource::DocumentTypes => "/document_types/",
        }
    }

    /// Path of a single object in this collection
    pub fn object_path(self, id: ObjectId) -> String {
        format!("{}{id}/", self.path())
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Documents => "documents",
            Resource::Tags => "tags",
            Resource::Correspondents => "correspondents",
            Resource::DocumentTypes => "document types",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Bulk Edit
// ============================================================================

/// Object types accepted by `/bulk_edit_objects/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    Tags,
    Correspondents,
    DocumentTypes,
    StoragePaths,
}

/// Operations accepted by `/bulk_edit_objects/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectOperation {
    SetPermissions,
    Delete,
}

/// Methods accepted by `/documents/bulk_edit/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkEditMethod {
    SetCorrespondent,
    SetDocumentType,
    SetStoragePath,
    AddTag,
    RemoveTag,
    ModifyTags,
    ModifyCustomFields,
    Delete,
    Reprocess,
    SetPermissions,
    Merge,
    Rotate,
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.trim().is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.trim().is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_paths() {
        assert_eq!(Resource::Tags.path(), "/tags/");
        assert_eq!(Resource::DocumentTypes.path(), "/document_types/");
        assert_eq!(Resource::Documents.object_path(42), "/documents/42/");
        assert_eq!(Resource::DocumentTypes.to_string(), "document types");
    }

    #[test]
    fn test_bulk_enums_serde() {
        let json = serde_json::to_string(&ObjectType::DocumentTypes).unwrap();
        assert_eq!(json, "\"document_types\"");

        let json = serde_json::to_string(&ObjectOperation::SetPermissions).unwrap();
        assert_eq!(json, "\"set_permissions\"");

        let method: BulkEditMethod = serde_json::from_str("\"add_tag\"").unwrap();
        assert_eq!(method, BulkEditMethod::AddTag);
    }

    #[test]
    fn test_option_string_none_if_empty() {
        assert_eq!(
            Some("test".to_string()).none_if_empty(),
            Some("test".to_string())
        );
        assert_eq!(Some(String::new()).none_if_empty(), None);
        assert_eq!(Some("  ".to_string()).none_if_empty(), None);
        assert_eq!(None::<String>.none_if_empty(), None);
        assert_eq!(String::new().none_if_empty(), None);
    }
}
