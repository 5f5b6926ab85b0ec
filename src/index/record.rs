//! Search index records.

use serde::Serialize;

use crate::core::ContentType;

/// One searchable document.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRecord {
    pub title: String,
    /// Sanitized full text
    pub text: String,
    pub category: String,
    pub url: String,
    pub blurb: String,
    #[serde(rename = "type")]
    pub kind: ContentType,
}

/// Top-level index document: `{"data": [...]}`.
#[derive(Debug, Serialize)]
pub struct SearchIndex<'a> {
    pub data: &'a [DocumentRecord],
}
