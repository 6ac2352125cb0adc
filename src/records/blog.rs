//! Blog post records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Record;
use crate::content::ContentDocument;

/// A blog post row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Row id
    pub id: String,

    /// Post title
    pub title: String,

    /// Public URL slug
    pub slug: String,

    /// Short description for listings and social cards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Rich content column: JSON object or JSON-encoded string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,

    /// Whether the post is publicly visible
    #[serde(default)]
    pub published: bool,

    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Last-edit timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl BlogPost {
    /// Parse the content column, `None` when absent or malformed.
    pub fn content_document(&self) -> Option<ContentDocument> {
        self.content.as_ref().and_then(ContentDocument::parse)
    }
}

impl Record for BlogPost {
    const TABLE: &'static str = "blog_posts";
    const ENTITY: &'static str = "blog post";

    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> Option<&str> {
        Some(&self.slug)
    }

    fn order_key(&self) -> String {
        self.created_at
            .map(|at| at.to_rfc3339())
            .unwrap_or_default()
    }

    fn search_haystacks(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.slug.as_str()];
        if let Some(description) = &self.description {
            fields.push(description);
        }
        fields
    }

    fn category(&self) -> Option<&str> {
        Some(if self.published { "published" } else { "draft" })
    }
}
