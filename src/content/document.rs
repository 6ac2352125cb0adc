//! Document-level types and parse-on-read.

use super::Block;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An ordered sequence of blocks, the unit of rich-text storage for blog
/// posts and wedding microsites.
///
/// A stored content column holds either a JSON object of this shape or a
/// JSON-encoded string of it. [`ContentDocument::parse`] accepts both and
/// yields `None` for anything malformed: absent content is a valid state
/// and pages fall back to a "no content available" placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDocument {
    /// Blocks in reading order
    pub blocks: Vec<Block>,

    /// Editor save timestamp (milliseconds), preserved when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,

    /// Editor version string, preserved when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl ContentDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            time: None,
            version: None,
        }
    }

    /// Create a document from blocks.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            time: None,
            version: None,
        }
    }

    /// Interpret a stored content value.
    ///
    /// Accepts either an already-structured object or a JSON-encoded string.
    /// Returns `None` for `null`, malformed JSON, or a value without a
    /// `blocks` array. This failure is local and silent by design; the
    /// caller renders its no-content fallback.
    pub fn parse(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(raw) => Self::parse_str(raw),
            other => Self::from_object(other),
        }
    }

    /// Interpret a JSON-encoded content string.
    pub fn parse_str(raw: &str) -> Option<Self> {
        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("content is not valid JSON, treating as absent: {}", err);
                return None;
            }
        };
        Self::from_object(&value)
    }

    fn from_object(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let raw_blocks = obj.get("blocks")?.as_array()?;

        // Entries that are not block-shaped are dropped rather than failing
        // the whole document.
        let blocks = raw_blocks
            .iter()
            .filter_map(|entry| match serde_json::from_value(entry.clone()) {
                Ok(block) => Some(block),
                Err(err) => {
                    log::debug!("dropping malformed block entry: {}", err);
                    None
                }
            })
            .collect();

        Some(Self {
            blocks,
            time: obj.get("time").and_then(Value::as_i64),
            version: obj
                .get("version")
                .and_then(Value::as_str)
                .map(str::to_owned),
        })
    }

    /// Number of blocks in the document.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has any blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Append a block.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// URL of the first image block carrying a file, in reading order.
    ///
    /// Used for social-card metadata.
    pub fn first_image_url(&self) -> Option<&str> {
        self.blocks.iter().find_map(|block| block.image_url())
    }

    /// Convert back to a JSON value, the stored wire shape.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl Default for ContentDocument {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_null_is_absent() {
        assert!(ContentDocument::parse(&Value::Null).is_none());
    }

    #[test]
    fn test_parse_malformed_string() {
        assert!(ContentDocument::parse_str("{not json").is_none());
    }

    #[test]
    fn test_parse_missing_blocks() {
        assert!(ContentDocument::parse(&json!({ "time": 1 })).is_none());
        assert!(ContentDocument::parse(&json!("plain words")).is_none());
        assert!(ContentDocument::parse(&json!(42)).is_none());
    }

    #[test]
    fn test_parse_idempotent() {
        let value = json!({
            "time": 1714000000000i64,
            "version": "2.28.2",
            "blocks": [
                { "type": "header", "data": { "text": "Hi", "level": 2 } },
                { "type": "paragraph", "data": { "text": "World" } }
            ]
        });
        let from_object = ContentDocument::parse(&value).unwrap();
        let from_string = ContentDocument::parse_str(&value.to_string()).unwrap();
        assert_eq!(from_object, from_string);
        assert_eq!(from_object.len(), 2);
    }

    #[test]
    fn test_parse_drops_malformed_entries() {
        let value = json!({
            "blocks": [
                { "type": "paragraph", "data": { "text": "keep" } },
                "not a block",
                { "data": { "text": "no tag" } },
                { "type": "paragraph", "data": { "text": "also keep" } }
            ]
        });
        let doc = ContentDocument::parse(&value).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.blocks[0].tag, "paragraph");
        assert_eq!(doc.blocks[1].tag, "paragraph");
    }

    #[test]
    fn test_first_image_url() {
        let doc = ContentDocument::from_blocks(vec![
            Block::paragraph("intro"),
            Block::new("image", json!({ "caption": "no file" })),
            Block::image("https://cdn.example.com/one.jpg", None),
            Block::image("https://cdn.example.com/two.jpg", None),
        ]);
        assert_eq!(
            doc.first_image_url(),
            Some("https://cdn.example.com/one.jpg")
        );
    }

    #[test]
    fn test_to_value_round_trip() {
        let doc = ContentDocument::from_blocks(vec![Block::header("Title", 1)]);
        let parsed = ContentDocument::parse(&doc.to_value()).unwrap();
        assert_eq!(parsed, doc);
    }
}
