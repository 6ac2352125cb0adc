//! Block-level types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One unit of rich content: a type tag plus a type-specific payload.
///
/// The payload is kept as raw JSON so that unrecognized block types and
/// unexpected payload shapes survive a parse/serialize round trip intact.
/// [`Block::decode`] interprets the payload best-effort; callers skip
/// blocks that fail to decode rather than erroring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Block type tag (`paragraph`, `header`, `image`, ...).
    #[serde(rename = "type")]
    pub tag: String,

    /// Type-specific payload, shape determined by the tag.
    #[serde(default)]
    pub data: Value,

    /// Editor-assigned block id, preserved when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl Block {
    /// Create a block with an arbitrary tag and payload.
    pub fn new(tag: impl Into<String>, data: Value) -> Self {
        Self {
            tag: tag.into(),
            data,
            id: None,
        }
    }

    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new("paragraph", serde_json::json!({ "text": text.into() }))
    }

    /// Create a header block.
    pub fn header(text: impl Into<String>, level: u8) -> Self {
        Self::new(
            "header",
            serde_json::json!({ "text": text.into(), "level": level }),
        )
    }

    /// Create a list block.
    pub fn list(style: ListStyle, items: Vec<String>) -> Self {
        Self::new(
            "list",
            serde_json::json!({ "style": style, "items": items }),
        )
    }

    /// Create an image block with an optional caption.
    pub fn image(url: impl Into<String>, caption: Option<String>) -> Self {
        let mut data = serde_json::json!({ "file": { "url": url.into() } });
        if let Some(caption) = caption {
            data["caption"] = Value::String(caption);
        }
        Self::new("image", data)
    }

    /// Create a gallery block.
    pub fn gallery(images: Vec<GalleryImage>) -> Self {
        Self::new("gallery", serde_json::json!({ "images": images }))
    }

    /// Create a quote block.
    pub fn quote(text: impl Into<String>, caption: Option<String>) -> Self {
        let mut data = serde_json::json!({ "text": text.into() });
        if let Some(caption) = caption {
            data["caption"] = Value::String(caption);
        }
        Self::new("quote", data)
    }

    /// Create a code block.
    pub fn code(code: impl Into<String>) -> Self {
        Self::new("code", serde_json::json!({ "code": code.into() }))
    }

    /// Attach an editor block id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Decode the payload into its typed form.
    ///
    /// Returns `None` for unrecognized tags or payloads that do not match
    /// the expected shape. Callers treat `None` as "skip this block".
    pub fn decode(&self) -> Option<BlockData> {
        let data = self.data.clone();
        match self.tag.as_str() {
            "paragraph" => serde_json::from_value(data).ok().map(BlockData::Paragraph),
            "header" => serde_json::from_value(data).ok().map(BlockData::Header),
            "list" => serde_json::from_value(data).ok().map(BlockData::List),
            "image" => serde_json::from_value(data).ok().map(BlockData::Image),
            "gallery" => serde_json::from_value(data).ok().map(BlockData::Gallery),
            "quote" => serde_json::from_value(data).ok().map(BlockData::Quote),
            "code" => serde_json::from_value(data).ok().map(BlockData::Code),
            "table" => serde_json::from_value(data).ok().map(BlockData::Table),
            "embed" => serde_json::from_value(data).ok().map(BlockData::Embed),
            _ => None,
        }
    }

    /// URL of the image, if this is an image block carrying one.
    pub fn image_url(&self) -> Option<&str> {
        if self.tag != "image" {
            return None;
        }
        self.data.get("file")?.get("url")?.as_str()
    }
}

/// Typed payload of a recognized block.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockData {
    /// Plain text paragraph
    Paragraph(ParagraphData),
    /// Heading with level 1-6
    Header(HeaderData),
    /// Ordered or unordered list
    List(ListData),
    /// Single image with optional caption
    Image(ImageData),
    /// Grid of captioned images (custom block)
    Gallery(GalleryData),
    /// Quotation with optional attribution
    Quote(QuoteData),
    /// Preformatted code
    Code(CodeData),
    /// Simple grid of text cells
    Table(TableData),
    /// Third-party embed
    Embed(EmbedData),
}

/// Payload of a `paragraph` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphData {
    /// Paragraph text
    pub text: String,
}

/// Payload of a `header` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderData {
    /// Heading text
    pub text: String,

    /// Heading level; values outside 1-6 are clamped at render time
    #[serde(default = "default_header_level")]
    pub level: u8,
}

fn default_header_level() -> u8 {
    2
}

/// Payload of a `list` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListData {
    /// Ordered or unordered
    #[serde(default)]
    pub style: ListStyle,

    /// List items in display order
    #[serde(default)]
    pub items: Vec<String>,
}

/// List style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    /// Numbered list
    Ordered,
    /// Bulleted list (default)
    #[default]
    Unordered,
}

/// Payload of an `image` block.
///
/// `file` and `caption` are independently optional: a caption without a
/// stored file still renders, and a file without a caption renders bare.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageData {
    /// Uploaded file reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<ImageFile>,

    /// Caption shown under the image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Uploaded file reference inside an image block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageFile {
    /// Public URL returned by the upload endpoint
    pub url: String,
}

/// Payload of a `gallery` block (custom extension).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GalleryData {
    /// Tiles in display order
    #[serde(default)]
    pub images: Vec<GalleryImage>,
}

/// One gallery tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    /// Image URL
    pub url: String,

    /// Caption overlaid on this tile only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl GalleryImage {
    /// Create a tile without a caption.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            caption: None,
        }
    }

    /// Create a captioned tile.
    pub fn captioned(url: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            caption: Some(caption.into()),
        }
    }
}

/// Payload of a `quote` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteData {
    /// Quoted text
    pub text: String,

    /// Attribution line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Payload of a `code` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeData {
    /// Verbatim code text
    pub code: String,
}

/// Payload of a `table` block.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TableData {
    /// Rows of text cells
    #[serde(default)]
    pub content: Vec<Vec<String>>,
}

/// Payload of an `embed` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbedData {
    /// Provider name (e.g. "youtube")
    pub service: String,

    /// Original media URL
    pub source: String,

    /// Provider iframe URL, when the editor resolved one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed: Option<String>,

    /// Caption shown under the embed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}
