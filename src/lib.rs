//! # vowsite
//!
//! Block-based rich content engine and record view logic for wedding
//! microsites and blogs.
//!
//! This library implements the content document model used by the site's
//! block editor, renders it to HTML or plain text, and provides the view
//! state behind the admin back-office: typed records, list filtering and
//! sorting, and CRUD against an abstract record store.
//!
//! ## Quick Start
//!
//! ```
//! use vowsite::{parse_content_str, render_html, Theme};
//!
//! let raw = r#"{"blocks":[
//!     {"type":"header","data":{"text":"Our Day","level":2}},
//!     {"type":"paragraph","data":{"text":"A beach ceremony at sunset."}}
//! ]}"#;
//!
//! // Malformed content parses to None: pages show a fallback instead.
//! let doc = parse_content_str(raw).expect("valid content");
//! let html = render_html(&doc, &Theme::unstyled());
//! assert!(html.starts_with("<h2>Our Day</h2>"));
//! ```
//!
//! ## Features
//!
//! - **Tolerant parsing**: content columns hold JSON objects or
//!   JSON-encoded strings; anything malformed is treated as absent
//! - **Pluggable rendering**: per-block-type rules in a registry, with
//!   `image`/`gallery` as custom blocks and parameterized theming
//! - **Editor sessions**: explicit mount/ready/destroyed lifecycle with
//!   synchronous change notification and drag-and-drop reordering
//! - **Record views**: search + categorical filtering combined with AND,
//!   store-backed CRUD with error banners, RSVP updates
//! - **Countdown helpers**: pure time-remaining and date formatting

pub mod content;
pub mod countdown;
pub mod editor;
pub mod error;
pub mod meta;
pub mod records;
pub mod render;
pub mod slug;

// Re-export commonly used types
pub use content::{Block, BlockData, ContentDocument, GalleryImage, ListStyle};
pub use countdown::{format_clock_time, format_long_date, Countdown, TimeLeft};
pub use editor::{EditorSession, EditorState};
pub use error::{Error, Result};
pub use meta::PageMetadata;
pub use records::{
    BlogPost, Client, ClientStatus, Guest, ListView, MemoryStore, MicrositeView, PostView, Record,
    RecordStore, RsvpStatus, SortDirection, Vendor, Wedding, WeddingVendor,
};
pub use render::{BlockRenderer, HtmlRenderer, RendererRegistry, Theme};
pub use slug::slugify;

use serde_json::Value;

/// Interpret a stored content value (object or JSON-encoded string).
///
/// Returns `None` for anything malformed; see
/// [`ContentDocument::parse`].
pub fn parse_content(value: &Value) -> Option<ContentDocument> {
    ContentDocument::parse(value)
}

/// Interpret a JSON-encoded content string.
pub fn parse_content_str(raw: &str) -> Option<ContentDocument> {
    ContentDocument::parse_str(raw)
}

/// Render a document to HTML with the default rules and the given theme.
pub fn render_html(doc: &ContentDocument, theme: &Theme) -> String {
    render::to_html(doc, theme)
}

/// Render a document to plain text.
pub fn render_text(doc: &ContentDocument) -> String {
    render::to_text(doc)
}
