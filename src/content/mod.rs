//! Content document model.
//!
//! This module defines the block-based JSON document shape shared by the
//! editor, the renderers, and the stored `content` columns. The model is
//! presentation-agnostic: rendering concerns live in [`crate::render`].

mod block;
mod document;

pub use block::{
    Block, BlockData, CodeData, EmbedData, GalleryData, GalleryImage, HeaderData, ImageData,
    ImageFile, ListData, ListStyle, ParagraphData, QuoteData, TableData,
};
pub use document::ContentDocument;
