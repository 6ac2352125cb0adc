//! Rendering module for converting content documents to displayable output.

mod html;
mod registry;
mod text;
mod theme;

pub use html::{escape_html, to_html, HtmlRenderer};
pub use registry::{BlockRenderer, RendererRegistry};
pub use text::{excerpt, to_text};
pub use theme::Theme;
