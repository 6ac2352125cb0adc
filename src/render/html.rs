//! HTML rendering for content documents.

use crate::content::{Block, BlockData, ContentDocument, ListStyle};
use std::fmt::Write as _;
use std::sync::Arc;

use super::{BlockRenderer, RendererRegistry, Theme};

/// Render a document to HTML with the default rule set.
pub fn to_html(doc: &ContentDocument, theme: &Theme) -> String {
    HtmlRenderer::new(theme.clone()).render(doc)
}

/// HTML renderer.
///
/// Stateless per call: the same renderer can be invoked repeatedly, and the
/// input document is never mutated. Blocks with no registered rule or a
/// payload that fails to decode are skipped without affecting neighbors.
pub struct HtmlRenderer {
    registry: RendererRegistry,
    theme: Theme,
}

impl HtmlRenderer {
    /// Create a renderer with the default rules for all recognized tags.
    pub fn new(theme: Theme) -> Self {
        Self {
            registry: RendererRegistry::with_defaults(),
            theme,
        }
    }

    /// Create a renderer with a caller-supplied registry.
    pub fn with_registry(theme: Theme, registry: RendererRegistry) -> Self {
        Self { registry, theme }
    }

    /// Register an additional rule, replacing any default for the same tag.
    pub fn register(&mut self, rule: Arc<dyn BlockRenderer>) {
        self.registry.register(rule);
    }

    /// Render a document, preserving block order.
    pub fn render(&self, doc: &ContentDocument) -> String {
        let mut out = String::new();
        for block in &doc.blocks {
            match self.registry.get(&block.tag) {
                Some(rule) => {
                    if !rule.render(block, &self.theme, &mut out) {
                        log::warn!("skipping {} block with unexpected payload", block.tag);
                    }
                }
                None => {
                    log::warn!("no render rule for block type {:?}, skipping", block.tag);
                }
            }
        }
        out
    }
}

/// Escape text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn class_attr(class: &str) -> String {
    if class.is_empty() {
        String::new()
    } else {
        format!(" class=\"{}\"", escape_html(class))
    }
}

pub(super) fn default_rules() -> Vec<Arc<dyn BlockRenderer>> {
    vec![
        Arc::new(ParagraphRule),
        Arc::new(HeaderRule),
        Arc::new(ListRule),
        Arc::new(ImageRule),
        Arc::new(GalleryRule),
        Arc::new(QuoteRule),
        Arc::new(CodeRule),
        Arc::new(TableRule),
        Arc::new(EmbedRule),
    ]
}

struct ParagraphRule;

impl BlockRenderer for ParagraphRule {
    fn tag(&self) -> &str {
        "paragraph"
    }

    fn render(&self, block: &Block, theme: &Theme, out: &mut String) -> bool {
        let Some(BlockData::Paragraph(data)) = block.decode() else {
            return false;
        };
        let _ = writeln!(
            out,
            "<p{}>{}</p>",
            class_attr(&theme.paragraph),
            escape_html(&data.text)
        );
        true
    }
}

struct HeaderRule;

impl BlockRenderer for HeaderRule {
    fn tag(&self) -> &str {
        "header"
    }

    fn render(&self, block: &Block, theme: &Theme, out: &mut String) -> bool {
        let Some(BlockData::Header(data)) = block.decode() else {
            return false;
        };
        // Out-of-range levels fall back to the most conservative weight.
        let level = if (1..=6).contains(&data.level) {
            data.level
        } else {
            6
        };
        let _ = writeln!(
            out,
            "<h{level}{}>{}</h{level}>",
            class_attr(theme.header_class(level)),
            escape_html(&data.text),
            level = level
        );
        true
    }
}

struct ListRule;

impl BlockRenderer for ListRule {
    fn tag(&self) -> &str {
        "list"
    }

    fn render(&self, block: &Block, theme: &Theme, out: &mut String) -> bool {
        let Some(BlockData::List(data)) = block.decode() else {
            return false;
        };
        let element = match data.style {
            ListStyle::Ordered => "ol",
            ListStyle::Unordered => "ul",
        };
        let _ = writeln!(out, "<{}{}>", element, class_attr(&theme.list));
        for item in &data.items {
            let _ = writeln!(out, "<li>{}</li>", escape_html(item));
        }
        let _ = writeln!(out, "</{}>", element);
        true
    }
}

struct ImageRule;

impl BlockRenderer for ImageRule {
    fn tag(&self) -> &str {
        "image"
    }

    fn render(&self, block: &Block, theme: &Theme, out: &mut String) -> bool {
        let Some(BlockData::Image(data)) = block.decode() else {
            return false;
        };
        let _ = writeln!(out, "<figure{}>", class_attr(&theme.image_figure));

        // A missing or empty URL suppresses the image element only; an
        // independent caption still renders.
        let url = data
            .file
            .as_ref()
            .map(|file| file.url.as_str())
            .filter(|url| !url.is_empty());
        if let Some(url) = url {
            let alt = data.caption.as_deref().unwrap_or("Wedding image");
            let _ = writeln!(
                out,
                "<img src=\"{}\" alt=\"{}\"{}>",
                escape_html(url),
                escape_html(alt),
                class_attr(&theme.image)
            );
        }
        if let Some(caption) = &data.caption {
            let _ = writeln!(
                out,
                "<figcaption{}>{}</figcaption>",
                class_attr(&theme.image_caption),
                escape_html(caption)
            );
        }
        let _ = writeln!(out, "</figure>");
        true
    }
}

struct GalleryRule;

impl BlockRenderer for GalleryRule {
    fn tag(&self) -> &str {
        "gallery"
    }

    fn render(&self, block: &Block, theme: &Theme, out: &mut String) -> bool {
        let Some(BlockData::Gallery(data)) = block.decode() else {
            return false;
        };
        let _ = writeln!(out, "<div{}>", class_attr(&theme.gallery));
        for (index, image) in data.images.iter().enumerate() {
            let alt = image
                .caption
                .clone()
                .unwrap_or_else(|| format!("Gallery image {}", index + 1));
            let _ = writeln!(out, "<div{}>", class_attr(&theme.gallery_tile));
            let _ = writeln!(
                out,
                "<img src=\"{}\" alt=\"{}\">",
                escape_html(&image.url),
                escape_html(&alt)
            );
            // Caption overlay only on tiles that carry one.
            if let Some(caption) = &image.caption {
                let _ = writeln!(
                    out,
                    "<div{}>{}</div>",
                    class_attr(&theme.gallery_caption),
                    escape_html(caption)
                );
            }
            let _ = writeln!(out, "</div>");
        }
        let _ = writeln!(out, "</div>");
        true
    }
}

struct QuoteRule;

impl BlockRenderer for QuoteRule {
    fn tag(&self) -> &str {
        "quote"
    }

    fn render(&self, block: &Block, theme: &Theme, out: &mut String) -> bool {
        let Some(BlockData::Quote(data)) = block.decode() else {
            return false;
        };
        let _ = writeln!(out, "<blockquote{}>", class_attr(&theme.quote));
        let _ = writeln!(out, "{}", escape_html(&data.text));
        if let Some(caption) = &data.caption {
            let _ = writeln!(
                out,
                "<cite{}>{}</cite>",
                class_attr(&theme.quote_caption),
                escape_html(caption)
            );
        }
        let _ = writeln!(out, "</blockquote>");
        true
    }
}

struct CodeRule;

impl BlockRenderer for CodeRule {
    fn tag(&self) -> &str {
        "code"
    }

    fn render(&self, block: &Block, theme: &Theme, out: &mut String) -> bool {
        let Some(BlockData::Code(data)) = block.decode() else {
            return false;
        };
        let _ = writeln!(
            out,
            "<pre{}><code>{}</code></pre>",
            class_attr(&theme.code),
            escape_html(&data.code)
        );
        true
    }
}

struct TableRule;

impl BlockRenderer for TableRule {
    fn tag(&self) -> &str {
        "table"
    }

    fn render(&self, block: &Block, theme: &Theme, out: &mut String) -> bool {
        let Some(BlockData::Table(data)) = block.decode() else {
            return false;
        };
        let _ = writeln!(out, "<table{}>", class_attr(&theme.table));
        for row in &data.content {
            let _ = writeln!(out, "<tr>");
            for cell in row {
                let _ = writeln!(out, "<td>{}</td>", escape_html(cell));
            }
            let _ = writeln!(out, "</tr>");
        }
        let _ = writeln!(out, "</table>");
        true
    }
}

struct EmbedRule;

impl BlockRenderer for EmbedRule {
    fn tag(&self) -> &str {
        "embed"
    }

    fn render(&self, block: &Block, theme: &Theme, out: &mut String) -> bool {
        let Some(BlockData::Embed(data)) = block.decode() else {
            return false;
        };
        let src = data.embed.as_deref().unwrap_or(&data.source);
        let _ = writeln!(out, "<figure{}>", class_attr(&theme.embed));
        let _ = writeln!(
            out,
            "<iframe src=\"{}\" title=\"{}\" allowfullscreen></iframe>",
            escape_html(src),
            escape_html(&data.service)
        );
        if let Some(caption) = &data.caption {
            let _ = writeln!(out, "<figcaption>{}</figcaption>", escape_html(caption));
        }
        let _ = writeln!(out, "</figure>");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(blocks: Vec<Block>) -> String {
        to_html(&ContentDocument::from_blocks(blocks), &Theme::unstyled())
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<b>\"R&B\"</b>"),
            "&lt;b&gt;&quot;R&amp;B&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_paragraph_escapes_text() {
        let html = render(vec![Block::paragraph("salt & sand")]);
        assert_eq!(html, "<p>salt &amp; sand</p>\n");
    }

    #[test]
    fn test_header_out_of_range_becomes_h6() {
        let html = render(vec![Block::header("Deep", 9)]);
        assert!(html.contains("<h6>Deep</h6>"));

        let html = render(vec![Block::header("Zero", 0)]);
        assert!(html.contains("<h6>Zero</h6>"));
    }

    #[test]
    fn test_image_caption_without_file() {
        let html = render(vec![Block::new(
            "image",
            json!({ "caption": "The venue at dusk" }),
        )]);
        assert!(!html.contains("<img"));
        assert!(html.contains("<figcaption>The venue at dusk</figcaption>"));
    }

    #[test]
    fn test_image_empty_url_suppresses_img() {
        let html = render(vec![Block::new(
            "image",
            json!({ "file": { "url": "" }, "caption": "pending upload" }),
        )]);
        assert!(!html.contains("<img"));
        assert!(html.contains("pending upload"));
    }

    #[test]
    fn test_gallery_captions_per_tile() {
        use crate::content::GalleryImage;
        let html = render(vec![Block::gallery(vec![
            GalleryImage::captioned("https://cdn.example.com/a.jpg", "First dance"),
            GalleryImage::new("https://cdn.example.com/b.jpg"),
        ])]);
        assert_eq!(html.matches("<img").count(), 2);
        assert_eq!(html.matches("First dance").count(), 2); // alt + overlay
        assert!(html.contains("Gallery image 2"));
    }

    #[test]
    fn test_class_attr_omitted_when_empty() {
        let html = render(vec![Block::paragraph("x")]);
        assert!(!html.contains("class"));

        let themed = to_html(
            &ContentDocument::from_blocks(vec![Block::paragraph("x")]),
            &Theme::unstyled().with_paragraph("lede"),
        );
        assert!(themed.contains("<p class=\"lede\">"));
    }

    #[test]
    fn test_code_renders_escaped() {
        let html = render(vec![Block::code("if a < b { return; }")]);
        assert!(html.contains("<pre><code>if a &lt; b { return; }</code></pre>"));
    }

    #[test]
    fn test_table_renders_rows_and_cells() {
        let html = render(vec![Block::new(
            "table",
            json!({ "content": [["Time", "Event"], ["4:30 PM", "Ceremony"]] }),
        )]);
        assert!(html.contains("<table>"));
        assert_eq!(html.matches("<tr>").count(), 2);
        assert_eq!(html.matches("<td>").count(), 4);
        assert!(html.contains("<td>Ceremony</td>"));
    }

    #[test]
    fn test_embed_prefers_resolved_iframe_url() {
        let html = render(vec![Block::new(
            "embed",
            json!({
                "service": "youtube",
                "source": "https://youtu.be/abc123",
                "embed": "https://www.youtube.com/embed/abc123",
                "caption": "First look"
            }),
        )]);
        assert!(html.contains("<iframe src=\"https://www.youtube.com/embed/abc123\""));
        assert!(html.contains("title=\"youtube\""));
        assert!(html.contains("<figcaption>First look</figcaption>"));
    }

    #[test]
    fn test_embed_falls_back_to_source_url() {
        let html = render(vec![Block::new(
            "embed",
            json!({ "service": "vimeo", "source": "https://vimeo.com/98765" }),
        )]);
        assert!(html.contains("<iframe src=\"https://vimeo.com/98765\""));
        assert!(!html.contains("<figcaption>"));
    }
}
