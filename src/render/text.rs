//! Plain-text rendering, used for excerpts and search previews.

use crate::content::{Block, BlockData, ContentDocument};

/// Render a document to plain text.
///
/// Blocks contribute their readable text joined by blank lines; blocks
/// with no textual content (an image without a caption, an unrecognized
/// type) are omitted.
pub fn to_text(doc: &ContentDocument) -> String {
    doc.blocks
        .iter()
        .filter_map(block_text)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// A truncated single-line excerpt, suitable for descriptions.
///
/// Truncation happens on a character boundary, with a trailing ellipsis
/// when anything was cut.
pub fn excerpt(doc: &ContentDocument, max_chars: usize) -> String {
    if max_chars == 0 {
        return String::new();
    }
    let text = to_text(doc).replace('\n', " ");
    if text.chars().count() <= max_chars {
        return text;
    }
    let truncated: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", truncated.trim_end())
}

fn block_text(block: &Block) -> Option<String> {
    let text = match block.decode()? {
        BlockData::Paragraph(p) => p.text,
        BlockData::Header(h) => h.text,
        BlockData::List(l) => {
            if l.items.is_empty() {
                return None;
            }
            l.items.join("\n")
        }
        BlockData::Quote(q) => q.text,
        BlockData::Code(c) => c.code,
        BlockData::Image(img) => img.caption?,
        BlockData::Gallery(g) => {
            let captions: Vec<String> = g.images.into_iter().filter_map(|img| img.caption).collect();
            if captions.is_empty() {
                return None;
            }
            captions.join("\n")
        }
        BlockData::Table(t) => {
            if t.content.is_empty() {
                return None;
            }
            t.content
                .iter()
                .map(|row| row.join("\t"))
                .collect::<Vec<_>>()
                .join("\n")
        }
        BlockData::Embed(e) => e.caption?,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Block, ListStyle};

    #[test]
    fn test_to_text_joins_blocks() {
        let doc = ContentDocument::from_blocks(vec![
            Block::header("Our Day", 1),
            Block::paragraph("A beach ceremony at sunset."),
            Block::image("https://cdn.example.com/a.jpg", None),
        ]);
        assert_eq!(to_text(&doc), "Our Day\n\nA beach ceremony at sunset.");
    }

    #[test]
    fn test_list_items_on_lines() {
        let doc = ContentDocument::from_blocks(vec![Block::list(
            ListStyle::Ordered,
            vec!["Ceremony".into(), "Reception".into()],
        )]);
        assert_eq!(to_text(&doc), "Ceremony\nReception");
    }

    #[test]
    fn test_excerpt_truncates() {
        let doc = ContentDocument::from_blocks(vec![Block::paragraph(
            "An intimate gathering on the white sands of the gulf coast",
        )]);
        let short = excerpt(&doc, 20);
        assert!(short.chars().count() <= 20);
        assert!(short.ends_with('…'));

        let full = excerpt(&doc, 500);
        assert!(!full.ends_with('…'));
    }

    #[test]
    fn test_excerpt_zero_budget_is_empty() {
        let doc = ContentDocument::from_blocks(vec![Block::paragraph("anything")]);
        assert_eq!(excerpt(&doc, 0), "");
    }
}
