//! Page metadata derivation for social cards and `<head>` tags.

use crate::content::ContentDocument;
use crate::records::{BlogPost, Wedding};
use crate::render;

const EXCERPT_CHARS: usize = 160;

/// Title, description, and lead image for one page.
///
/// The lead image is the first `image` block carrying a file URL, scanning
/// in reading order; a malformed content column degrades to no image.
#[derive(Debug, Clone, PartialEq)]
pub struct PageMetadata {
    /// Page title
    pub title: String,

    /// Page description
    pub description: String,

    /// Social-card image URL
    pub image_url: Option<String>,
}

impl PageMetadata {
    /// Metadata for a blog post page.
    pub fn for_post(post: &BlogPost) -> Self {
        let content = post.content_document();
        let description = post
            .description
            .clone()
            .filter(|d| !d.is_empty())
            .or_else(|| {
                content
                    .as_ref()
                    .map(|doc| render::excerpt(doc, EXCERPT_CHARS))
                    .filter(|e| !e.is_empty())
            })
            .unwrap_or_else(|| format!("Read our latest article about {}", post.title));
        Self {
            title: post.title.clone(),
            description,
            image_url: first_image(content.as_ref()),
        }
    }

    /// Metadata for a wedding microsite page.
    pub fn for_wedding(wedding: &Wedding) -> Self {
        let description = if wedding.description.is_empty() {
            format!("Wedding details for {}", wedding.title)
        } else {
            wedding.description.clone()
        };
        Self {
            title: wedding.title.clone(),
            description,
            image_url: first_image(wedding.content_document().as_ref()),
        }
    }

    /// Metadata for a dedicated not-found view, e.g. `not_found("Blog Post")`.
    pub fn not_found(what: &str) -> Self {
        Self {
            title: format!("{} Not Found", what),
            description: format!(
                "The requested {} could not be found.",
                what.to_lowercase()
            ),
            image_url: None,
        }
    }
}

fn first_image(content: Option<&ContentDocument>) -> Option<String> {
    content?.first_image_url().map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn post(content: serde_json::Value) -> BlogPost {
        serde_json::from_value(json!({
            "id": "p1",
            "title": "Planning a Gulf Sunset Ceremony",
            "slug": "gulf-sunset-ceremony",
            "content": content
        }))
        .unwrap()
    }

    #[test]
    fn test_lead_image_is_first_with_url() {
        let meta = PageMetadata::for_post(&post(json!({
            "blocks": [
                { "type": "paragraph", "data": { "text": "intro" } },
                { "type": "image", "data": { "file": { "url": "https://cdn.example.com/lead.jpg" } } },
                { "type": "image", "data": { "file": { "url": "https://cdn.example.com/second.jpg" } } }
            ]
        })));
        assert_eq!(
            meta.image_url.as_deref(),
            Some("https://cdn.example.com/lead.jpg")
        );
    }

    #[test]
    fn test_malformed_content_degrades_to_no_image() {
        let meta = PageMetadata::for_post(&post(json!("{not json")));
        assert!(meta.image_url.is_none());
        assert_eq!(
            meta.description,
            "Read our latest article about Planning a Gulf Sunset Ceremony"
        );
    }

    #[test]
    fn test_description_falls_back_to_excerpt() {
        let meta = PageMetadata::for_post(&post(json!({
            "blocks": [
                { "type": "paragraph", "data": { "text": "Golden hour on the gulf." } }
            ]
        })));
        assert_eq!(meta.description, "Golden hour on the gulf.");
    }

    #[test]
    fn test_not_found_metadata() {
        let meta = PageMetadata::not_found("Blog Post");
        assert_eq!(meta.title, "Blog Post Not Found");
        assert_eq!(
            meta.description,
            "The requested blog post could not be found."
        );
    }
}
