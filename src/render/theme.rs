//! Presentation parameters for HTML rendering.

/// Class strings applied per block type.
///
/// The renderer treats every class as an opaque string, so presentation is
/// fully parameterized: the same document can be rendered with different
/// themes without touching the traversal. Empty class strings suppress the
/// `class` attribute entirely.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Class for `<p>` elements
    pub paragraph: String,

    /// Classes for `<h1>`..`<h6>`, indexed by level
    pub headers: [String; 6],

    /// Class for `<ul>`/`<ol>` elements
    pub list: String,

    /// Class for `<blockquote>` elements
    pub quote: String,

    /// Class for the quote attribution line
    pub quote_caption: String,

    /// Class for `<pre>` elements
    pub code: String,

    /// Class for the `<figure>` wrapping an image
    pub image_figure: String,

    /// Class for `<img>` elements inside image blocks
    pub image: String,

    /// Class for image captions
    pub image_caption: String,

    /// Class for the gallery grid container
    pub gallery: String,

    /// Class for each gallery tile
    pub gallery_tile: String,

    /// Class for per-tile caption overlays
    pub gallery_caption: String,

    /// Class for `<table>` elements
    pub table: String,

    /// Class for the `<figure>` wrapping an embed
    pub embed: String,
}

impl Theme {
    /// Create a theme with the site's default styling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a theme with no classes at all, for tests and plain output.
    pub fn unstyled() -> Self {
        Self {
            paragraph: String::new(),
            headers: Default::default(),
            list: String::new(),
            quote: String::new(),
            quote_caption: String::new(),
            code: String::new(),
            image_figure: String::new(),
            image: String::new(),
            image_caption: String::new(),
            gallery: String::new(),
            gallery_tile: String::new(),
            gallery_caption: String::new(),
            table: String::new(),
            embed: String::new(),
        }
    }

    /// Set the paragraph class.
    pub fn with_paragraph(mut self, class: impl Into<String>) -> Self {
        self.paragraph = class.into();
        self
    }

    /// Set the class for one header level (1-6); other levels are untouched.
    pub fn with_header(mut self, level: u8, class: impl Into<String>) -> Self {
        let level = level.clamp(1, 6) as usize;
        self.headers[level - 1] = class.into();
        self
    }

    /// Set the list class.
    pub fn with_list(mut self, class: impl Into<String>) -> Self {
        self.list = class.into();
        self
    }

    /// Set the quote class.
    pub fn with_quote(mut self, class: impl Into<String>) -> Self {
        self.quote = class.into();
        self
    }

    /// Set the code class.
    pub fn with_code(mut self, class: impl Into<String>) -> Self {
        self.code = class.into();
        self
    }

    /// Set image figure, img, and caption classes.
    pub fn with_image(
        mut self,
        figure: impl Into<String>,
        image: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        self.image_figure = figure.into();
        self.image = image.into();
        self.image_caption = caption.into();
        self
    }

    /// Set gallery container, tile, and caption classes.
    pub fn with_gallery(
        mut self,
        container: impl Into<String>,
        tile: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        self.gallery = container.into();
        self.gallery_tile = tile.into();
        self.gallery_caption = caption.into();
        self
    }

    /// Class for a header level, clamping out-of-range levels to 6.
    pub(crate) fn header_class(&self, level: u8) -> &str {
        let level = if (1..=6).contains(&level) { level } else { 6 };
        &self.headers[(level - 1) as usize]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            paragraph: "my-4 text-lg text-gray-800".into(),
            headers: [
                "my-8 text-4xl font-extrabold text-indigo-800".into(),
                "my-6 text-3xl font-bold text-indigo-700".into(),
                "my-4 text-2xl font-semibold text-indigo-600".into(),
                "my-3 text-xl font-semibold text-indigo-500".into(),
                "my-2 text-lg font-semibold text-indigo-400".into(),
                "my-2 text-base font-semibold text-indigo-300".into(),
            ],
            list: "my-4 pl-6 text-base text-gray-700 list-disc".into(),
            quote: "my-8 border-l-4 border-indigo-400 pl-6 italic text-indigo-700 bg-indigo-50 py-3 rounded-r-lg".into(),
            quote_caption: "mt-2 text-sm not-italic text-indigo-500".into(),
            code: "my-4 bg-gray-900 text-green-300 font-mono text-sm rounded-lg p-4 overflow-x-auto".into(),
            image_figure: "my-8 flex flex-col items-center".into(),
            image: "rounded-xl shadow-lg border border-indigo-100 max-w-full h-auto".into(),
            image_caption: "text-sm text-indigo-700 mt-3 italic bg-indigo-50 px-3 py-1 rounded-lg shadow-inner".into(),
            gallery: "my-10 grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-6".into(),
            gallery_tile: "relative aspect-square rounded-xl overflow-hidden border border-indigo-100 shadow-md".into(),
            gallery_caption: "absolute bottom-0 left-0 right-0 bg-black bg-opacity-50 text-white text-xs p-2 text-center rounded-b-xl".into(),
            table: "my-4 w-full border-collapse text-left text-gray-700".into(),
            embed: "my-8 flex flex-col items-center".into(),
        }
    }
}
