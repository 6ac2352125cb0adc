//! Render-rule registry mapping block type tags to rendering functions.
//!
//! The registry decouples the document traversal from per-type markup:
//! new block types are added by registering a rule, without touching the
//! core walk. Standard tags get default rules; `image` and `gallery` are
//! installed through the same mechanism any downstream custom block would
//! use.
//!
//! # Example
//!
//! ```
//! use vowsite::content::Block;
//! use vowsite::render::{BlockRenderer, RendererRegistry, Theme};
//! use std::sync::Arc;
//!
//! struct DividerRule;
//!
//! impl BlockRenderer for DividerRule {
//!     fn tag(&self) -> &str {
//!         "divider"
//!     }
//!
//!     fn render(&self, _block: &Block, _theme: &Theme, out: &mut String) -> bool {
//!         out.push_str("<hr>\n");
//!         true
//!     }
//! }
//!
//! let mut registry = RendererRegistry::with_defaults();
//! registry.register(Arc::new(DividerRule));
//! assert!(registry.supports("divider"));
//! ```

use crate::content::Block;
use std::collections::HashMap;
use std::sync::Arc;

use super::html::default_rules;
use super::Theme;

/// A rendering rule for one block type.
///
/// A rule receives only its own block's payload and the theme; it has no
/// access to sibling blocks or document-level state, so rules are pure
/// functions of local data and can be swapped independently.
pub trait BlockRenderer: Send + Sync {
    /// The block type tag this rule handles.
    fn tag(&self) -> &str;

    /// Append markup for `block` to `out`.
    ///
    /// Returns `false` when the payload did not match the expected shape
    /// and nothing was emitted; the caller skips the block.
    fn render(&self, block: &Block, theme: &Theme, out: &mut String) -> bool;
}

/// Registry of render rules keyed by block type tag.
pub struct RendererRegistry {
    rules: HashMap<String, Arc<dyn BlockRenderer>>,
}

impl RendererRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Create a registry with rules for all recognized block types.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for rule in default_rules() {
            registry.register(rule);
        }
        registry
    }

    /// Register a rule, replacing any existing rule for the same tag.
    pub fn register(&mut self, rule: Arc<dyn BlockRenderer>) {
        self.rules.insert(rule.tag().to_owned(), rule);
    }

    /// Get the rule for a tag.
    pub fn get(&self, tag: &str) -> Option<&Arc<dyn BlockRenderer>> {
        self.rules.get(tag)
    }

    /// Check if a tag has a registered rule.
    pub fn supports(&self, tag: &str) -> bool {
        self.rules.contains_key(tag)
    }

    /// All registered tags.
    pub fn tags(&self) -> Vec<&str> {
        self.rules.keys().map(String::as_str).collect()
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
