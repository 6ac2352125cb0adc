//! Stateful authoring session over a content document.
//!
//! An [`EditorSession`] models the lifecycle of one editing surface bound
//! to a mount point: `Uninitialized → Ready → Destroyed`. The state is an
//! explicit tag checked at the entry of every public operation, not a
//! nullable handle. No mutation is accepted before the surface is ready,
//! and interacting with a destroyed session is a programmer error signalled
//! through [`Error`].
//!
//! Every successful mutation synchronously notifies the registered change
//! observer with the current document snapshot. There is no debouncing:
//! observers must be cheap (typically just copying the snapshot into form
//! state).

use crate::content::{Block, ContentDocument};
use crate::error::{Error, Result};

type ChangeObserver = Box<dyn FnMut(&ContentDocument) + Send>;

/// Lifecycle state of an editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// Constructed, surface not yet mounted
    Uninitialized,
    /// Mounted and accepting edits
    Ready,
    /// Unmounted, all resources released
    Destroyed,
}

/// An authoring session bound to one mount point.
pub struct EditorSession {
    state: EditorState,
    mount: Option<String>,
    document: ContentDocument,
    observer: Option<ChangeObserver>,
    placeholder: String,
    read_only: bool,
}

impl EditorSession {
    /// Create a session with no mount point yet.
    ///
    /// Initialization defers until [`attach`](Self::attach) provides one;
    /// it never proceeds silently without a mount.
    pub fn new() -> Self {
        Self {
            state: EditorState::Uninitialized,
            mount: None,
            document: ContentDocument::new(),
            observer: None,
            placeholder: "Start writing your blog post...".to_owned(),
            read_only: false,
        }
    }

    /// Seed the session with an existing document.
    pub fn with_document(mut self, document: ContentDocument) -> Self {
        self.document = document;
        self
    }

    /// Set the placeholder shown on an empty surface.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Make the session read-only: `save` works, mutations are rejected.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Bind the session to a mount point element id.
    pub fn attach(&mut self, mount: impl Into<String>) -> Result<()> {
        self.ensure_not_destroyed()?;
        self.mount = Some(mount.into());
        Ok(())
    }

    /// Register the change observer. Replaces any previous observer.
    pub fn on_change<F>(&mut self, observer: F) -> Result<()>
    where
        F: FnMut(&ContentDocument) + Send + 'static,
    {
        self.ensure_not_destroyed()?;
        self.observer = Some(Box::new(observer));
        Ok(())
    }

    /// Transition to `Ready` once the underlying surface finished mounting.
    ///
    /// Requires a mount point; already-ready sessions stay ready.
    pub fn mark_ready(&mut self) -> Result<()> {
        self.ensure_not_destroyed()?;
        if self.mount.is_none() {
            return Err(Error::EditorUnmounted);
        }
        self.state = EditorState::Ready;
        Ok(())
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EditorState {
        self.state
    }

    /// Whether the session accepts edits.
    pub fn is_ready(&self) -> bool {
        self.state == EditorState::Ready
    }

    /// The mount point id, if attached.
    pub fn mount(&self) -> Option<&str> {
        self.mount.as_deref()
    }

    /// The placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Borrow the current document.
    pub fn document(&self) -> &ContentDocument {
        &self.document
    }

    /// Snapshot the current document on demand (form-submit time).
    ///
    /// Independent of the change-notification stream.
    pub fn save(&self) -> Result<ContentDocument> {
        self.ensure_ready()?;
        Ok(self.document.clone())
    }

    /// Insert a block at `index` (0..=len).
    pub fn insert_block(&mut self, index: usize, block: Block) -> Result<()> {
        self.ensure_writable()?;
        let len = self.document.len();
        if index > len {
            return Err(Error::BlockIndexOutOfRange { index, len });
        }
        self.document.blocks.insert(index, block);
        self.notify();
        Ok(())
    }

    /// Append a block at the end of the document.
    pub fn push_block(&mut self, block: Block) -> Result<()> {
        let index = self.document.len();
        self.insert_block(index, block)
    }

    /// Replace the block at `index`.
    pub fn update_block(&mut self, index: usize, block: Block) -> Result<()> {
        self.ensure_writable()?;
        let len = self.document.len();
        let slot = self
            .document
            .blocks
            .get_mut(index)
            .ok_or(Error::BlockIndexOutOfRange { index, len })?;
        *slot = block;
        self.notify();
        Ok(())
    }

    /// Remove and return the block at `index`.
    pub fn remove_block(&mut self, index: usize) -> Result<Block> {
        self.ensure_writable()?;
        let len = self.document.len();
        if index >= len {
            return Err(Error::BlockIndexOutOfRange { index, len });
        }
        let removed = self.document.blocks.remove(index);
        self.notify();
        Ok(removed)
    }

    /// Move the block at `from` so it ends up at `to` (drag-and-drop
    /// reordering). Other blocks shift to fill the gap.
    pub fn move_block(&mut self, from: usize, to: usize) -> Result<()> {
        self.ensure_writable()?;
        let len = self.document.len();
        if from >= len {
            return Err(Error::BlockIndexOutOfRange { index: from, len });
        }
        if to >= len {
            return Err(Error::BlockIndexOutOfRange { index: to, len });
        }
        if from != to {
            let block = self.document.blocks.remove(from);
            self.document.blocks.insert(to, block);
            self.notify();
        }
        Ok(())
    }

    /// Replace the whole document.
    pub fn replace_document(&mut self, document: ContentDocument) -> Result<()> {
        self.ensure_writable()?;
        self.document = document;
        self.notify();
        Ok(())
    }

    /// Tear down the session and release everything tied to the mount.
    pub fn destroy(&mut self) -> Result<()> {
        self.ensure_not_destroyed()?;
        self.state = EditorState::Destroyed;
        self.mount = None;
        self.observer = None;
        self.document = ContentDocument::new();
        Ok(())
    }

    fn ensure_not_destroyed(&self) -> Result<()> {
        if self.state == EditorState::Destroyed {
            return Err(Error::EditorDestroyed);
        }
        Ok(())
    }

    fn ensure_ready(&self) -> Result<()> {
        match self.state {
            EditorState::Ready => Ok(()),
            EditorState::Uninitialized => Err(Error::EditorNotReady),
            EditorState::Destroyed => Err(Error::EditorDestroyed),
        }
    }

    fn ensure_writable(&self) -> Result<()> {
        self.ensure_ready()?;
        if self.read_only {
            return Err(Error::EditorReadOnly);
        }
        Ok(())
    }

    fn notify(&mut self) {
        if self.observer.is_some() {
            let snapshot = self.document.clone();
            if let Some(observer) = self.observer.as_mut() {
                observer(&snapshot);
            }
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_session() -> EditorSession {
        let mut session = EditorSession::new();
        session.attach("editorjs").unwrap();
        session.mark_ready().unwrap();
        session
    }

    #[test]
    fn test_mutation_rejected_before_ready() {
        let mut session = EditorSession::new();
        let err = session.push_block(Block::paragraph("too soon")).unwrap_err();
        assert!(matches!(err, Error::EditorNotReady));
    }

    #[test]
    fn test_ready_requires_mount() {
        let mut session = EditorSession::new();
        assert!(matches!(session.mark_ready(), Err(Error::EditorUnmounted)));
        session.attach("editorjs").unwrap();
        assert!(session.mark_ready().is_ok());
        assert!(session.is_ready());
    }

    #[test]
    fn test_destroyed_is_terminal() {
        let mut session = ready_session();
        session.destroy().unwrap();
        assert_eq!(session.state(), EditorState::Destroyed);
        assert!(matches!(session.save(), Err(Error::EditorDestroyed)));
        assert!(matches!(
            session.push_block(Block::paragraph("x")),
            Err(Error::EditorDestroyed)
        ));
        assert!(matches!(session.destroy(), Err(Error::EditorDestroyed)));
    }

    #[test]
    fn test_read_only_rejects_mutations() {
        let mut session = EditorSession::new().read_only(true);
        session.attach("editorjs").unwrap();
        session.mark_ready().unwrap();
        assert!(matches!(
            session.push_block(Block::paragraph("x")),
            Err(Error::EditorReadOnly)
        ));
        assert!(session.save().is_ok());
    }

    #[test]
    fn test_observer_fires_per_mutation() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let mut session = ready_session();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        session
            .on_change(move |_doc| {
                seen.fetch_add(1, Ordering::SeqCst);
            })
            .unwrap();

        session.push_block(Block::paragraph("one")).unwrap();
        session.push_block(Block::paragraph("two")).unwrap();
        session.remove_block(0).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_move_block_reorders() {
        let mut session = ready_session();
        session.push_block(Block::paragraph("a")).unwrap();
        session.push_block(Block::paragraph("b")).unwrap();
        session.push_block(Block::paragraph("c")).unwrap();

        session.move_block(0, 2).unwrap();
        let texts: Vec<_> = session
            .document()
            .blocks
            .iter()
            .map(|b| b.data["text"].as_str().unwrap().to_owned())
            .collect();
        assert_eq!(texts, ["b", "c", "a"]);

        assert!(matches!(
            session.move_block(5, 0),
            Err(Error::BlockIndexOutOfRange { index: 5, .. })
        ));
    }

    #[test]
    fn test_save_snapshots_current_document() {
        let mut session = ready_session();
        session.push_block(Block::header("Title", 1)).unwrap();
        let snapshot = session.save().unwrap();
        assert_eq!(snapshot.len(), 1);

        session.push_block(Block::paragraph("more")).unwrap();
        // Earlier snapshot is unaffected.
        assert_eq!(snapshot.len(), 1);
    }
}
