//! Error types for the vowsite library.

use std::io;
use thiserror::Error;

/// Result type alias for vowsite operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while editing content or talking to a store.
///
/// Absent content is deliberately not an error: document parsing returns
/// `Option` and a `None` means "no content available" (see
/// [`crate::content::ContentDocument::parse`]).
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The content payload is not valid JSON.
    #[error("Invalid content JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An editor operation was attempted before the surface finished mounting.
    #[error("Editor is not ready: the editing surface has not finished mounting")]
    EditorNotReady,

    /// An editor operation was attempted on a destroyed session.
    #[error("Editor has been destroyed")]
    EditorDestroyed,

    /// The editor has no mount point to attach to.
    #[error("Editor has no mount point")]
    EditorUnmounted,

    /// A mutation was attempted on a read-only editor.
    #[error("Editor is read-only")]
    EditorReadOnly,

    /// A block index is outside the current document.
    #[error("Block index {index} is out of range (document has {len} blocks)")]
    BlockIndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of blocks in the document.
        len: usize,
    },

    /// The record store rejected a call.
    #[error("Store error: {0}")]
    Store(String),

    /// A stored row could not be decoded into its record type.
    #[error("Malformed {table} row: {message}")]
    MalformedRow {
        /// Table the row came from.
        table: &'static str,
        /// Decoder message.
        message: String,
    },

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
