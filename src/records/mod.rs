//! Entity records, the store abstraction, and list/detail view state.
//!
//! Records are plain rows owned by the external database; this module
//! holds no authoritative state across page views. Lifecycle is delegated
//! to a [`RecordStore`]; the views keep only transient local state.

mod blog;
mod client;
mod store;
mod vendor;
mod view;
mod wedding;

pub use blog::BlogPost;
pub use client::{Client, ClientStatus};
pub use store::{MemoryStore, Record, RecordStore};
pub use vendor::{Vendor, WeddingVendor};
pub use view::{ListView, MicrositeView, PostView, SortDirection};
pub use wedding::{Guest, Photo, RsvpStatus, TimelineEvent, Wedding};
