//! View state for record list and detail pages.
//!
//! Each page instance owns its view state exclusively; nothing here is
//! shared across instances. Store failures are recovered at this boundary:
//! the triggering change is discarded, `last_error` carries the banner
//! message, and the view stays interactive. There is no retry policy; the
//! user re-triggers the action.

use std::collections::HashMap;
use unicode_normalization::UnicodeNormalization;

use super::{Guest, Record, RecordStore, RsvpStatus, Wedding};
use crate::content::ContentDocument;

/// Sort direction for list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

struct SortSpec<T> {
    key: Box<dyn Fn(&T) -> String + Send + Sync>,
    direction: SortDirection,
}

/// List-page state for one entity type: loaded records, a free-text search
/// term, one categorical filter, and an optional sort.
///
/// Search and filter combine with logical AND. Search is a case-insensitive
/// substring match over the entity's search fields, with terms NFC-normalized
/// first.
pub struct ListView<T: Record> {
    records: Vec<T>,
    search_term: String,
    category_filter: Option<String>,
    sort: Option<SortSpec<T>>,
    /// Banner message from the most recent failed store call.
    pub last_error: Option<String>,
    /// Whether a load is in flight.
    pub loading: bool,
}

impl<T: Record> ListView<T> {
    /// Create an empty view.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            search_term: String::new(),
            category_filter: None,
            sort: None,
            last_error: None,
            loading: false,
        }
    }

    /// All loaded records, in store order.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// Set the free-text search term.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Set the categorical filter; `None` means "all".
    pub fn set_category_filter(&mut self, category: Option<String>) {
        self.category_filter = category;
    }

    /// Sort visible records by a derived key.
    pub fn sort_by<F>(&mut self, key: F, direction: SortDirection)
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.sort = Some(SortSpec {
            key: Box::new(key),
            direction,
        });
    }

    /// Records matching the current search AND filter, sorted.
    pub fn visible(&self) -> Vec<&T> {
        let needle = normalize(self.search_term.trim());
        let mut rows: Vec<&T> = self
            .records
            .iter()
            .filter(|record| {
                let matches_search = needle.is_empty()
                    || record
                        .search_haystacks()
                        .iter()
                        .any(|haystack| normalize(haystack).contains(&needle));
                let matches_category = match &self.category_filter {
                    None => true,
                    Some(category) => record.category() == Some(category.as_str()),
                };
                matches_search && matches_category
            })
            .collect();

        if let Some(spec) = &self.sort {
            rows.sort_by(|a, b| {
                let ka = (spec.key)(a).to_lowercase();
                let kb = (spec.key)(b).to_lowercase();
                match spec.direction {
                    SortDirection::Asc => ka.cmp(&kb),
                    SortDirection::Desc => kb.cmp(&ka),
                }
            });
        }
        rows
    }

    /// Count of loaded records per category, ignoring search and filter.
    pub fn category_counts(&self) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for record in &self.records {
            if let Some(category) = record.category() {
                *counts.entry(category.to_owned()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Fetch all records from the store, replacing local state on success.
    pub async fn load<S: RecordStore>(&mut self, store: &S) {
        self.loading = true;
        match store.fetch_all::<T>().await {
            Ok(records) => {
                self.records = records;
                self.last_error = None;
            }
            Err(err) => {
                log::error!("error fetching {}: {}", T::TABLE, err);
                self.last_error = Some(format!("Failed to load {}", T::TABLE));
            }
        }
        self.loading = false;
    }

    /// Insert a record; on success the stored row joins local state.
    pub async fn create<S: RecordStore>(&mut self, store: &S, record: T) {
        match store.insert(record).await {
            Ok(created) => {
                self.records.push(created);
                self.last_error = None;
            }
            Err(err) => {
                log::error!("error creating {}: {}", T::ENTITY, err);
                self.last_error = Some(format!("Failed to create {}", T::ENTITY));
            }
        }
    }

    /// Update a record; on success the local copy is replaced.
    pub async fn update<S: RecordStore>(&mut self, store: &S, record: T) {
        match store.update(record).await {
            Ok(updated) => {
                if let Some(slot) = self.records.iter_mut().find(|r| r.id() == updated.id()) {
                    *slot = updated;
                }
                self.last_error = None;
            }
            Err(err) => {
                log::error!("error updating {}: {}", T::ENTITY, err);
                self.last_error = Some(format!("Failed to update {}", T::ENTITY));
            }
        }
    }

    /// Delete a record; on success it leaves local state.
    pub async fn delete<S: RecordStore>(&mut self, store: &S, id: &str) {
        match store.delete::<T>(id).await {
            Ok(()) => {
                self.records.retain(|record| record.id() != id);
                self.last_error = None;
            }
            Err(err) => {
                log::error!("error deleting {}: {}", T::ENTITY, err);
                self.last_error = Some(format!("Failed to delete {}", T::ENTITY));
            }
        }
    }
}

impl<T: Record> Default for ListView<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(term: &str) -> String {
    term.nfc().collect::<String>().to_lowercase()
}

/// State of a public per-wedding microsite page.
pub struct MicrositeView {
    /// The loaded wedding, `None` before load or when not found.
    pub wedding: Option<Wedding>,
    /// Whether a load is in flight.
    pub loading: bool,
    /// Banner message from the most recent failed store call.
    pub last_error: Option<String>,
}

impl MicrositeView {
    /// Create an unloaded view.
    pub fn new() -> Self {
        Self {
            wedding: None,
            loading: true,
            last_error: None,
        }
    }

    /// Fetch the wedding by slug. An absent row is the not-found state,
    /// not an error.
    pub async fn load<S: RecordStore>(&mut self, store: &S, slug: &str) {
        self.loading = true;
        match store.find_by_slug::<Wedding>(slug).await {
            Ok(wedding) => {
                self.wedding = wedding;
                self.last_error = None;
            }
            Err(err) => {
                log::error!("error fetching wedding: {}", err);
                self.last_error = Some("Failed to load wedding details".to_owned());
            }
        }
        self.loading = false;
    }

    /// Whether the page should render its dedicated not-found view.
    pub fn is_not_found(&self) -> bool {
        !self.loading && self.wedding.is_none()
    }

    /// Parsed rich content, `None` when absent or malformed (the page
    /// shows its no-content fallback).
    pub fn content(&self) -> Option<ContentDocument> {
        self.wedding.as_ref()?.content_document()
    }

    /// Record a guest's RSVP and mirror it into local state on success.
    pub async fn respond<S: RecordStore>(&mut self, store: &S, guest_id: &str, status: RsvpStatus) {
        let Some(wedding) = &self.wedding else {
            return;
        };
        let Some(guest) = wedding.guest_list.iter().find(|g| g.id == guest_id) else {
            return;
        };

        let mut updated = guest.clone();
        updated.rsvp_status = status;
        match store.update::<Guest>(updated).await {
            Ok(stored) => {
                if let Some(wedding) = &mut self.wedding {
                    if let Some(slot) = wedding.guest_list.iter_mut().find(|g| g.id == guest_id) {
                        *slot = stored;
                    }
                }
                self.last_error = None;
            }
            Err(err) => {
                log::error!("error updating RSVP: {}", err);
                self.last_error = Some("Failed to update RSVP".to_owned());
            }
        }
    }
}

impl Default for MicrositeView {
    fn default() -> Self {
        Self::new()
    }
}

/// State of a public blog post page.
pub struct PostView {
    /// The loaded post, `None` before load or when not found.
    pub post: Option<super::BlogPost>,
    /// Whether a load is in flight.
    pub loading: bool,
    /// Banner message from the most recent failed store call.
    pub last_error: Option<String>,
}

impl PostView {
    /// Create an unloaded view.
    pub fn new() -> Self {
        Self {
            post: None,
            loading: true,
            last_error: None,
        }
    }

    /// Fetch the post by slug.
    pub async fn load<S: RecordStore>(&mut self, store: &S, slug: &str) {
        self.loading = true;
        match store.find_by_slug::<super::BlogPost>(slug).await {
            Ok(post) => {
                self.post = post;
                self.last_error = None;
            }
            Err(err) => {
                log::error!("error fetching blog post: {}", err);
                self.last_error = Some("Failed to load blog post".to_owned());
            }
        }
        self.loading = false;
    }

    /// Whether the page should render its dedicated not-found view.
    pub fn is_not_found(&self) -> bool {
        !self.loading && self.post.is_none()
    }

    /// Parsed rich content, `None` when absent or malformed.
    pub fn content(&self) -> Option<ContentDocument> {
        self.post.as_ref()?.content_document()
    }
}

impl Default for PostView {
    fn default() -> Self {
        Self::new()
    }
}
