//! Wedding records and their embedded structures.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Record;
use crate::content::ContentDocument;

/// A wedding row, the backing record of a per-wedding microsite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wedding {
    /// Row id
    pub id: String,

    /// Display title ("Sarah & Michael")
    pub title: String,

    /// Public microsite slug
    pub slug: String,

    /// Ceremony timestamp, stored as a string column
    pub date: String,

    /// Venue name
    #[serde(default)]
    pub venue: String,

    /// Short description shown on the microsite hero
    #[serde(default)]
    pub description: String,

    /// Planning status
    #[serde(default)]
    pub status: String,

    /// Budget in whole dollars
    #[serde(default)]
    pub budget: i64,

    /// Expected guest count
    #[serde(default)]
    pub guest_count: i64,

    /// Internal planner notes
    #[serde(default)]
    pub notes: String,

    /// Rich content column: JSON object or JSON-encoded string,
    /// interpreted through [`ContentDocument::parse`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,

    /// Day-of schedule in display order
    #[serde(default)]
    pub timeline: Vec<TimelineEvent>,

    /// Gallery photos in display order
    #[serde(default)]
    pub photos: Vec<Photo>,

    /// Invited guests
    #[serde(default)]
    pub guest_list: Vec<Guest>,
}

impl Wedding {
    /// Parse the content column, `None` when absent or malformed.
    pub fn content_document(&self) -> Option<ContentDocument> {
        self.content.as_ref().and_then(ContentDocument::parse)
    }
}

impl Record for Wedding {
    const TABLE: &'static str = "weddings";
    const ENTITY: &'static str = "wedding";

    fn id(&self) -> &str {
        &self.id
    }

    fn slug(&self) -> Option<&str> {
        Some(&self.slug)
    }

    fn order_key(&self) -> String {
        self.date.clone()
    }

    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.title, &self.venue]
    }

    fn category(&self) -> Option<&str> {
        Some(&self.status)
    }
}

/// One entry in the day-of schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Timestamp of the event
    pub time: String,

    /// What happens
    pub event: String,
}

/// One microsite gallery photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    /// Row id
    pub id: String,

    /// Public URL from the upload endpoint
    pub url: String,

    /// Caption shown with the photo
    #[serde(default)]
    pub caption: String,
}

/// A guest-list entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    /// Row id
    pub id: String,

    /// Guest name
    pub name: String,

    /// Contact email
    #[serde(default)]
    pub email: String,

    /// Recorded attendance response
    #[serde(default)]
    pub rsvp_status: RsvpStatus,

    /// Whether a plus-one is invited
    #[serde(default)]
    pub plus_one: bool,
}

impl Record for Guest {
    const TABLE: &'static str = "guest_list";
    const ENTITY: &'static str = "guest";

    fn id(&self) -> &str {
        &self.id
    }

    fn order_key(&self) -> String {
        self.name.clone()
    }

    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.name, &self.email]
    }
}

/// A guest's recorded attendance response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsvpStatus {
    /// No response yet (default)
    #[default]
    Pending,
    /// Attending
    Confirmed,
    /// Not attending
    Declined,
}

impl RsvpStatus {
    /// Wire representation, matching the stored column values.
    pub fn as_str(&self) -> &'static str {
        match self {
            RsvpStatus::Pending => "pending",
            RsvpStatus::Confirmed => "confirmed",
            RsvpStatus::Declined => "declined",
        }
    }
}
