//! Vendor records.

use serde::{Deserialize, Serialize};

use super::Record;

/// A vendor row (photographers, florists, caterers, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    /// Row id
    pub id: String,

    /// Business name
    pub name: String,

    /// Service category ("photography", "florist", ...)
    #[serde(default)]
    pub category: String,

    /// Contact person
    #[serde(default)]
    pub contact_name: String,

    /// Contact email
    #[serde(default)]
    pub contact_email: String,

    /// Contact phone
    #[serde(default)]
    pub contact_phone: String,

    /// Business website
    #[serde(default)]
    pub website: String,

    /// Average review rating
    #[serde(default)]
    pub rating: f64,

    /// Number of reviews behind the rating
    #[serde(default)]
    pub reviews_count: i64,

    /// Whether the vendor is featured on the marketing site
    #[serde(default)]
    pub is_featured: bool,
}

impl Vendor {
    /// Flip the featured flag, returning the updated record.
    pub fn toggle_featured(mut self) -> Self {
        self.is_featured = !self.is_featured;
        self
    }
}

impl Record for Vendor {
    const TABLE: &'static str = "vendors";
    const ENTITY: &'static str = "vendor";

    fn id(&self) -> &str {
        &self.id
    }

    fn order_key(&self) -> String {
        self.name.to_lowercase()
    }

    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.name, &self.contact_name, &self.contact_email]
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}

/// A row linking one vendor to one wedding.
///
/// Created in the wedding create flow after the wedding row itself; the
/// id column is assigned by the database on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeddingVendor {
    /// Row id
    #[serde(default)]
    pub id: String,

    /// Wedding side of the link
    pub wedding_id: String,

    /// Vendor side of the link
    pub vendor_id: String,
}

impl WeddingVendor {
    /// Create a link between a wedding and a vendor.
    pub fn link(wedding_id: impl Into<String>, vendor_id: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            wedding_id: wedding_id.into(),
            vendor_id: vendor_id.into(),
        }
    }
}

impl Record for WeddingVendor {
    const TABLE: &'static str = "wedding_vendors";
    const ENTITY: &'static str = "wedding vendor";

    fn id(&self) -> &str {
        &self.id
    }

    fn order_key(&self) -> String {
        self.wedding_id.clone()
    }

    fn search_haystacks(&self) -> Vec<&str> {
        Vec::new()
    }
}
