//! Client records.

use serde::{Deserialize, Serialize};

use super::Record;

/// A client row in the admin back-office.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Row id
    pub id: String,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Contact email
    #[serde(default)]
    pub email: String,

    /// Contact phone
    #[serde(default)]
    pub phone: String,

    /// Pipeline status
    #[serde(default)]
    pub status: ClientStatus,
}

impl Record for Client {
    const TABLE: &'static str = "clients";
    const ENTITY: &'static str = "client";

    fn id(&self) -> &str {
        &self.id
    }

    fn order_key(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).to_lowercase()
    }

    fn search_haystacks(&self) -> Vec<&str> {
        vec![&self.first_name, &self.last_name, &self.email]
    }

    fn category(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}

/// Where a client sits in the sales pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    /// Initial inquiry (default)
    #[default]
    Lead,
    /// In active conversation
    Prospect,
    /// Booked
    Client,
    /// Wedding completed
    Past,
}

impl ClientStatus {
    /// Wire representation, matching the stored column values.
    pub fn as_str(&self) -> &'static str {
        match self {
            ClientStatus::Lead => "lead",
            ClientStatus::Prospect => "prospect",
            ClientStatus::Client => "client",
            ClientStatus::Past => "past",
        }
    }

    /// All statuses, in pipeline order. Used by filter dropdowns.
    pub fn all() -> [ClientStatus; 4] {
        [
            ClientStatus::Lead,
            ClientStatus::Prospect,
            ClientStatus::Client,
            ClientStatus::Past,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(serde_json::to_value(ClientStatus::Prospect).unwrap(), json!("prospect"));
        let status: ClientStatus = serde_json::from_value(json!("past")).unwrap();
        assert_eq!(status, ClientStatus::Past);
    }

    #[test]
    fn test_order_key_is_full_name() {
        let client: Client = serde_json::from_value(json!({
            "id": "c1",
            "first_name": "Sarah",
            "last_name": "Johnson"
        }))
        .unwrap();
        assert_eq!(client.order_key(), "sarah johnson");
        assert_eq!(client.status, ClientStatus::Lead);
    }
}
