use crate::shared::data_table::{CellValue, DataRow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// DTO
// ============================================================================

/// Клиент сервисной службы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub client_id: String,
    pub name: String,
    pub contact_number: String,
    pub email: Option<String>,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl DataRow for Client {
    fn field(&self, key: &str) -> Option<CellValue> {
        match key {
            "clientId" => Some(self.client_id.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "contactNumber" => Some(self.contact_number.as_str().into()),
            "email" => self.email.as_deref().map(CellValue::from),
            "address" => Some(self.address.as_str().into()),
            "createdAt" => Some(self.created_at.format("%Y-%m-%d").to_string().into()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::derive_key;
    use chrono::TimeZone;

    fn client() -> Client {
        Client {
            client_id: "C-7".into(),
            name: "Acme Corp".into(),
            contact_number: "555-0100".into(),
            email: None,
            address: "1 Main St".into(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_fields_reachable_by_derived_keys() {
        let c = client();
        assert_eq!(c.field(&derive_key("Contact Number")), Some("555-0100".into()));
        assert_eq!(c.field(&derive_key("Created At")), Some("2024-03-05".into()));
        assert_eq!(c.field("email"), None);
    }

    #[test]
    fn test_json_is_camel_case() {
        let json = serde_json::to_value(client()).unwrap();
        assert_eq!(json["clientId"], "C-7");
        assert_eq!(json["contactNumber"], "555-0100");
    }
}
