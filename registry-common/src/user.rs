//! Stored user records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One registered account as persisted in the store file.
///
/// The password is kept in plaintext; the stored field is called `password`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Creation-time-derived identifier (Unix milliseconds as a decimal string)
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    /// Set once at registration
    #[serde(with = "crate::timestamp")]
    pub registered_at: DateTime<Utc>,
    /// Fields this version does not know about, written back unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    /// The record without its password.
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            registered_at: self.registered_at,
        }
    }
}

/// User fields safe to return from register and login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(with = "crate::timestamp")]
    pub registered_at: DateTime<Utc>,
}

/// The whole persisted document: `{ "users": [...] }` in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserCollection {
    pub users: Vec<UserRecord>,
}

impl UserCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_record() -> UserRecord {
        UserRecord {
            id: "1714564800000".to_string(),
            username: "bob".to_string(),
            email: "bob@x.com".to_string(),
            password: "secret1".to_string(),
            registered_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_record_serializes_with_store_field_names() {
        let value = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(value["id"], "1714564800000");
        assert_eq!(value["password"], "secret1");
        assert_eq!(value["registeredAt"], "2024-05-01T12:00:00.000Z");
        assert!(value.get("registered_at").is_none());
    }

    #[test]
    fn test_public_user_omits_password() {
        let value = serde_json::to_value(sample_record().to_public()).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert!(!obj.contains_key("password"));
        assert_eq!(value["email"], "bob@x.com");
    }

    #[test]
    fn test_collection_parses_existing_file() {
        let json = r#"{
          "users": [
            {
              "id": "1714564800000",
              "username": "bob",
              "email": "bob@x.com",
              "password": "secret1",
              "registeredAt": "2024-05-01T12:00:00.000Z"
            }
          ]
        }"#;
        let collection: UserCollection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.users[0], sample_record());
    }

    #[test]
    fn test_unknown_record_fields_survive_rewrite() {
        let json = r#"{
          "id": "1714564800000",
          "username": "bob",
          "email": "bob@x.com",
          "password": "secret1",
          "registeredAt": "2024-05-01T12:00:00.000Z",
          "phone": "555-0100"
        }"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.extra["phone"], "555-0100");

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["phone"], "555-0100");
        assert!(value.get("extra").is_none());
        assert!(!serde_json::to_value(record.to_public())
            .unwrap()
            .as_object()
            .unwrap()
            .contains_key("phone"));
    }
}
