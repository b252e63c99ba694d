//! Account models and DTOs.

use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;
use validator::Validate;
use datapusher_core::types::{DbId, Timestamp};

/// A row from the `accounts` table.
///
/// The token is serialized: producers read it from the create response and
/// send it back in the `CL-X-TOKEN` header.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Account {
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub token: String,
    #[serde(serialize_with = "website_or_empty")]
    pub website: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

fn website_or_empty<S: Serializer>(website: &Option<String>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(website.as_deref().unwrap_or(""))
}

/// DTO for creating a new account. The token is generated server-side.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAccount {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(url)]
    pub website: Option<String>,
}

/// DTO for updating an existing account. The token cannot be changed.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAccount {
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(website: Option<&str>) -> Account {
        Account {
            id: 1,
            email: "a@x.com".into(),
            name: "A".into(),
            token: "T1".into(),
            website: website.map(str::to_string),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn missing_website_serializes_as_empty_string() {
        let json = serde_json::to_value(account(None)).unwrap();
        assert_eq!(json["website"], "");
        assert_eq!(json["token"], "T1");
    }

    #[test]
    fn create_dto_rejects_bad_email_and_url() {
        let input = CreateAccount {
            email: "not-an-email".into(),
            name: "A".into(),
            website: Some("nope".into()),
        };
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("website"));
    }

    #[test]
    fn create_dto_accepts_missing_website() {
        let input = CreateAccount {
            email: "a@x.com".into(),
            name: "A".into(),
            website: None,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn empty_update_is_valid() {
        assert!(UpdateAccount::default().validate().is_ok());
    }
}
