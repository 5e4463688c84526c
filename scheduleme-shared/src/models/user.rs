use serde::{Deserialize, Serialize};
use crate::database::attributes::{optional_string, required_identifier, required_string, Item};
use crate::models::errors::RecordError;
use crate::utilities::fields::users;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "userid")]
    pub user_id: String,
    pub username: String,
    #[serde(rename = "firstName", default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub status: Vec<String>,   // single stored status, exposed as a list
}

impl User {
    /// Projects a `SCHEDULEME_USERS` item onto a user. Fails instead of
    /// guessing when a required attribute is absent or mistyped.
    pub fn from_item(item: &Item) -> Result<Self, RecordError> {
        Ok(User {
            user_id: required_identifier(item, users::USER_ID_FIELD)?,
            username: required_string(item, users::USERNAME_FIELD)?,
            first_name: optional_string(item, users::FIRST_NAME_FIELD)?,
            last_name: optional_string(item, users::LAST_NAME_FIELD)?,
            email: optional_string(item, users::EMAIL_FIELD)?,
            phone: optional_string(item, users::PHONE_FIELD)?,
            status: vec![required_string(item, users::STATUS_FIELD)?],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::types::AttributeValue;

    fn base_item() -> Item {
        Item::from([
            ("userid".to_string(), AttributeValue::S("u1".into())),
            ("username".to_string(), AttributeValue::S("alice".into())),
            ("status".to_string(), AttributeValue::S("active".into())),
        ])
    }

    #[test]
    fn maps_required_fields_and_serializes_without_optionals() {
        let user = User::from_item(&base_item()).unwrap();

        assert_eq!(user.status, vec!["active".to_string()]);
        assert_eq!(
            serde_json::to_string(&user).unwrap(),
            r#"{"userid":"u1","username":"alice","status":["active"]}"#
        );
    }

    #[test]
    fn copies_exactly_the_optional_fields_present() {
        let mut item = base_item();
        item.insert("email".to_string(), AttributeValue::S("alice@example.com".into()));
        item.insert("lastName".to_string(), AttributeValue::S("Liddell".into()));

        let user = User::from_item(&item).unwrap();
        assert_eq!(user.email.as_deref(), Some("alice@example.com"));
        assert_eq!(user.last_name.as_deref(), Some("Liddell"));
        assert_eq!(user.first_name, None);
        assert_eq!(user.phone, None);

        let json: serde_json::Value = serde_json::to_value(&user).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 5);
        assert!(keys.contains(&"email"));
        assert!(keys.contains(&"lastName"));
        assert!(!keys.contains(&"firstName"));
        assert!(!keys.contains(&"phone"));
    }

    #[test]
    fn every_required_field_is_enforced() {
        for field in ["userid", "username", "status"] {
            let mut item = base_item();
            item.remove(field);
            let err = User::from_item(&item).unwrap_err();
            assert!(matches!(err, RecordError::MissingAttribute(f) if f == field), "{field}: {err:?}");
        }
    }

    #[test]
    fn mistyped_optional_field_is_a_fault() {
        let mut item = base_item();
        item.insert("phone".to_string(), AttributeValue::N("447700900000".into()));
        assert!(matches!(
            User::from_item(&item),
            Err(RecordError::UnexpectedType { attribute: "phone", .. })
        ));
    }
}
