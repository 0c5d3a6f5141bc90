//! Conversion from loose user payloads into [`UserRecord`].

use serde::de::{self, Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::user::UserRecord;

/// A user response body: a record, or nothing when no account exists.
///
/// Decodes through [`user_from_value`], so a malformed record fails at the
/// HTTP layer with the response status attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPayload(pub Option<UserRecord>);

impl<'de> Deserialize<'de> for UserPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        user_from_value(raw).map(UserPayload).map_err(de::Error::custom)
    }
}

/// Interpret a user payload.
///
/// `null`, `false`, `[]` and `{}` mean "no such user". A non-empty array
/// yields its first record.
pub fn user_from_value(value: Value) -> Result<Option<UserRecord>, serde_json::Error> {
    match value {
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Array(items) => match items.into_iter().next() {
            Some(first) => user_from_value(first),
            None => Ok(None),
        },
        Value::Object(map) if map.is_empty() => Ok(None),
        other => serde_json::from_value(other).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_payloads_mean_no_user() {
        for raw in [json!(null), json!(false), json!([]), json!({})] {
            assert_eq!(user_from_value(raw.clone()).unwrap(), None, "input {}", raw);
        }
    }

    #[test]
    fn test_user_from_object_and_array() {
        let expected = UserRecord {
            id: 7,
            email: "example@example.com".to_string(),
        };
        let user = user_from_value(json!({"id": "7", "email": "example@example.com"})).unwrap();
        assert_eq!(user.as_ref(), Some(&expected));

        let user = user_from_value(json!([{"id": 7, "email": "example@example.com"}])).unwrap();
        assert_eq!(user, Some(expected));
    }

    #[test]
    fn test_user_payload_from_body() {
        let payload: UserPayload = serde_json::from_str(r#"[{"id": "3", "email": "a@b.c"}]"#).unwrap();
        assert_eq!(payload.0.map(|u| u.id), Some(3));

        let payload: UserPayload = serde_json::from_str("false").unwrap();
        assert_eq!(payload, UserPayload(None));

        let err = serde_json::from_str::<UserPayload>(r#"{"email": "a@b.c"}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `id`"));
    }

    #[test]
    fn test_malformed_user_is_an_error() {
        assert!(user_from_value(json!({"email": "example@example.com"})).is_err());
        assert!(user_from_value(json!("yes")).is_err());
    }
}
