//! User domain — account lookup and creation.

#[cfg(feature = "http")]
pub mod client;
pub mod convert;

use serde::{Deserialize, Serialize};

use crate::shared::serde_util;

/// An Asset Insight user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(deserialize_with = "serde_util::id::deserialize")]
    pub id: u64,
    pub email: String,
}

/// Query for `GET request/userConfirmation`.
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmationQuery<'a> {
    pub email: &'a str,
}

/// Body of `POST process/newAccount`.
#[derive(Debug, Clone, Serialize)]
pub struct NewAccountRequest<'a> {
    pub email: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_confirmation_query_escapes_email() {
        let query = ConfirmationQuery {
            email: "example+1@example.com",
        };
        assert_eq!(
            serde_urlencoded::to_string(&query).unwrap(),
            "email=example%2B1%40example.com"
        );
    }

    #[test]
    fn test_new_account_body() {
        let body = serde_json::to_value(NewAccountRequest {
            email: "example@example.com",
        })
        .unwrap();
        assert_eq!(body, json!({"email": "example@example.com"}));
    }
}
