//! Wire records mirrored from the backend's serializers.
//!
//! The client holds transient, non-authoritative copies: records carry the
//! backend-assigned id and are replaced wholesale on every fetch. Unknown
//! fields are ignored and optional fields default so a serializer change on
//! the backend degrades to missing data instead of a decode failure.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Backend-assigned primary key.
pub type Id = i64;

/// The authenticated user's profile, fetched after sign-in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<Id>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub blood_group: Option<String>,
    #[serde(default)]
    pub is_donor: bool,
}

impl User {
    /// Full name when set, username otherwise.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_owned()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    pub id: Id,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub hospital_type: String,
    #[serde(default)]
    pub phone_number1: String,
    #[serde(default)]
    pub phone_number2: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub email: String,
}

/// One hospital + blood group inventory row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BloodBankEntry {
    pub id: Id,
    #[serde(default)]
    pub hospital: Option<Id>,
    #[serde(default)]
    pub hospital_name: String,
    #[serde(default)]
    pub blood_group: String,
    #[serde(default)]
    pub bag_quantity: i64,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

/// A donation request as created by `create_donation`. Quantity is credited
/// to the blood bank only once an administrator approves it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DonationRequest {
    pub id: Id,
    #[serde(default)]
    pub hospital: Option<Id>,
    #[serde(default)]
    pub hospital_name: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BloodBankDetails {
    #[serde(default)]
    pub blood_group: String,
    #[serde(default)]
    pub hospital: String,
}

/// A fulfilled receive-blood request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecipientEntry {
    pub id: Id,
    #[serde(default)]
    pub recipient: String,
    #[serde(default)]
    pub blood_bank: Option<Id>,
    #[serde(default)]
    pub blood_bank_details: BloodBankDetails,
    #[serde(default)]
    pub bag_quantity: i64,
    #[serde(default)]
    pub created_at: String,
}

/// Sign-in and sign-up responses. Which key carries the token depends on the
/// backend's auth configuration, so all three are accepted.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl TokenResponse {
    /// The credential, preferring `access` over `key` over `token`.
    pub fn into_token(self) -> Option<String> {
        self.access
            .or(self.key)
            .or(self.token)
            .filter(|token| !token.is_empty())
    }
}

/// Filter/sort parameters for list endpoints, passed to the backend verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    pub ordering: String,
}

impl ListQuery {
    pub fn new(search: impl Into<String>, ordering: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ordering: ordering.into(),
        }
    }

    /// Query pairs with empty values omitted.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        if !self.ordering.is_empty() {
            pairs.push(("ordering", self.ordering.clone()));
        }
        pairs
    }
}

fn default_true() -> bool {
    true
}
