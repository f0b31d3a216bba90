use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One user as returned by the remote API.
///
/// Only `id` is required. Keys the client does not use (`username`,
/// `company`, ...) are kept in `extra` so a record re-encodes to the JSON it
/// was decoded from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    // suite, zipcode, geo
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    pub fn name_display(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn email_display(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }

    pub fn phone_display(&self) -> &str {
        self.phone.as_deref().unwrap_or("")
    }

    pub fn website_display(&self) -> &str {
        match self.website.as_deref() {
            Some(w) if !w.is_empty() => w,
            _ => "N/A",
        }
    }

    pub fn address_display(&self) -> String {
        match &self.address {
            Some(a) => format!("{}, {}", a.street, a.city),
            None => "Not provided".to_string(),
        }
    }
}
