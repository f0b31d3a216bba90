use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
}

/// Create-user form payload. Serialized as exactly `name`, `email`, `phone`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl NewUser {
    /// Build the payload, rejecting empty fields in form order.
    pub fn new(name: &str, email: &str, phone: &str) -> Result<Self, FormError> {
        for (field, value) in [("name", name), ("email", email), ("phone", phone)] {
            if value.is_empty() {
                return Err(FormError::Required(field));
            }
        }
        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        })
    }
}
