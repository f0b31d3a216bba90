// User API modules
pub mod client;
pub mod error;
pub mod users;

// Re-export commonly used items
pub use client::{set_silent, ApiClient};
pub use error::ApiError;
pub use users::{create_user, list_users, list_users_chained, list_users_with};
pub use crate::utils::delay;
