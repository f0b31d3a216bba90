//! Client for the JSONPlaceholder user API.
//!
//! Lists users (composed either with future combinators or with async/await),
//! creates users from form fields, and keeps the caller-side list and form
//! state that the `jp-users` binary renders.
//!
//! ```no_run
//! use jp_users::api::{list_users, ApiClient};
//! use jp_users::config::DEFAULT_API_BASE_URL;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let api = ApiClient::new(DEFAULT_API_BASE_URL)?;
//! let users = list_users(&api).await?;
//! println!("{} users", users.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod models;
pub mod render;
pub mod services;
pub mod utils;
