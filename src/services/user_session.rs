use std::time::Duration;

use crate::api::{self, ApiClient, ApiError};
use crate::config::SUCCESS_CLEAR_MS;
use crate::models::{FetchStyle, NewUser, UserRecord};
use crate::utils::delay;

use super::request_state::{RequestFlags, RequestState};

/// In-memory state behind the list view and the create form.
///
/// Nothing here is persisted; a new session starts empty.
pub struct UserSession {
    api: ApiClient,
    users: Vec<UserRecord>,
    list_state: RequestState,
    form_state: RequestState,
    last_style: Option<FetchStyle>,
}

impl UserSession {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            users: Vec::new(),
            list_state: RequestState::new(),
            form_state: RequestState::new(),
            last_style: None,
        }
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn list_flags(&self) -> RequestFlags {
        self.list_state.snapshot()
    }

    pub fn form_flags(&self) -> RequestFlags {
        self.form_state.snapshot()
    }

    pub fn last_style(&self) -> Option<FetchStyle> {
        self.last_style
    }

    /// Fetch the list with `style`, then pad by `pad_ms`.
    ///
    /// Success replaces the list. Failure empties it and keeps the message.
    pub async fn load(&mut self, style: FetchStyle, pad_ms: u64) -> Result<usize, ApiError> {
        self.list_state.begin();
        self.last_style = Some(style);
        tracing::info!(style = style.label(), "loading users");

        match api::list_users_with(&self.api, style).await {
            Ok(users) => {
                delay(pad_ms).await;
                let count = users.len();
                self.users = users;
                self.list_state.succeed();
                Ok(count)
            }
            Err(e) => {
                self.users.clear();
                self.list_state.fail(e.to_string());
                Err(e)
            }
        }
    }

    /// Submit the form. The created record goes to the front of the list.
    pub async fn submit(&mut self, new_user: &NewUser) -> Result<UserRecord, ApiError> {
        self.form_state.begin();
        match api::create_user(&self.api, new_user).await {
            Ok(created) => {
                self.users.insert(0, created.clone());
                self.form_state.succeed_for(Duration::from_millis(SUCCESS_CLEAR_MS));
                Ok(created)
            }
            Err(e) => {
                self.form_state.fail(e.to_string());
                Err(e)
            }
        }
    }
}
