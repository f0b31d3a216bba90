use futures_util::future;
use futures_util::TryFutureExt;
use std::future::Future;

use super::client::{decode, ensure_success, ApiClient};
use super::error::ApiError;
use crate::config::USERS_ENDPOINT;
use crate::models::{FetchStyle, NewUser, UserRecord};

/// List users by chaining future combinators.
///
/// Behaves exactly like [`list_users`]: one GET, no retry, status failures
/// become `HTTP error! status: {status}`.
pub fn list_users_chained(
    api: &ApiClient,
) -> impl Future<Output = Result<Vec<UserRecord>, ApiError>> + '_ {
    api.get(USERS_ENDPOINT)
        .send()
        .map_err(ApiError::Fetch)
        .and_then(|response| future::ready(ensure_success(response, ApiError::list_failed)))
        .and_then(|response| response.text().map_err(ApiError::Fetch))
        .and_then(|body| future::ready(decode::<Vec<UserRecord>>(&body)))
        .inspect_err(|e| tracing::error!(error = %e, "chained users fetch failed"))
}

/// List users with async/await.
pub async fn list_users(api: &ApiClient) -> Result<Vec<UserRecord>, ApiError> {
    fetch_users(api).await.map_err(|e| {
        tracing::error!(error = %e, "async users fetch failed");
        e
    })
}

async fn fetch_users(api: &ApiClient) -> Result<Vec<UserRecord>, ApiError> {
    let response = api.get(USERS_ENDPOINT).send().await?;
    let response = ensure_success(response, ApiError::list_failed)?;
    let body = response.text().await?;
    decode(&body)
}

/// List users using the requested composition style.
pub async fn list_users_with(api: &ApiClient, style: FetchStyle) -> Result<Vec<UserRecord>, ApiError> {
    match style {
        FetchStyle::Chained => list_users_chained(api).await,
        FetchStyle::AsyncAwait => list_users(api).await,
    }
}

/// Create a user from form fields.
///
/// The remote API assigns the `id`; the echoed record is returned as-is and
/// is not compared with the input.
pub async fn create_user(api: &ApiClient, new_user: &NewUser) -> Result<UserRecord, ApiError> {
    post_user(api, new_user).await.map_err(|e| {
        tracing::error!(error = %e, "create user failed");
        e
    })
}

async fn post_user(api: &ApiClient, new_user: &NewUser) -> Result<UserRecord, ApiError> {
    let response = api.post_json(USERS_ENDPOINT, new_user).send().await?;
    let response = ensure_success(response, ApiError::create_failed)?;
    let body = response.text().await?;
    let created: UserRecord = decode(&body)?;
    tracing::info!(id = created.id, name = created.name_display(), "user created");
    Ok(created)
}
