use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use yansi::Paint;

use super::error::ApiError;
use crate::config::sanitize_base_url;
use crate::utils::absolute_url;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// HTTP client bound to one API base URL.
///
/// Holds no per-call state; clones share the underlying connection pool and
/// concurrent calls are independent of each other.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for `base_url`. No request timeout is configured.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("jp-users/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: sanitize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: &str) -> String {
        absolute_url(&self.base_url, endpoint)
    }

    /// Start a GET request, echoing it as a curl command line.
    pub fn get(&self, endpoint: &str) -> reqwest::RequestBuilder {
        let url = self.url(endpoint);
        log_request("GET", &url, None);
        self.client.get(url)
    }

    /// Start a POST request with a JSON body and `Content-Type: application/json`.
    pub fn post_json<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> reqwest::RequestBuilder {
        let url = self.url(endpoint);
        let rendered = serde_json::to_string_pretty(body).unwrap_or_default();
        log_request("POST", &url, Some(&rendered));
        self.client.post(url).json(body)
    }
}

fn log_request(method: &str, url: &str, body: Option<&str>) {
    let mut parts = Vec::new();
    parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
    parts.push(format!("-X {}", Paint::new(method).fg(yansi::Color::Yellow).bold()));
    parts.push(format!("'{}'", Paint::new(url).fg(yansi::Color::Cyan)));

    if let Some(json_str) = body {
        parts.push(format!(
            "{} {}",
            Paint::new("-H").fg(yansi::Color::Magenta),
            Paint::new("'Content-Type: application/json'").fg(yansi::Color::Magenta)
        ));
        let escaped_json = json_str.replace('\'', "'\\''");
        parts.push(format!(
            "{} {}",
            Paint::new("-d").fg(yansi::Color::Blue),
            Paint::new(format!("'{}'", escaped_json)).fg(yansi::Color::White)
        ));
    }
    log_output(format!("Request:\n{}", parts.join(" ")));
}

/// Pass the response through when its status is 2xx, otherwise build the
/// caller-specific status error.
pub(crate) fn ensure_success(
    response: reqwest::Response,
    on_failure: fn(u16) -> ApiError,
) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    log_output(format!(
        "Response:\n{}",
        Paint::new(format!("HTTP {}", status)).fg(yansi::Color::Red)
    ));
    Err(on_failure(status.as_u16()))
}

/// Decode a response body, echoing it dimmed.
pub(crate) fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    // Grayed out color (dimmed/dark gray)
    log_output(format!("Response:\n{}", Paint::new(body).rgb(100, 100, 100)));
    Ok(serde_json::from_str(body)?)
}
