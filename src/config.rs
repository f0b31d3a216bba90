use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
pub const USERS_ENDPOINT: &str = "/users";
pub const DEFAULT_LOAD_DELAY_MS: u64 = 1000;
pub const SUCCESS_CLEAR_MS: u64 = 3000;

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()))
}

/// Padding applied after a list fetch. Unparseable values fall back to the default.
pub fn get_load_delay_ms() -> u64 {
    env::var("LOAD_DELAY_MS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_LOAD_DELAY_MS)
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
