use jp_users::config;
use std::env;
use std::io::Write;

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://jsonplaceholder.typicode.com/"),
        "https://jsonplaceholder.typicode.com"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("http://localhost:3000///"),
        "http://localhost:3000"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  http://localhost:3000/  "),
        "http://localhost:3000"
    );
}

#[test]
fn test_sanitize_base_url_empty_falls_back_to_default() {
    assert_eq!(config::sanitize_base_url(""), config::DEFAULT_API_BASE_URL);
    assert_eq!(config::sanitize_base_url("   "), config::DEFAULT_API_BASE_URL);
}

// Environment variables are process-wide, so every env-dependent check lives
// in this one test to keep the harness's parallel threads from racing.
#[test]
fn test_env_driven_settings() {
    env::remove_var("API_BASE_URL");
    env::remove_var("LOAD_DELAY_MS");
    assert_eq!(config::get_api_base_url(), "https://jsonplaceholder.typicode.com");
    assert_eq!(config::get_load_delay_ms(), 1000);

    env::set_var("API_BASE_URL", "http://localhost:3000/");
    assert_eq!(config::get_api_base_url(), "http://localhost:3000");

    env::set_var("LOAD_DELAY_MS", "250");
    assert_eq!(config::get_load_delay_ms(), 250);
    env::set_var("LOAD_DELAY_MS", "soon");
    assert_eq!(config::get_load_delay_ms(), 1000);

    env::remove_var("API_BASE_URL");
    env::remove_var("LOAD_DELAY_MS");

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "API_BASE_URL=http://from-env-file.test/").unwrap();
    config::load_env_file(Some(file.path().to_str().unwrap()));
    assert_eq!(config::get_api_base_url(), "http://from-env-file.test");

    env::remove_var("API_BASE_URL");
}

#[test]
fn test_missing_env_file_is_ignored() {
    config::load_env_file(Some("/nonexistent/path/.env"));
}
