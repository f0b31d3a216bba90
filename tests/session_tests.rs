use jp_users::api::{self, ApiClient};
use jp_users::models::{FetchStyle, NewUser};
use jp_users::services::UserSession;
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn session_with(server: &MockServer) -> UserSession {
    api::set_silent(true);
    UserSession::new(ApiClient::new(&server.uri()).unwrap())
}

fn leanne_list() -> Value {
    json!([{
        "id": 1,
        "name": "Leanne Graham",
        "email": "Sincere@april.biz",
        "phone": "1-770-736-8031"
    }])
}

async fn mount_list(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(template)
        .mount(server)
        .await;
}

async fn mount_create(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(template)
        .mount(server)
        .await;
}

fn ada_form() -> NewUser {
    NewUser::new("Ada", "ada@example.com", "555-0100").unwrap()
}

#[tokio::test]
async fn test_load_is_padded_and_replaces_list() {
    let server = MockServer::start().await;
    mount_list(&server, ResponseTemplate::new(200).set_body_json(leanne_list())).await;
    let mut session = session_with(&server).await;

    for style in [FetchStyle::Chained, FetchStyle::AsyncAwait] {
        let start = Instant::now();
        let count = session.load(style, 1000).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(1000));
        assert_eq!(count, 1);
        assert_eq!(serde_json::to_value(session.users()).unwrap(), leanne_list());
        assert_eq!(session.last_style(), Some(style));

        let flags = session.list_flags();
        assert!(!flags.loading);
        assert!(flags.error.is_none());
    }
}

#[tokio::test]
async fn test_failed_load_clears_list_and_keeps_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(leanne_list()))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    mount_list(&server, ResponseTemplate::new(500)).await;
    let mut session = session_with(&server).await;

    session.load(FetchStyle::AsyncAwait, 0).await.unwrap();
    assert_eq!(session.users().len(), 1);

    let err = session.load(FetchStyle::Chained, 0).await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP error! status: 500");
    assert!(session.users().is_empty());

    let flags = session.list_flags();
    assert!(!flags.loading);
    assert_eq!(flags.error.as_deref(), Some("HTTP error! status: 500"));
}

#[tokio::test]
async fn test_submit_prepends_created_user() {
    let server = MockServer::start().await;
    mount_list(&server, ResponseTemplate::new(200).set_body_json(leanne_list())).await;
    mount_create(
        &server,
        ResponseTemplate::new(201).set_body_json(json!({
            "id": 11, "name": "Ada", "email": "ada@example.com", "phone": "555-0100"
        })),
    )
    .await;
    let mut session = session_with(&server).await;

    session.load(FetchStyle::AsyncAwait, 0).await.unwrap();
    let created = session.submit(&ada_form()).await.unwrap();

    assert_eq!(created.id, 11);
    let names: Vec<&str> = session.users().iter().map(|u| u.name_display()).collect();
    assert_eq!(names, vec!["Ada", "Leanne Graham"]);

    let flags = session.form_flags();
    assert!(flags.success);
    assert!(!flags.loading);
    assert!(flags.error.is_none());
}

#[tokio::test]
async fn test_failed_submit_leaves_list_untouched() {
    let server = MockServer::start().await;
    mount_list(&server, ResponseTemplate::new(200).set_body_json(leanne_list())).await;
    mount_create(&server, ResponseTemplate::new(500)).await;
    let mut session = session_with(&server).await;

    session.load(FetchStyle::Chained, 0).await.unwrap();
    let err = session.submit(&ada_form()).await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to create user: 500");
    assert_eq!(session.users().len(), 1);
    let flags = session.form_flags();
    assert!(!flags.success);
    assert_eq!(flags.error.as_deref(), Some("Failed to create user: 500"));
}
