use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use workforce_client::{ApiClient, RequestOptions, NETWORK_ERROR_MESSAGE};
use workforce_session::{AuthState, SessionError, SessionManager, User};
use workforce_storage::memory_vault;

fn wire(base_url: &str) -> (Arc<SessionManager>, ApiClient) {
    let manager = Arc::new(SessionManager::new(memory_vault()));
    let client = ApiClient::new(base_url, 2_000, manager.clone()).expect("client");
    manager.attach(&client);
    (manager, client)
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"email": "asha@example.com", "password": "hunter2"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "session-token",
            "user": {"id": 42, "name": "Asha", "email": "asha@example.com", "role": "manager"}
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn login_establishes_session_used_by_later_calls() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/profile"))
        .and(header("authorization", "Bearer session-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "42"})))
        .expect(1)
        .mount(&server)
        .await;

    let (manager, client) = wire(&server.uri());
    let user = manager
        .login(&client, " asha@example.com ", "hunter2")
        .await
        .expect("login");

    assert_eq!(user.id.as_str(), "42");
    assert_eq!(user.display_name(), "Asha");
    assert_eq!(manager.state(), AuthState::LoggedIn);
    assert!(manager.is_authenticated());

    let _: serde_json::Value = client
        .get("/profile", RequestOptions::default())
        .await
        .expect("profile");

    // The login request itself went out without a credential
    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn rejected_login_leaves_session_logged_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid email or password"})),
        )
        .mount(&server)
        .await;

    let (manager, client) = wire(&server.uri());
    let err = manager
        .login(&client, "asha@example.com", "wrong")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Invalid email or password");
    assert!(err.is_unauthorized());
    assert_eq!(manager.state(), AuthState::NotLoggedIn);
    assert!(!manager.is_authenticated());
}

#[tokio::test]
async fn missing_password_is_rejected_before_any_request() {
    let server = MockServer::start().await;
    let (manager, client) = wire(&server.uri());

    let err = manager
        .login(&client, "asha@example.com", "")
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::InvalidCredentials(_)));

    let err = manager.login(&client, "   ", "pw").await.unwrap_err();
    assert!(matches!(err, SessionError::InvalidCredentials(_)));

    assert!(server.received_requests().await.unwrap().is_empty());
    assert_eq!(manager.state(), AuthState::NotLoggedIn);
}

#[tokio::test]
async fn second_login_is_refused() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    let (manager, client) = wire(&server.uri());
    manager
        .login(&client, "asha@example.com", "hunter2")
        .await
        .unwrap();
    let err = manager
        .login(&client, "asha@example.com", "hunter2")
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::AlreadyLoggedIn));
}

#[tokio::test]
async fn empty_token_in_login_response_is_invalid() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"token": "", "user": {"id": "1"}})),
        )
        .mount(&server)
        .await;

    let (manager, client) = wire(&server.uri());
    let err = manager.login(&client, "a@b.c", "pw").await.unwrap_err();
    assert!(matches!(err, SessionError::InvalidResponse(_)));
    assert_eq!(manager.state(), AuthState::NotLoggedIn);
}

#[tokio::test]
async fn login_without_connectivity_reports_network_message() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let (manager, client) = wire(&base);
    let err = manager.login(&client, "a@b.c", "pw").await.unwrap_err();
    assert_eq!(err.to_string(), NETWORK_ERROR_MESSAGE);
    assert_eq!(manager.state(), AuthState::NotLoggedIn);
}

#[tokio::test]
async fn expired_credential_tears_down_session() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    Mock::given(method("GET"))
        .and(path("/leave-requests"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "token expired"})))
        .mount(&server)
        .await;

    let (manager, client) = wire(&server.uri());
    manager
        .login(&client, "asha@example.com", "hunter2")
        .await
        .unwrap();

    let err = client
        .get::<serde_json::Value>("/leave-requests", RequestOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.message(), "token expired");

    assert_eq!(manager.state(), AuthState::NotLoggedIn);
    assert!(!manager.is_authenticated());
    assert!(manager.current_user().is_none());

    // The next request goes out without a credential
    let _ = client
        .get::<serde_json::Value>("/leave-requests", RequestOptions::default())
        .await;
    let requests = server.received_requests().await.unwrap();
    let last = requests.last().unwrap();
    assert!(last.headers.get("authorization").is_none());
}

#[tokio::test]
async fn dropped_manager_does_not_break_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let manager = Arc::new(SessionManager::new(memory_vault()));
    let client = ApiClient::new(&server.uri(), 2_000, Arc::new(workforce_client::StaticCredential::none()))
        .unwrap();
    manager.attach(&client);
    drop(manager);

    let err = client
        .get::<User>("/profile", RequestOptions::default())
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());
}
