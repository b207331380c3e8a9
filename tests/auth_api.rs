//! End-to-end tests for the auth HTTP endpoints.
//! Spins up the REST server on a random port and speaks raw HTTP/1.1.

use std::sync::Arc;
use taskhub::{config::ServerConfig, rest, AppContext};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

/// Find a free local port by binding to port 0.
fn find_free_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

/// Build a minimal AppContext on a random port for testing.
fn make_test_ctx(dir: &TempDir, port: u16) -> Arc<AppContext> {
    let config = ServerConfig::new(
        Some(port),
        Some("127.0.0.1".to_string()),
        Some(dir.path().to_path_buf()),
        Some("error".to_string()),
    );
    Arc::new(AppContext::new(config))
}

/// Start the server in the background and give it a moment to bind.
async fn start_server(ctx: Arc<AppContext>) {
    tokio::spawn(async move {
        let _ = rest::start_rest_server(ctx).await;
    });
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
}

/// Send a request and return (status line, body).
async fn send_raw(port: u16, request: &str) -> (String, String) {
    let mut stream = TcpStream::connect(format!("127.0.0.1:{port}"))
        .await
        .unwrap();
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.unwrap();
    let response = String::from_utf8_lossy(&buf).to_string();

    let status_line = response.lines().next().unwrap_or("").to_string();
    let body_start = response
        .find("\r\n\r\n")
        .map(|i| i + 4)
        .expect("no body in response");
    (status_line, response[body_start..].to_string())
}

/// POST a JSON body and parse the JSON response.
async fn post_json(
    port: u16,
    path: &str,
    body: &serde_json::Value,
) -> (String, serde_json::Value) {
    let payload = body.to_string();
    let request = format!(
        "POST {path} HTTP/1.1\r\nHost: localhost\r\nContent-Type: application/json\r\n\
         Content-Length: {}\r\nConnection: close\r\n\r\n{payload}",
        payload.len()
    );
    let (status_line, body) = send_raw(port, &request).await;
    let json = serde_json::from_str(&body).expect("body is not valid JSON");
    (status_line, json)
}

fn register_body(email: &str) -> serde_json::Value {
    serde_json::json!({
        "name": "Jane Smith",
        "email": email,
        "mobile": "555-0102",
        "password": "correct horse",
        "address": "12 Main St",
        "latitude": "51.5",
        "longitude": "-0.1"
    })
}

#[tokio::test]
async fn test_register_returns_201_with_user() {
    let dir = TempDir::new().unwrap();
    let port = find_free_port();
    start_server(make_test_ctx(&dir, port)).await;

    let (status, json) = post_json(port, "/api/auth/register", &register_body("jane@example.com")).await;

    assert!(status.contains("201"), "expected HTTP 201, got: {status}");
    assert_eq!(json["message"], "Registered successfully");
    assert_eq!(json["user"]["email"], "jane@example.com");
    assert_eq!(json["user"]["name"], "Jane Smith");
    assert_eq!(json["user"]["latitude"], "51.5");
}

#[tokio::test]
async fn test_register_duplicate_email_returns_409() {
    let dir = TempDir::new().unwrap();
    let port = find_free_port();
    start_server(make_test_ctx(&dir, port)).await;

    let (status, _) = post_json(port, "/api/auth/register", &register_body("jane@example.com")).await;
    assert!(status.contains("201"), "first registration should succeed: {status}");

    let (status, json) = post_json(port, "/api/auth/register", &register_body("jane@example.com")).await;
    assert!(status.contains("409"), "expected HTTP 409, got: {status}");
    assert_eq!(json["error"], "User already exists");
    assert!(json.get("user").is_none());
}

#[tokio::test]
async fn test_login_succeeds_with_exact_credentials() {
    let dir = TempDir::new().unwrap();
    let port = find_free_port();
    start_server(make_test_ctx(&dir, port)).await;

    post_json(port, "/api/auth/register", &register_body("jane@example.com")).await;

    let (status, json) = post_json(
        port,
        "/api/auth/login",
        &serde_json::json!({ "email": "jane@example.com", "password": "correct horse" }),
    )
    .await;

    assert!(status.contains("200"), "expected HTTP 200, got: {status}");
    assert_eq!(json["message"], "Login successful");
    assert_eq!(json["user"]["name"], "Jane Smith");
}

#[tokio::test]
async fn test_login_mismatch_returns_401() {
    let dir = TempDir::new().unwrap();
    let port = find_free_port();
    start_server(make_test_ctx(&dir, port)).await;

    post_json(port, "/api/auth/register", &register_body("jane@example.com")).await;

    // Wrong password
    let (status, json) = post_json(
        port,
        "/api/auth/login",
        &serde_json::json!({ "email": "jane@example.com", "password": "wrong" }),
    )
    .await;
    assert!(status.contains("401"), "expected HTTP 401, got: {status}");
    assert_eq!(json["error"], "Invalid credentials");

    // Unknown email — same error, indistinguishable from a bad password
    let (status, json) = post_json(
        port,
        "/api/auth/login",
        &serde_json::json!({ "email": "nobody@example.com", "password": "correct horse" }),
    )
    .await;
    assert!(status.contains("401"), "expected HTTP 401, got: {status}");
    assert_eq!(json["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_responses_never_leak_credentials() {
    let dir = TempDir::new().unwrap();
    let port = find_free_port();
    start_server(make_test_ctx(&dir, port)).await;

    let (_, register) =
        post_json(port, "/api/auth/register", &register_body("jane@example.com")).await;
    let (_, login) = post_json(
        port,
        "/api/auth/login",
        &serde_json::json!({ "email": "jane@example.com", "password": "correct horse" }),
    )
    .await;

    for (label, json) in [("register", &register), ("login", &login)] {
        let user = &json["user"];
        assert!(
            user.get("password").is_none(),
            "{label} response must not expose a password"
        );
        assert!(
            user.get("password_hash").is_none(),
            "{label} response must not expose the digest"
        );
        assert!(
            !json.to_string().contains("correct horse"),
            "{label} response must not echo the plaintext"
        );
    }
}

#[tokio::test]
async fn test_root_and_health_endpoints() {
    let dir = TempDir::new().unwrap();
    let port = find_free_port();
    start_server(make_test_ctx(&dir, port)).await;

    let (status, body) = send_raw(
        port,
        "GET / HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;
    assert!(status.contains("200"), "expected HTTP 200, got: {status}");
    assert!(body.contains("TaskHub backend is running"));

    let (status, body) = send_raw(
        port,
        "GET /api/health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;
    assert!(status.contains("200"), "expected HTTP 200, got: {status}");
    let json: serde_json::Value = serde_json::from_str(&body).expect("body is not valid JSON");
    assert_eq!(json["status"], "ok");
    assert_eq!(json["version"].as_str().unwrap(), env!("CARGO_PKG_VERSION"));
    assert!(json["uptime_secs"].is_number());
}
