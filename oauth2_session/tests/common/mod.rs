//! Local stand-in for the GitHub endpoints the login flow talks to.

use std::collections::HashMap;
use std::sync::LazyLock;
use std::thread;
use std::time::Duration;

use axum::{
    Form, Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};

const MOCK_PORT: u16 = 9876;

pub const VALID_CODE: &str = "valid-auth-code";
pub const GITHUB_USER_ID: i64 = 4242;
pub const PRIMARY_EMAIL: &str = "octo@example.com";

/// Boot the mock provider and point the library's GitHub endpoints at it.
///
/// Everything here must happen before the library reads its configuration,
/// so tests force this static first. The server runs on its own runtime on
/// a background thread; a server spawned inside a #[tokio::test] would die
/// with that test's runtime.
pub static MOCK_GITHUB: LazyLock<String> = LazyLock::new(|| {
    let base_url = format!("http://127.0.0.1:{MOCK_PORT}");

    let db_path = "/tmp/oauth2_session_login_flow_test.db";
    let _ = std::fs::remove_file(db_path);
    unsafe {
        std::env::set_var("DATABASE_URL", format!("sqlite:{db_path}"));
        std::env::set_var("OAUTH2_GITHUB_CLIENT_ID", "mock-client-id");
        std::env::set_var("OAUTH2_GITHUB_CLIENT_SECRET", "mock-client-secret");
        std::env::set_var(
            "OAUTH2_TOKEN_URL",
            format!("{base_url}/login/oauth/access_token"),
        );
        std::env::set_var("OAUTH2_USERINFO_URL", format!("{base_url}/user"));
        std::env::set_var("OAUTH2_USER_EMAILS_URL", format!("{base_url}/user/emails"));
    }

    thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("mock server runtime should start");
        rt.block_on(async {
            let app = Router::new()
                .route("/login/oauth/access_token", post(token_endpoint))
                .route("/user", get(user_endpoint))
                .route("/user/emails", get(emails_endpoint));
            let listener = tokio::net::TcpListener::bind(("127.0.0.1", MOCK_PORT))
                .await
                .expect("mock server port should be free");
            axum::serve(listener, app)
                .await
                .expect("mock server should keep running");
        });
    });

    wait_for_server_ready();
    base_url
});

fn wait_for_server_ready() {
    for _ in 0..50 {
        if std::net::TcpStream::connect(("127.0.0.1", MOCK_PORT)).is_ok() {
            return;
        }
        thread::sleep(Duration::from_millis(20));
    }
    panic!("mock GitHub server did not come up on port {MOCK_PORT}");
}

async fn token_endpoint(Form(params): Form<HashMap<String, String>>) -> Json<Value> {
    if params.get("code").map(String::as_str) == Some(VALID_CODE) {
        Json(json!({
            "access_token": "gho_mock_access_token",
            "token_type": "bearer",
            "scope": "user:email"
        }))
    } else {
        // GitHub reports a bad code as 200 OK with an error body
        Json(json!({
            "error": "bad_verification_code",
            "error_description": "The code passed is incorrect or expired."
        }))
    }
}

async fn user_endpoint() -> Json<Value> {
    // Profile with the email hidden, the common GitHub default
    Json(json!({
        "id": GITHUB_USER_ID,
        "login": "octocat",
        "name": "Octo Cat",
        "email": null,
        "avatar_url": "https://avatars.example.com/u/4242"
    }))
}

async fn emails_endpoint() -> Json<Value> {
    Json(json!([
        {"email": PRIMARY_EMAIL, "primary": true, "verified": true, "visibility": "private"},
        {"email": "old@example.com", "primary": false, "verified": false, "visibility": null}
    ]))
}
