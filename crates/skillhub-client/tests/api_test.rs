//! HTTP tests against a mock SkillHub backend

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::{Arc, Mutex};

use mockito::{Matcher, Server};
use reqwest::header::HeaderValue;
use reqwest::{Request, StatusCode};
use serde_json::json;
use skillhub_client::prelude::*;
use skillhub_client::{RequestHook, ResponseHook};
use url::Url;

#[derive(Default)]
struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.lock().unwrap().push(route.to_string());
    }
}

impl RecordingNavigator {
    fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

struct Harness {
    client: SkillHubClient,
    store: Arc<MemorySessionStore>,
    navigator: Arc<RecordingNavigator>,
}

fn harness(base_url: &str, store: MemorySessionStore) -> Harness {
    let store = Arc::new(store);
    let navigator = Arc::new(RecordingNavigator::default());
    let client = SkillHubClient::new(
        &ClientConfig::new(base_url),
        store.clone(),
        navigator.clone(),
    )
    .expect("client");
    Harness {
        client,
        store,
        navigator,
    }
}

fn skill_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": "code-reviewer",
        "description": "Reviews code",
        "github_owner": "acme",
        "github_repo": "reviewer",
        "stars": 10,
        "forks": 2,
        "language": "Rust",
        "tags": ["review"],
        "install_command": null,
        "price": 0,
        "marketplace": false,
        "downloaded_count": 7,
        "last_synced_at": null
    })
}

#[tokio::test]
async fn test_login_then_get_sends_bearer_token() {
    let mut server = Server::new_async().await;
    let login = server
        .mock("POST", "/api/auth/login")
        .match_body(Matcher::Json(json!({ "email": "a@b.com", "password": "x" })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({ "token": "t1", "user": { "id": "u1", "email": "a@b.com" } }).to_string())
        .create_async()
        .await;
    let get = server
        .mock("GET", "/api/skills/42")
        .match_header("authorization", "Bearer t1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(skill_json("42").to_string())
        .create_async()
        .await;

    let h = harness(&server.url(), MemorySessionStore::new());
    let resp = h.client.auth().login("a@b.com", "x").await.unwrap();
    assert_eq!(resp.token.as_deref(), Some("t1"));
    assert_eq!(h.store.get().as_deref(), Some("t1"));
    assert!(h.client.auth().is_authenticated());

    let skill = h.client.skills().get("42").await.unwrap();
    assert_eq!(skill.id, "42");

    login.assert_async().await;
    get.assert_async().await;
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/skills/42")
        .match_header("authorization", Matcher::Missing)
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body(skill_json("42").to_string())
        .create_async()
        .await;

    let h = harness(&server.url(), MemorySessionStore::new());
    h.client.skills().get("42").await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_passes_pagination_and_returns_page_unmodified() {
    let mut server = Server::new_async().await;
    let body = json!({
        "data": [skill_json("a"), skill_json("b")],
        "page": 2,
        "limit": 10,
        "total": 12,
        "total_pages": 2
    });
    let mock = server
        .mock("GET", "/api/skills")
        .match_query(Matcher::Exact("page=2&limit=10".into()))
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    let h = harness(&server.url(), MemorySessionStore::new());
    let page = h
        .client
        .skills()
        .list(&SkillQuery::new().with_page(2).with_limit(10))
        .await
        .unwrap();

    assert_eq!(page.page, 2);
    assert_eq!(page.limit, 10);
    assert_eq!(page.total, 12);
    assert_eq!(page.total_pages, 2);
    assert_eq!(
        page.data.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
        vec!["a", "b"]
    );
    assert!(!page.has_next_page());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_sends_all_filters() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/skills")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("sort".into(), "stars".into()),
            Matcher::UrlEncoded("search".into(), "code review".into()),
            Matcher::UrlEncoded("language".into(), "Rust".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"data":[],"page":1,"limit":20,"total":0,"total_pages":0}"#)
        .create_async()
        .await;

    let h = harness(&server.url(), MemorySessionStore::new());
    let page = h
        .client
        .skills()
        .list(
            &SkillQuery::new()
                .with_sort("stars")
                .with_search("code review")
                .with_language("Rust"),
        )
        .await
        .unwrap();
    assert!(page.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_missing_is_not_found_and_keeps_session() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/skills/missing")
        .with_status(404)
        .with_body(r#"{"success":false,"data":null,"message":"Skill not found"}"#)
        .create_async()
        .await;

    let h = harness(&server.url(), MemorySessionStore::with_token("t1"));
    let err = h.client.skills().get("missing").await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(h.store.get().as_deref(), Some("t1"));
    assert!(h.navigator.routes().is_empty());
}

#[tokio::test]
async fn test_unauthorized_clears_session_and_redirects() {
    let mut server = Server::new_async().await;
    let _favorites = server
        .mock("GET", "/api/favorites")
        .with_status(401)
        .with_body(r#"{"message":"token expired"}"#)
        .create_async()
        .await;

    let h = harness(&server.url(), MemorySessionStore::with_token("expired"));
    let err = h.client.favorites().list().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(h.store.get(), None);
    assert_eq!(h.navigator.routes(), vec!["/login".to_string()]);
}

#[tokio::test]
async fn test_unauthorized_on_any_operation_clears_session() {
    let mut server = Server::new_async().await;
    let _me = server
        .mock("GET", "/api/auth/me")
        .with_status(401)
        .create_async()
        .await;
    let _download = server
        .mock("GET", "/api/skills/7/download")
        .with_status(401)
        .create_async()
        .await;

    let h = harness(&server.url(), MemorySessionStore::with_token("t1"));
    assert!(h.client.auth().me().await.unwrap_err().is_unauthorized());
    assert_eq!(h.store.get(), None);

    h.store.set("t2").unwrap();
    assert!(h
        .client
        .skills()
        .download("7")
        .await
        .unwrap_err()
        .is_unauthorized());
    assert_eq!(h.store.get(), None);
    assert_eq!(h.navigator.routes().len(), 2);
}

#[tokio::test]
async fn test_login_without_token_leaves_session_untouched() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/auth/login")
        .with_status(200)
        .with_body(r#"{"message":"verify your email first"}"#)
        .create_async()
        .await;

    let h = harness(&server.url(), MemorySessionStore::with_token("old"));
    let resp = h.client.auth().login("a@b.com", "x").await.unwrap();

    assert!(resp.token.is_none());
    assert_eq!(
        resp.extra.get("message"),
        Some(&json!("verify your email first"))
    );
    assert_eq!(h.store.get().as_deref(), Some("old"));
}

#[tokio::test]
async fn test_login_stores_token_whatever_the_user_shape() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/auth/login")
        .with_status(200)
        .with_body(r#"{"token":"t1","user":{"id":7,"name":"Ada"},"expires_in":"1h"}"#)
        .create_async()
        .await;

    let h = harness(&server.url(), MemorySessionStore::new());
    let resp = h.client.auth().login("a@b.com", "x").await.unwrap();

    assert_eq!(h.store.get().as_deref(), Some("t1"));
    assert_eq!(resp.token.as_deref(), Some("t1"));
    assert_eq!(resp.user, Some(json!({ "id": 7, "name": "Ada" })));
    assert_eq!(resp.extra.get("expires_in"), Some(&json!("1h")));
    assert!(resp.parse_user().is_err());
}

#[tokio::test]
async fn test_register_stores_token_when_user_is_null() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/auth/register")
        .with_status(201)
        .with_body(r#"{"token":"r1","user":null}"#)
        .create_async()
        .await;

    let h = harness(&server.url(), MemorySessionStore::new());
    let resp = h
        .client
        .auth()
        .register("a@b.com", "pw", None)
        .await
        .unwrap();

    assert_eq!(h.store.get().as_deref(), Some("r1"));
    assert_eq!(resp.parse_user().unwrap(), None);
}

#[tokio::test]
async fn test_rejected_login_stores_nothing() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/api/auth/login")
        .with_status(400)
        .with_body("invalid credentials")
        .create_async()
        .await;

    let h = harness(&server.url(), MemorySessionStore::new());
    let err = h.client.auth().login("a@b.com", "wrong").await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    assert!(err.to_string().contains("invalid credentials"));
    assert_eq!(h.store.get(), None);
}

#[tokio::test]
async fn test_register_sends_optional_name() {
    let mut server = Server::new_async().await;
    let with_name = server
        .mock("POST", "/api/auth/register")
        .match_body(Matcher::Json(json!({
            "email": "a@b.com",
            "password": "pw",
            "name": "Ada"
        })))
        .with_status(201)
        .with_body(r#"{"token":"r1"}"#)
        .expect(1)
        .create_async()
        .await;
    let without_name = server
        .mock("POST", "/api/auth/register")
        .match_body(Matcher::Json(json!({ "email": "b@c.com", "password": "pw" })))
        .with_status(201)
        .with_body(r#"{"token":"r2"}"#)
        .expect(1)
        .create_async()
        .await;

    let h = harness(&server.url(), MemorySessionStore::new());

    h.client
        .auth()
        .register("a@b.com", "pw", Some("Ada"))
        .await
        .unwrap();
    assert_eq!(h.store.get().as_deref(), Some("r1"));

    h.client.auth().register("b@c.com", "pw", None).await.unwrap();
    assert_eq!(h.store.get().as_deref(), Some("r2"));

    with_name.assert_async().await;
    without_name.assert_async().await;
}

#[tokio::test]
async fn test_logout_makes_no_request() {
    let mut server = Server::new_async().await;
    let mut guards = Vec::new();
    for method in ["GET", "POST", "DELETE"] {
        guards.push(
            server
                .mock(method, Matcher::Any)
                .expect(0)
                .create_async()
                .await,
        );
    }

    let h = harness(&server.url(), MemorySessionStore::with_token("t1"));
    h.client.auth().logout().unwrap();

    assert_eq!(h.store.get(), None);
    assert!(!h.client.auth().is_authenticated());
    for guard in &guards {
        guard.assert_async().await;
    }
}

#[tokio::test]
async fn test_me_returns_profile() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/auth/me")
        .match_header("authorization", "Bearer t1")
        .with_status(200)
        .with_body(r#"{"id":"u1","email":"a@b.com","name":"Ada","role":"admin"}"#)
        .create_async()
        .await;

    let h = harness(&server.url(), MemorySessionStore::with_token("t1"));
    let user = h.client.auth().me().await.unwrap();
    assert_eq!(user.display_name(), "Ada");
    assert_eq!(user.role, "admin");
    assert_eq!(user.provider, "email");
}

#[tokio::test]
async fn test_download_returns_link() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/skills/42/download")
        .with_status(200)
        .with_body(r#"{"download_url":"https://cdn.example.com/42.tgz?sig=abc"}"#)
        .create_async()
        .await;

    let h = harness(&server.url(), MemorySessionStore::new());
    let link = h.client.skills().download("42").await.unwrap();
    assert_eq!(link.download_url, "https://cdn.example.com/42.tgz?sig=abc");
}

#[tokio::test]
async fn test_favorites_roundtrip() {
    let mut server = Server::new_async().await;
    let add = server
        .mock("POST", "/api/favorites")
        .match_body(Matcher::Json(json!({ "skill_id": "s1" })))
        .with_status(201)
        .with_body(r#"{"id":"f1","skill_id":"s1","user_id":"u1"}"#)
        .create_async()
        .await;
    let list = server
        .mock("GET", "/api/favorites")
        .with_status(200)
        .with_body(json!([{ "id": "f1", "skill_id": "s1", "skill": skill_json("s1") }]).to_string())
        .create_async()
        .await;
    let remove = server
        .mock("DELETE", "/api/favorites/f1")
        .with_status(204)
        .create_async()
        .await;

    let h = harness(&server.url(), MemorySessionStore::with_token("t1"));
    let favorites = h.client.favorites();

    let created = favorites.add("s1").await.unwrap();
    assert_eq!(created.id, "f1");

    let all = favorites.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].skill.as_ref().map(|s| s.name.as_str()), Some("code-reviewer"));

    favorites.remove("f1").await.unwrap();

    add.assert_async().await;
    list.assert_async().await;
    remove.assert_async().await;
}

#[tokio::test]
async fn test_server_error_surfaces_unmodified() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/favorites")
        .with_status(503)
        .with_body("maintenance")
        .create_async()
        .await;

    let h = harness(&server.url(), MemorySessionStore::with_token("t1"));
    let err = h.client.favorites().list().await.unwrap_err();

    match err {
        ClientError::Status { status, body, .. } => {
            assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
            assert_eq!(body, "maintenance");
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert_eq!(h.store.get().as_deref(), Some("t1"));
}

#[tokio::test]
async fn test_unexpected_body_is_json_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/skills/42")
        .with_status(200)
        .with_body("{not json")
        .create_async()
        .await;

    let h = harness(&server.url(), MemorySessionStore::new());
    let err = h.client.skills().get("42").await.unwrap_err();
    assert!(matches!(err, ClientError::Json(_)));
}

#[tokio::test]
async fn test_transport_failure_skips_response_hooks() {
    // Reserve a port, then close it so nothing is listening.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let h = harness(
        &format!("http://127.0.0.1:{port}"),
        MemorySessionStore::with_token("t1"),
    );
    let err = h.client.skills().get("42").await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(err.status(), None);
    assert_eq!(h.store.get().as_deref(), Some("t1"));
    assert!(h.navigator.routes().is_empty());
}

struct TraceHeader;

impl RequestHook for TraceHeader {
    fn on_request(&self, request: &mut Request) {
        request
            .headers_mut()
            .insert("x-trace", HeaderValue::from_static("abc"));
    }
}

#[derive(Default)]
struct StatusLog {
    seen: Mutex<Vec<(u16, String)>>,
}

impl ResponseHook for StatusLog {
    fn on_response(&self, status: StatusCode, url: &Url) {
        self.seen
            .lock()
            .unwrap()
            .push((status.as_u16(), url.path().to_string()));
    }
}

#[tokio::test]
async fn test_custom_hooks_run_alongside_builtin_ones() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/skills/42")
        .match_header("x-trace", "abc")
        .match_header("authorization", "Bearer t1")
        .with_status(401)
        .create_async()
        .await;

    let log = Arc::new(StatusLog::default());
    let h = harness(&server.url(), MemorySessionStore::with_token("t1"));
    let client = h
        .client
        .with_request_hook(Arc::new(TraceHeader))
        .with_response_hook(log.clone());

    let err = client.skills().get("42").await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(
        *log.seen.lock().unwrap(),
        vec![(401, "/api/skills/42".to_string())]
    );
    assert_eq!(h.store.get(), None);
}
