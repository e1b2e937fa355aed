mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{
    build_test_app, get, get_with_cookie, location, session, set_cookies, FakeIdentity,
    MemoryStore,
};

fn app(identity: Arc<FakeIdentity>) -> axum::Router {
    build_test_app(Arc::new(MemoryStore::default()), identity)
}

#[tokio::test]
async fn valid_code_sets_cookies_and_redirects_to_next() {
    let identity =
        Arc::new(FakeIdentity::default().with_code("code-123", session("acc-cb", "ref-cb")));

    let response = get(
        app(identity),
        "/auth/callback?code=code-123&next=/mission-control",
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/mission-control");
    let cookies = set_cookies(&response);
    assert_eq!(cookies.len(), 2);
    assert!(cookies.iter().any(|c| c.starts_with("sb-access-token=acc-cb")));
}

#[tokio::test]
async fn code_verifier_cookie_is_forwarded_and_cleared() {
    let identity =
        Arc::new(FakeIdentity::default().with_code("code-pkce", session("acc", "ref")));

    let response = get_with_cookie(
        app(identity.clone()),
        "/auth/callback?code=code-pkce",
        "sb-code-verifier=verifier-xyz",
    )
    .await;

    assert_eq!(location(&response), "/");
    let cookies = set_cookies(&response);
    assert_eq!(cookies.len(), 3);
    assert!(cookies
        .iter()
        .any(|c| c.starts_with("sb-code-verifier=;") && c.contains("Max-Age=0")));
    assert_eq!(
        identity.code_verifiers.lock().unwrap().as_slice(),
        [Some("verifier-xyz".to_string())]
    );
}

#[tokio::test]
async fn failed_exchange_redirects_with_auth_error() {
    let response = get(
        app(Arc::new(FakeIdentity::default())),
        "/auth/callback?code=stale&next=/mission-control",
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/?error=auth");
    assert!(set_cookies(&response).is_empty());
}

#[tokio::test]
async fn off_site_next_is_replaced_with_root() {
    let identity = Arc::new(FakeIdentity::default().with_code("code-1", session("acc", "ref")));

    let response = get(
        app(identity),
        "/auth/callback?code=code-1&next=https://evil.example/phish",
    )
    .await;

    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn missing_code_redirects_without_exchange() {
    let identity = Arc::new(FakeIdentity::default());

    let response = get(app(identity.clone()), "/auth/callback?next=/crew").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/crew");
    assert!(identity.code_verifiers.lock().unwrap().is_empty());
}
