//! Integration tests for operational routes and middleware.

use axum::http::StatusCode;
use cardapio_integration_tests::TestContext;

#[tokio::test]
async fn test_health() {
    let mut ctx = TestContext::with_bolo();

    let resp = ctx.get("/health").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, "ok");
}

#[tokio::test]
async fn test_readiness_with_memory_catalog() {
    let mut ctx = TestContext::new(&[]);

    let resp = ctx.get("/health/ready").await;

    assert_eq!(resp.status, StatusCode::OK);
}

#[tokio::test]
async fn test_static_stylesheet_is_served() {
    let mut ctx = TestContext::with_bolo();

    let resp = ctx.get("/css/main.css").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(
        resp.headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("text/css"))
    );
}

#[tokio::test]
async fn test_pages_link_stylesheet_at_site_root() {
    let mut ctx = TestContext::with_bolo();

    let resp = ctx.get("/").await;

    assert!(resp.body.contains(r#"href="/css/main.css""#));
}

#[tokio::test]
async fn test_static_files_do_not_shadow_routes() {
    let mut ctx = TestContext::with_bolo();

    let resp = ctx.get("/cardapio").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("Bolo caseiro"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let mut ctx = TestContext::with_bolo();

    let resp = ctx.get("/nao-existe").await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_every_response_has_request_id() {
    let mut ctx = TestContext::with_bolo();

    for uri in ["/", "/cardapio", "/checkout", "/health"] {
        let resp = ctx.get(uri).await;
        let request_id = resp
            .headers
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(!request_id.is_empty(), "missing x-request-id on {uri}");
    }
}

#[tokio::test]
async fn test_redirects_have_request_id() {
    let mut ctx = TestContext::with_bolo();

    let resp = ctx.add_to_cart("1").await;

    assert_eq!(resp.status, StatusCode::FOUND);
    assert!(resp.headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn test_session_cookie_flags() {
    let mut ctx = TestContext::with_bolo();

    let resp = ctx.add_to_cart("1").await;

    let cookie = resp
        .headers
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(cookie.starts_with("cardapio_session="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(!cookie.contains("Secure"));
}

#[tokio::test]
async fn test_first_page_view_starts_session() {
    let mut ctx = TestContext::with_bolo();

    let resp = ctx.get("/").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.headers.contains_key("set-cookie"));
    assert!(ctx.has_session());
}

#[tokio::test]
async fn test_session_cookie_is_issued_once() {
    let mut ctx = TestContext::with_bolo();
    ctx.get("/").await;

    let resp = ctx.get("/cardapio").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(!resp.headers.contains_key("set-cookie"));
}

#[tokio::test]
async fn test_health_checks_and_assets_do_not_start_sessions() {
    let mut ctx = TestContext::with_bolo();

    ctx.get("/health").await;
    ctx.get("/health/ready").await;
    ctx.get("/css/main.css").await;

    assert!(!ctx.has_session());
}
