use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};

use super::{body_json, send, test_app};

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Tests the health endpoint.
///
/// Expected: 200 with a status field and a timestamp
#[tokio::test]
async fn health_returns_status_and_timestamp() {
    let response = send(test_app(), get("/health")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
}

/// Tests that the login route redirects to the Discord authorize URL with
/// the configured client and the identify scope.
///
/// Expected: 307 towards discord.com/oauth2/authorize
#[tokio::test]
async fn login_redirects_to_discord_authorize_url() {
    let response = send(test_app(), get("/auth/discord")).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(location.starts_with("https://discord.com/oauth2/authorize"));
    assert!(location.contains("client_id=client-id"));
    assert!(location.contains("response_type=code"));
    assert!(location.contains("identify"));
}

/// Tests that a callback without a code redirects immediately with the
/// no_code error and performs no network calls.
///
/// Expected: 307 to the frontend with ?error=no_code
#[tokio::test]
async fn callback_without_code_redirects_with_no_code() {
    let response = send(test_app(), get("/auth/discord/callback")).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(location, "http://localhost:5173?error=no_code");
}

/// Tests that a callback carrying a code but no session-backed CSRF token is
/// rejected before any upstream call is attempted.
///
/// Expected: 307 to the frontend with ?error=auth_failed
#[tokio::test]
async fn callback_without_csrf_state_fails_closed() {
    let response = send(test_app(), get("/auth/discord/callback?code=abc")).await;

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(location, "http://localhost:5173?error=auth_failed");
}

/// Tests check-auth for an anonymous request.
///
/// Expected: 200 with authenticated=false and no user field
#[tokio::test]
async fn check_auth_reports_anonymous_sessions() {
    let response = send(test_app(), get("/api/check-auth")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["authenticated"], false);
    assert!(body.get("user").is_none());
}

/// Tests that the session-identity endpoint rejects anonymous requests.
///
/// Expected: 401 with a JSON error body
#[tokio::test]
async fn user_endpoint_rejects_anonymous_requests() {
    let response = send(test_app(), get("/api/user")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Authentication required");
}

/// Tests that every protected resource rejects anonymous requests with 401
/// (not 403: there is no role to compare yet).
#[tokio::test]
async fn protected_routes_reject_anonymous_requests() {
    let response = send(test_app(), get("/api/employees")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = send(test_app(), get("/api/recruitment")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = send(test_app(), post("/api/admin/action")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Tests that logout succeeds even without an existing session.
///
/// Expected: 200 with success=true
#[tokio::test]
async fn logout_succeeds_without_a_session() {
    let response = send(test_app(), post("/api/logout")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
}

/// Tests the JSON 404 fallback.
///
/// Expected: 404 with an ErrorDto body
#[tokio::test]
async fn unknown_routes_get_a_json_404() {
    let response = send(test_app(), get("/api/unknown")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Not found");
}
