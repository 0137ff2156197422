use serde_json::json;
use test_utils::builder::TestBuilder;

use super::*;

/// Tests the full account flow over HTTP.
///
/// Expected: register issues a working token, logout revokes it
#[tokio::test]
async fn register_authenticate_logout() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let app = app(db);

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/auth/register/",
            None,
            Some(json!({"email": "Alice@Example.com", "password": "correct-horse-battery"})),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["email"], "alice@example.com");
    let token = body["token"].as_str().unwrap().to_string();

    let (status, body) = send(&app, request(Method::GET, "/api/profile/", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_xp"], 0);

    let (status, _) = send(&app, request(Method::POST, "/api/auth/logout/", Some(&token), None)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, request(Method::GET, "/api/profile/", Some(&token), None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

/// Tests login with wrong credentials.
///
/// Expected: 400 with an error body
#[tokio::test]
async fn login_rejects_wrong_password() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let app = app(db);

    send(
        &app,
        request(
            Method::POST,
            "/api/auth/register/",
            None,
            Some(json!({"email": "bob@example.com", "password": "correct-horse-battery"})),
        ),
    )
    .await;

    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/auth/login/",
            None,
            Some(json!({"email": "bob@example.com", "password": "wrong-password"})),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

/// Tests protected routes without a token.
///
/// Expected: 401 with a Bearer challenge
#[tokio::test]
async fn protected_route_requires_token() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let response = app(db)
        .oneshot(request(Method::GET, "/api/tasks/", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
        "Bearer"
    );
}

/// Tests the preference catalog is public.
///
/// Expected: create then list without a token
#[tokio::test]
async fn preferences_are_public() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let app = app(db);

    let (status, _) = send(
        &app,
        request(Method::POST, "/api/preferences/", None, Some(json!({"name": "Hiking"}))),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, request(Method::GET, "/api/preferences/", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Hiking");
}
