mod common;

use reqwest::StatusCode;
use serde_json::json;

// ── Health ──────────────────────────────────────────────────────

#[tokio::test]
async fn health_returns_ok() {
    let app = common::spawn_app().await;

    let resp = app.client.get(app.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["x-frame-options"], "DENY");
    assert_eq!(resp.text().await.unwrap(), "ok");

    common::cleanup(app).await;
}

// ── Login endpoint ──────────────────────────────────────────────

#[tokio::test]
async fn login_requires_both_fields() {
    let app = common::spawn_app().await;
    app.seed_moderator("admin", "moderator77", "admin", true).await;

    for body in [
        json!({ "username": "admin" }),
        json!({ "password": "moderator77" }),
        json!({}),
        json!({ "username": "", "password": "moderator77" }),
    ] {
        let (resp, status) = app.login_json(&body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(resp, json!({ "error": "Username and password are required" }));
    }

    common::cleanup(app).await;
}

#[tokio::test]
async fn login_rejects_malformed_body() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/api/auth/login"))
        .header("content-type", "application/json")
        .body("{\"username\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Invalid request body");

    common::cleanup(app).await;
}

#[tokio::test]
async fn unknown_user_and_wrong_password_look_the_same() {
    let app = common::spawn_app().await;
    app.seed_moderator("admin", "moderator77", "admin", true).await;

    let (unknown, unknown_status) = app
        .login_json(&json!({ "username": "ghost", "password": "moderator77" }))
        .await;
    let (wrong, wrong_status) = app
        .login_json(&json!({ "username": "admin", "password": "moderator78" }))
        .await;

    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown, json!({ "error": "Invalid username or password" }));
    assert_eq!(unknown, wrong);

    common::cleanup(app).await;
}

#[tokio::test]
async fn login_returns_moderator_without_hash() {
    let app = common::spawn_app().await;
    let id = app.seed_moderator("admin", "moderator77", "admin", true).await;

    let (body, status) = app
        .login_json(&json!({ "username": "admin", "password": "moderator77" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["moderator"]["moderator_id"], id.to_string());
    assert_eq!(body["moderator"]["username"], "admin");
    assert_eq!(body["moderator"]["role"], "admin");
    assert_eq!(body["moderator"]["is_active"], true);
    assert!(body["moderator"].get("password_hash").is_none());
    assert!(!body.to_string().contains("$2"));

    common::cleanup(app).await;
}

#[tokio::test]
async fn login_refuses_disabled_account() {
    let app = common::spawn_app().await;
    app.seed_moderator("retired", "moderator77", "moderator", false).await;

    let (body, status) = app
        .login_json(&json!({ "username": "retired", "password": "moderator77" }))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body, json!({ "error": "Account is disabled" }));

    common::cleanup(app).await;
}

#[tokio::test]
async fn login_records_last_login() {
    let app = common::spawn_app().await;
    let id = app.seed_moderator("admin", "moderator77", "admin", true).await;

    app.sign_in("admin", "moderator77").await;

    let mut recorded = None;
    for _ in 0..50 {
        recorded = sqlx::query_scalar::<_, Option<chrono::DateTime<chrono::Utc>>>(
            "SELECT last_login FROM moderators WHERE moderator_id = $1",
        )
        .bind(id)
        .fetch_one(&app.pool)
        .await
        .unwrap();
        if recorded.is_some() {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }
    assert!(recorded.is_some());

    common::cleanup(app).await;
}

// ── Session & pages ─────────────────────────────────────────────

#[tokio::test]
async fn dashboard_redirects_without_session() {
    let app = common::spawn_app().await;

    for path in ["/dashboard/users", "/dashboard/items", "/dashboard/analytics"] {
        let (status, location, _) = app.get_page(path, None).await;
        assert_eq!(status, StatusCode::SEE_OTHER, "{path}");
        assert_eq!(location.as_deref(), Some("/auth/login"));
    }

    let (status, location, _) = app.get_page("/", None).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/auth/login"));

    common::cleanup(app).await;
}

#[tokio::test]
async fn form_login_opens_dashboard_pages() {
    let app = common::spawn_app().await;
    app.seed_moderator("mod", "moderator77", "moderator", true).await;
    app.seed_user("ada@example.com", Some("Ada"), Some("Lovelace")).await;

    let session = app.sign_in("mod", "moderator77").await;
    assert!(!session.is_empty());

    let (status, location, _) = app.get_page("/", Some(&session)).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/dashboard"));

    let (status, _, body) = app.get_page("/dashboard/users", Some(&session)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Ada Lovelace"));
    assert!(body.contains("mod"));

    common::cleanup(app).await;
}

#[tokio::test]
async fn form_login_failure_rerenders_with_message() {
    let app = common::spawn_app().await;
    app.seed_moderator("mod", "moderator77", "moderator", true).await;

    let resp = app
        .client
        .post(app.url("/auth/login"))
        .form(&[("username", "mod"), ("password", "wrong")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(common::session_cookie(&resp).is_none());
    let body = resp.text().await.unwrap();
    assert!(body.contains("Invalid username or password"));
    assert!(body.contains("value=\"mod\""));

    common::cleanup(app).await;
}

#[tokio::test]
async fn form_and_api_login_match_username_exactly() {
    let app = common::spawn_app().await;
    app.seed_moderator("mod", "moderator77", "moderator", true).await;

    let resp = app
        .client
        .post(app.url("/auth/login"))
        .form(&[("username", " mod"), ("password", "moderator77")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(common::session_cookie(&resp).is_none());

    let (body, status) = app
        .login_json(&json!({ "username": " mod", "password": "moderator77" }))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "Invalid username or password" }));

    common::cleanup(app).await;
}

#[tokio::test]
async fn logout_clears_session() {
    let app = common::spawn_app().await;
    app.seed_moderator("mod", "moderator77", "moderator", true).await;
    let session = app.sign_in("mod", "moderator77").await;

    let resp = app
        .client
        .post(app.url("/auth/logout"))
        .header("cookie", format!("{}={session}", common::SESSION_COOKIE))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(common::session_cookie(&resp).as_deref(), Some(""));

    // A reload without the cleared cookie lands on the login page.
    let (status, location, _) = app.get_page("/dashboard/users", None).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/auth/login"));

    common::cleanup(app).await;
}

#[tokio::test]
async fn deactivated_moderator_is_signed_out_on_next_load() {
    let app = common::spawn_app().await;
    let id = app.seed_moderator("mod", "moderator77", "moderator", true).await;
    let session = app.sign_in("mod", "moderator77").await;

    let (status, _, _) = app.get_page("/dashboard/users", Some(&session)).await;
    assert_eq!(status, StatusCode::OK);

    app.set_active(id, false).await;

    let (status, location, _) = app.get_page("/dashboard/users", Some(&session)).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/auth/login"));

    common::cleanup(app).await;
}

#[tokio::test]
async fn tampered_session_cookie_is_rejected() {
    let app = common::spawn_app().await;
    app.seed_moderator("mod", "moderator77", "moderator", true).await;
    let session = app.sign_in("mod", "moderator77").await;

    let mut tampered = session.clone();
    tampered.push('x');

    for value in [tampered.as_str(), "not-a-session"] {
        let (status, location, _) = app.get_page("/dashboard/users", Some(value)).await;
        assert_eq!(status, StatusCode::SEE_OTHER);
        assert_eq!(location.as_deref(), Some("/auth/login"));
    }

    common::cleanup(app).await;
}

#[tokio::test]
async fn requests_page_tolerates_missing_item() {
    let app = common::spawn_app().await;
    app.seed_moderator("mod", "moderator77", "moderator", true).await;
    let borrower = app.seed_user("bo@example.com", Some("Bo"), None).await;
    app.seed_request(None, Some(borrower), None, "PENDING").await;

    let session = app.sign_in("mod", "moderator77").await;
    let (status, _, body) = app.get_page("/dashboard/requests", Some(&session)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Unknown Item"));
    assert!(body.contains("Bo"));
    assert!(body.contains("Unknown"));

    common::cleanup(app).await;
}

#[tokio::test]
async fn items_tab_filters_by_status() {
    let app = common::spawn_app().await;
    app.seed_moderator("mod", "moderator77", "moderator", true).await;
    let owner = app.seed_user("owner@example.com", Some("Olive"), Some("Owner")).await;
    app.seed_item(owner, "Camping Tent", "APPROVED").await;
    app.seed_item(owner, "Cordless Drill", "PENDING").await;

    let session = app.sign_in("mod", "moderator77").await;

    let (_, _, all) = app.get_page("/dashboard/items", Some(&session)).await;
    assert!(all.contains("Camping Tent"));
    assert!(all.contains("Cordless Drill"));

    let (status, _, approved) = app
        .get_page("/dashboard/items?tab=approved", Some(&session))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(approved.contains("Camping Tent"));
    assert!(!approved.contains("Cordless Drill"));

    let (_, _, searched) = app
        .get_page("/dashboard/items?q=drill", Some(&session))
        .await;
    assert!(searched.contains("Cordless Drill"));
    assert!(!searched.contains("Camping Tent"));

    common::cleanup(app).await;
}

#[tokio::test]
async fn moderators_page_is_admin_only() {
    let app = common::spawn_app().await;
    app.seed_moderator("admin", "moderator77", "admin", true).await;
    app.seed_moderator("mod", "moderator77", "moderator", true).await;

    let mod_session = app.sign_in("mod", "moderator77").await;
    let (status, _, body) = app.get_page("/dashboard/moderators", Some(&mod_session)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(body.contains("Admin access required"));

    let (_, _, users_page) = app.get_page("/dashboard/users", Some(&mod_session)).await;
    assert!(!users_page.contains("/dashboard/moderators"));

    let admin_session = app.sign_in("admin", "moderator77").await;
    let (status, _, body) = app
        .get_page("/dashboard/moderators", Some(&admin_session))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("mod"));
    assert!(!body.contains("$2"));

    common::cleanup(app).await;
}
