//! Route-gating matrix: 401 vs 403 as distinct, observable outcomes.

mod common;

use axum::http::StatusCode;
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use tower::ServiceExt;
use uuid::Uuid;

use common::{get_request, login_for_token, setup_test_app, test_jwt_config};
use opsdesk::modules::auth::model::Claims;
use opsdesk::modules::users::directory::sample;
use opsdesk_models::users::UserRole;

#[tokio::test]
async fn test_projects_allows_every_role() {
    let app = setup_test_app();

    for email in [sample::USER_EMAIL, sample::MANAGER_EMAIL, sample::ADMIN_EMAIL] {
        let token = login_for_token(&app, email, sample::PASSWORD).await;
        let response = app
            .clone()
            .oneshot(get_request("/api/projects", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{email} should pass");
    }
}

#[tokio::test]
async fn test_reports_forbidden_for_user_role() {
    // Scenario: role `user` against an allow-list of {manager, admin}.
    let app = setup_test_app();
    let token = login_for_token(&app, sample::USER_EMAIL, sample::PASSWORD).await;

    let response = app
        .oneshot(get_request("/api/reports", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_reports_allows_manager_and_admin() {
    // Admin passes because it is listed, not because it outranks manager.
    let app = setup_test_app();

    for email in [sample::MANAGER_EMAIL, sample::ADMIN_EMAIL] {
        let token = login_for_token(&app, email, sample::PASSWORD).await;
        let response = app
            .clone()
            .oneshot(get_request("/api/reports", Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{email} should pass");
    }
}

#[tokio::test]
async fn test_users_listing_is_admin_only() {
    let app = setup_test_app();

    for email in [sample::USER_EMAIL, sample::MANAGER_EMAIL] {
        let token = login_for_token(&app, email, sample::PASSWORD).await;
        let response = app
            .clone()
            .oneshot(get_request("/api/users", Some(&token)))
            .await
            .unwrap();
        assert_eq!(
            response.status(),
            StatusCode::FORBIDDEN,
            "{email} should be forbidden"
        );
    }

    let token = login_for_token(&app, sample::ADMIN_EMAIL, sample::PASSWORD).await;
    let response = app
        .oneshot(get_request("/api/users", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_protected_route_without_token_is_unauthorized() {
    let app = setup_test_app();

    for uri in ["/api/projects", "/api/reports", "/api/users"] {
        let response = app.clone().oneshot(get_request(uri, None)).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{uri} without token"
        );
    }
}

#[tokio::test]
async fn test_expired_token_is_unauthorized_not_forbidden() {
    let app = setup_test_app();
    let jwt_config = test_jwt_config();
    let now = Utc::now().timestamp() as usize;

    // Admin role, but the token is dead: authentication fails first.
    let claims = Claims {
        sub: sample::ADMIN_ID.to_string(),
        email: sample::ADMIN_EMAIL.to_string(),
        role: UserRole::Admin,
        exp: now - 60,
        iat: now - 3660,
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .unwrap();

    let response = app
        .oneshot(get_request("/api/users", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_unauthorized() {
    let app = setup_test_app();
    let now = Utc::now().timestamp() as usize;

    let claims = Claims {
        sub: Uuid::new_v4().to_string(),
        email: "forged@opsdesk.test".to_string(),
        role: UserRole::Admin,
        exp: now + 3600,
        iat: now,
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"attacker-controlled-secret"),
    )
    .unwrap();

    let response = app
        .oneshot(get_request("/api/users", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_role_is_frozen_at_issuance() {
    // A token minted for role `user` keeps failing the reports gate even if
    // the directory identity were promoted afterwards; only reissuance (a
    // fresh login) picks up a new role.
    let app = setup_test_app();
    let jwt_config = test_jwt_config();
    let now = Utc::now().timestamp() as usize;

    let stale = Claims {
        sub: sample::USER_ID.to_string(),
        email: sample::USER_EMAIL.to_string(),
        role: UserRole::User,
        exp: now + 3600,
        iat: now,
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &stale,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .unwrap();

    let response = app
        .oneshot(get_request("/api/reports", Some(&token)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_health_is_open() {
    let app = setup_test_app();

    let response = app.oneshot(get_request("/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
