//! HTTP-level integration tests for post CRUD, the author snapshot, and
//! the owner-or-admin authorization policy.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

use common::{body_json, delete_auth, get, post_json_auth, put_json_auth, register_and_login};

fn post_body(title: &str) -> serde_json::Value {
    serde_json::json!({ "title": title, "intro": "intro", "body": "text" })
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_stamps_author_and_no_editor(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_id, token) = register_and_login(&app, "alice", "hunter2hunter2").await;

    let response = post_json_auth(&app, "/api/v1/posts", post_body("Hi"), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;

    assert_eq!(json["title"], "Hi");
    assert_eq!(json["author"], "alice");
    assert!(json["update_author"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn anonymous_create_is_unauthenticated(pool: PgPool) {
    let app = common::build_test_app(pool);

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/v1/posts")
        .header("content-type", "application/json")
        .body(axum::body::Body::from(post_body("Hi").to_string()))
        .unwrap();
    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_is_public_and_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_id, token) = register_and_login(&app, "alice", "hunter2hunter2").await;

    for title in ["first", "second", "third"] {
        let response = post_json_auth(&app, "/api/v1/posts", post_body(title), &token).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // No auth header: listing is public.
    let response = get(&app, "/api/v1/posts").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let posts = json.as_array().expect("array of posts");
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0]["title"], "third");
    assert_eq!(posts[2]["title"], "first");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_missing_post_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(&app, "/api/v1/posts/9999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn author_edit_sets_update_author_and_keeps_author(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_id, token) = register_and_login(&app, "alice", "hunter2hunter2").await;

    let response = post_json_auth(&app, "/api/v1/posts", post_body("Hi"), &token).await;
    let created = body_json(response).await;
    let post_id = created["id"].as_i64().unwrap();

    let update = serde_json::json!({ "title": "Hi!", "intro": "new intro", "body": "new text" });
    let response = put_json_auth(&app, &format!("/api/v1/posts/{post_id}"), update, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["title"], "Hi!");
    assert_eq!(json["author"], "alice", "author snapshot must survive edits");
    assert_eq!(json["update_author"], "alice");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_author_edit_is_forbidden(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_alice, alice_token) = register_and_login(&app, "alice", "hunter2hunter2").await;
    let (_bob, bob_token) = register_and_login(&app, "bob", "hunter2hunter2").await;

    let response = post_json_auth(&app, "/api/v1/posts", post_body("Hi"), &alice_token).await;
    let created = body_json(response).await;
    let post_id = created["id"].as_i64().unwrap();

    // Being logged in is not enough: edits require owner-or-admin.
    let update = serde_json::json!({ "title": "hacked", "intro": "x", "body": "y" });
    let response =
        put_json_auth(&app, &format!("/api/v1/posts/{post_id}"), update, &bob_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // The post is untouched.
    let response = get(&app, &format!("/api/v1/posts/{post_id}")).await;
    let json = body_json(response).await;
    assert_eq!(json["title"], "Hi");
    assert!(json["update_author"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn admin_may_edit_any_post(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (_alice, alice_token) = register_and_login(&app, "alice", "hunter2hunter2").await;
    let (root_id, root_token) = register_and_login(&app, "root", "hunter2hunter2").await;
    common::make_admin(&pool, root_id).await;

    let response = post_json_auth(&app, "/api/v1/posts", post_body("Hi"), &alice_token).await;
    let created = body_json(response).await;
    let post_id = created["id"].as_i64().unwrap();

    let update = serde_json::json!({ "title": "moderated", "intro": "x", "body": "y" });
    let response =
        put_json_auth(&app, &format!("/api/v1/posts/{post_id}"), update, &root_token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["author"], "alice");
    assert_eq!(json["update_author"], "root");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_respects_policy_and_404s_on_missing(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_alice, alice_token) = register_and_login(&app, "alice", "hunter2hunter2").await;
    let (_bob, bob_token) = register_and_login(&app, "bob", "hunter2hunter2").await;

    let response = post_json_auth(&app, "/api/v1/posts", post_body("Hi"), &alice_token).await;
    let created = body_json(response).await;
    let post_id = created["id"].as_i64().unwrap();

    let response = delete_auth(&app, &format!("/api/v1/posts/{post_id}"), &bob_token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete_auth(&app, &format!("/api/v1/posts/{post_id}"), &alice_token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Gone now.
    let response = delete_auth(&app, &format!("/api/v1/posts/{post_id}"), &alice_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_missing_post_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_id, token) = register_and_login(&app, "alice", "hunter2hunter2").await;

    let update = serde_json::json!({ "title": "t", "intro": "i", "body": "b" });
    let response = put_json_auth(&app, "/api/v1/posts/9999", update, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
