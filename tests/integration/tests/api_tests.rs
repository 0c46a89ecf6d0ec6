//! API Integration Tests
//!
//! Each test starts its own server on an ephemeral port with in-memory
//! storage, so no external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_envelope, assert_json, EnvelopeBody, HealthBody, PostBody, PostRequest, SummaryBody,
    TestServer,
};
use reqwest::StatusCode;
use serde_json::Value;

const ALICE: i64 = 1;
const BOB: i64 = 2;
const CAROL: i64 = 3;

async fn publish(server: &TestServer, user: i64, title: &str) -> PostBody {
    let response = server
        .post_auth("/posts", &server.token(user), &PostRequest::new(title, "body"))
        .await
        .unwrap();
    assert_envelope::<PostBody>(response, StatusCode::CREATED)
        .await
        .unwrap()
        .item()
}

async fn summary(server: &TestServer, post_id: i64) -> (u64, u64, u64) {
    let response = server
        .get(&format!("/posts/{post_id}/reactions"))
        .await
        .unwrap();
    assert_envelope::<SummaryBody>(response, StatusCode::OK)
        .await
        .unwrap()
        .item()
        .counts()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let health: HealthBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(health.status, "healthy");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/posts", &PostRequest::title_only("Anonymous"))
        .await
        .unwrap();
    let body: EnvelopeBody<Value> = assert_envelope(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();

    assert_eq!(body.status, "error");
    assert_eq!(body.message.as_deref(), Some("Missing authorization header"));
    assert!(body.data.is_none());
}

#[tokio::test]
async fn test_invalid_token_is_unauthorized() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_auth("/posts", "not-a-token", &PostRequest::title_only("Forged"))
        .await
        .unwrap();
    let body: EnvelopeBody<Value> = assert_envelope(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(body.status, "error");
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_post() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_auth(
            "/posts",
            &server.token(ALICE),
            &PostRequest::new("Hello", "first post"),
        )
        .await
        .unwrap();
    let body: EnvelopeBody<PostBody> = assert_envelope(response, StatusCode::CREATED)
        .await
        .unwrap();
    assert_eq!(body.status, "success");
    assert_eq!(
        body.message.as_deref(),
        Some("User #1 successfully published post #1")
    );
    let created = body.item();
    assert_eq!(created.user_id, ALICE);
    assert_eq!(created.views, 0);

    let response = server.get(&format!("/posts/{}", created.id)).await.unwrap();
    let body: EnvelopeBody<PostBody> = assert_envelope(response, StatusCode::OK).await.unwrap();
    assert!(body.message.is_none());
    let post = body.item();
    assert_eq!(post.title, "Hello");
    assert_eq!(post.text.as_deref(), Some("first post"));
}

#[tokio::test]
async fn test_create_with_empty_title() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_auth("/posts", &server.token(ALICE), &PostRequest::title_only(" "))
        .await
        .unwrap();
    let body: EnvelopeBody<Value> = assert_envelope(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
    assert_eq!(body.message.as_deref(), Some("Title must not be empty"));
    assert!(body.details.is_none());
}

#[tokio::test]
async fn test_malformed_requests() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/posts/abc").await.unwrap();
    let body: EnvelopeBody<Value> = assert_envelope(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
    assert_eq!(body.status, "error");

    let response = server
        .post_auth(
            "/posts",
            &server.token(ALICE),
            &serde_json::json!({"text": "no title"}),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = server
        .post_auth(
            "/posts",
            &server.token(ALICE),
            &PostRequest::title_only(&"t".repeat(301)),
        )
        .await
        .unwrap();
    let body: EnvelopeBody<Value> = assert_envelope(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
    assert_eq!(
        body.message.as_deref(),
        Some("Title must be at most 300 characters")
    );
}

#[tokio::test]
async fn test_missing_post_is_not_found() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/posts/99").await.unwrap();
    let body: EnvelopeBody<Value> = assert_envelope(response, StatusCode::NOT_FOUND)
        .await
        .unwrap();
    assert_eq!(body.message.as_deref(), Some("Post #99 does not exist"));
}

#[tokio::test]
async fn test_edit_post_scenario() {
    let server = TestServer::start().await.unwrap();
    let post = publish(&server, ALICE, "Draft").await;
    let path = format!("/posts/{}", post.id);

    let response = server
        .patch_auth(&path, &server.token(ALICE), &PostRequest::new("Final", "done"))
        .await
        .unwrap();
    let body: EnvelopeBody<PostBody> = assert_envelope(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        body.message.as_deref(),
        Some("Post #1 successfully edited by user #1")
    );
    let edited = body.item();
    assert_eq!(edited.id, post.id);
    assert_eq!(edited.title, "Final");
    assert_eq!(edited.views, post.views);

    let response = server
        .patch_auth(&path, &server.token(CAROL), &PostRequest::title_only(""))
        .await
        .unwrap();
    let body: EnvelopeBody<Value> = assert_envelope(response, StatusCode::FORBIDDEN)
        .await
        .unwrap();
    assert_eq!(
        body.message.as_deref(),
        Some("User #3 is not allowed to edit post #1")
    );

    let response = server
        .patch_auth("/posts/500", &server.token(ALICE), &PostRequest::title_only("x"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_view_post() {
    let server = TestServer::start().await.unwrap();
    let post = publish(&server, ALICE, "Popular").await;
    let path = format!("/posts/{}/views", post.id);

    for (viewer, expected) in [(BOB, 1), (CAROL, 2), (ALICE, 3)] {
        let response = server
            .post_empty_auth(&path, &server.token(viewer))
            .await
            .unwrap();
        let body: EnvelopeBody<PostBody> =
            assert_envelope(response, StatusCode::OK).await.unwrap();
        assert_eq!(body.item().views, expected);
    }
}

#[tokio::test]
async fn test_list_user_posts() {
    let server = TestServer::start().await.unwrap();
    let first = publish(&server, ALICE, "one").await;
    publish(&server, BOB, "not alice").await;
    let second = publish(&server, ALICE, "two").await;

    let response = server.get(&format!("/users/{ALICE}/posts")).await.unwrap();
    let body: EnvelopeBody<PostBody> = assert_envelope(response, StatusCode::OK).await.unwrap();
    let ids: Vec<i64> = body.data.unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    let response = server.get("/users/42/posts").await.unwrap();
    let body: EnvelopeBody<PostBody> = assert_envelope(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.data.map(|d| d.len()), Some(0));
}

#[tokio::test]
async fn test_delete_post() {
    let server = TestServer::start().await.unwrap();
    let post = publish(&server, ALICE, "Short-lived").await;
    let path = format!("/posts/{}", post.id);

    server
        .put_auth(&format!("{path}/reactions/like"), &server.token(BOB))
        .await
        .unwrap();

    let response = server.delete_auth(&path, &server.token(BOB)).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = server
        .delete_auth(&path, &server.token(ALICE))
        .await
        .unwrap();
    let body: EnvelopeBody<Value> = assert_envelope(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message.as_deref(), Some("Post #1 successfully deleted"));
    assert!(body.data.is_none());

    let response = server.get(&format!("{path}/reactions")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_reaction_scenario() {
    let server = TestServer::start().await.unwrap();
    let post = publish(&server, ALICE, "React to me").await;
    let base = format!("/posts/{}/reactions", post.id);
    let bob = server.token(BOB);

    assert_eq!(summary(&server, post.id).await, (0, 0, 0));

    let response = server.put_auth(&format!("{base}/like"), &bob).await.unwrap();
    let body: EnvelopeBody<Value> = assert_envelope(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        body.message.as_deref(),
        Some("User #2 successfully liked post #1")
    );
    assert_eq!(summary(&server, post.id).await, (1, 1, 0));

    let response = server.put_auth(&format!("{base}/like"), &bob).await.unwrap();
    let body: EnvelopeBody<Value> = assert_envelope(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.message.as_deref(), Some("User #2 already liked post #1"));
    assert_eq!(summary(&server, post.id).await, (1, 1, 0));

    let response = server
        .put_auth(&format!("{base}/dislike"), &bob)
        .await
        .unwrap();
    let body: EnvelopeBody<Value> = assert_envelope(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        body.message.as_deref(),
        Some("User #2 removed like and disliked post #1")
    );
    assert_eq!(summary(&server, post.id).await, (1, 0, 1));

    let response = server
        .delete_auth(&format!("{base}/@me"), &bob)
        .await
        .unwrap();
    let body: EnvelopeBody<Value> = assert_envelope(response, StatusCode::OK).await.unwrap();
    assert_eq!(
        body.message.as_deref(),
        Some("User #2 removed reaction from post #1")
    );
    assert_eq!(summary(&server, post.id).await, (0, 0, 0));

    let response = server
        .delete_auth(&format!("{base}/@me"), &bob)
        .await
        .unwrap();
    let body: EnvelopeBody<Value> = assert_envelope(response, StatusCode::CONFLICT)
        .await
        .unwrap();
    assert_eq!(
        body.message.as_deref(),
        Some("User #2 has not reacted to post #1 yet")
    );
}

#[tokio::test]
async fn test_reacting_to_missing_post() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .put_auth("/posts/8/reactions/dislike", &server.token(BOB))
        .await
        .unwrap();
    let body: EnvelopeBody<Value> = assert_envelope(response, StatusCode::NOT_FOUND)
        .await
        .unwrap();
    assert_eq!(body.message.as_deref(), Some("Post #8 does not exist"));
}

#[tokio::test]
async fn test_reactions_require_auth() {
    let server = TestServer::start().await.unwrap();
    let post = publish(&server, ALICE, "Guarded").await;

    let response = server
        .client
        .put(format!("{}/posts/{}/reactions/like", server.base_url(), post.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(summary(&server, post.id).await, (0, 0, 0));
}

#[tokio::test]
async fn test_request_id_header() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}
