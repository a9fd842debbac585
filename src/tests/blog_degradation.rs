// Blog reads never fail: every problem turns into an empty, tagged outcome
// and the listing falls back to the static posts.

use httpmock::Method::{GET, POST};
use httpmock::{Mock, MockServer};
use serde_json::json;
use serial_test::serial;

use crate::blog::fallback::{posts_or_fallback, PostSource};
use crate::cache::token_cache::TokenCache;
use crate::config::types::{CmsConfig, SecretValue};
use crate::helpers::time::{system_clock, ManualClock};
use crate::sources::{BlogClient, FetchOutcome};
use crate::tests::common::{blog_client, build_reqwest_client, noon};

async fn token_mock(server: &MockServer) -> Mock<'_> {
    server
        .mock_async(|when, then| {
            when.method(POST).path("/oauth/token");
            then.status(200)
                .json_body(json!({ "access_token": "tok-1", "expires_in": 86400 }));
        })
        .await
}

fn post(id: &str, slug: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": format!("Post {id}"),
        "slug": slug,
        "content": "<p>body</p>",
        "excerpt": "short",
        "publishedAt": "2025-02-01T09:00:00Z",
        "status": "published",
        "author": { "id": "a1", "name": "Jane" },
        "categories": [{ "id": "c1", "name": "AI Marketing" }]
    })
}

fn cms_config(base_url: &str, refresh_token: Option<SecretValue>) -> CmsConfig {
    CmsConfig {
        base_url: base_url.to_owned(),
        api_version: "2021-07-28".to_owned(),
        refresh_token,
        client_id: Some(SecretValue::Literal { value: "client".into() }),
        client_secret: Some(SecretValue::Literal { value: "secret".into() }),
        blog_id: Some(SecretValue::Literal { value: "blog-1".into() }),
        location_id: None,
    }
}

#[tokio::test]
async fn missing_refresh_token_serves_fallback_without_network() {
    let server = MockServer::start_async().await;
    let token = token_mock(&server).await;

    let client = BlogClient::from_config(
        &cms_config(&server.base_url(), None),
        build_reqwest_client(),
        TokenCache::new(system_clock()),
        60,
    );
    assert!(!client.is_configured());

    let outcome = client.fetch_published_items("blog-1").await;
    assert_eq!(outcome, FetchOutcome::NotConfigured);

    let (source, posts) = posts_or_fallback(outcome);
    assert_eq!(source, PostSource::Fallback);
    assert_eq!(posts.len(), 3);
    assert_eq!(token.hits_async().await, 0);
}

#[tokio::test]
async fn empty_blog_id_is_not_configured() {
    let server = MockServer::start_async().await;
    let token = token_mock(&server).await;
    let client = blog_client(&server.base_url(), &ManualClock::new(noon(2025, 2, 2)));

    assert_eq!(client.fetch_published_items("  ").await, FetchOutcome::NotConfigured);
    assert_eq!(client.fetch_categories("").await, FetchOutcome::NotConfigured);
    assert_eq!(token.hits_async().await, 0);
}

#[tokio::test]
async fn published_posts_are_fetched_with_bearer_and_version() {
    let server = MockServer::start_async().await;
    let token = token_mock(&server).await;
    let posts = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/blogs/posts/all")
                .query_param("blogId", "blog-1")
                .query_param("status", "published")
                .header("authorization", "Bearer tok-1")
                .header("version", "2021-07-28");
            then.status(200)
                .json_body(json!({ "posts": [post("p1", "first"), post("p2", "second")] }));
        })
        .await;
    let client = blog_client(&server.base_url(), &ManualClock::new(noon(2025, 2, 2)));

    let outcome = client.fetch_published_items("blog-1").await;
    let fetched = outcome.clone().fetched().unwrap();
    assert_eq!(fetched.len(), 2);
    assert_eq!(fetched[1].author.as_ref().unwrap().name, "Jane");

    let (source, served) = posts_or_fallback(outcome);
    assert_eq!(source, PostSource::Cms);
    assert_eq!(served.len(), 2);

    let second = client.fetch_item_by_slug("blog-1", "second").await;
    assert_eq!(second.fetched().flatten().map(|p| p.id), Some("p2".to_string()));

    let missing = client.fetch_item_by_slug("blog-1", "nope").await;
    assert_eq!(missing, FetchOutcome::Fetched(None));

    // one exchange serves all three reads
    assert_eq!(token.hits_async().await, 1);
    assert_eq!(posts.hits_async().await, 3);
}

#[tokio::test]
async fn missing_posts_key_is_an_empty_list() {
    let server = MockServer::start_async().await;
    token_mock(&server).await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/blogs/posts/all");
            then.status(200).json_body(json!({ "total": 0 }));
        })
        .await;
    let client = blog_client(&server.base_url(), &ManualClock::new(noon(2025, 2, 2)));

    let outcome = client.fetch_published_items("blog-1").await;
    assert_eq!(outcome, FetchOutcome::Fetched(vec![]));
    assert_eq!(posts_or_fallback(outcome).0, PostSource::Fallback);
}

#[tokio::test]
async fn server_error_is_failed_and_falls_back() {
    let server = MockServer::start_async().await;
    token_mock(&server).await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/blogs/posts/all");
            then.status(503).body("maintenance");
        })
        .await;
    let client = blog_client(&server.base_url(), &ManualClock::new(noon(2025, 2, 2)));

    let outcome = client.fetch_published_items("blog-1").await;
    match &outcome {
        FetchOutcome::Failed(reason) => assert!(reason.contains("503")),
        other => panic!("expected Failed, got {other:?}"),
    }
    let (source, posts) = posts_or_fallback(outcome);
    assert_eq!(source, PostSource::Fallback);
    assert_eq!(posts.len(), 3);

    assert!(matches!(
        client.fetch_item_by_slug("blog-1", "first").await,
        FetchOutcome::Failed(_)
    ));
}

#[tokio::test]
async fn rejected_token_exchange_skips_content_request() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/oauth/token");
            then.status(400).body("invalid_grant");
        })
        .await;
    let posts = server
        .mock_async(|when, then| {
            when.method(GET).path("/blogs/posts/all");
            then.status(200).json_body(json!({ "posts": [] }));
        })
        .await;
    let client = blog_client(&server.base_url(), &ManualClock::new(noon(2025, 2, 2)));

    match client.fetch_published_items("blog-1").await {
        FetchOutcome::Failed(reason) => assert!(reason.contains("access token")),
        other => panic!("expected Failed, got {other:?}"),
    }
    assert_eq!(posts.hits_async().await, 0);
}

#[tokio::test]
async fn undecodable_body_is_failed() {
    let server = MockServer::start_async().await;
    token_mock(&server).await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/blogs/posts/all");
            then.status(200).body("<html>oops</html>");
        })
        .await;
    let client = blog_client(&server.base_url(), &ManualClock::new(noon(2025, 2, 2)));

    assert!(matches!(
        client.fetch_published_items("blog-1").await,
        FetchOutcome::Failed(_)
    ));
}

#[tokio::test]
async fn categories_authors_and_slug_checks() {
    let server = MockServer::start_async().await;
    token_mock(&server).await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/blogs/categories").query_param("locationId", "loc-1");
            then.status(200).json_body(json!({
                "categories": [{ "id": "c1", "name": "AI Marketing", "slug": "ai-marketing" }]
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/blogs/authors").query_param("locationId", "loc-1");
            then.status(200).json_body(json!({
                "authors": [{ "id": "a1", "name": "Jane", "bio": "Writer" }]
            }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/blogs/url-slug-exists")
                .query_param("locationId", "loc-1")
                .query_param("slug", "taken");
            then.status(200).json_body(json!({ "exists": true }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/blogs/url-slug-exists")
                .query_param("slug", "broken");
            then.status(500);
        })
        .await;
    let client = blog_client(&server.base_url(), &ManualClock::new(noon(2025, 2, 2)));

    let categories = client.fetch_categories("loc-1").await.into_inner_or_default();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].slug, "ai-marketing");

    let authors = client.fetch_authors("loc-1").await.into_inner_or_default();
    assert_eq!(authors[0].bio.as_deref(), Some("Writer"));
    assert!(authors[0].avatar.is_none());

    assert_eq!(client.slug_exists("loc-1", "taken").await, FetchOutcome::Fetched(true));

    let broken = client.slug_exists("loc-1", "broken").await;
    assert!(matches!(broken, FetchOutcome::Failed(_)));
    assert!(!broken.into_inner_or_default());
}

#[tokio::test]
#[serial]
async fn credentials_can_come_from_environment() {
    let server = MockServer::start_async().await;
    let token = token_mock(&server).await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/blogs/posts/all");
            then.status(200).json_body(json!({ "posts": [post("p1", "first")] }));
        })
        .await;

    let refresh = SecretValue::FromEnv { from_env: "KONTENT_TEST_REFRESH_TOKEN".into() };
    let config = cms_config(&server.base_url(), Some(refresh));

    std::env::remove_var("KONTENT_TEST_REFRESH_TOKEN");
    let unset = BlogClient::from_config(&config, build_reqwest_client(), TokenCache::new(system_clock()), 60);
    assert!(!unset.is_configured());

    std::env::set_var("KONTENT_TEST_REFRESH_TOKEN", "rt-env");
    let set = BlogClient::from_config(&config, build_reqwest_client(), TokenCache::new(system_clock()), 60);
    std::env::remove_var("KONTENT_TEST_REFRESH_TOKEN");

    assert!(set.is_configured());
    assert_eq!(set.fetch_published_items("blog-1").await.into_inner_or_default().len(), 1);
    assert_eq!(token.hits_async().await, 1);
}
