use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tracing::info;

use crate::blog::fallback::{post_or_fallback, posts_or_fallback, PostSource};
use crate::observability::metrics::get_metrics;
use crate::server::server::AppState;
use crate::sources::cms::BlogClient;

/// Blog endpoints backed by the CMS with static fallbacks.
#[derive(Debug, Clone)]
pub struct BlogState {
    client: BlogClient,
    blog_id: String,
    location_id: String,
}

impl BlogState {
    /// Missing ids are kept as empty strings; the client reports them as not configured.
    pub fn new(client: BlogClient, blog_id: Option<String>, location_id: Option<String>) -> Self {
        Self {
            client,
            blog_id: blog_id.unwrap_or_default(),
            location_id: location_id.unwrap_or_default(),
        }
    }

    pub fn router(&self) -> Router<AppState> {
        info!(cms_configured = self.client.is_configured(), "serving blog routes");
        Router::new()
            .route("/blog/posts", get(list_posts))
            .route("/blog/posts/{slug}", get(get_post))
            .route("/blog/categories", get(list_categories))
            .route("/blog/authors", get(list_authors))
            .route("/blog/slug-exists/{slug}", get(slug_exists))
    }
}

async fn list_posts(State(state): State<AppState>) -> Response {
    let blog = &state.blog_state;
    let outcome = blog.client.fetch_published_items(&blog.blog_id).await;
    let reason = outcome.reason();
    let (source, posts) = posts_or_fallback(outcome);

    if source == PostSource::Fallback {
        get_metrics().await.fallback_served.with_label_values(&["posts"]).inc();
    }

    Json(json!({
        "source": source.as_str(),
        "outcome": reason,
        "posts": posts,
    }))
    .into_response()
}

async fn get_post(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let blog = &state.blog_state;
    let outcome = blog.client.fetch_item_by_slug(&blog.blog_id, &slug).await;

    match post_or_fallback(&slug, outcome) {
        Some((source, post)) => {
            if source == PostSource::Fallback {
                get_metrics().await.fallback_served.with_label_values(&["post"]).inc();
            }
            Json(json!({
                "source": source.as_str(),
                "seo_title": post.seo_title(),
                "seo_description": post.seo_description(),
                "post": post,
            }))
            .into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("post '{}' not found", slug) })),
        )
            .into_response(),
    }
}

async fn list_categories(State(state): State<AppState>) -> Response {
    let blog = &state.blog_state;
    let outcome = blog.client.fetch_categories(&blog.location_id).await;
    let reason = outcome.reason();
    Json(json!({
        "outcome": reason,
        "categories": outcome.into_inner_or_default(),
    }))
    .into_response()
}

async fn list_authors(State(state): State<AppState>) -> Response {
    let blog = &state.blog_state;
    let outcome = blog.client.fetch_authors(&blog.location_id).await;
    let reason = outcome.reason();
    Json(json!({
        "outcome": reason,
        "authors": outcome.into_inner_or_default(),
    }))
    .into_response()
}

async fn slug_exists(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let blog = &state.blog_state;
    let outcome = blog.client.slug_exists(&blog.location_id, &slug).await;
    let reason = outcome.reason();
    Json(json!({
        "slug": slug,
        "outcome": reason,
        "exists": outcome.into_inner_or_default(),
    }))
    .into_response()
}
