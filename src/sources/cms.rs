use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::blog::models::{
    AuthorsEnvelope, BlogAuthor, BlogCategory, BlogPost, CategoriesEnvelope, PostsEnvelope,
    SlugExistsEnvelope,
};
use crate::cache::token_cache::TokenCache;
use crate::config::types::CmsConfig;
use crate::observability::metrics::get_metrics;
use crate::sources::error::CmsError;
use crate::sources::fetch::FetchOutcome;
use crate::sources::oauth2::{Credentials, OAuth2Client};
use crate::utils::constants::CMS_API_VERSION_HEADER;

const POSTS_ENDPOINT: &str = "posts";
const CATEGORIES_ENDPOINT: &str = "categories";
const AUTHORS_ENDPOINT: &str = "authors";
const SLUG_EXISTS_ENDPOINT: &str = "slug_exists";

/// Read-only client for the CMS blog API.
///
/// Every read makes a single attempt and never returns an error: failures are
/// logged, counted and reported as [`FetchOutcome::Failed`].
#[derive(Debug, Clone)]
pub struct BlogClient {
    base_url: String,
    api_version: String,
    client: Client,
    auth: Option<OAuth2Client>,
}

impl BlogClient {
    pub fn new(base_url: &str, api_version: &str, client: Client, auth: Option<OAuth2Client>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            api_version: api_version.to_owned(),
            client,
            auth,
        }
    }

    /// Missing credentials leave the client unauthenticated; every read then
    /// reports `NotConfigured` without touching the network.
    pub fn from_config(cms: &CmsConfig, client: Client, cache: TokenCache, safety_margin_seconds: u64) -> Self {
        let auth = match Credentials::from_config(cms) {
            Ok(credentials) => Some(OAuth2Client::new(
                &cms.base_url,
                credentials,
                client.clone(),
                cache,
                safety_margin_seconds,
            )),
            Err(e) => {
                warn!(error = %e, "blog content disabled, fallback content will be served");
                None
            }
        };
        Self::new(&cms.base_url, &cms.api_version, client, auth)
    }

    pub fn is_configured(&self) -> bool {
        self.auth.is_some()
    }

    /// Published posts of a blog.
    pub async fn fetch_published_items(&self, blog_id: &str) -> FetchOutcome<Vec<BlogPost>> {
        if blog_id.trim().is_empty() {
            return FetchOutcome::NotConfigured;
        }
        self.get_json::<PostsEnvelope>(
            POSTS_ENDPOINT,
            "/blogs/posts/all",
            &[("blogId", blog_id), ("status", "published")],
        )
        .await
        .map(|envelope| envelope.posts.unwrap_or_default())
    }

    /// First published post with the given slug.
    pub async fn fetch_item_by_slug(&self, blog_id: &str, slug: &str) -> FetchOutcome<Option<BlogPost>> {
        self.fetch_published_items(blog_id)
            .await
            .map(|posts| posts.into_iter().find(|post| post.slug == slug))
    }

    pub async fn fetch_categories(&self, location_id: &str) -> FetchOutcome<Vec<BlogCategory>> {
        if location_id.trim().is_empty() {
            return FetchOutcome::NotConfigured;
        }
        self.get_json::<CategoriesEnvelope>(
            CATEGORIES_ENDPOINT,
            "/blogs/categories",
            &[("locationId", location_id)],
        )
        .await
        .map(|envelope| envelope.categories.unwrap_or_default())
    }

    pub async fn fetch_authors(&self, location_id: &str) -> FetchOutcome<Vec<BlogAuthor>> {
        if location_id.trim().is_empty() {
            return FetchOutcome::NotConfigured;
        }
        self.get_json::<AuthorsEnvelope>(
            AUTHORS_ENDPOINT,
            "/blogs/authors",
            &[("locationId", location_id)],
        )
        .await
        .map(|envelope| envelope.authors.unwrap_or_default())
    }

    /// Whether a slug is already taken. Callers treat anything but
    /// `Fetched(true)` as "free".
    pub async fn slug_exists(&self, location_id: &str, slug: &str) -> FetchOutcome<bool> {
        if location_id.trim().is_empty() {
            return FetchOutcome::NotConfigured;
        }
        self.get_json::<SlugExistsEnvelope>(
            SLUG_EXISTS_ENDPOINT,
            "/blogs/url-slug-exists",
            &[("locationId", location_id), ("slug", slug)],
        )
        .await
        .map(|envelope| envelope.exists.unwrap_or(false))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        path: &str,
        query: &[(&str, &str)],
    ) -> FetchOutcome<T> {
        let Some(auth) = &self.auth else {
            debug!(endpoint, "CMS not configured, skipping request");
            return FetchOutcome::NotConfigured;
        };

        let metrics = get_metrics().await;
        let start = Instant::now();
        metrics.cms_fetch_requests.with_label_values(&[endpoint]).inc();

        let result = self.try_get_json(auth, path, query).await;
        metrics
            .cms_fetch_duration
            .with_label_values(&[endpoint])
            .observe(start.elapsed().as_secs_f64());

        match result {
            Ok(value) => FetchOutcome::Fetched(value),
            Err(e) => {
                warn!(endpoint, error = %e, "CMS read failed");
                metrics
                    .cms_fetch_failures
                    .with_label_values(&[endpoint, e.kind()])
                    .inc();
                FetchOutcome::Failed(e.to_string())
            }
        }
    }

    async fn try_get_json<T: DeserializeOwned>(
        &self,
        auth: &OAuth2Client,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, CmsError> {
        let token = auth.get_access_token().await?;
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .bearer_auth(token)
            .header(CMS_API_VERSION_HEADER, &self.api_version)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CmsError::Status { status });
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
