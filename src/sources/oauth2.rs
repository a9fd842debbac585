use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::cache::token::CachedToken;
use crate::cache::token_cache::TokenCache;
use crate::config::types::CmsConfig;
use crate::observability::metrics::get_metrics;
use crate::sources::error::CmsError;

const TOKEN_PATH: &str = "/oauth/token";

/// Refresh-token grant credentials. All three are required and non-empty.
#[derive(Clone)]
pub struct Credentials {
    refresh_token: String,
    client_id: String,
    client_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

impl Credentials {
    pub fn new(
        refresh_token: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self, CmsError> {
        let credentials = Self {
            refresh_token: refresh_token.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        };
        if credentials.refresh_token.trim().is_empty() {
            return Err(CmsError::NotConfigured("refresh_token"));
        }
        if credentials.client_id.trim().is_empty() {
            return Err(CmsError::NotConfigured("client_id"));
        }
        if credentials.client_secret.trim().is_empty() {
            return Err(CmsError::NotConfigured("client_secret"));
        }
        Ok(credentials)
    }

    pub fn from_config(cms: &CmsConfig) -> Result<Self, CmsError> {
        let refresh_token = cms
            .refresh_token
            .as_ref()
            .and_then(|v| v.resolve())
            .ok_or(CmsError::NotConfigured("refresh_token"))?;
        let client_id = cms
            .client_id
            .as_ref()
            .and_then(|v| v.resolve())
            .ok_or(CmsError::NotConfigured("client_id"))?;
        let client_secret = cms
            .client_secret
            .as_ref()
            .and_then(|v| v.resolve())
            .ok_or(CmsError::NotConfigured("client_secret"))?;
        Self::new(refresh_token, client_id, client_secret)
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

/// OAuth2 client for the CMS token endpoint with a single cached access token.
#[derive(Debug, Clone)]
pub struct OAuth2Client {
    token_url: String,
    credentials: Credentials,
    client: Client,
    cache: TokenCache,
    safety_margin_seconds: u64,
}

impl OAuth2Client {
    pub fn new(
        base_url: &str,
        credentials: Credentials,
        client: Client,
        cache: TokenCache,
        safety_margin_seconds: u64,
    ) -> Self {
        Self {
            token_url: format!("{}{}", base_url.trim_end_matches('/'), TOKEN_PATH),
            credentials,
            client,
            cache,
            safety_margin_seconds,
        }
    }

    pub fn cache(&self) -> &TokenCache {
        &self.cache
    }

    /// Cached token while it is valid, otherwise exactly one exchange.
    pub async fn get_access_token(&self) -> Result<String, CmsError> {
        if let Some(token) = self.cache.get().await {
            debug!(expires_at = %token.expires_at, "using cached CMS access token");
            return Ok(token.value);
        }

        let token = self.exchange_refresh_token().await?;
        let value = token.value.clone();
        self.cache.set(token).await;
        Ok(value)
    }

    async fn exchange_refresh_token(&self) -> Result<CachedToken, CmsError> {
        let metrics = get_metrics().await;
        let form = [
            ("grant_type", "refresh_token"),
            ("refresh_token", self.credentials.refresh_token.as_str()),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
        ];

        let result = self.request_token(&form).await;
        match &result {
            Ok(token) => {
                metrics.token_refreshes.with_label_values(&["success"]).inc();
                metrics.token_expiry_unix.set(token.expires_at.timestamp());
                info!(expires_at = %token.expires_at, "CMS access token refreshed");
            }
            Err(e) => {
                metrics.token_refreshes.with_label_values(&["failure"]).inc();
                warn!(error = %e, "CMS token exchange failed");
            }
        }
        result
    }

    async fn request_token(&self, form: &[(&str, &str)]) -> Result<CachedToken, CmsError> {
        let response = self.client.post(&self.token_url).form(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CmsError::RemoteAuth { status });
        }

        let body = response.text().await?;
        let parsed: TokenResponse = serde_json::from_str(&body)?;
        CachedToken::from_lifetime(
            parsed.access_token,
            self.cache.now(),
            parsed.expires_in,
            self.safety_margin_seconds,
        )
        .ok_or(CmsError::InvalidExpiry {
            expires_in: parsed.expires_in,
        })
    }
}
