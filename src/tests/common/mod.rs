use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use reqwest::Client;
use tokio::task::JoinHandle;

use crate::cache::token_cache::TokenCache;
use crate::content::DateContext;
use crate::helpers::time::ManualClock;
use crate::locations::{City, CompetitorDensity, SocialMediaStats, State};
use crate::sources::{BlogClient, Credentials, OAuth2Client};

/// Spawn an Axum router on an ephemeral port and return (JoinHandle, SocketAddr)
pub async fn spawn_axum(router: Router) -> (JoinHandle<()>, SocketAddr) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.expect("server failed");
    });
    (handle, addr)
}

pub fn build_reqwest_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(5))
        .build()
        .expect("reqwest client")
}

pub fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
}

/// Date context at noon UTC of the given day.
pub fn date_in(y: i32, m: u32, d: u32) -> DateContext {
    DateContext::from_datetime(noon(y, m, d))
}

pub fn city(slug: &str, state_slug: &str) -> City {
    City {
        name: "Springfield".to_string(),
        slug: slug.to_string(),
        state_slug: state_slug.to_string(),
        top_industries: vec!["Technology".to_string()],
        business_count: 50_000,
        growth_rate: 0.03,
        competitor_density: CompetitorDensity::Medium,
        social_media_stats: SocialMediaStats {
            linkedin_penetration: 0.5,
            instagram_penetration: 0.6,
            facebook_penetration: 0.7,
        },
    }
}

pub fn state(slug: &str, marketing_spend_index: f64) -> State {
    State {
        name: "Somestate".to_string(),
        slug: slug.to_string(),
        abbreviation: "SS".to_string(),
        marketing_spend_index,
        business_count: 1_000_000,
    }
}

pub fn credentials() -> Credentials {
    Credentials::new("rt-1", "client", "secret").expect("valid credentials")
}

/// OAuth2 client against `base_url` driven by a manual clock.
pub fn oauth_client(base_url: &str, clock: &ManualClock) -> OAuth2Client {
    OAuth2Client::new(
        base_url,
        credentials(),
        build_reqwest_client(),
        TokenCache::new(Arc::new(clock.clone())),
        60,
    )
}

pub fn blog_client(base_url: &str, clock: &ManualClock) -> BlogClient {
    BlogClient::new(
        base_url,
        "2021-07-28",
        build_reqwest_client(),
        Some(oauth_client(base_url, clock)),
    )
}
