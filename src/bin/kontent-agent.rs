use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use kontent_agent::cache::token_cache::TokenCache;
use kontent_agent::helpers::time::system_clock;
use kontent_agent::locations::LocationDataset;
use kontent_agent::observability::metrics::get_metrics;
use kontent_agent::observability::service_resources_metrics::collect_process_metrics;
use kontent_agent::server;
use kontent_agent::server::blog_routes::BlogState;
use kontent_agent::server::location_routes::LocationState;
use kontent_agent::server::server::AppState;
use kontent_agent::sources::BlogClient;
use kontent_agent::utils::config_loader;
use kontent_agent::utils::logging;
use kontent_agent::utils::logging::LogLevel;
use reqwest::Client;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG", default_value = "kontent-agent.yaml")]
    config: String,
    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Load YAML config, start logging
    // -------------------------------

    let args = Args::parse();
    let service_config = config_loader::run(&args.config).await?;
    logging::run(&service_config, args.log_level).await?;
    let settings = &service_config.settings;

    // -------------------------------
    // 2. Load location dataset
    // -------------------------------

    let dataset = LocationDataset::load(Path::new(&service_config.locations.path)).await?;

    // -------------------------------
    // 3. Create request client and CMS client
    // -------------------------------

    let client = Client::builder()
        .timeout(Duration::from_millis(settings.request_timeout_ms()))
        .build()
        .context("cannot build http client")?;
    let clock = system_clock();
    let token_cache = TokenCache::new(clock.clone());
    let blog_client = BlogClient::from_config(
        &service_config.cms,
        client,
        token_cache,
        settings.safety_margin_seconds(),
    );

    // -------------------------------
    // 4. Start http server and resource metrics
    // -------------------------------

    let metrics = get_metrics().await;
    let state = AppState::new(
        metrics,
        BlogState::new(
            blog_client,
            service_config.cms.blog_id(),
            service_config.cms.location_id(),
        ),
        LocationState::new(Arc::new(dataset), clock),
    );

    let http_server = server::server::start(settings, state);
    let service_metrics = collect_process_metrics(settings.metrics.is_enabled);
    info!("Service starting...");
    tokio::try_join!(http_server, service_metrics)?;

    Ok(())
}
