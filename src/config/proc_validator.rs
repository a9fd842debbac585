//! Configuration validation with aggregated errors.
//! - Aggregates all issues into Vec<String>
//! - Checks server, metrics, logging and token margin settings
//! - Checks the CMS endpoint and that credentials come as a complete set
//! - Checks the location dataset path

use tracing::{error, info};

use crate::config::settings::SettingsConfig;
use crate::config::types::{CmsConfig, LocationsConfig, ServiceConfig};
use crate::observability::metrics::get_metrics;

const MAX_SAFETY_MARGIN_SECONDS: u64 = 3600;
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Public entrypoint: returns Ok(()) or Err(Vec<String>) containing all issues.
pub async fn validate_service_config(cfg: &ServiceConfig) -> Result<(), Vec<String>> {
    let mut errors: Vec<String> = Vec::new();

    validate_settings(&cfg.settings, &mut errors);
    validate_cms(&cfg.cms, &mut errors);
    validate_locations(&cfg.locations, &mut errors);

    if errors.is_empty() {
        info!("config is valid");
        return Ok(());
    }

    let metrics = get_metrics().await;
    for e in &errors {
        error!("config: {}", e);
    }
    metrics.config_validation_errors.inc_by(errors.len() as u64);
    Err(errors)
}

fn validate_settings(settings: &SettingsConfig, errors: &mut Vec<String>) {
    if settings.server.host.trim().is_empty() {
        errors.push("settings.server.host must not be empty".to_string());
    }
    if settings.server.port == 0 {
        errors.push("settings.server.port must be greater than 0".to_string());
    }
    if !settings.metrics.path.starts_with('/') {
        errors.push(format!(
            "settings.metrics.path '{}' must start with '/'",
            settings.metrics.path
        ));
    }
    if settings.safety_margin_seconds() >= MAX_SAFETY_MARGIN_SECONDS {
        errors.push(format!(
            "settings.safety_margin_seconds {} must be lower than {}",
            settings.safety_margin_seconds(),
            MAX_SAFETY_MARGIN_SECONDS
        ));
    }
    if settings.request_timeout_ms() == 0 {
        errors.push("settings.request_timeout_ms must be greater than 0".to_string());
    }
    if let Some(logging) = &settings.logging {
        if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
            errors.push(format!(
                "settings.logging.level '{}' is not one of {:?}",
                logging.level, LOG_LEVELS
            ));
        }
    }
}

fn validate_cms(cms: &CmsConfig, errors: &mut Vec<String>) {
    if !(cms.base_url.starts_with("http://") || cms.base_url.starts_with("https://")) {
        errors.push(format!(
            "cms.base_url '{}' must be an http(s) url",
            cms.base_url
        ));
    }
    if cms.api_version.trim().is_empty() {
        errors.push("cms.api_version must not be empty".to_string());
    }

    // credentials may be absent as a whole (content falls back), but a partial
    // set is almost always a typo
    let declared = [
        ("refresh_token", cms.refresh_token.is_some()),
        ("client_id", cms.client_id.is_some()),
        ("client_secret", cms.client_secret.is_some()),
    ];
    let any_declared = declared.iter().any(|(_, present)| *present);
    if any_declared {
        for (name, present) in declared {
            if !present {
                errors.push(format!(
                    "cms.{} is missing while other credentials are declared",
                    name
                ));
            }
        }
    }
}

fn validate_locations(locations: &LocationsConfig, errors: &mut Vec<String>) {
    if locations.path.trim().is_empty() {
        errors.push("locations.path must not be empty".to_string());
    }
}
