use prometheus::{
    Gauge, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts, Registry,
};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

// Declare the static OnceCell to hold the Metrics.
static METRICS_INSTANCE: OnceCell<Arc<Metrics>> = OnceCell::const_new();

/// Asynchronously initializes and gets a reference to the service metrics.
pub async fn get_metrics() -> &'static Arc<Metrics> {
    METRICS_INSTANCE
        .get_or_init(|| async {
            info!("Initializing Metrics ...");
            Metrics::try_new().expect("static metric definitions are valid")
        })
        .await
}

#[derive(Clone)]
pub struct Metrics {
    pub registry: Registry,

    // Token metrics
    pub token_refreshes: IntCounterVec,
    pub token_expiry_unix: IntGauge,

    // CMS fetch metrics
    pub cms_fetch_requests: IntCounterVec,
    pub cms_fetch_failures: IntCounterVec,
    pub cms_fetch_duration: HistogramVec,
    pub fallback_served: IntCounterVec,

    // Config/runtime
    pub config_parse_failures: IntCounter,
    pub config_validation_errors: IntCounter,
    pub up: IntGauge,

    // === Service resource metrics ===
    pub process_cpu_usage: Gauge,
    pub process_memory_usage: IntGauge,
    pub process_virtual_memory: IntGauge,
    pub process_open_fds: IntGauge,
    pub process_threads: IntGauge,
    pub process_start_time: IntGauge,
    pub process_uptime: IntGauge,
}

impl Metrics {
    fn try_new() -> prometheus::Result<Arc<Self>> {
        let registry = Registry::new_custom(Some("kontentagent".into()), None)?;

        let metrics = Arc::new(Self {
            // Token
            token_refreshes: IntCounterVec::new(Opts::new("token_refreshes_total", "Refresh-token exchanges by result"), &["result"])?,
            token_expiry_unix: IntGauge::new("token_expiry_unix_seconds", "Cached token expiry timestamp")?,

            // CMS
            cms_fetch_requests: IntCounterVec::new(Opts::new("cms_fetch_requests_total", "CMS read attempts by endpoint"), &["endpoint"])?,
            cms_fetch_failures: IntCounterVec::new(Opts::new("cms_fetch_failures_total", "CMS read failures by endpoint and reason"), &["endpoint", "reason"])?,
            cms_fetch_duration: HistogramVec::new(HistogramOpts::new("cms_fetch_duration_seconds", "CMS read duration seconds").buckets(vec![0.01, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]), &["endpoint"])?,
            fallback_served: IntCounterVec::new(Opts::new("fallback_served_total", "Responses served from static fallback content"), &["content"])?,

            // Config/runtime
            config_parse_failures: IntCounter::new("config_parse_failures_total", "Config files that failed to parse")?,
            config_validation_errors: IntCounter::new("config_validation_errors_total", "Validation errors during startup")?,
            up: IntGauge::new("up", "1 if service is healthy")?,
            process_cpu_usage: Gauge::new("process_cpu_usage_percent", "CPU usage % of this process")?,
            process_memory_usage: IntGauge::new("process_memory_usage_bytes", "Resident memory used by this process")?,
            process_virtual_memory: IntGauge::new("process_virtual_memory_bytes", "Virtual memory used by this process")?,
            process_open_fds: IntGauge::new("process_open_fds", "Number of open file descriptors")?,
            process_threads: IntGauge::new("process_threads", "Thread count of this process")?,
            process_start_time: IntGauge::new("process_start_time_seconds", "Process start time (UNIX seconds)")?,
            process_uptime: IntGauge::new("process_uptime_seconds", "Process uptime seconds")?,

            registry,
        });

        // Register all metrics in the registry
        let reg = &metrics.registry;
        reg.register(Box::new(metrics.token_refreshes.clone()))?;
        reg.register(Box::new(metrics.token_expiry_unix.clone()))?;
        reg.register(Box::new(metrics.cms_fetch_requests.clone()))?;
        reg.register(Box::new(metrics.cms_fetch_failures.clone()))?;
        reg.register(Box::new(metrics.cms_fetch_duration.clone()))?;
        reg.register(Box::new(metrics.fallback_served.clone()))?;
        reg.register(Box::new(metrics.config_parse_failures.clone()))?;
        reg.register(Box::new(metrics.config_validation_errors.clone()))?;
        reg.register(Box::new(metrics.up.clone()))?;

        reg.register(Box::new(metrics.process_cpu_usage.clone()))?;
        reg.register(Box::new(metrics.process_memory_usage.clone()))?;
        reg.register(Box::new(metrics.process_virtual_memory.clone()))?;
        reg.register(Box::new(metrics.process_open_fds.clone()))?;
        reg.register(Box::new(metrics.process_threads.clone()))?;
        reg.register(Box::new(metrics.process_start_time.clone()))?;
        reg.register(Box::new(metrics.process_uptime.clone()))?;

        Ok(metrics)
    }
}
