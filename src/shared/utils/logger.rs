use log::{debug, info, SetLoggerError};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// This should be called once at application startup; later calls are no-ops
pub fn init_logger() -> Result<(), SetLoggerError> {
    let mut result = Ok(());

    INIT.call_once(|| {
        result = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("search_hints_lib", log::LevelFilter::Debug)
            .filter_module("tokio", log::LevelFilter::Warn)
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .try_init();

        if result.is_ok() {
            info!("Logging system initialized");
        }
    });

    result
}

/// Install the `tracing` subscriber used by the infrastructure adapters
///
/// Leaves the `log` facade alone, so it can run alongside `init_logger`.
pub fn init_tracing() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log search operations
    pub fn search_operation(query: &str, strategy: Option<&str>, results: Option<usize>) {
        match (strategy, results) {
            (Some(s), Some(r)) => debug!("Search: '{}' via {} returned {} candidates", query, s, r),
            (Some(s), None) => debug!("Search: Starting '{}' via {}", query, s),
            (None, Some(r)) => debug!("Search: '{}' ranked {} hints", query, r),
            (None, None) => debug!("Search: Starting '{}'", query),
        }
    }

    /// Log performance metrics
    pub fn performance_metric(operation: &str, duration_ms: u64, additional_info: Option<&str>) {
        match additional_info {
            Some(info) => debug!(
                "Performance: {} took {}ms ({})",
                operation, duration_ms, info
            ),
            None => debug!("Performance: {} took {}ms", operation, duration_ms),
        }
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn finish_with_info(self, info: &str) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        LogContext::performance_metric(&self.operation, duration, Some(info));
        duration
    }
}
