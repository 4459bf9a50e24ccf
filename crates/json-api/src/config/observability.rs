//! Logging and trace export settings.

use clap::{Args, ValueEnum};

/// How log lines are rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One human-readable line per event.
    Compact,

    /// One JSON object per event, with the enclosing spans.
    Json,
}

/// Request and event logging.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` holds no valid filter
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Requests slower than this are logged as warnings
    #[arg(long, env = "SLOW_REQUEST_THRESHOLD_MS", default_value_t = 1_000_u64)]
    pub slow_request_threshold_ms: u64,
}

/// OTLP trace export. Off unless `OTEL_ENABLED` is set.
#[derive(Debug, Args)]
pub struct ObservabilityConfig {
    #[arg(long, env = "OTEL_ENABLED", default_value_t = false)]
    pub otel_enabled: bool,

    /// Continue traces from an incoming `traceparent` header
    #[arg(long, env = "OTEL_PARENT_PROPAGATION_ENABLED", default_value_t = false)]
    pub otel_parent_propagation_enabled: bool,

    /// Collector gRPC endpoint
    #[arg(long, env = "OTEL_EXPORTER_OTLP_ENDPOINT", default_value = "http://localhost:4317")]
    pub otel_exporter_otlp_endpoint: String,
}

impl ObservabilityConfig {
    /// Whether incoming trace context should be honoured.
    pub fn propagates_parent(&self) -> bool {
        self.otel_enabled && self.otel_parent_propagation_enabled
    }
}
