//! Logging, request tracing and Prometheus metrics for the storefront API.
//!
//! [`Observability::init`] installs the subscriber once at startup; the
//! [`request_logging`] hoop then wraps every request in a span and feeds the
//! HTTP metrics served by [`metrics_handler`].

use thiserror::Error;

mod init;
mod logging;
mod metrics;
mod otel;
mod request;
mod settings;

pub(crate) use init::Observability;
pub(crate) use metrics::{
    OrderRejection, metrics_handler, record_order_created, record_order_rejected,
};
pub(crate) use request::request_logging;

#[derive(Debug, Error)]
pub(crate) enum ObservabilityError {
    #[error("failed to build OTLP exporter for {endpoint}: {source}")]
    OtlpExporter {
        endpoint: String,
        #[source]
        source: opentelemetry_otlp::ExporterBuildError,
    },

    #[error("failed to install tracing subscriber: {0}")]
    TracingSubscriber(#[from] tracing_subscriber::util::TryInitError),
}
