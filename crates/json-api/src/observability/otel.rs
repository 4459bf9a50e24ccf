//! OTLP span exporter.

use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{Resource, trace::SdkTracerProvider};

use crate::config::observability::ObservabilityConfig;

use super::ObservabilityError;

/// Service name attached to exported spans.
pub(super) const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");

pub(super) fn build_tracer_provider(
    config: &ObservabilityConfig,
) -> Result<SdkTracerProvider, ObservabilityError> {
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(config.otel_exporter_otlp_endpoint.clone())
        .build()
        .map_err(|source| ObservabilityError::OtlpExporter {
            endpoint: config.otel_exporter_otlp_endpoint.clone(),
            source,
        })?;

    Ok(SdkTracerProvider::builder()
        .with_resource(Resource::builder().with_service_name(SERVICE_NAME).build())
        .with_batch_exporter(exporter)
        .build())
}
