//! Observability lifecycle.

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace::SdkTracerProvider};
use tracing::{error, info};

use crate::config::ServerConfig;

use super::{ObservabilityError, logging, otel, settings};

/// Keeps the span exporter alive until [`Observability::shutdown`].
#[derive(Debug)]
pub(crate) struct Observability {
    tracer_provider: Option<SdkTracerProvider>,
}

impl Observability {
    pub(crate) fn init(config: &ServerConfig) -> Result<Self, ObservabilityError> {
        settings::apply_runtime_config(config);

        let tracer_provider = config
            .observability
            .otel_enabled
            .then(|| otel::build_tracer_provider(&config.observability))
            .transpose()?;

        if tracer_provider.is_some() {
            global::set_text_map_propagator(TraceContextPropagator::new());
        }

        logging::init_subscriber(config, tracer_provider.as_ref())?;

        if tracer_provider.is_some() {
            info!(
                endpoint = %config.observability.otel_exporter_otlp_endpoint,
                "exporting traces"
            );
        }

        Ok(Self { tracer_provider })
    }

    /// Flushes pending spans.
    pub(crate) fn shutdown(self) {
        if let Some(provider) = self.tracer_provider
            && let Err(source) = provider.shutdown()
        {
            error!("failed to shutdown tracer provider: {source}");
        }
    }
}
