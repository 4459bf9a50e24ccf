//! Subscriber assembly: env filter, formatter and the optional OTLP layer.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::{EnvFilter, Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{ServerConfig, observability::LogFormat};

use super::{ObservabilityError, otel::SERVICE_NAME};

/// Crates whose chatter stays at `warn` whatever the requested level.
const QUIET_CRATES: [&str; 5] = ["h2", "hyper", "tonic", "tower", "opentelemetry"];

pub(super) fn init_subscriber(
    config: &ServerConfig,
    tracer_provider: Option<&SdkTracerProvider>,
) -> Result<(), ObservabilityError> {
    let otel_layer = tracer_provider.map(|provider| {
        tracing_opentelemetry::layer().with_tracer(provider.tracer(SERVICE_NAME))
    });

    let fmt_layer = match config.logging.log_format {
        LogFormat::Compact => tracing_subscriber::fmt::layer()
            .compact()
            .with_target(true)
            .boxed(),
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(otel_layer)
        .with(fmt_layer)
        .with(env_filter(&config.logging.log_level))
        .try_init()?;

    Ok(())
}

fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(env_filter_directives(log_level)))
}

fn env_filter_directives(log_level: &str) -> String {
    QUIET_CRATES
        .iter()
        .fold(log_level.to_string(), |directives, krate| {
            format!("{directives},{krate}=warn")
        })
}

#[cfg(test)]
mod tests {
    use super::env_filter_directives;

    #[test]
    fn quiets_transport_crates() {
        let directives = env_filter_directives("shopease_json=debug");

        assert_eq!(
            directives,
            "shopease_json=debug,h2=warn,hyper=warn,tonic=warn,tower=warn,opentelemetry=warn"
        );
    }
}
