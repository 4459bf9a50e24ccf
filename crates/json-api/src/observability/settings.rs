//! Settings the request hoop consults on every request.

use std::sync::OnceLock;

use tracing::warn;

use crate::config::ServerConfig;

#[derive(Debug, Clone, Copy)]
struct RequestSettings {
    slow_request_threshold_ms: u64,
    propagate_parent: bool,
}

/// In effect until startup applies the configured values, and in tests.
const DEFAULTS: RequestSettings = RequestSettings {
    slow_request_threshold_ms: 1_000,
    propagate_parent: false,
};

static SETTINGS: OnceLock<RequestSettings> = OnceLock::new();

pub(super) fn apply_runtime_config(config: &ServerConfig) {
    let settings = RequestSettings {
        slow_request_threshold_ms: config.logging.slow_request_threshold_ms,
        propagate_parent: config.observability.propagates_parent(),
    };

    if SETTINGS.set(settings).is_err() {
        warn!("request settings were already applied; keeping the first values");
    }
}

fn current() -> RequestSettings {
    SETTINGS.get().copied().unwrap_or(DEFAULTS)
}

pub(super) fn slow_request_threshold_ms() -> u64 {
    current().slow_request_threshold_ms
}

pub(super) fn otel_parent_propagation_enabled() -> bool {
    current().propagate_parent
}
