//! W3C trace context extraction from inbound request headers.

use opentelemetry::{Context, global, propagation::Extractor, trace::TraceContextExt as _};
use salvo::http::{HeaderMap, HeaderName};

/// Read-only view of request headers for the text map propagator.
struct HeaderCarrier<'a>(&'a HeaderMap);

impl Extractor for HeaderCarrier<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|value| value.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(HeaderName::as_str).collect()
    }
}

/// Returns the caller's trace context when the headers carry a valid one.
///
/// Extraction starts from an empty context, so a request without trace headers never
/// inherits whatever span happens to be active in this process.
pub(super) fn extract_parent_context(headers: &HeaderMap) -> Option<Context> {
    let context = global::get_text_map_propagator(|propagator| {
        propagator.extract_with_context(&Context::new(), &HeaderCarrier(headers))
    });

    let valid = context.span().span_context().is_valid();

    valid.then_some(context)
}
