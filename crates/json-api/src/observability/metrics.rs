//! Prometheus metrics: HTTP traffic plus the order ledger's outcomes.

use std::sync::OnceLock;

use prometheus::{
    Encoder, Histogram, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, IntGauge, Opts,
    Registry, TextEncoder,
};
use salvo::{
    Response, handler,
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
};
use tracing::error;

const PREFIX: &str = "shopease_json";

/// Why the ledger refused an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OrderRejection {
    Invalid,
    UnknownProduct,
    InsufficientStock,
}

impl OrderRejection {
    fn label(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::UnknownProduct => "unknown_product",
            Self::InsufficientStock => "insufficient_stock",
        }
    }
}

#[derive(Debug)]
struct HttpMetrics {
    requests_total: IntCounterVec,
    request_duration_seconds: HistogramVec,
    requests_in_flight: IntGauge,
}

#[derive(Debug)]
struct LedgerMetrics {
    orders_created_total: IntCounter,
    orders_rejected_total: IntCounterVec,
    order_amount_cents: Histogram,
}

#[derive(Debug)]
struct Metrics {
    registry: Registry,
    http: HttpMetrics,
    ledger: LedgerMetrics,
}

static METRICS: OnceLock<Option<Metrics>> = OnceLock::new();

/// Holds the in-flight gauge up for the life of one request.
#[derive(Debug)]
pub(super) struct InFlightRequestGuard {
    gauge: Option<&'static IntGauge>,
}

impl InFlightRequestGuard {
    pub(super) fn track() -> Self {
        let gauge = metrics().map(|metrics| &metrics.http.requests_in_flight);

        if let Some(gauge) = gauge {
            gauge.inc();
        }

        Self { gauge }
    }
}

impl Drop for InFlightRequestGuard {
    fn drop(&mut self) {
        if let Some(gauge) = self.gauge {
            gauge.dec();
        }
    }
}

pub(super) fn observe_request(method: &str, route: &str, status_code: u16, duration_seconds: f64) {
    let Some(Metrics { http, .. }) = metrics() else {
        return;
    };

    let status_code = status_code.to_string();

    http.requests_total
        .with_label_values(&[method, route, status_code.as_str()])
        .inc();

    http.request_duration_seconds
        .with_label_values(&[method, route])
        .observe(duration_seconds);
}

/// Counts an order accepted by the ledger and its total.
pub(crate) fn record_order_created(total_amount: u64) {
    if let Some(Metrics { ledger, .. }) = metrics() {
        ledger.orders_created_total.inc();

        #[expect(
            clippy::cast_precision_loss,
            reason = "order totals in cents stay far below 2^52"
        )]
        ledger.order_amount_cents.observe(total_amount as f64);
    }
}

/// Counts an order the ledger refused.
pub(crate) fn record_order_rejected(reason: OrderRejection) {
    if let Some(Metrics { ledger, .. }) = metrics() {
        ledger
            .orders_rejected_total
            .with_label_values(&[reason.label()])
            .inc();
    }
}

#[handler]
pub(crate) async fn metrics_handler(res: &mut Response) {
    let Some(metrics) = metrics() else {
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        return;
    };

    let encoder = TextEncoder::new();
    let mut encoded = Vec::new();

    if let Err(source) = encoder.encode(&metrics.registry.gather(), &mut encoded) {
        error!("failed to encode metrics response: {source}");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

        return;
    }

    match HeaderValue::from_str(encoder.format_type()) {
        Ok(content_type) => {
            res.headers_mut().insert(CONTENT_TYPE, content_type);
            res.render(String::from_utf8_lossy(&encoded).into_owned());
        }
        Err(source) => {
            error!("failed to encode metrics content type header: {source}");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}

fn metrics() -> Option<&'static Metrics> {
    METRICS
        .get_or_init(|| {
            build_metrics()
                .inspect_err(|source| error!("failed to build metrics registry: {source}"))
                .ok()
        })
        .as_ref()
}

fn opts(name: &str, help: &str) -> Opts {
    Opts::new(format!("{PREFIX}_{name}"), help)
}

fn build_metrics() -> Result<Metrics, prometheus::Error> {
    let registry = Registry::new();

    let http = HttpMetrics {
        requests_total: IntCounterVec::new(
            opts("http_requests_total", "HTTP requests by method, route and status."),
            &["method", "route", "status_code"],
        )?,
        request_duration_seconds: HistogramVec::new(
            HistogramOpts::from(opts(
                "http_request_duration_seconds",
                "HTTP request duration by method and route.",
            ))
            .buckets(vec![0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
            &["method", "route"],
        )?,
        requests_in_flight: IntGauge::with_opts(opts(
            "http_requests_in_flight",
            "HTTP requests currently being served.",
        ))?,
    };

    let ledger = LedgerMetrics {
        orders_created_total: IntCounter::with_opts(opts(
            "orders_created_total",
            "Orders accepted by the ledger.",
        ))?,
        orders_rejected_total: IntCounterVec::new(
            opts("orders_rejected_total", "Orders refused by the ledger, by reason."),
            &["reason"],
        )?,
        order_amount_cents: Histogram::with_opts(
            HistogramOpts::from(opts("order_amount_cents", "Accepted order totals in cents."))
                .buckets(vec![1_000.0, 5_000.0, 10_000.0, 50_000.0, 100_000.0]),
        )?,
    };

    registry.register(Box::new(http.requests_total.clone()))?;
    registry.register(Box::new(http.request_duration_seconds.clone()))?;
    registry.register(Box::new(http.requests_in_flight.clone()))?;
    registry.register(Box::new(ledger.orders_created_total.clone()))?;
    registry.register(Box::new(ledger.orders_rejected_total.clone()))?;
    registry.register(Box::new(ledger.order_amount_cents.clone()))?;

    Ok(Metrics {
        registry,
        http,
        ledger,
    })
}

#[cfg(test)]
mod tests {
    use salvo::{
        Router, Service,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    async fn scrape() -> Result<String, salvo::Error> {
        let service =
            Service::new(Router::new().push(Router::with_path("metrics").get(metrics_handler)));

        TestClient::get("http://example.com/metrics")
            .send(&service)
            .await
            .take_string()
            .await
    }

    #[tokio::test]
    async fn metrics_endpoint_exposes_http_and_ledger_metrics() -> TestResult {
        observe_request("GET", "/api/products", 200, 0.042);
        record_order_created(54_00);
        record_order_rejected(OrderRejection::InsufficientStock);

        let response = scrape().await?;

        for name in [
            "shopease_json_http_requests_total",
            "shopease_json_http_request_duration_seconds",
            "shopease_json_http_requests_in_flight",
            "shopease_json_orders_created_total",
            "shopease_json_order_amount_cents",
        ] {
            assert!(response.contains(name), "expected {name} in metrics response");
        }

        let rejected = r#"shopease_json_orders_rejected_total{reason="insufficient_stock"}"#;

        assert!(response.contains(rejected), "expected rejection reason label");

        Ok(())
    }
}
