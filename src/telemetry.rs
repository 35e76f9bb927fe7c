use anyhow::Result;
use once_cell::sync::OnceCell;
use std::time::{Duration, Instant};

use num_traits::ToPrimitive;
use opentelemetry::{
    global,
    metrics::{Histogram, Meter, MeterProvider as _},
    trace::TracerProvider as _,
    KeyValue,
};
use opentelemetry_otlp::{MetricExporter, SpanExporter, WithExportConfig};
use opentelemetry_sdk::{
    metrics::{PeriodicReader, SdkMeterProvider},
    resource::Resource,
    trace::SdkTracerProvider,
};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::amm::fraction::Rounding;
use crate::amm::price_impact::PriceImpactQuote;
use crate::config::TelemetryConfig;

const INSTRUMENTATION_SCOPE: &str = "swap_pricing_core";

pub struct Telemetry {
    pub tracer_provider: SdkTracerProvider,
    pub meter_provider: SdkMeterProvider,
    pub meter: Meter,
    pub price_impact_bps: Histogram<f64>,
    pub quote_latency_ms: Histogram<f64>,
    commit_sha: String,
}

impl Telemetry {
    /// Registra impacto (bps) e latência de uma cotação.
    pub fn record_quote(&self, quote: &PriceImpactQuote, elapsed: Duration) {
        let attrs = [KeyValue::new("level", quote.level.as_str())];
        let bps = quote.impact.to_bps(Rounding::HalfUp).to_f64().unwrap_or(f64::INFINITY);
        self.price_impact_bps.record(bps, &attrs);
        self.quote_latency_ms.record(elapsed.as_secs_f64() * 1000.0, &attrs);
    }

    pub fn commit_sha(&self) -> &str {
        &self.commit_sha
    }

    pub fn shutdown(&self) {
        let _ = self.meter_provider.force_flush();
        let _ = self.meter_provider.shutdown();
        let _ = self.tracer_provider.shutdown();
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// tracing (fmt + OTel) e exportadores OTLP/HTTP de traces e métricas.
pub fn init(config: &TelemetryConfig) -> Result<Telemetry> {
    let base = config.otlp_endpoint.trim_end_matches('/');

    let resource = Resource::builder()
        .with_attributes([
            KeyValue::new("service.name", config.service_name.clone()),
            KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
            KeyValue::new("git.commit.sha", config.commit_sha.clone()),
        ])
        .build();

    // ---- Traces ----
    let span_exporter = SpanExporter::builder()
        .with_http()
        .with_endpoint(format!("{base}/v1/traces"))
        .build()?;
    let tracer_provider = SdkTracerProvider::builder()
        .with_resource(resource.clone())
        .with_batch_exporter(span_exporter)
        .build();
    let tracer = tracer_provider.tracer(INSTRUMENTATION_SCOPE);

    // ---- Métricas ----
    let metric_exporter = MetricExporter::builder()
        .with_http()
        .with_endpoint(format!("{base}/v1/metrics"))
        .build()?;
    let reader = PeriodicReader::builder(metric_exporter)
        .with_interval(Duration::from_secs(10))
        .build();
    let meter_provider = SdkMeterProvider::builder()
        .with_resource(resource)
        .with_reader(reader)
        .build();

    global::set_tracer_provider(tracer_provider.clone());
    global::set_meter_provider(meter_provider.clone());

    let otel_layer = tracing_opentelemetry::layer().with_tracer(tracer);
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    let subscriber = Registry::default().with(env_filter()).with(fmt_layer).with(otel_layer);
    // outro subscriber global (ex.: testes) não é fatal
    let _ = tracing::subscriber::set_global_default(subscriber);

    let meter = meter_provider.meter(INSTRUMENTATION_SCOPE);
    let price_impact_bps = meter
        .f64_histogram("deposit_price_impact_bps")
        .with_unit("bp")
        .with_description("Deposit price impact in basis points")
        .build();
    let quote_latency_ms = meter
        .f64_histogram("price_impact_latency_ms")
        .with_unit("ms")
        .with_description("Latency of price impact quotes in ms")
        .build();

    Ok(Telemetry {
        tracer_provider,
        meter_provider,
        meter,
        price_impact_bps,
        quote_latency_ms,
        commit_sha: config.commit_sha.clone(),
    })
}

/// Só logs no stdout, sem exportador.
pub fn init_fmt_only() -> Result<()> {
    Registry::default()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()?;
    Ok(())
}

static OP_DURATION: OnceCell<Histogram<f64>> = OnceCell::new();

fn op_duration() -> &'static Histogram<f64> {
    OP_DURATION.get_or_init(|| {
        global::meter(INSTRUMENTATION_SCOPE)
            .f64_histogram("op_duration_seconds")
            .with_unit("s")
            .with_description("operation duration")
            .build()
    })
}

/// Executa `f` e registra a duração em `op_duration_seconds{op}`.
/// Sem meter provider global o registro é no-op.
pub fn timed<F, T>(op: &'static str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let out = f();
    op_duration().record(start.elapsed().as_secs_f64(), &[KeyValue::new("op", op)]);
    out
}

/// `Span` INFO de nome estático; o nome dinâmico vai em `span_name`.
pub fn make_info_span(name: &str, op_id: u32, component: &str, commit_sha: &str) -> tracing::Span {
    tracing::span!(
        target: "swap_pricing_core",
        Level::INFO,
        "op",
        git_commit_sha = %commit_sha,
        span_name = %name,
        op_id = op_id,
        component = component
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_timed_returns_closure_value() {
        // sem provider global: instrumento no-op
        assert_eq!(timed("unit", || 21 * 2), 42);
    }

    #[test]
    fn t_info_span_builds_without_subscriber() {
        let span = make_info_span("quote", 7, "tests", "abc");
        let _g = span.enter();
    }
}
