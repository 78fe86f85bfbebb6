use tracing_subscriber::EnvFilter;

use crate::errors::CallbackError;

/// Install the fmt subscriber. `log` records (actix access logs) are bridged
/// into it. Filter with RUST_LOG, defaults to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Export request traces over OTLP. No-op without an endpoint or when built
/// without the `otel` feature.
#[cfg(feature = "otel")]
pub fn init_tracer(collector_endpoint: Option<&str>) -> Result<(), CallbackError> {
    use opentelemetry::{
        sdk::{trace, Resource},
        KeyValue,
    };
    use opentelemetry_otlp::WithExportConfig;

    let Some(collector_endpoint) = collector_endpoint else {
        return Ok(());
    };

    opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(
            opentelemetry_otlp::new_exporter()
                .tonic()
                .with_endpoint(collector_endpoint),
        )
        .with_trace_config(trace::config().with_resource(Resource::new(vec![KeyValue::new(
            "service.name",
            env!("CARGO_PKG_NAME"),
        )])))
        .install_batch(opentelemetry::runtime::TokioCurrentThread)?;
    tracing::info!(endpoint = collector_endpoint, "exporting traces");
    Ok(())
}

#[cfg(not(feature = "otel"))]
pub fn init_tracer(_collector_endpoint: Option<&str>) -> Result<(), CallbackError> {
    Ok(())
}

#[cfg(feature = "otel")]
pub fn shutdown_tracer() {
    opentelemetry::global::shutdown_tracer_provider();
}

#[cfg(not(feature = "otel"))]
pub fn shutdown_tracer() {}
