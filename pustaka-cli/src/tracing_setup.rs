//! Logging for the pustaka binary
//!
//! Console output is always on. `--otel` adds an OTLP span exporter when the
//! binary is built with the `telemetry` feature.
//!
//! `RUST_LOG` replaces the crate directives below entirely:
//!   RUST_LOG=pustaka_core=trace,sqlx=debug pustaka serve
//!
//! The exporter reads `OTEL_EXPORTER_OTLP_ENDPOINT` (default
//! `http://localhost:4317`) and `OTEL_SERVICE_NAME` (default `pustaka`).

use anyhow::{anyhow, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Workspace crates and request spans at info; sqlx only for slow or failed statements.
const DEFAULT_DIRECTIVES: &str =
    "pustaka=info,pustaka_core=info,pustaka_server=info,tower_http=info,sqlx=warn";

/// `--debug`: DAO calls and request spans at debug, every sqlx statement at info.
const DEBUG_DIRECTIVES: &str =
    "pustaka=debug,pustaka_core=debug,pustaka_server=debug,tower_http=debug,sqlx=info";

#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConfig {
    pub debug: bool,
    pub otel: bool,
}

impl TracingConfig {
    fn directives(&self) -> &'static str {
        if self.debug {
            DEBUG_DIRECTIVES
        } else {
            DEFAULT_DIRECTIVES
        }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.directives()))
    }
}

/// Install the global subscriber. Fails if one is already set.
pub fn init(config: &TracingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry()
        .with(config.filter())
        .with(fmt::layer().with_target(config.debug).compact());

    #[cfg(feature = "telemetry")]
    if config.otel {
        let tracer = otel::install()?;
        registry
            .with(tracing_opentelemetry::layer().with_tracer(tracer))
            .try_init()
            .map_err(|err| anyhow!(err))?;
        tracing::info!(endpoint = %otel::endpoint(), "exporting spans over OTLP");
        return Ok(());
    }

    #[cfg(not(feature = "telemetry"))]
    if config.otel {
        eprintln!("--otel ignored: built without the `telemetry` feature");
    }

    registry.try_init().map_err(|err| anyhow!(err))
}

/// Flush buffered spans before exit.
pub fn shutdown() {
    #[cfg(feature = "telemetry")]
    otel::shutdown();
}

#[cfg(feature = "telemetry")]
mod otel {
    use anyhow::{anyhow, Result};
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry::KeyValue;
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::trace::{Tracer, TracerProvider};
    use opentelemetry_sdk::{runtime, Resource};

    fn env_or(key: &str, default: &str) -> String {
        std::env::var(key).unwrap_or_else(|_| default.to_string())
    }

    pub(super) fn endpoint() -> String {
        env_or("OTEL_EXPORTER_OTLP_ENDPOINT", "http://localhost:4317")
    }

    /// Register the batch exporter as the global provider and hand back its tracer.
    pub(super) fn install() -> Result<Tracer> {
        let endpoint = endpoint();
        let exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(&endpoint)
            .build()
            .map_err(|e| anyhow!("OTLP exporter for {endpoint}: {e}"))?;

        let resource = Resource::new([
            KeyValue::new("service.name", env_or("OTEL_SERVICE_NAME", "pustaka")),
            KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
        ]);

        let provider = TracerProvider::builder()
            .with_batch_exporter(exporter, runtime::Tokio)
            .with_resource(resource)
            .build();
        let tracer = provider.tracer("pustaka");

        // The global handle keeps the provider (and its export task) alive.
        let _ = opentelemetry::global::set_tracer_provider(provider);
        Ok(tracer)
    }

    pub(super) fn shutdown() {
        opentelemetry::global::shutdown_tracer_provider();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_parse() {
        assert!(EnvFilter::try_new(DEFAULT_DIRECTIVES).is_ok());
        assert!(EnvFilter::try_new(DEBUG_DIRECTIVES).is_ok());
    }

    #[test]
    fn debug_flag_selects_directives() {
        assert_eq!(TracingConfig::default().directives(), DEFAULT_DIRECTIVES);

        let debug = TracingConfig {
            debug: true,
            otel: false,
        };
        assert_eq!(debug.directives(), DEBUG_DIRECTIVES);
    }

    #[test]
    fn directives_cover_workspace_crates() {
        for directives in [DEFAULT_DIRECTIVES, DEBUG_DIRECTIVES] {
            for target in ["pustaka=", "pustaka_core=", "pustaka_server=", "tower_http="] {
                assert!(directives.contains(target), "{directives} lacks {target}");
            }
        }
        assert!(DEFAULT_DIRECTIVES.contains("sqlx=warn"));
    }
}
