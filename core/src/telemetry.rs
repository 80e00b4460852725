//! Tracing setup for embedding binaries and tests

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber with env-filter support.
///
/// Safe to call from an embedding binary's main; `RUST_LOG` overrides the
/// default filter.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,confera_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
