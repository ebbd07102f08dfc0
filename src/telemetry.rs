//! Telemetry helpers for applications embedding `brand-charts`.
//!
//! The layout engine only emits `tracing` events under the `brand_charts`
//! target. Installing a subscriber is left to the host; the helpers here cover
//! the common cases when the `telemetry` feature is enabled.

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "brand_charts=info";

/// Installs a compact fmt subscriber honoring `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Installs a compact fmt subscriber using `fallback_directive` when
/// `RUST_LOG` is unset or unparsable.
#[must_use]
pub fn init_tracing_with_filter(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
