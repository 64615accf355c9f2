//! Opt-in tracing setup for hosts embedding `livechart-rs`.
//!
//! The crate only emits `tracing` events. Hosts that already install a
//! subscriber need nothing from here; small demos can call
//! [`init_default_tracing`].

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "livechart_rs=info";

/// Installs a compact fmt subscriber using `RUST_LOG` or [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback filter.
#[must_use]
pub fn init_tracing_with_filter(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
