//! Tracing setup for binaries and hosts embedding `vitals-dashboard`.
//!
//! Library code only emits `tracing` events. Hosts either call one of the
//! init helpers here or install their own subscriber.

/// `init_tracing_with_default("info")`.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_default("info")
}

/// Installs a compact stderr subscriber filtered by `RUST_LOG`, falling
/// back to `directive` when the variable is unset or invalid.
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already set.
#[must_use]
pub fn init_tracing_with_default(directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = directive;
        false
    }
}
