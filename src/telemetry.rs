//! Telemetry helpers for applications embedding `shelf-charts`.
//!
//! Tracing setup stays explicit and opt-in: hosts either call
//! [`init_default_tracing`] or install their own subscriber and filters
//! before invoking any layout function.

/// Installs a compact `tracing` subscriber honoring `RUST_LOG`.
///
/// Only does anything when the `telemetry` feature is enabled. Returns
/// `true` on successful installation and `false` when the feature is off or
/// the host application already set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok()
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
