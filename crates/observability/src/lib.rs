//! Tracing and logging (shared setup).
//!
//! Library crates only emit `tracing` events; whichever process embeds them
//! calls [`init`] once at startup.

/// Initialize process-wide tracing from the environment.
///
/// An invalid configuration falls back to the defaults and is reported as a
/// warning. This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    match tracing::ObservabilityConfig::from_env() {
        Ok(config) => tracing::init_with(&config),
        Err(err) => {
            tracing::init_with(&tracing::ObservabilityConfig::default());
            ::tracing::warn!(error = %err, "invalid logging configuration; using defaults");
        }
    }
}

/// Tracing configuration (filters, formats).
pub mod tracing;

pub use self::tracing::{ConfigError, LogFormat, ObservabilityConfig, init_with};
