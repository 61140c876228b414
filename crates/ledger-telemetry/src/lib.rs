//! # Ledger Telemetry
//!
//! Structured logging for the private ledger contracts, built on
//! `tracing-subscriber`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ledger_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     init_telemetry(&TelemetryConfig::from_env()).expect("Failed to init telemetry");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `private-ledger` | Service name in events |
//! | `PL_LOG_LEVEL` | `info` | Log level filter |
//! | `PL_CONSOLE_OUTPUT` | `true` | Write events to stdout |
//! | `PL_JSON_LOGS` | `false` | JSON lines output |

#![warn(missing_docs)]

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::init_tracing;

use std::sync::Once;
use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// A global subscriber is already installed.
    #[error("Subscriber already initialized: {0}")]
    AlreadyInitialized(String),

    /// Filter directive did not parse.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging for a process.
pub fn init_telemetry(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    init_tracing(config)
}

/// Install a test-friendly subscriber once per process; later calls are no-ops.
pub fn init_for_tests() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let config = TelemetryConfig {
            log_level: "debug".to_string(),
            ..TelemetryConfig::from_env()
        };
        // Another harness may have installed its own subscriber first.
        let _ = init_tracing(&config);
    });
}
