//! Logging configuration using tracing
//!
//! Native hosts (tests, tooling) install a `tracing-subscriber` registry here.
//! In the browser the `tracing` events are forwarded to the `log` facade and
//! picked up by `console_log`, so nothing needs to be installed.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable that controls the log filter.
pub const LOG_ENV: &str = "FOLIO_LOG";

const DEFAULT_FILTER: &str = "folio_app=info,warn";

/// Initialize the logging subsystem
///
/// Log level is controlled by the `FOLIO_LOG` environment variable.
/// Calling this more than once is harmless; only the first call installs a
/// subscriber.
///
/// # Examples
/// ```bash
/// FOLIO_LOG=debug cargo test --test e2e
/// FOLIO_LOG=folio_app=trace cargo test
/// ```
pub fn init() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("Folio logging initialised (filter from {})", LOG_ENV);
    }
}
