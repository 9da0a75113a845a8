//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::Environment;

/// Installs the global tracing subscriber for `env`.
///
/// `local` gets human-readable output, `dev` and `prod` emit JSON lines.
/// `RUST_LOG` takes precedence over the environment's default level.
pub fn init(env: Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(env.default_log_level()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if env.json_logs() {
        builder.json().with_current_span(true).init();
    } else {
        builder.init();
    }
}
