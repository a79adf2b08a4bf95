// src/log.rs
//
// Structured logging to stderr. Timestamps are elapsed time since start,
// which is all a one-shot run needs.

use tracing_subscriber::{fmt, fmt::time::Uptime, EnvFilter};

/// `RUST_LOG` wins when set; otherwise `info`, or `debug` with `verbose`.
pub fn init(verbose: bool) {
    let fallback = if verbose { "pzs_scrape=debug" } else { "pzs_scrape=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_timer(Uptime::default())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
