//! `tracing` subscriber setup.
//!
//! Level selection, first match wins:
//!
//! 1. `--verbose`: debug for the firekit crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`
//! 4. info for the firekit crates

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "firekit=debug,firekit_codegen=debug,firekit_config=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "firekit=info,firekit_codegen=info,firekit_config=info";

pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(filter(verbose, quiet))
        .with(fmt_layer)
        .init();
}

fn filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
