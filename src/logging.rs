use std::io::IsTerminal;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

/// Install the global subscriber. Events go to stderr so stdout only carries
/// the command's report; `verbose` lowers the default level to debug.
pub fn init_tracing(config: &Config, verbose: bool) {
    let default_filter = if verbose {
        "skillpack=debug"
    } else {
        config.log_filter.as_str()
    };

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .try_init();
}
