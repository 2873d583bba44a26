use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding an `EnvFilter` directive, e.g. `lct=trace`.
pub const LOG_ENV: &str = "LCT_LOG";

/// Install the stderr diagnostics layer.
///
/// `LCT_LOG` wins when set; otherwise `verbose` selects between warnings only
/// and `lct=debug`. Calling this twice is harmless.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default_filter(verbose));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::env::var_os("NO_COLOR").is_none())
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("warn,lct=debug")
    } else {
        EnvFilter::new("warn")
    }
}
