use std::io;

use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `info` is used, or `debug` for
/// the descstat crates when `verbose` is set.
pub(crate) fn init(verbose: bool) {
    let default_directives = if verbose {
        "info,descstat_analysis=debug,descstat=debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
