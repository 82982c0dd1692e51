//! Diagnostic logging setup.

use std::sync::Once;

use folio_foundation::{Error, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static TRACING_INIT: Once = Once::new();

/// Installs the global `tracing` subscriber.
///
/// Does nothing unless `filter` is given or `RUST_LOG` is set, e.g.
/// `RUST_LOG=folio_parser=trace`. Events go to stderr so they never mix with
/// answers on stdout. Only the first call has any effect.
///
/// # Errors
///
/// Returns a configuration error if `filter` is not a valid filter directive.
pub fn init_tracing(filter: Option<&str>) -> Result<()> {
    let filter = match filter {
        Some(directives) => Some(
            EnvFilter::try_new(directives)
                .map_err(|e| Error::config(format!("invalid log filter \"{directives}\": {e}")))?,
        ),
        None if std::env::var_os("RUST_LOG").is_some() => Some(EnvFilter::from_default_env()),
        None => None,
    };

    let Some(filter) = filter else {
        return Ok(());
    };

    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .with(filter)
            .try_init();
    });
    Ok(())
}
