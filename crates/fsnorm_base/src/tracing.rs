use tracing_error::ErrorLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::FsnormResult;

/* 📖 # Why does logging go to stderr with a fixed filter?

Standard output belongs to the probe report, which callers may parse.
The filter is fixed at `warn` because the tool consumes no environment variables,
so cleanup failures show up while step-by-step debug events stay quiet.
*/

/// Install the global tracing subscriber: fmt layer on stderr plus [`ErrorLayer`]
/// so errors capture span traces.
pub fn init_tracing() -> FsnormResult<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::new("warn"))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(ErrorLayer::default())
        .try_init()
        .map_err(|e| crate::err!("failed to install tracing subscriber: {}", e))
}
