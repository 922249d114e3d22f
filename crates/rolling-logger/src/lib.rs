//! Rolling Logger
//!
//! A `tracing-subscriber` layer that formats every event into a single line,
//! hands it to an optional sink (the browser console, stderr, ...) and keeps the
//! most recent lines in a bounded buffer so they can be dumped later, e.g. from
//! a panic hook.

mod buffer;
mod layer;

pub use buffer::RollingBuffer;
pub use layer::{LogHandle, RollingLayer, Sink};

use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;

/// Default number of lines kept in memory.
pub const DEFAULT_CAPACITY: usize = 200;

/// Install `layer` as the global subscriber, dropping events above `level`.
///
/// Returns a handle to the layer's buffer. Fails if a global subscriber was
/// already set.
pub fn init(level: LevelFilter, layer: RollingLayer) -> Result<LogHandle, SetGlobalDefaultError> {
    let handle = layer.handle();
    let subscriber = tracing_subscriber::registry().with(level).with(layer);
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(handle)
}
