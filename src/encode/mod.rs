//! Frame sinks: where presented frames go after the host loop.

/// PNG output through the `image` crate.
pub mod png;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
