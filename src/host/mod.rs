//! Headless stand-in for a windowing host: lifecycle events, a surface, and the frame loop.

/// Lifecycle events and the handler capability.
pub mod lifecycle;
/// Fixed-rate frame loop.
pub mod runner;
/// Surface trait and the offscreen implementation.
pub mod surface;
