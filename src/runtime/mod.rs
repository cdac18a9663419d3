//! Async loading of independent station logs.

/// Concurrent reader that preserves caller order.
pub mod loader;
