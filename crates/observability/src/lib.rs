//! Tracing, logging, metrics (shared setup).
//!
//! The domain crates emit `tracing` events but never install a subscriber;
//! whatever shell embeds the engine (server, test harness) calls [`init`]
//! once at startup.

/// Initialize process-wide observability (tracing/logging).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    subscriber::init();
}

/// Subscriber configuration (filters, layers).
pub mod subscriber;
