//! Process-wide logging setup shared by the cartwheel binaries and tests.

/// Initialize process-wide structured logging.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::DEFAULT_FILTER);
}

/// Subscriber construction (filters, JSON formatting).
pub mod tracing;
