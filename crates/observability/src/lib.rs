//! Tracing/logging setup shared by the catalog binaries.
//!
//! Fetch failures that the user never sees are reported here, so this is the
//! client's diagnostic channel.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::LogFormat;

/// Initialize process-wide tracing with the format named by
/// `CATALOG_LOG_FORMAT` (JSON unless set to `pretty`).
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    self::tracing::init(LogFormat::from_env());
}
