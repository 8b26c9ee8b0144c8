//! Tracing and logging setup shared by storefront binaries and tests.

/// Initialize process-wide observability (tracing/logging) at `info`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with_default("info");
}

/// Tracing configuration (filters, layers).
pub mod tracing;
