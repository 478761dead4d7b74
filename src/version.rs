//! Crate version reporting.

/// Version of this library, as published.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the library version string.
pub fn version() -> &'static str {
    VERSION
}
