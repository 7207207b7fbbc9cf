//! Utility modules.

/// Log truncation helpers so long URLs and HTML error pages stay readable in logs.
pub mod log_sanitizer;
