//! Log sanitization utilities
//!
//! Response bodies (HTML error pages from proxies, long target URLs) are
//! truncated before they reach debug/error logs.

/// Maximum number of bytes of a body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// MSRV-compatible replacement for `str::floor_char_boundary` (stable since 1.91.0).
fn floor_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Truncate a string for logging.
///
/// Strings within the limit are returned unchanged; longer ones are cut at a
/// character boundary and suffixed with their total byte length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let cut = floor_char_boundary(s, TRUNCATE_LIMIT);
    format!("{}... [truncated, total {} bytes]", &s[..cut], s.len())
}
