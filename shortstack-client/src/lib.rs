//! # shortstack-client
//!
//! A small typed client for the Shortstack URL shortening HTTP API.
//!
//! ## Endpoints
//!
//! | Method | Path | Purpose |
//! |--------|------|---------|
//! | `POST` | `/api/shorten` | Create a short link from a long URL, optional alias and TTL |
//! | `GET` | `/health` | Liveness check (`{"status":"ok","time":"..."}`) |
//! | `GET` | `/version` | Deployed service version (`{"version":"..."}`) |
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: Use rustls for HTTPS base URLs.
//! - **`native-tls`**: Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shortstack_client::{ShortenApi, ShortenRequest, ShortstackClient, TtlHours};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ShortstackClient::new("http://127.0.0.1:5000")?;
//!
//!     let request = ShortenRequest {
//!         url: "https://example.com/some/long/path".to_string(),
//!         alias: Some("docs".to_string()),
//!         ttl_hours: TtlHours::new(24.0),
//!     };
//!
//!     let reply = client.shorten(&request).await?;
//!     if reply.is_success() {
//!         println!("created: {:?}", reply.body.short_link());
//!     } else {
//!         println!("rejected ({}): {:?}", reply.status, reply.body.error);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! [`ShortenApi::shorten`] only fails when no HTTP exchange completed
//! (connection refused, DNS failure, timeout). A service-side rejection is a
//! successful call whose [`ApiReply::status`] is outside `2xx`; an unparsable
//! body is reported as an empty [`ShortenResponse`].
//!
//! See [`ClientError`] for the full list of variants.

mod client;
mod error;
mod http_client;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ClientError, Result};

// Re-export the HTTP implementation
pub use client::{ShortstackClient, HEALTH_PATH, SHORTEN_PATH, VERSION_PATH};

// Re-export core trait
pub use traits::ShortenApi;

// Re-export types
pub use types::{ApiReply, HealthStatus, ShortenRequest, ShortenResponse, TtlHours, VersionInfo};

// Re-export utils module
pub use utils::log_sanitizer;
