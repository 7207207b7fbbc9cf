use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all Shortstack API calls.
///
/// Each variant that belongs to a request carries the `endpoint` it was
/// issued against (for example `POST /api/shorten`), plus variant-specific
/// context. All variants are serializable for structured error reporting.
///
/// # Transport Errors
///
/// The following variants mean no HTTP exchange completed:
/// - [`NetworkError`](Self::NetworkError): connection refused, DNS failure, reset
/// - [`Timeout`](Self::Timeout): the connection attempt timed out
///
/// A rejection by the service (4xx / 5xx with an `error` body) is *not* an
/// error of this type for `shorten`; it is returned as an
/// [`ApiReply`](crate::ApiReply) with a non-success status.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "code")]
pub enum ClientError {
    /// The configured base URL could not be parsed or uses an unsupported scheme.
    #[error("Invalid base URL '{url}': {detail}")]
    InvalidBaseUrl {
        /// The URL text as configured.
        url: String,
        /// What is wrong with it.
        detail: String,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {detail}")]
    ClientInit {
        /// Error details.
        detail: String,
    },

    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    #[error("[{endpoint}] Network error: {detail}")]
    NetworkError {
        /// Endpoint the request was sent to.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// The connection attempt timed out.
    #[error("[{endpoint}] Request timeout: {detail}")]
    Timeout {
        /// Endpoint the request was sent to.
        endpoint: String,
        /// Error details.
        detail: String,
    },

    /// An informational endpoint answered with a non-success status.
    #[error("[{endpoint}] Unexpected status: HTTP {status}")]
    UnexpectedStatus {
        /// Endpoint the request was sent to.
        endpoint: String,
        /// HTTP status code.
        status: u16,
    },

    /// The response body of an informational endpoint could not be parsed.
    #[error("[{endpoint}] Parse error: {detail}")]
    ParseError {
        /// Endpoint the request was sent to.
        endpoint: String,
        /// Parse error details.
        detail: String,
    },
}

impl ClientError {
    /// 是否为传输层错误（请求未完成），用于日志分级和提示文案。
    ///
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::Timeout { .. })
    }

    /// Human-readable detail without the endpoint prefix.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::InvalidBaseUrl { detail, .. }
            | Self::ClientInit { detail }
            | Self::NetworkError { detail, .. }
            | Self::ParseError { detail, .. } => detail.clone(),
            Self::Timeout { .. } => "request timed out".to_string(),
            Self::UnexpectedStatus { status, .. } => format!("HTTP {status}"),
        }
    }
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_network_error() {
        let e = ClientError::NetworkError {
            endpoint: "POST /api/shorten".to_string(),
            detail: "connection refused".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[POST /api/shorten] Network error: connection refused"
        );
    }

    #[test]
    fn display_invalid_base_url() {
        let e = ClientError::InvalidBaseUrl {
            url: "ftp://x".to_string(),
            detail: "only http/https are supported".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Invalid base URL 'ftp://x': only http/https are supported"
        );
    }

    #[test]
    fn display_unexpected_status() {
        let e = ClientError::UnexpectedStatus {
            endpoint: "GET /health".to_string(),
            status: 503,
        };
        assert_eq!(e.to_string(), "[GET /health] Unexpected status: HTTP 503");
    }

    #[test]
    fn transport_classification() {
        let network = ClientError::NetworkError {
            endpoint: "e".into(),
            detail: "d".into(),
        };
        let timeout = ClientError::Timeout {
            endpoint: "e".into(),
            detail: "d".into(),
        };
        let parse = ClientError::ParseError {
            endpoint: "e".into(),
            detail: "d".into(),
        };
        assert!(network.is_transport());
        assert!(timeout.is_transport());
        assert!(!parse.is_transport());
    }

    #[test]
    fn detail_strips_endpoint() {
        let e = ClientError::NetworkError {
            endpoint: "POST /api/shorten".into(),
            detail: "connection refused".into(),
        };
        assert_eq!(e.detail(), "connection refused");

        let e = ClientError::Timeout {
            endpoint: "POST /api/shorten".into(),
            detail: "operation timed out".into(),
        };
        assert_eq!(e.detail(), "request timed out");
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = ClientError::UnexpectedStatus {
            endpoint: "GET /version".into(),
            status: 404,
        };
        let json = serde_json::to_value(&e).unwrap_or_default();
        assert_eq!(json["code"], "UnexpectedStatus");
        assert_eq!(json["status"], 404);
    }
}
