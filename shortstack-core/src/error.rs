//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use shortstack_client::ClientError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// TTL 输入无法解析为有限数字
    #[error("TTL hours must be a number: '{0}'")]
    InvalidTtl(String),

    /// 系统剪贴板不可用或写入失败
    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    /// Shortstack API 错误
    #[error("{0}")]
    Client(#[from] ClientError),
}

impl CoreError {
    /// 是否为预期内的错误（用户输入问题，而非系统故障）
    ///
    /// 预期错误记为 `warn`，其余记为 `error`。
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidTtl(_) => true,
            Self::ClipboardError(_) => false,
            Self::Client(e) => !e.is_transport(),
        }
    }

    /// 记录该错误时使用的日志级别
    pub fn log_level(&self) -> log::Level {
        if self.is_expected() {
            log::Level::Warn
        } else {
            log::Level::Error
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_ttl_is_expected() {
        let err = CoreError::InvalidTtl("soon".to_string());
        assert!(err.is_expected());
        assert_eq!(err.to_string(), "TTL hours must be a number: 'soon'");
    }

    #[test]
    fn transport_error_is_not_expected() {
        let err = CoreError::from(ClientError::NetworkError {
            endpoint: "GET /health".to_string(),
            detail: "connection refused".to_string(),
        });
        assert!(!err.is_expected());
        assert_eq!(
            err.to_string(),
            "[GET /health] Network error: connection refused"
        );
    }

    #[test]
    fn log_level_follows_expectation() {
        assert_eq!(
            CoreError::InvalidTtl("soon".to_string()).log_level(),
            log::Level::Warn
        );
        assert_eq!(
            CoreError::ClipboardError("no display".to_string()).log_level(),
            log::Level::Error
        );
        assert_eq!(
            CoreError::from(ClientError::UnexpectedStatus {
                endpoint: "GET /health".to_string(),
                status: 503,
            })
            .log_level(),
            log::Level::Warn
        );
        assert_eq!(
            CoreError::from(ClientError::Timeout {
                endpoint: "GET /health".to_string(),
                detail: "operation timed out".to_string(),
            })
            .log_level(),
            log::Level::Error
        );
    }

    #[test]
    fn serializes_with_code_tag() {
        let err = CoreError::ClipboardError("no display".to_string());
        let json = serde_json::to_value(&err).unwrap_or_default();
        assert_eq!(json["code"], "ClipboardError");
        assert_eq!(json["details"], "no display");
    }
}
