//! Generic HTTP client tools
//!
//! Reusable request processing shared by every Shortstack endpoint.
//! Each endpoint constructs its own `RequestBuilder`; this module only sends it,
//! logs the exchange and reads the response.
//!
//! # design principles
//! - **Single attempt** - requests are never retried; the caller decides what to do next
//! - **Status codes are data** - any completed exchange is returned, whatever its status
//! - **Flexible response parsing** - strict parsing for info endpoints, lenient for `shorten`

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::utils::log_sanitizer::truncate_for_log;

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// 创建 HTTP Client
///
/// Only the connection phase is bounded; an established request is allowed to
/// take as long as the service needs.
pub fn create_http_client() -> Result<Client, ClientError> {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .build()
        .map_err(|e| ClientError::ClientInit {
            detail: e.to_string(),
        })
}

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text
    ///
    /// Unified processing: sending requests, logging, error handling
    ///
    /// # Arguments
    /// * `request_builder` - configured request constructor (including URL, headers, body, etc.)
    /// * `endpoint` - "METHOD /path" label (for logging and errors)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` - the exchange completed
    /// * `Err(ClientError::NetworkError | ClientError::Timeout)` - it did not
    ///
    /// A body that cannot be read is returned as empty text, the same as a body
    /// that cannot be parsed.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        endpoint: &str,
    ) -> Result<(u16, String), ClientError> {
        log::debug!("[shortstack] {endpoint}");

        // Send request
        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    endpoint: endpoint.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ClientError::NetworkError {
                    endpoint: endpoint.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[shortstack] {endpoint} Response Status: {status_code}");

        // Read response body
        let response_text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                log::warn!("[shortstack] {endpoint} Failed to read response body: {e}");
                String::new()
            }
        };

        log::debug!(
            "[shortstack] {endpoint} Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ClientError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, endpoint: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[shortstack] {endpoint} JSON parse failed: {e}");
            log::error!(
                "[shortstack] {endpoint} Raw response: {}",
                truncate_for_log(response_text)
            );
            ClientError::ParseError {
                endpoint: endpoint.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Parse JSON response, falling back to `T::default()` on any failure
    ///
    /// Used where a malformed body must be treated as an empty result rather
    /// than as an error.
    pub fn parse_json_or_default<T>(response_text: &str, endpoint: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        serde_json::from_str(response_text).unwrap_or_else(|e| {
            log::warn!(
                "[shortstack] {endpoint} Unparsable body treated as empty: {e}; raw: {}",
                truncate_for_log(response_text)
            );
            T::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShortenResponse;

    // ---- parse_json ----

    #[test]
    fn parse_json_valid() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ClientError> = HttpUtils::parse_json(r#"{"x":42}"#, "GET /test");
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ClientError> = HttpUtils::parse_json("not json", "GET /test");
        assert!(
            matches!(&result, Err(ClientError::ParseError { endpoint, .. }) if endpoint == "GET /test"),
            "unexpected parse result: {result:?}"
        );
    }

    // ---- parse_json_or_default ----

    #[test]
    fn lenient_parse_html_error_page() {
        let body: ShortenResponse = HttpUtils::parse_json_or_default(
            "<html><body>Internal Server Error</body></html>",
            "POST /api/shorten",
        );
        assert_eq!(body, ShortenResponse::default());
    }

    #[test]
    fn lenient_parse_empty_body() {
        let body: ShortenResponse = HttpUtils::parse_json_or_default("", "POST /api/shorten");
        assert_eq!(body, ShortenResponse::default());
    }

    #[test]
    fn lenient_parse_non_object_json() {
        let body: ShortenResponse = HttpUtils::parse_json_or_default("[1,2,3]", "POST /api/shorten");
        assert_eq!(body, ShortenResponse::default());
    }

    #[test]
    fn lenient_parse_valid_body() {
        let body: ShortenResponse =
            HttpUtils::parse_json_or_default(r#"{"error":"bad url"}"#, "POST /api/shorten");
        assert_eq!(body.error.as_deref(), Some("bad url"));
    }

    #[test]
    fn http_client_builds() {
        assert!(create_http_client().is_ok());
    }
}
