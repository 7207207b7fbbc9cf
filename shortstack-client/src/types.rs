use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

// ============ Request ============

/// Requested expiry horizon for a short link, in hours.
///
/// Always finite. Whole values are sent as JSON integers (`24`, not `24.0`),
/// which is what the service expects for its integer TTL check; fractional
/// values are sent as-is and left to the service to accept or reject.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "f64")]
pub struct TtlHours(f64);

/// Largest integer an `f64` represents exactly (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

impl TtlHours {
    /// Returns `None` for `NaN` and infinities, which have no JSON representation.
    #[must_use]
    pub fn new(hours: f64) -> Option<Self> {
        hours.is_finite().then_some(Self(hours))
    }

    /// The raw number of hours.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for TtlHours {
    type Error = String;

    fn try_from(hours: f64) -> std::result::Result<Self, Self::Error> {
        Self::new(hours).ok_or_else(|| format!("ttlHours must be finite, got {hours}"))
    }
}

impl Serialize for TtlHours {
    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.0.fract() == 0.0 && self.0.abs() <= MAX_EXACT_INTEGER {
            serializer.serialize_i64(self.0 as i64)
        } else {
            serializer.serialize_f64(self.0)
        }
    }
}

/// Body of `POST /api/shorten`.
///
/// Optional fields are omitted from the JSON entirely when `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The long URL to shorten.
    pub url: String,
    /// User-chosen short code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    /// Requested expiry horizon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl_hours: Option<TtlHours>,
}

impl ShortenRequest {
    /// Request with only a URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alias: None,
            ttl_hours: None,
        }
    }
}

// ============ Response ============

/// Body returned by `POST /api/shorten`.
///
/// On success the service sends `code` and `shortUrl`; on failure it sends
/// `error`. Every field is optional so that partial or unexpected bodies still
/// deserialize, and a body that is not a JSON object maps to [`Default`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    /// Fully qualified short URL (present when the service knows its public base URL).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
    /// Short code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Service-provided error message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ShortenResponse {
    /// The link to present to the user: `shortUrl`, falling back to `code`.
    ///
    /// Empty strings count as absent.
    pub fn short_link(&self) -> Option<&str> {
        non_empty(self.short_url.as_deref()).or_else(|| non_empty(self.code.as_deref()))
    }

    /// The service-provided error message, if any and non-empty.
    pub fn error_message(&self) -> Option<&str> {
        non_empty(self.error.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// One completed HTTP exchange with the shorten endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReply {
    /// HTTP status code.
    pub status: u16,
    /// Parsed body (empty when the body was not valid JSON).
    pub body: ShortenResponse,
}

impl ApiReply {
    pub fn new(status: u16, body: ShortenResponse) -> Self {
        Self { status, body }
    }

    /// Whether the status is in the `2xx` range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// ============ Service info ============

/// Body returned by `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// `"ok"` when the service is healthy.
    pub status: String,
    /// Server clock at the time of the check.
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Body returned by `GET /version`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version: String,
}
