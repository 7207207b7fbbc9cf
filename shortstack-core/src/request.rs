//! 从表单输入构造 `ShortenRequest`

use shortstack_client::{ShortenRequest, TtlHours};

use crate::error::{CoreError, CoreResult};

/// 构造创建请求
///
/// 所有输入先去除首尾空白：
/// - `url` 总是发送（空串也发送，由服务端校验）
/// - `alias` 非空时发送
/// - `ttl_hours` 非空时发送，必须是有限数字
pub fn build_request(url: &str, alias: &str, ttl_hours: &str) -> CoreResult<ShortenRequest> {
    let alias = alias.trim();

    Ok(ShortenRequest {
        url: url.trim().to_string(),
        alias: (!alias.is_empty()).then(|| alias.to_string()),
        ttl_hours: parse_ttl_hours(ttl_hours)?,
    })
}

/// 解析 TTL 输入
///
/// 空输入返回 `None`。接受十进制浮点（`24`、`1.5`、`1e2`）以及
/// 无符号的 `0x` / `0o` / `0b` 整数前缀（`0x18` 即 24），
/// 拒绝 `NaN`、无穷大和非数字文本。
pub fn parse_ttl_hours(raw: &str) -> CoreResult<Option<TtlHours>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    parse_radix_prefixed(trimmed)
        .or_else(|| trimmed.parse::<f64>().ok())
        .and_then(TtlHours::new)
        .map(Some)
        .ok_or_else(|| CoreError::InvalidTtl(trimmed.to_string()))
}

/// `0x1F`、`0o17`、`0b101`；前缀后至少一位数字，不允许符号
fn parse_radix_prefixed(text: &str) -> Option<f64> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, &text[2..]),
        "0o" | "0O" => (8, &text[2..]),
        "0b" | "0B" => (2, &text[2..]),
        _ => return None,
    };
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let value = digits.chars().try_fold(0.0_f64, |acc, ch| {
        let digit = ch.to_digit(radix)?;
        Some(acc * f64::from(radix) + f64::from(digit))
    });
    // 前缀已匹配但数字非法时不再回退到十进制解析
    Some(value.unwrap_or(f64::NAN))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(url: &str, alias: &str, ttl: &str) -> ShortenRequest {
        let result = build_request(url, alias, ttl);
        assert!(result.is_ok(), "unexpected error: {result:?}");
        result.unwrap_or_else(|_| ShortenRequest::new(""))
    }

    #[test]
    fn url_only_request_has_no_optional_keys() {
        let request = build("  https://example.com/long  ", "", "   ");
        assert_eq!(request.url, "https://example.com/long");
        assert_eq!(request.alias, None);
        assert_eq!(request.ttl_hours, None);
        assert_eq!(
            serde_json::to_string(&request).unwrap_or_default(),
            r#"{"url":"https://example.com/long"}"#
        );
    }

    #[test]
    fn empty_url_is_still_sent() {
        let request = build("   ", "", "");
        assert_eq!(request.url, "");
    }

    #[test]
    fn alias_is_trimmed() {
        let request = build("https://example.com", "  docs ", "");
        assert_eq!(request.alias.as_deref(), Some("docs"));
    }

    #[test]
    fn ttl_accepts_numbers() {
        assert_eq!(
            build("u", "", " 24 ").ttl_hours.map(TtlHours::get),
            Some(24.0)
        );
        assert_eq!(
            build("u", "", "1.5").ttl_hours.map(TtlHours::get),
            Some(1.5)
        );
        assert_eq!(
            build("u", "", "1e2").ttl_hours.map(TtlHours::get),
            Some(100.0)
        );
    }

    #[test]
    fn ttl_rejects_non_numbers() {
        for raw in ["soon", "NaN", "inf", "-infinity", "12h", "1,5"] {
            let result = parse_ttl_hours(raw);
            assert!(
                matches!(&result, Err(CoreError::InvalidTtl(text)) if text == raw),
                "{raw}: {result:?}"
            );
        }
    }

    #[test]
    fn ttl_accepts_radix_prefixes() {
        for (raw, hours) in [("0x18", 24.0), ("0X1f", 31.0), ("0o10", 8.0), ("0b11", 3.0)] {
            assert_eq!(
                build("u", "", raw).ttl_hours.map(TtlHours::get),
                Some(hours),
                "{raw}"
            );
        }
    }

    #[test]
    fn ttl_rejects_malformed_radix_prefixes() {
        for raw in ["0x", "0xZ", "0b12", "-0x1", "+0o7", "0x1.5"] {
            let result = parse_ttl_hours(raw);
            assert!(
                matches!(&result, Err(CoreError::InvalidTtl(text)) if text == raw),
                "{raw}: {result:?}"
            );
        }
    }

    #[test]
    fn integer_ttl_serializes_without_fraction() {
        let request = build("https://example.com", "", "48");
        assert_eq!(
            serde_json::to_string(&request).unwrap_or_default(),
            r#"{"url":"https://example.com","ttlHours":48}"#
        );
    }
}
