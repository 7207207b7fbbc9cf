//! 创建短链接的结果

use shortstack_client::{ApiReply, ClientError};

use super::toast::{Toast, messages};

/// 一次 create 的最终结果
///
/// 每个变体恰好对应一条 toast，只有 [`Created`](Self::Created) 会修改结果字段。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// 服务返回 2xx
    Created {
        /// `shortUrl`，缺省时为 `code`，都缺省时为空串
        short_link: String,
    },
    /// 服务返回非 2xx
    Rejected { status: u16, message: String },
    /// 输入未通过本地校验，未发送请求
    Invalid { message: String },
    /// 请求未完成（连接失败、超时）
    TransportFailed { detail: String },
    /// 其它客户端错误
    Failed { message: String },
}

impl CreateOutcome {
    /// 将一次 `shorten` 调用的结果映射为 outcome
    pub fn from_reply(result: Result<ApiReply, ClientError>) -> Self {
        match result {
            Ok(reply) if reply.is_success() => Self::Created {
                short_link: reply.body.short_link().unwrap_or_default().to_string(),
            },
            Ok(reply) => Self::Rejected {
                status: reply.status,
                message: reply
                    .body
                    .error_message()
                    .map_or_else(|| format!("Error {}", reply.status), str::to_string),
            },
            Err(e) if e.is_transport() => Self::TransportFailed { detail: e.detail() },
            Err(e) => Self::Failed {
                message: e.to_string(),
            },
        }
    }

    /// 该结果对应的 toast
    pub fn toast(&self) -> Toast {
        match self {
            Self::Created { .. } => Toast::success(messages::CREATED),
            Self::Rejected { message, .. }
            | Self::Invalid { message }
            | Self::Failed { message } => Toast::error(message.as_str()),
            Self::TransportFailed { detail } => {
                Toast::error(format!("{}: {detail}", messages::NETWORK_ERROR_PREFIX))
            }
        }
    }
}
