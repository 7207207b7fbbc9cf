//! 表单控制器
//!
//! 三个用户操作：
//! - `create`: 读取输入 → `POST /api/shorten` → 写入结果字段 / 错误 toast
//! - `copy`: 结果字段 → 剪贴板（fire-and-forget）
//! - `clear`: 清空四个字段
//!
//! `create` 同时以三个阶段暴露，供事件循环型前端使用：
//!
//! ```text
//! prepare_create(&form) ──► submit(request).await ──► apply_outcome(&mut form, ..)
//!        (sync)                 (async，不借用表单)             (sync)
//! ```

use std::sync::Arc;

use shortstack_client::{ShortenApi, ShortenRequest};

use crate::request::build_request;
use crate::traits::{Clipboard, FormState, Toaster};
use crate::types::{CreateOutcome, FormField, Toast, messages};

/// 表单控制器
///
/// 不持有表单：表单和 toaster 在每次操作时传入。克隆开销很小（两个 `Arc`），
/// 前端可以把克隆移入异步任务。
#[derive(Clone)]
pub struct FormController {
    api: Arc<dyn ShortenApi>,
    clipboard: Arc<dyn Clipboard>,
}

impl FormController {
    pub fn new(api: Arc<dyn ShortenApi>, clipboard: Arc<dyn Clipboard>) -> Self {
        Self { api, clipboard }
    }

    /// 创建短链接
    ///
    /// 恰好产生一条 toast。只有成功时才修改结果字段。
    pub async fn create<F, T>(&self, form: &mut F, toaster: &mut T)
    where
        F: FormState,
        T: Toaster,
    {
        let outcome = match Self::prepare_create(form) {
            Ok(request) => self.submit(request).await,
            Err(outcome) => outcome,
        };
        Self::apply_outcome(form, toaster, outcome);
    }

    /// 阶段一：读取表单并构造请求
    ///
    /// 输入无效时返回 [`CreateOutcome::Invalid`]，不应发送请求。
    pub fn prepare_create<F: FormState>(form: &F) -> Result<ShortenRequest, CreateOutcome> {
        build_request(
            &form.value(FormField::LongUrl),
            &form.value(FormField::Alias),
            &form.value(FormField::TtlHours),
        )
        .map_err(|e| {
            log::warn!("Create rejected locally: {e}");
            CreateOutcome::Invalid {
                message: messages::INVALID_TTL.to_string(),
            }
        })
    }

    /// 阶段二：发送请求（单次，不重试）
    pub async fn submit(&self, request: ShortenRequest) -> CreateOutcome {
        let outcome = CreateOutcome::from_reply(self.api.shorten(&request).await);

        match &outcome {
            CreateOutcome::Created { short_link } => {
                log::info!("Short link created: {short_link}");
            }
            CreateOutcome::Rejected { status, message } => {
                log::warn!("Shorten rejected (HTTP {status}): {message}");
            }
            CreateOutcome::TransportFailed { detail } => {
                log::error!("Shorten request failed: {detail}");
            }
            CreateOutcome::Failed { message } => {
                log::error!("Shorten request failed: {message}");
            }
            CreateOutcome::Invalid { .. } => {}
        }

        outcome
    }

    /// 阶段三：把结果写回表单
    pub fn apply_outcome<F, T>(form: &mut F, toaster: &mut T, outcome: CreateOutcome)
    where
        F: FormState,
        T: Toaster,
    {
        let toast = outcome.toast();
        if let CreateOutcome::Created { short_link } = outcome {
            form.set_value(FormField::Result, &short_link);
        }
        show_toast(form, toaster, toast);
    }

    /// 复制结果到剪贴板
    ///
    /// 写入不等待完成；只要结果非空就提示 "Copied!"。
    pub fn copy<F, T>(&self, form: &mut F, toaster: &mut T)
    where
        F: FormState,
        T: Toaster,
    {
        let text = form.value(FormField::Result);
        if text.is_empty() {
            show_toast(form, toaster, Toast::info(messages::NOTHING_TO_COPY));
            return;
        }

        self.clipboard.write_text(text);
        show_toast(form, toaster, Toast::success(messages::COPIED));
    }

    /// 清空输入和结果
    pub fn clear<F, T>(form: &mut F, toaster: &mut T)
    where
        F: FormState,
        T: Toaster,
    {
        for field in FormField::CLEARABLE {
            form.clear_value(field);
        }
        show_toast(form, toaster, Toast::info(messages::CLEARED));
    }
}

/// 写入 toast 字段并交给 toaster 显示
fn show_toast<F, T>(form: &mut F, toaster: &mut T, toast: Toast)
where
    F: FormState,
    T: Toaster,
{
    form.set_value(FormField::Toast, &toast.message);
    toaster.show(toast);
}
