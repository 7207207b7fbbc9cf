//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod form;               // 输入框编辑子消息处理
//!
//!         pub fn update(app: &mut App, backend: &mut CoreService, msg: AppMessage) {...}
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 表单操作
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Copy / Clear 是同步的，直接交给 FormController：
//!
//!         backend.controller().copy(&mut app.form, &mut app.toast);
//!         FormController::clear(&mut app.form, &mut app.toast);
//!
//!     Create 分三个阶段，网络请求不阻塞主循环：
//!
//!         Create
//!           │ prepare_create(&app.form)
//!           ├── Err(outcome) ──▶ apply_outcome（TTL 无效，不发请求）
//!           └── Ok(request)  ──▶ pending += 1; backend.spawn_create(request)
//!                                     ⋮
//!         Tick
//!           └── BackendEvent::CreateFinished(outcome)
//!                   ──▶ pending -= 1; apply_outcome(&mut app.form, &mut app.toast, outcome)
//!
//!     多个请求同时在途时，后应用的结果覆盖结果字段。
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod form;

use std::time::Instant;

use shortstack_core::FormController;

use crate::backend::{AppConfig, BackendEvent, CoreService};
use crate::i18n::{self, t};
use crate::message::AppMessage;
use crate::model::{App, ServiceState};
use crate::view::theme::{self, Theme};

/// 处理应用消息，更新状态
pub fn update(app: &mut App, backend: &mut CoreService, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::NextField => {
            app.focus = app.focus.next();
        }

        AppMessage::PrevField => {
            app.focus = app.focus.prev();
        }

        AppMessage::Form(form_msg) => {
            form::update(app, form_msg);
        }

        AppMessage::Create => match FormController::prepare_create(&app.form) {
            Ok(request) => {
                app.pending += 1;
                backend.spawn_create(request);
            }
            Err(outcome) => FormController::apply_outcome(&mut app.form, &mut app.toast, outcome),
        },

        AppMessage::Copy => {
            backend.controller().copy(&mut app.form, &mut app.toast);
        }

        AppMessage::Clear => {
            FormController::clear(&mut app.form, &mut app.toast);
        }

        AppMessage::Refresh => {
            app.service = ServiceState::Checking;
            app.set_status(t().settings.refreshing);
            backend.spawn_status_check();
        }

        AppMessage::ToggleLanguage => {
            let lang = i18n::current_language().next();
            i18n::set_language(lang);
            // 状态文本在切换后读取，显示为新语言
            app.set_status(format!(
                "{}: {}",
                t().settings.language_changed,
                lang.display_name()
            ));
            save_settings(app, backend);
        }

        AppMessage::ToggleTheme => {
            let next = theme::current_theme().toggle();
            theme::set_theme(next);
            let name = match next {
                Theme::Dark => t().settings.theme_dark,
                Theme::Light => t().settings.theme_light,
            };
            app.set_status(format!("{}: {name}", t().settings.theme_changed));
            save_settings(app, backend);
        }

        AppMessage::ShowHelp => {
            app.show_help = true;
        }

        AppMessage::CloseHelp => {
            app.show_help = false;
        }

        AppMessage::Tick => {
            on_tick(app, backend, Instant::now());
        }

        AppMessage::Noop => {}
    }
}

/// 收取后台结果并移除到期的 toast
fn on_tick(app: &mut App, backend: &mut CoreService, now: Instant) {
    for event in backend.drain_events() {
        match event {
            BackendEvent::CreateFinished(outcome) => {
                app.pending = app.pending.saturating_sub(1);
                FormController::apply_outcome(&mut app.form, &mut app.toast, outcome);
            }
            BackendEvent::StatusChecked(result) => {
                app.service = ServiceState::from_check(result);
                app.status_message = None;
            }
        }
    }

    app.toast.expire(now);
}

/// 保存当前语言和主题，失败时只提示不中断
fn save_settings(app: &mut App, backend: &CoreService) {
    let config = backend.config();
    let mut current = config.load().unwrap_or_else(|e| {
        log::warn!("Failed to reload config before saving: {e:#}");
        AppConfig::default()
    });
    current.language = i18n::current_language().code().to_string();
    current.theme = theme::current_theme();

    if let Err(e) = config.save(&current) {
        log::error!("Failed to save config: {e:#}");
        app.set_status(t().settings.save_failed);
    }
}
