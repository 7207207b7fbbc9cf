//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，App 的初始状态为：
//!
//! App {
//!
//!     should_quit: false,                     // 决定应用是否应该退出
//!     focus: InputFocus::LongUrl,             // 当前编辑哪个输入框
//!     form: FormModel { .. 全部为空 },          // 四个字段 + toast 文本
//!     toast: ToastState { current: None },    // 当前显示的 toast
//!     pending: 0,                             // 尚未返回的创建请求数
//!     service: ServiceState::Checking,        // main 中已发出第一次状态探测
//!     base_url,                               // 标题栏显示的服务地址
//!     show_help: false,
//!     status_message: None,                   // 状态栏消息
//!
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))       // 渲染 UI
//!     if app.should_quit { break }                   // 检查 APP 是否应该退出
//!     if let Some(event) = poll_event() {            // 轮询获取输入，在此最多等待 100ms
//!         let msg = handle_event(event, &app);           // 接收原始事件并分发消息
//!         update::update(&mut app, &mut backend, msg)    // 更新状态
//!     }
//!     update::update(&mut app, &mut backend, Tick)   // 收取后台结果、移除到期 toast
//! }
//!
//!
//! 没有按键时 poll 超时返回 None，Tick 仍然每轮执行一次，
//! 所以网络请求的结果和 toast 的消失最多延迟约 100 ms 显示。

use std::time::Duration;

use anyhow::Result;

use crate::backend::CoreService;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询超时
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, backend: &mut CoreService) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 轮询事件（100ms 超时）
        if let Some(event) = event::poll_event(POLL_TIMEOUT)? {
            // 4. 处理事件，获取消息
            let msg = event::handle_event(event, app);

            // 5. 更新状态
            update::update(app, backend, msg);
        }

        // 6. 后台结果与 toast 计时
        update::update(app, backend, AppMessage::Tick);
    }

    Ok(())
}
