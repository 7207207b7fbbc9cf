//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **表单页内容归 `form.*`**
//! 3. **跨组件复用归 `common.*`**
//! 4. **键盘提示归 `hints.*`**：按键名称和操作提示
//!
//! 控制器产生的 toast 文本不在这里：它们是固定的英文文本。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 标题栏文本
    pub title_bar: TitleBarTexts,
    /// 表单页文本
    pub form: FormTexts,
    /// 键盘提示（按键名称 + 动作词）
    pub hints: HintTexts,
    /// 设置切换提示
    pub settings: SettingsTexts,
    /// 帮助弹窗文本
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
}

// ============================================================================
// 标题栏
// ============================================================================

/// 标题栏中的服务状态
pub struct TitleBarTexts {
    pub online: &'static str,
    pub offline: &'static str,
    pub checking: &'static str,
    pub unknown_version: &'static str,
    /// 服务端时间前缀，后接 `HH:MM UTC`
    pub server_time: &'static str,
}

// ============================================================================
// 表单页
// ============================================================================

pub struct FormTexts {
    pub title: &'static str,
    pub long_url: &'static str,
    pub long_url_placeholder: &'static str,
    pub alias: &'static str,
    pub alias_placeholder: &'static str,
    pub ttl_hours: &'static str,
    pub ttl_hours_placeholder: &'static str,
    pub result: &'static str,
    pub result_placeholder: &'static str,
    /// 有请求在途时显示，后接数量
    pub pending: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

pub struct HintTexts {
    pub keys: KeyNames,
    pub actions: ActionTexts,
}

/// 按键名称
pub struct KeyNames {
    pub tab: &'static str,
    pub enter: &'static str,
    pub copy: &'static str,
    pub clear: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

/// 动作词
pub struct ActionTexts {
    pub next_field: &'static str,
    pub create: &'static str,
    pub copy: &'static str,
    pub clear: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 设置
// ============================================================================

pub struct SettingsTexts {
    pub language_changed: &'static str,
    pub theme_changed: &'static str,
    pub theme_dark: &'static str,
    pub theme_light: &'static str,
    pub refreshing: &'static str,
    pub save_failed: &'static str,
}

// ============================================================================
// 帮助
// ============================================================================

pub struct HelpTexts {
    pub title: &'static str,
    pub editing: &'static str,
    pub actions: &'static str,
    pub app: &'static str,
    /// (按键, 说明)
    pub editing_keys: &'static [(&'static str, &'static str)],
    pub action_keys: &'static [(&'static str, &'static str)],
    pub app_keys: &'static [(&'static str, &'static str)],
    pub close_hint: &'static str,
}
