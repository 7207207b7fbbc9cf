//! 中文翻译 (zh-CN)

use super::keys::{
    ActionTexts, CommonTexts, FormTexts, HelpTexts, HintTexts, KeyNames, SettingsTexts,
    TitleBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Shortstack",
    },

    title_bar: TitleBarTexts {
        online: "在线",
        offline: "离线",
        checking: "检查中...",
        unknown_version: "v?",
        server_time: "服务器时间",
    },

    // ========================================================================
    // 表单页
    // ========================================================================
    form: FormTexts {
        title: "生成短链接",
        long_url: "长链接",
        long_url_placeholder: "https://example.com/a/very/long/path",
        alias: "别名（可选）",
        alias_placeholder: "my-link",
        ttl_hours: "有效期（小时，可选）",
        ttl_hours_placeholder: "24",
        result: "短链接",
        result_placeholder: "按 Enter 生成",
        pending: "进行中的请求",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            tab: "Tab/↑↓",
            enter: "Enter",
            copy: "Alt+c",
            clear: "Alt+l",
            help: "Alt+h",
            quit: "Esc",
        },
        actions: ActionTexts {
            next_field: "切换字段",
            create: "生成",
            copy: "复制",
            clear: "清空",
            help: "帮助",
            quit: "退出",
        },
    },

    settings: SettingsTexts {
        language_changed: "语言",
        theme_changed: "主题",
        theme_dark: "深色",
        theme_light: "浅色",
        refreshing: "正在检查服务...",
        save_failed: "保存设置失败",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "帮助",
        editing: "编辑",
        actions: "操作",
        app: "应用",
        editing_keys: &[
            ("Tab/↓", "下一个字段"),
            ("S-Tab/↑", "上一个字段"),
            ("Backspace", "删除字符"),
            ("Ctrl+u", "清空当前字段"),
        ],
        action_keys: &[
            ("Enter/Alt+s", "生成短链接"),
            ("Alt+c", "复制短链接"),
            ("Alt+l", "清空表单"),
        ],
        app_keys: &[
            ("Alt+r", "刷新服务状态"),
            ("Alt+g", "切换语言"),
            ("Alt+t", "切换主题"),
            ("Esc/Alt+q", "退出"),
        ],
        close_hint: "按 Esc 关闭帮助",
    },
};
