//! 英文翻译 (en-US)

use super::keys::{
    ActionTexts, CommonTexts, FormTexts, HelpTexts, HintTexts, KeyNames, SettingsTexts,
    TitleBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Shortstack",
    },

    title_bar: TitleBarTexts {
        online: "online",
        offline: "offline",
        checking: "checking...",
        unknown_version: "v?",
        server_time: "server time",
    },

    // ========================================================================
    // 表单页
    // ========================================================================
    form: FormTexts {
        title: "Shorten a link",
        long_url: "Long URL",
        long_url_placeholder: "https://example.com/a/very/long/path",
        alias: "Alias (optional)",
        alias_placeholder: "my-link",
        ttl_hours: "TTL hours (optional)",
        ttl_hours_placeholder: "24",
        result: "Short link",
        result_placeholder: "Press Enter to create",
        pending: "Requests in flight",
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
            next_field: "Field",
            create: "Create",
            copy: "Copy",
            clear: "Clear",
            help: "Help",
            quit: "Quit",
        },
    },

    settings: SettingsTexts {
        language_changed: "Language",
        theme_changed: "Theme",
        theme_dark: "Dark",
        theme_light: "Light",
        refreshing: "Checking service...",
        save_failed: "Failed to save settings",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "Help",
        editing: "Editing",
        actions: "Actions",
        app: "Application",
        editing_keys: &[
            ("Tab/↓", "Next field"),
            ("S-Tab/↑", "Previous field"),
            ("Backspace", "Delete character"),
            ("Ctrl+u", "Clear field"),
        ],
        action_keys: &[
            ("Enter/Alt+s", "Create short link"),
            ("Alt+c", "Copy short link"),
            ("Alt+l", "Clear form"),
        ],
        app_keys: &[
            ("Alt+r", "Refresh service status"),
            ("Alt+g", "Switch language"),
            ("Alt+t", "Switch theme"),
            ("Esc/Alt+q", "Quit"),
        ],
        close_hint: "Press Esc to close the help",
    },
};
