use std::collections::HashSet;

/// Canonical names and aliases of applications that are always worth
/// surfacing, even for minimized or title-less windows.
///
/// Matching is bidirectional case-insensitive substring containment,
/// so OS-reported process names that abbreviate a canonical name
/// ("Code") or extend it ("Visual Studio Code - Insiders") both hit.
/// Short aliases ("ai", "ps") can substring-match unrelated app names;
/// kept as-is because the matching contract tolerates the occasional
/// false positive over a missed editor window.
const DEFAULT_IMPORTANT_APPS: &[&str] = &[
    "GitHub Desktop",
    "github",
    "GitHub",
    "Google Chrome",
    "Chrome",
    "chrome",
    "Visual Studio Code",
    "Code",
    "VSCode",
    "code",
    "Visual Studio Code - Insiders",
    "Slack",
    "slack",
    "Microsoft Teams",
    "Teams",
    "msteams",
    "Figma",
    "figma",
    "Discord",
    "discord",
    "Notion",
    "notion",
    "Safari",
    "safari",
    "Firefox",
    "firefox",
    "Mozilla Firefox",
    "Terminal",
    "terminal",
    "iTerm2",
    "iTerm",
    "iTerm 2",
    "iterm",
    "iterm2",
    "Finder",
    "finder",
    "WeChat",
    "wechat",
    "微信",
    "Zoom",
    "zoom.us",
    "zoom",
    "Skype",
    "skype",
    "Microsoft PowerPoint",
    "PowerPoint",
    "powerpoint",
    "ppt",
    "Keynote",
    "keynote",
    "presentation",
    "Obsidian",
    "obsidian",
    "Roam Research",
    "roam",
    "roam research",
    "Logseq",
    "logseq",
    "IntelliJ IDEA",
    "intellij",
    "idea",
    "PyCharm",
    "pycharm",
    "Microsoft Edge",
    "edge",
    "Sketch",
    "sketch",
    "Adobe Photoshop",
    "photoshop",
    "ps",
    "Adobe Illustrator",
    "illustrator",
    "ai",
    "System Preferences",
    "system preferences",
    "settings",
    "系统设置",
    "Activity Monitor",
    "activity monitor",
    "Xcode",
    "xcode",
    "Spotify",
    "spotify",
    "Postman",
    "postman",
    "Cursor",
    "cursor",
    "Windsurf",
    "windsurf",
    "Claude Code",
    "claude-code",
    "claude code",
    "Kiro",
    "kiro",
    "Zen browser",
    "zen browser",
    "Microsoft Word",
    "Microsoft Excel",
    "Arc",
    "Brave",
    "Hyper",
    "Alacritty",
    "Warp",
    "SourceTree",
    "Insomnia",
    "TablePlus",
    "Sequel Pro",
    "DataGrip",
];

/// OS chrome, shell UI services, and the host application's own
/// processes. Matched by exact equality, never fuzzily.
const DEFAULT_SYSTEM_APPS: &[&str] = &[
    "Dock",
    "Spotlight",
    "Control Center",
    "Notification Center",
    "SystemUIServer",
    "Window Server",
    // The host application's own windows
    "Glance",
    "Electron",
    "ControlCenter",
    "WindowManager",
    "NotificationCenter",
    "AXVisualSupportAgent",
    "universalaccessd",
    "TextInputMenuAgent",
    "CoreLocationAgent",
    "loginwindow",
    "UserNotificationCenter",
    "CursorUIViewService",
    "LinkedNotesUIService",
    "Open and Save Panel Service",
    // Chinese-locale system app names
    "程序坞",
    "通知中心",
    "聚焦",
    "墙纸",
    "微信输入法",
    "自动填充",
    "隐私与安全性",
];

/// Curated catalog of well-known application names and aliases used to
/// classify windows as important.
#[derive(Debug, Clone)]
pub struct ImportanceCatalog {
    entries: Vec<String>,
}

impl ImportanceCatalog {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Whether `app_name` belongs to a well-known application.
    ///
    /// For each catalog entry the match is bidirectional substring
    /// containment after case folding; the first matching entry wins.
    /// The result depends only on `app_name` and the catalog contents.
    pub fn is_important(&self, app_name: &str) -> bool {
        let app_name_lower = app_name.to_lowercase();

        self.entries.iter().any(|entry| {
            let entry_lower = entry.to_lowercase();
            app_name_lower.contains(&entry_lower) || entry_lower.contains(&app_name_lower)
        })
    }
}

impl Default for ImportanceCatalog {
    fn default() -> Self {
        Self::new(
            DEFAULT_IMPORTANT_APPS
                .iter()
                .map(|entry| entry.to_string())
                .collect(),
        )
    }
}

/// Window sources excluded from every snapshot, matched by exact name.
#[derive(Debug, Clone)]
pub struct SystemExclusions {
    names: HashSet<String>,
}

impl SystemExclusions {
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        Self {
            names: names.into_iter().collect(),
        }
    }

    pub fn contains(&self, app_name: &str) -> bool {
        self.names.contains(app_name)
    }
}

impl Default for SystemExclusions {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_APPS.iter().map(|name| name.to_string()))
    }
}
