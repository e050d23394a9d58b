use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds when nothing is animating
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Smooth scrolling
    #[serde(default)]
    pub scroll: ScrollConfig,
    /// Reveal-on-scroll animation
    #[serde(default)]
    pub reveal: RevealConfig,
    /// Card expand transition
    #[serde(default)]
    pub disclosure: DisclosureConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            theme: ThemeConfig::default(),
            scroll: ScrollConfig::default(),
            reveal: RevealConfig::default(),
            disclosure: DisclosureConfig::default(),
        }
    }
}

/// Easing curve used by scroll and reveal animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Jump to the end value on the last frame
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    EaseOut,
    EaseInOut,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate scrolling instead of jumping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Duration of a line/page scroll animation
    #[serde(default = "default_scroll_duration")]
    pub animation_duration_ms: u64,
    /// Duration of an anchor navigation scroll
    #[serde(default = "default_navigate_duration")]
    pub navigate_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Lines per scroll step when smooth scrolling is off
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    /// Frame rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: true,
            animation_duration_ms: default_scroll_duration(),
            navigate_duration_ms: default_navigate_duration(),
            easing: EasingType::default(),
            scroll_lines: default_scroll_lines(),
            animation_fps: default_animation_fps(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// When false every section starts revealed
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Rows the viewport is shrunk by (top and bottom) before testing intersection
    #[serde(default = "default_reveal_margin")]
    pub margin_rows: u16,
    #[serde(default = "default_reveal_duration")]
    pub duration_ms: u64,
    /// Initial downward offset of a revealing section
    #[serde(default = "default_reveal_offset")]
    pub offset_rows: u16,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            margin_rows: default_reveal_margin(),
            duration_ms: default_reveal_duration(),
            offset_rows: default_reveal_offset(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisclosureConfig {
    #[serde(default = "default_expand_duration")]
    pub expand_duration_ms: u64,
}

impl Default for DisclosureConfig {
    fn default() -> Self {
        Self {
            expand_duration_ms: default_expand_duration(),
        }
    }
}

/// Theme name plus optional color overrides.
///
/// Accepts either `theme = "nord"` or a `[ui.theme]` table with `name` and `colors`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "ThemeRepr")]
pub struct ThemeConfig {
    pub name: String,
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ThemeRepr {
    Name(String),
    Table {
        #[serde(default = "default_theme_name")]
        name: String,
        #[serde(default)]
        colors: ThemeColorOverrides,
    },
}

impl From<ThemeRepr> for ThemeConfig {
    fn from(repr: ThemeRepr) -> Self {
        match repr {
            ThemeRepr::Name(name) => Self {
                name,
                colors: ThemeColorOverrides::default(),
            },
            ThemeRepr::Table { name, colors } => Self { name, colors },
        }
    }
}

fn default_theme_name() -> String {
    "gruvbox-dark".to_string()
}

/// Optional color overrides, each a hex string ("#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    pub bg0: Option<String>,
    pub bg1: Option<String>,
    pub fg0: Option<String>,
    pub fg1: Option<String>,
    /// Muted body text
    pub muted: Option<String>,
    /// Headings, links and the owner's name
    pub accent: Option<String>,
    /// Focus ring and expanded-card border
    pub focus: Option<String>,
    /// Tech tag and level badge background
    pub badge: Option<String>,
    /// Letter grade
    pub grade: Option<String>,
    /// In-progress grade
    pub in_progress: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-d>" (Ctrl+d), "<S-Tab>", "<CR>" (Enter), "<Esc>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    #[serde(default = "default_key_quit")]
    pub quit: String,
    #[serde(default = "default_key_scroll_down")]
    pub scroll_down: String,
    #[serde(default = "default_key_scroll_up")]
    pub scroll_up: String,
    #[serde(default = "default_key_scroll_half_down")]
    pub scroll_half_down: String,
    #[serde(default = "default_key_scroll_half_up")]
    pub scroll_half_up: String,
    #[serde(default = "default_key_scroll_page_down")]
    pub scroll_page_down: String,
    #[serde(default = "default_key_scroll_page_up")]
    pub scroll_page_up: String,
    /// Jump to top of the page
    #[serde(default = "default_key_jump_to_top")]
    pub jump_to_top: String,
    /// Jump to bottom of the page
    #[serde(default = "default_key_jump_to_bottom")]
    pub jump_to_bottom: String,
    /// Focus next link or card
    #[serde(default = "default_key_next_item")]
    pub next_item: String,
    /// Focus previous link or card
    #[serde(default = "default_key_prev_item")]
    pub prev_item: String,
    /// Follow the focused link or toggle the focused card
    #[serde(default = "default_key_activate")]
    pub activate: String,
    #[serde(default = "default_key_help")]
    pub help: String,
    /// One key per nav bar link, in nav bar order
    #[serde(default = "default_key_nav_links")]
    pub nav_links: Vec<String>,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            scroll_down: default_key_scroll_down(),
            scroll_up: default_key_scroll_up(),
            scroll_half_down: default_key_scroll_half_down(),
            scroll_half_up: default_key_scroll_half_up(),
            scroll_page_down: default_key_scroll_page_down(),
            scroll_page_up: default_key_scroll_page_up(),
            jump_to_top: default_key_jump_to_top(),
            jump_to_bottom: default_key_jump_to_bottom(),
            next_item: default_key_next_item(),
            prev_item: default_key_prev_item(),
            activate: default_key_activate(),
            help: default_key_help(),
            nav_links: default_key_nav_links(),
        }
    }
}

fn default_key_quit() -> String { "q".to_string() }
fn default_key_scroll_down() -> String { "j".to_string() }
fn default_key_scroll_up() -> String { "k".to_string() }
fn default_key_scroll_half_down() -> String { "<C-d>".to_string() }
fn default_key_scroll_half_up() -> String { "<C-u>".to_string() }
fn default_key_scroll_page_down() -> String { "<C-f>".to_string() }
fn default_key_scroll_page_up() -> String { "<C-b>".to_string() }
fn default_key_jump_to_top() -> String { "gg".to_string() }
fn default_key_jump_to_bottom() -> String { "G".to_string() }
fn default_key_next_item() -> String { "<Tab>".to_string() }
fn default_key_prev_item() -> String { "<S-Tab>".to_string() }
fn default_key_activate() -> String { "<CR>".to_string() }
fn default_key_help() -> String { "?".to_string() }
fn default_key_nav_links() -> Vec<String> {
    ["1", "2", "3", "4"].iter().map(|k| k.to_string()).collect()
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_scroll_duration() -> u64 {
    150
}

fn default_navigate_duration() -> u64 {
    450
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_animation_fps() -> u32 {
    60
}

fn default_reveal_margin() -> u16 {
    3
}

fn default_reveal_duration() -> u64 {
    600
}

fn default_reveal_offset() -> u16 {
    2
}

fn default_expand_duration() -> u64 {
    300
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/folio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Log file used while the terminal page is running
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("folio.log")
    }
}
