//! Page configuration parsed from an embedded JSON blob.
//!
//! A static page has no environment, so the markup may carry
//! `<script type="application/json" id="presentation-config">` with any
//! subset of [`PageConfig`] fields. Absent fields take the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ConfigError;

/// Element id of the embedded config blob.
pub const CONFIG_ELEMENT_ID: &str = "presentation-config";

pub const DEFAULT_STORAGE_KEY: &str = "theme";

pub const DEFAULT_REVEAL_SELECTORS: [&str; 6] = [
    ".content-card",
    ".feature-box",
    ".db-table-card",
    ".solution-item",
    ".objective-box",
    ".learning-card",
];

/// One styled console line (`%c` text plus CSS).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BannerLine {
    pub text: String,
    pub style: String,
}

impl BannerLine {
    fn new(text: &str, style: &str) -> Self {
        Self { text: text.to_owned(), style: style.to_owned() }
    }
}

/// Feature switches and selectors for one page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Light/dark toggle with persisted preference.
    pub theme_toggle: bool,
    /// Responsive hamburger menu for the nav panel.
    pub hamburger_menu: bool,
    /// Storage key holding the theme preference.
    pub storage_key: String,
    /// Selectors whose elements reveal on scroll.
    pub reveal_selectors: Vec<String>,
    /// Console branding printed at load.
    pub banner: Vec<BannerLine>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_toggle: true,
            hamburger_menu: false,
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            reveal_selectors: DEFAULT_REVEAL_SELECTORS.iter().map(|s| (*s).to_owned()).collect(),
            banner: default_banner(),
        }
    }
}

impl PageConfig {
    /// Parse a JSON config blob. Whitespace-only input yields the defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Comma-joined selector list for `querySelectorAll`.
    #[must_use]
    pub fn reveal_selector_list(&self) -> String {
        self.reveal_selectors.join(", ")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.theme_toggle && self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage_key must not be empty".into()));
        }
        if self.reveal_selectors.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::Invalid("reveal_selectors must not contain empty selectors".into()));
        }
        Ok(())
    }
}

fn default_banner() -> Vec<BannerLine> {
    vec![
        BannerLine::new(
            "🎓 Student Attendance Management System",
            "color: #667eea; font-size: 24px; font-weight: bold;",
        ),
        BannerLine::new("Professional Presentation Mode", "color: #764ba2; font-size: 16px;"),
        BannerLine::new("Government Polytechnic College - 2026", "color: #10b981; font-size: 14px;"),
        BannerLine::new(
            "\n📱 Mobile: React Native + Expo\n🗄️ Backend: Supabase + PostgreSQL\n🔐 Security: Row Level Security\n",
            "color: #666; font-size: 12px;",
        ),
    ]
}
