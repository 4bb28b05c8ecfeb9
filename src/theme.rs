//! Light/dark preference: reading, applying, and toggling.
//!
//! The stored value is read once per load. Anything other than `"light"`
//! (including a missing or unreadable entry) means dark, so a broken storage
//! backend degrades to the default theme instead of failing.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::action::{Action, Target};
use crate::consts::{ACCENT_GREEN, ACCENT_PURPLE};
use crate::host::PreferenceStore;

/// Class on `<html>` set before first paint when light mode is stored.
pub const LOADING_CLASS: &str = "light-mode-loading";

/// Class on `<body>` while light mode is active.
pub const LIGHT_CLASS: &str = "light-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Interpret a stored preference value.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph shown on the toggle: the mode you would switch to.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }

    #[must_use]
    pub fn notification_text(self) -> &'static str {
        match self {
            Self::Light => "☀️ Light Mode",
            Self::Dark => "🌙 Dark Mode",
        }
    }

    #[must_use]
    pub fn notification_background(self) -> &'static str {
        match self {
            Self::Light => ACCENT_GREEN,
            Self::Dark => ACCENT_PURPLE,
        }
    }
}

/// Actions to run before first paint so a stored light theme never flashes dark.
#[must_use]
pub fn pre_paint_actions(store: &dyn PreferenceStore, key: &str) -> Vec<Action> {
    match Theme::from_stored(store.load(key).as_deref()) {
        Theme::Light => vec![Action::add_class(Target::Root, LOADING_CLASS)],
        Theme::Dark => Vec::new(),
    }
}

/// Synchronous inline `<script>` body for `<head>` that applies the loading
/// class before first paint.
///
/// The WASM module loads asynchronously, so only a classic inline script runs
/// early enough to prevent a dark flash. Storage errors are swallowed in JS
/// and leave the page dark. The key is emitted as a JSON string literal.
#[must_use]
pub fn pre_paint_script(key: &str) -> String {
    // `</` would close the surrounding script element.
    let key = serde_json::Value::from(key).to_string().replace("</", "<\\/");
    format!(
        "(function(){{try{{if(localStorage.getItem({key})===\"{light}\"){{\
         document.documentElement.classList.add(\"{LOADING_CLASS}\");}}}}catch(e){{}}}})();",
        light = Theme::Light.as_str(),
    )
}

/// Current theme plus the storage key it persists under.
#[derive(Debug, Clone)]
pub struct ThemeManager {
    key: String,
    current: Theme,
}

impl ThemeManager {
    /// Read the stored preference once.
    #[must_use]
    pub fn load(store: &dyn PreferenceStore, key: &str) -> Self {
        let current = Theme::from_stored(store.load(key).as_deref());
        log::debug!("theme preference loaded: {}", current.as_str());
        Self { key: key.to_owned(), current }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Sync the page with the loaded preference. Dark is the markup default.
    #[must_use]
    pub fn initial_actions(&self) -> Vec<Action> {
        match self.current {
            Theme::Light => vec![
                Action::add_class(Target::Body, LIGHT_CLASS),
                Action::remove_class(Target::Root, LOADING_CLASS),
                Action::text(Target::ThemeIcon, Theme::Light.icon()),
            ],
            Theme::Dark => Vec::new(),
        }
    }

    /// Flip the theme and persist it. A failed write keeps the in-page switch.
    pub fn toggle(&mut self, store: &mut dyn PreferenceStore) -> (Theme, Vec<Action>) {
        let next = self.current.toggled();
        self.current = next;
        if let Err(e) = store.save(&self.key, next.as_str()) {
            log::debug!("theme preference not persisted: {e}");
        }
        log::debug!("theme toggled to {}", next.as_str());

        let body_class = match next {
            Theme::Light => Action::add_class(Target::Body, LIGHT_CLASS),
            Theme::Dark => Action::remove_class(Target::Body, LIGHT_CLASS),
        };
        (next, vec![body_class, Action::text(Target::ThemeIcon, next.icon())])
    }
}
