//! Browser capabilities the controller depends on, and action dispatch.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each trait is one browser service: preference storage, the visual DOM
//! tree, window scrolling, the clipboard, intersection observation, the print
//! dialog, and the console. The `web` module implements all of them with
//! `web-sys`; tests substitute in-memory fakes. Missing elements are the
//! host's concern and are skipped silently.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

#[cfg(test)]
#[path = "fake.rs"]
pub(crate) mod fake;

use std::collections::HashMap;

use crate::action::{Action, ScrollDestination, Target, Toast, ToastId, Watch};
use crate::config::BannerLine;
use crate::error::StoreError;

/// Persistent key-value storage for the theme preference.
pub trait PreferenceStore {
    /// Read `key`. Unavailable storage reads as `None`.
    fn load(&self, key: &str) -> Option<String>;

    /// Write `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when storage is unavailable or rejects the write.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Mutations on the page's visual tree.
pub trait Dom {
    fn add_class(&mut self, target: Target, class: &str);
    fn remove_class(&mut self, target: Target, class: &str);
    fn set_style(&mut self, target: Target, property: &str, value: &str);
    fn set_attribute(&mut self, target: Target, name: &str, value: &str);
    fn set_text(&mut self, target: Target, text: &str);
    fn mount_toast(&mut self, toast: &Toast);
    fn remove_toast(&mut self, id: ToastId);
    fn mount_print_button(&mut self, label: &str);
}

/// Animated window scrolling.
pub trait Viewport {
    fn scroll_to(&mut self, destination: ScrollDestination);
    fn scroll_into_view(&mut self, section_id: &str);
}

/// Asynchronous clipboard writes.
///
/// Completion is reported back through
/// [`crate::controller::PageController::clipboard_settled`] with the same `block`.
pub trait ClipboardWriter {
    fn write_text(&mut self, block: usize, text: &str);
}

/// Intersection-based visibility notifications.
pub trait VisibilityObserver {
    fn observe(&mut self, target: Target, watch: Watch);
}

pub trait PrintDialog {
    fn print(&mut self);
}

pub trait Console {
    fn banner(&mut self, lines: &[BannerLine]);
}

/// Everything [`apply`] needs.
pub trait Host: Dom + Viewport + ClipboardWriter + VisibilityObserver + PrintDialog + Console {}

impl<T> Host for T where T: Dom + Viewport + ClipboardWriter + VisibilityObserver + PrintDialog + Console {}

/// Perform `actions` in order against `host`.
pub fn apply<H: Host + ?Sized>(host: &mut H, actions: impl IntoIterator<Item = Action>) {
    for action in actions {
        match action {
            Action::AddClass { target, class } => host.add_class(target, class),
            Action::RemoveClass { target, class } => host.remove_class(target, class),
            Action::SetStyle { target, property, value } => host.set_style(target, property, &value),
            Action::SetAttribute { target, name, value } => host.set_attribute(target, name, value),
            Action::SetText { target, text } => host.set_text(target, &text),
            Action::Observe { target, watch } => host.observe(target, watch),
            Action::ScrollTo(destination) => host.scroll_to(destination),
            Action::ScrollIntoView { section_id } => host.scroll_into_view(&section_id),
            Action::WriteClipboard { block, text } => host.write_text(block, &text),
            Action::MountToast(toast) => host.mount_toast(&toast),
            Action::RemoveToast(id) => host.remove_toast(id),
            Action::MountPrintButton { label } => host.mount_print_button(label),
            Action::Print => host.print(),
            Action::Banner(lines) => host.banner(&lines),
        }
    }
}

/// In-memory [`PreferenceStore`] for non-browser hosts and tests.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    available: bool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self { entries: HashMap::new(), available: true }
    }
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.entries.insert(key.to_owned(), value.to_owned());
        store
    }

    /// A store that behaves like disabled browser storage.
    #[must_use]
    pub fn unavailable() -> Self {
        Self { entries: HashMap::new(), available: false }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        if !self.available {
            return None;
        }
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if !self.available {
            return Err(StoreError::Unavailable);
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
