//! In-memory host used by unit tests.
//!
//! Models just enough of the page to assert on: class sets, inline styles,
//! attributes and text per target, plus a log of every outward call.

use std::collections::{HashMap, HashSet};

use crate::action::{ScrollDestination, Target, Toast, ToastId, Watch};
use crate::config::BannerLine;
use crate::host::{ClipboardWriter, Console, Dom, PrintDialog, Viewport, VisibilityObserver};

#[derive(Debug, Default)]
pub(crate) struct FakeHost {
    pub classes: HashMap<Target, HashSet<String>>,
    pub styles: HashMap<(Target, String), String>,
    pub attributes: HashMap<(Target, String), String>,
    pub texts: HashMap<Target, String>,
    pub toasts: Vec<Toast>,
    pub print_button: Option<String>,
    pub scrolls: Vec<ScrollDestination>,
    pub scrolled_into_view: Vec<String>,
    pub clipboard_writes: Vec<(usize, String)>,
    pub observed: Vec<(Target, Watch)>,
    pub prints: usize,
    pub banners: Vec<Vec<BannerLine>>,
}

impl FakeHost {
    pub fn has_class(&self, target: Target, class: &str) -> bool {
        self.classes.get(&target).is_some_and(|set| set.contains(class))
    }

    pub fn style(&self, target: Target, property: &str) -> Option<&str> {
        self.styles.get(&(target, property.to_owned())).map(String::as_str)
    }

    pub fn attribute(&self, target: Target, name: &str) -> Option<&str> {
        self.attributes.get(&(target, name.to_owned())).map(String::as_str)
    }

    pub fn text(&self, target: Target) -> Option<&str> {
        self.texts.get(&target).map(String::as_str)
    }
}

impl Dom for FakeHost {
    fn add_class(&mut self, target: Target, class: &str) {
        self.classes.entry(target).or_default().insert(class.to_owned());
    }

    fn remove_class(&mut self, target: Target, class: &str) {
        if let Some(set) = self.classes.get_mut(&target) {
            set.remove(class);
        }
    }

    fn set_style(&mut self, target: Target, property: &str, value: &str) {
        self.styles.insert((target, property.to_owned()), value.to_owned());
    }

    fn set_attribute(&mut self, target: Target, name: &str, value: &str) {
        self.attributes.insert((target, name.to_owned()), value.to_owned());
    }

    fn set_text(&mut self, target: Target, text: &str) {
        self.texts.insert(target, text.to_owned());
    }

    fn mount_toast(&mut self, toast: &Toast) {
        self.toasts.push(toast.clone());
    }

    fn remove_toast(&mut self, id: ToastId) {
        self.toasts.retain(|t| t.id != id);
    }

    fn mount_print_button(&mut self, label: &str) {
        self.print_button = Some(label.to_owned());
    }
}

impl Viewport for FakeHost {
    fn scroll_to(&mut self, destination: ScrollDestination) {
        self.scrolls.push(destination);
    }

    fn scroll_into_view(&mut self, section_id: &str) {
        self.scrolled_into_view.push(section_id.to_owned());
    }
}

impl ClipboardWriter for FakeHost {
    fn write_text(&mut self, block: usize, text: &str) {
        self.clipboard_writes.push((block, text.to_owned()));
    }
}

impl VisibilityObserver for FakeHost {
    fn observe(&mut self, target: Target, watch: Watch) {
        self.observed.push((target, watch));
    }
}

impl PrintDialog for FakeHost {
    fn print(&mut self) {
        self.prints += 1;
    }
}

impl Console for FakeHost {
    fn banner(&mut self, lines: &[BannerLine]) {
        self.banners.push(lines.to_vec());
    }
}
