//! Scroll-driven chrome: scroll-to-top visibility, nav highlighting, the
//! body `scrolled` marker, and hero parallax.
//!
//! Sections are measured by the host on every scroll event, so this module
//! keeps no section model of its own; it only remembers what it last applied
//! to avoid rewriting unchanged classes and styles.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::action::{Action, ScrollDestination, Target};
use crate::consts::{BODY_SCROLLED_PX, NAV_ACTIVE_BORDER, PARALLAX_FACTOR, SCROLL_TOP_VISIBLE_PX, SECTION_LOOKAHEAD_PX};

/// A `section[id]` and its current top offset in document pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

impl SectionOffset {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

#[must_use]
pub fn scroll_top_visible(offset: f64) -> bool {
    offset >= SCROLL_TOP_VISIBLE_PX
}

#[must_use]
pub fn body_scrolled(offset: f64) -> bool {
    offset > BODY_SCROLLED_PX
}

/// The last section whose top, less the lookahead margin, has been passed.
#[must_use]
pub fn active_section(offset: f64, sections: &[SectionOffset]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| offset >= s.top - SECTION_LOOKAHEAD_PX)
        .map(|s| s.id.as_str())
}

#[must_use]
pub fn parallax_transform(offset: f64) -> String {
    format!("translateY({}px)", offset * PARALLAX_FACTOR)
}

/// The in-page id an anchor `href` points at (`"#intro"` → `"intro"`).
#[must_use]
pub fn anchor_fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Keyboard shortcut for a `KeyboardEvent.key` value: `t` jumps to the top,
/// `b` to the bottom, in either case.
#[must_use]
pub fn shortcut_destination(key: &str) -> Option<ScrollDestination> {
    match key {
        "t" | "T" => Some(ScrollDestination::Top),
        "b" | "B" => Some(ScrollDestination::Bottom),
        _ => None,
    }
}

/// Remembers the last applied scroll chrome.
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    nav_hrefs: Vec<String>,
    has_hero: bool,
    scroll_top_visible: Option<bool>,
    body_scrolled: Option<bool>,
    highlighted: Option<Option<usize>>,
}

impl ScrollTracker {
    #[must_use]
    pub fn new(nav_hrefs: Vec<String>, has_hero: bool) -> Self {
        Self { nav_hrefs, has_hero, ..Self::default() }
    }

    /// Index of the nav link currently highlighted, if any.
    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted.flatten()
    }

    /// Recompute scroll chrome for `offset`.
    pub fn on_scroll(&mut self, offset: f64, sections: &[SectionOffset]) -> Vec<Action> {
        let mut actions = Vec::new();

        let visible = scroll_top_visible(offset);
        if self.scroll_top_visible != Some(visible) {
            self.scroll_top_visible = Some(visible);
            actions.push(if visible {
                Action::add_class(Target::ScrollTopButton, "visible")
            } else {
                Action::remove_class(Target::ScrollTopButton, "visible")
            });
        }

        let scrolled = body_scrolled(offset);
        if self.body_scrolled != Some(scrolled) {
            self.body_scrolled = Some(scrolled);
            actions.push(if scrolled {
                Action::add_class(Target::Body, "scrolled")
            } else {
                Action::remove_class(Target::Body, "scrolled")
            });
        }

        let current = active_section(offset, sections);
        let link = current.and_then(|id| self.nav_hrefs.iter().position(|href| anchor_fragment(href) == Some(id)));
        if self.highlighted != Some(link) {
            self.highlighted = Some(link);
            for index in 0..self.nav_hrefs.len() {
                let border = if Some(index) == link { NAV_ACTIVE_BORDER } else { "none" };
                actions.push(Action::style(Target::NavLink(index), "border-bottom", border));
            }
        }

        if self.has_hero {
            actions.push(Action::style(Target::Hero, "transform", parallax_transform(offset)));
        }

        actions
    }
}
