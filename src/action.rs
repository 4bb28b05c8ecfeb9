//! Visual mutations returned by the controller for the host to perform.
//!
//! The controller never touches the page directly. Each event handler returns
//! a `Vec<Action>` addressed to [`Target`]s, and [`crate::host::apply`]
//! dispatches them onto the browser capabilities.

use crate::config::BannerLine;

/// An element (or element group member) the controller can address.
///
/// Indexed variants refer to document order within the group the host
/// measured at load time (see [`crate::controller::PageLayout`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The `<html>` element.
    Root,
    /// The `<body>` element.
    Body,
    /// `.theme-icon` inside the theme toggle.
    ThemeIcon,
    /// `#scrollTop`.
    ScrollTopButton,
    /// `.nav-menu a`, by index.
    NavLink(usize),
    /// `.hero-section`.
    Hero,
    /// An element matching one of the reveal selectors, by index.
    Animatable(usize),
    /// `.conclusion-section`.
    Conclusion,
    /// `.stat-value`, by index.
    Stat(usize),
    /// `.code-box`, by index.
    CodeBox(usize),
    /// `.mermaid`, by index.
    Diagram(usize),
    /// `.timeline-content` of the n-th `.timeline-item`.
    TimelineContent(usize),
    /// `#hamburger`.
    Hamburger,
    /// `#navMenu`.
    NavMenu,
    /// The injected print button.
    PrintButton,
    /// A mounted notification.
    Toast(ToastId),
}

/// Identifier for a mounted notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(pub u64);

/// A transient fixed-position notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub text: String,
    pub background: &'static str,
    /// Distance from the viewport top, in CSS pixels.
    pub top_px: u32,
    pub padding: &'static str,
}

/// Where an animated window scroll should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDestination {
    Top,
    Bottom,
}

/// Which controller entry point an observed element reports to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchKind {
    /// Reports to `PageController::on_reveal_intersections`.
    Reveal,
    /// Reports to `PageController::on_conclusion_intersection`.
    Conclusion,
}

/// Intersection observation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Watch {
    pub kind: WatchKind,
    pub threshold: f64,
    pub root_margin: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddClass { target: Target, class: &'static str },
    RemoveClass { target: Target, class: &'static str },
    SetStyle { target: Target, property: &'static str, value: String },
    SetAttribute { target: Target, name: &'static str, value: &'static str },
    SetText { target: Target, text: String },
    Observe { target: Target, watch: Watch },
    ScrollTo(ScrollDestination),
    ScrollIntoView { section_id: String },
    WriteClipboard { block: usize, text: String },
    MountToast(Toast),
    RemoveToast(ToastId),
    MountPrintButton { label: &'static str },
    Print,
    Banner(Vec<BannerLine>),
}

impl Action {
    pub(crate) fn add_class(target: Target, class: &'static str) -> Self {
        Self::AddClass { target, class }
    }

    pub(crate) fn remove_class(target: Target, class: &'static str) -> Self {
        Self::RemoveClass { target, class }
    }

    pub(crate) fn style(target: Target, property: &'static str, value: impl Into<String>) -> Self {
        Self::SetStyle { target, property, value: value.into() }
    }

    pub(crate) fn text(target: Target, text: impl Into<String>) -> Self {
        Self::SetText { target, text: text.into() }
    }
}
