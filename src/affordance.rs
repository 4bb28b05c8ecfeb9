//! Copy-to-clipboard code boxes, the floating print button, and hover
//! feedback on timeline items.

#[cfg(test)]
#[path = "affordance_test.rs"]
mod affordance_test;

use crate::action::{Action, Target};
use crate::consts::{ACCENT_PURPLE, MOBILE_BREAKPOINT_PX};

pub const COPY_TITLE: &str = "Click to copy code";
pub const COPY_CONFIRMATION: &str = "✓ Code copied!";
pub const PRINT_LABEL: &str = "🖨️ Print";

/// Mark every code box as clickable.
#[must_use]
pub fn code_box_setup(count: usize) -> Vec<Action> {
    (0..count)
        .flat_map(|index| {
            let target = Target::CodeBox(index);
            [
                Action::style(target, "cursor", "pointer"),
                Action::SetAttribute { target, name: "title", value: COPY_TITLE },
            ]
        })
        .collect()
}

/// Print button placement for the current viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintLayout {
    Desktop,
    Mobile,
}

impl PrintLayout {
    #[must_use]
    pub fn for_width(width: f64) -> Self {
        if width <= MOBILE_BREAKPOINT_PX { Self::Mobile } else { Self::Desktop }
    }

    fn styles(self) -> [(&'static str, &'static str); 4] {
        match self {
            Self::Desktop => [
                ("bottom", "100px"),
                ("right", "30px"),
                ("padding", "0.8rem 1.5rem"),
                ("font-size", "1rem"),
            ],
            Self::Mobile => [
                ("bottom", "80px"),
                ("right", "15px"),
                ("padding", "0.6rem 1rem"),
                ("font-size", "0.85rem"),
            ],
        }
    }
}

const PRINT_BASE_STYLES: [(&str, &str); 9] = [
    ("position", "fixed"),
    ("background", "white"),
    ("color", ACCENT_PURPLE),
    ("border", "2px solid #667eea"),
    ("border-radius", "25px"),
    ("font-weight", "bold"),
    ("cursor", "pointer"),
    ("z-index", "999"),
    ("transition", "all 0.3s"),
];

/// The injected print button and the layout last applied to it.
#[derive(Debug, Clone, Default)]
pub struct PrintButton {
    layout: Option<PrintLayout>,
}

impl PrintButton {
    #[must_use]
    pub fn layout(&self) -> Option<PrintLayout> {
        self.layout
    }

    /// Inject the button sized for `width`.
    pub fn mount(&mut self, width: f64) -> Vec<Action> {
        let layout = PrintLayout::for_width(width);
        self.layout = Some(layout);
        let mut actions = vec![Action::MountPrintButton { label: PRINT_LABEL }];
        actions.extend(PRINT_BASE_STYLES.iter().map(|&(p, v)| Action::style(Target::PrintButton, p, v)));
        actions.extend(layout_actions(layout));
        actions
    }

    /// Re-apply placement if the breakpoint was crossed.
    pub fn on_resize(&mut self, width: f64) -> Vec<Action> {
        let layout = PrintLayout::for_width(width);
        if self.layout.is_none() || self.layout == Some(layout) {
            return Vec::new();
        }
        self.layout = Some(layout);
        layout_actions(layout).collect()
    }

    #[must_use]
    pub fn hover(entered: bool) -> Vec<Action> {
        let (background, color) = if entered { (ACCENT_PURPLE, "white") } else { ("white", ACCENT_PURPLE) };
        vec![
            Action::style(Target::PrintButton, "background", background),
            Action::style(Target::PrintButton, "color", color),
        ]
    }
}

fn layout_actions(layout: PrintLayout) -> impl Iterator<Item = Action> {
    layout.styles().into_iter().map(|(p, v)| Action::style(Target::PrintButton, p, v))
}

/// Lift a timeline card on hover and settle it on leave.
#[must_use]
pub fn timeline_hover(index: usize, entered: bool) -> Vec<Action> {
    let target = Target::TimelineContent(index);
    let (transform, shadow) = if entered {
        ("scale(1.02)", "0 10px 40px rgba(0, 0, 0, 0.2)")
    } else {
        ("scale(1)", "0 4px 20px rgba(0, 0, 0, 0.1)")
    };
    vec![Action::style(target, "transform", transform), Action::style(target, "box-shadow", shadow)]
}
