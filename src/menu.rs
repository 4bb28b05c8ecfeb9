//! Responsive hamburger menu for the nav panel.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::action::{Action, Target};

pub const OPEN_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> Vec<Action> {
        self.set_open(!self.open)
    }

    /// Close the panel; no-op if already closed.
    pub fn close(&mut self) -> Vec<Action> {
        if !self.open {
            return Vec::new();
        }
        self.set_open(false)
    }

    /// A click somewhere in the document. Closes unless it landed on the
    /// trigger or inside the panel.
    pub fn on_document_click(&mut self, inside_menu: bool) -> Vec<Action> {
        if inside_menu { Vec::new() } else { self.close() }
    }

    fn set_open(&mut self, open: bool) -> Vec<Action> {
        self.open = open;
        [Target::Hamburger, Target::NavMenu]
            .into_iter()
            .map(|target| {
                if open { Action::add_class(target, OPEN_CLASS) } else { Action::remove_class(target, OPEN_CLASS) }
            })
            .collect()
    }
}
