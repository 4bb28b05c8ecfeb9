//! One-shot reveal of content cards as they scroll into view.
//!
//! Each element moves `Hidden → Pending → Revealed`. `Pending` covers the
//! stagger delay between the intersection report and the reveal itself, so
//! an element that flickers in and out of the threshold during that window
//! is not scheduled twice.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::action::{Action, Target, Watch, WatchKind};
use crate::consts::{
    REVEAL_HIDDEN_TRANSFORM, REVEAL_ROOT_MARGIN, REVEAL_STAGGER_MS, REVEAL_THRESHOLD, REVEAL_TRANSITION,
};
use crate::timer::Millis;

pub const REVEAL_WATCH: Watch =
    Watch { kind: WatchKind::Reveal, threshold: REVEAL_THRESHOLD, root_margin: REVEAL_ROOT_MARGIN };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Pending,
    Revealed,
}

/// One intersection observer entry for an animatable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intersection {
    pub index: usize,
    pub is_intersecting: bool,
}

#[derive(Debug, Clone, Default)]
pub struct RevealAnimator {
    states: Vec<RevealState>,
}

impl RevealAnimator {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { states: vec![RevealState::Hidden; count] }
    }

    #[must_use]
    pub fn state(&self, index: usize) -> Option<RevealState> {
        self.states.get(index).copied()
    }

    /// Hide every element and register it with the observer.
    #[must_use]
    pub fn setup_actions(&self) -> Vec<Action> {
        let mut actions = Vec::with_capacity(self.states.len() * 5);
        for index in 0..self.states.len() {
            let target = Target::Animatable(index);
            actions.push(Action::add_class(target, "reveal"));
            actions.push(Action::style(target, "opacity", "0"));
            actions.push(Action::style(target, "transform", REVEAL_HIDDEN_TRANSFORM));
            actions.push(Action::style(target, "transition", REVEAL_TRANSITION));
            actions.push(Action::Observe { target, watch: REVEAL_WATCH });
        }
        actions
    }

    /// Mark newly intersecting elements pending and return `(index, delay)` pairs.
    ///
    /// The delay is the entry's position in the batch times the stagger step,
    /// counting non-intersecting entries too.
    pub fn on_intersections(&mut self, entries: &[Intersection]) -> Vec<(usize, Millis)> {
        let mut scheduled = Vec::new();
        for (position, entry) in entries.iter().enumerate() {
            if !entry.is_intersecting {
                continue;
            }
            let Some(state) = self.states.get_mut(entry.index) else {
                continue;
            };
            if *state != RevealState::Hidden {
                continue;
            }
            *state = RevealState::Pending;
            let position = Millis::try_from(position).unwrap_or(Millis::MAX / REVEAL_STAGGER_MS);
            scheduled.push((entry.index, position * REVEAL_STAGGER_MS));
        }
        scheduled
    }

    /// Finish a pending reveal. Returns no actions unless the element was pending.
    pub fn reveal(&mut self, index: usize) -> Vec<Action> {
        let Some(state) = self.states.get_mut(index) else {
            return Vec::new();
        };
        if *state != RevealState::Pending {
            return Vec::new();
        }
        *state = RevealState::Revealed;
        let target = Target::Animatable(index);
        vec![
            Action::add_class(target, "active"),
            Action::style(target, "opacity", "1"),
            Action::style(target, "transform", "translateY(0)"),
        ]
    }
}
