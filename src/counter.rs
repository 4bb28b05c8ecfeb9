//! Statistic counters that count up when the conclusion section appears.
//!
//! Targets are parsed from the stat element's own text. Each animating stat
//! gets a repeating timer that the animator cancels on its final frame, and
//! the final frame always restores the original literal text verbatim.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use std::collections::HashMap;

use crate::action::{Action, Target};
use crate::consts::{COUNTER_STEPS, NORMAL_FORM_TOKEN};
use crate::timer::TimerId;

/// Parsed stat target.
#[derive(Debug, Clone, PartialEq)]
pub struct StatTarget {
    /// Original text, restored on completion.
    pub literal: String,
    pub numeric: f64,
    pub percent: bool,
}

/// Parse a stat's displayed text. `None` means leave the text alone.
#[must_use]
pub fn parse_stat(text: &str) -> Option<StatTarget> {
    let trimmed = text.trim();
    let percent = trimmed.ends_with('%');
    let numeric = if !percent && trimmed == NORMAL_FORM_TOKEN { Some(3.0) } else { parse_leading_int(text) }?;
    Some(StatTarget { literal: text.to_owned(), numeric, percent })
}

/// Leading integer with `parseInt` rules: optional whitespace and sign, then
/// at least one decimal digit. Everything after the digits is ignored.
#[must_use]
pub fn parse_leading_int(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let (sign, rest) = match s.as_bytes().first() {
        Some(b'-') => (-1.0, &s[1..]),
        Some(b'+') => (1.0, &s[1..]),
        _ => (1.0, s),
    };
    let digits = rest.bytes().take_while(u8::is_ascii_digit).collect::<Vec<_>>();
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits.iter().fold(0.0_f64, |acc, d| acc * 10.0 + f64::from(d - b'0'));
    Some(sign * magnitude)
}

/// What a counter shows at `step` (1-based), or `None` once it has reached its target.
#[must_use]
pub fn frame_text(target: &StatTarget, step: u32) -> Option<String> {
    let current = target.numeric * f64::from(step) / f64::from(COUNTER_STEPS);
    if current >= target.numeric {
        return None;
    }
    let whole = current.floor();
    Some(if target.percent { format!("{whole}%") } else { format!("{whole}") })
}

#[derive(Debug, Clone)]
struct CounterRun {
    target: StatTarget,
    step: u32,
    timer: Option<TimerId>,
}

/// Result of advancing one counter by a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterFrame {
    pub action: Action,
    /// Set on the final frame: the repeating timer to cancel.
    pub finished: Option<TimerId>,
}

/// All stat counters on the page, run at most once per load.
#[derive(Debug, Clone, Default)]
pub struct CounterAnimator {
    animated: bool,
    runs: HashMap<usize, CounterRun>,
}

impl CounterAnimator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the counters have already been started this load.
    #[must_use]
    pub fn has_animated(&self) -> bool {
        self.animated
    }

    /// Start every parseable counter. Returns the stat indices that need a
    /// frame timer; empty if counters already ran.
    pub fn start(&mut self, texts: &[String]) -> Vec<usize> {
        if self.animated {
            return Vec::new();
        }
        self.animated = true;

        let mut started = Vec::new();
        for (index, text) in texts.iter().enumerate() {
            match parse_stat(text) {
                Some(target) => {
                    self.runs.insert(index, CounterRun { target, step: 0, timer: None });
                    started.push(index);
                }
                None => log::debug!("stat {index} has no numeric target: {text:?}"),
            }
        }
        log::debug!("counter animation started for {} stats", started.len());
        started
    }

    /// Record the frame timer driving stat `index`.
    pub fn attach_timer(&mut self, index: usize, timer: TimerId) {
        if let Some(run) = self.runs.get_mut(&index) {
            run.timer = Some(timer);
        }
    }

    /// Advance stat `index` by one frame.
    pub fn advance(&mut self, index: usize) -> Option<CounterFrame> {
        let run = self.runs.get_mut(&index)?;
        run.step += 1;
        let target = Target::Stat(index);
        if let Some(text) = frame_text(&run.target, run.step) {
            return Some(CounterFrame { action: Action::text(target, text), finished: None });
        }
        let run = self.runs.remove(&index)?;
        Some(CounterFrame { action: Action::text(target, run.target.literal), finished: run.timer })
    }

    /// Number of counters still animating.
    #[must_use]
    pub fn running(&self) -> usize {
        self.runs.len()
    }
}
