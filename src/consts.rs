//! Shared behavioral constants for the page controller.

use crate::timer::Millis;

// ── Scroll ──────────────────────────────────────────────────────

/// Offset at or beyond which the scroll-to-top control is shown.
pub const SCROLL_TOP_VISIBLE_PX: f64 = 300.0;

/// Offset beyond which the body carries the `scrolled` class.
pub const BODY_SCROLLED_PX: f64 = 50.0;

/// Lookahead subtracted from a section's top when picking the active section.
pub const SECTION_LOOKAHEAD_PX: f64 = 100.0;

/// Hero translation per scrolled pixel.
pub const PARALLAX_FACTOR: f64 = 0.5;

/// Inline style for the highlighted nav link's underline.
pub const NAV_ACTIVE_BORDER: &str = "2px solid white";

// ── Reveal ──────────────────────────────────────────────────────

/// Visible fraction needed before a card reveals.
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Observer root margin: trigger 100px before the viewport bottom.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Per-entry stagger within one observation batch.
pub const REVEAL_STAGGER_MS: Millis = 50;

/// Resting offset of a hidden card.
pub const REVEAL_HIDDEN_TRANSFORM: &str = "translateY(50px)";

/// Overshoot transition applied to every reveal.
pub const REVEAL_TRANSITION: &str = "all 0.8s cubic-bezier(0.68, -0.55, 0.265, 1.55)";

// ── Counters ────────────────────────────────────────────────────

/// Visible fraction of the conclusion section that starts the counters.
pub const CONCLUSION_THRESHOLD: f64 = 0.5;

/// Total counter animation length.
pub const COUNTER_DURATION_MS: Millis = 1500;

/// Number of frames in one counter animation.
pub const COUNTER_STEPS: u32 = 50;

/// Interval between counter frames.
pub const COUNTER_STEP_MS: Millis = COUNTER_DURATION_MS / COUNTER_STEPS as Millis;

/// Literal stat token that counts up to 3.
pub const NORMAL_FORM_TOKEN: &str = "3NF";

// ── Notifications ───────────────────────────────────────────────

/// How long the theme notification stays before fading.
pub const THEME_TOAST_HOLD_MS: Millis = 1500;

/// How long the copy confirmation stays before fading.
pub const COPY_TOAST_HOLD_MS: Millis = 2000;

/// Fade-out length shared by all notifications.
pub const TOAST_FADE_MS: Millis = 300;

/// Padding of the theme notification.
pub const THEME_TOAST_PADDING: &str = "0.8rem 1.5rem";

/// Padding of the copy confirmation.
pub const COPY_TOAST_PADDING: &str = "1rem 2rem";

/// Green used for light-mode and copy confirmations.
pub const ACCENT_GREEN: &str = "#10b981";

/// Brand purple used for dark-mode confirmation and the print button.
pub const ACCENT_PURPLE: &str = "#667eea";

// ── Page load ───────────────────────────────────────────────────

/// Delay before the body fades in.
pub const BODY_FADE_IN_DELAY_MS: Millis = 100;

/// Delay before diagram containers receive layout fixups.
pub const DIAGRAM_FIXUP_DELAY_MS: Millis = 1000;

// ── Print button ────────────────────────────────────────────────

/// Widest viewport treated as mobile.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
