//! Interactive behavior for single-page HTML presentations.
//!
//! This crate is compiled to WebAssembly and attached to a static slide deck.
//! It owns every piece of page behavior: the persisted light/dark theme,
//! smooth in-page navigation with nav highlighting, reveal-on-scroll, the
//! one-shot statistic counters, copy-to-clipboard on code boxes, the print
//! button, keyboard shortcuts and the optional hamburger menu. The browser
//! layer in [`web`] only measures the page, forwards events to the
//! [`controller::PageController`], and performs the returned
//! [`action::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Top-level page controller and load-time [`controller::PageLayout`] |
//! | [`action`] | Visual mutations and the targets they address |
//! | [`host`] | Browser capability traits, [`host::apply`] and [`host::MemoryStore`] |
//! | [`theme`] | Theme preference, pre-paint script and toggle |
//! | [`scroll`] | Scroll-to-top, nav highlight, body marker and parallax |
//! | [`reveal`] | Reveal-on-intersect state machine |
//! | [`counter`] | Statistic parsing and counter frames |
//! | [`affordance`] | Code box, print button and timeline hover styling |
//! | [`menu`] | Hamburger menu open/close state |
//! | [`timer`] | Deterministic delayed and repeating work |
//! | [`config`] | Per-page configuration block |
//! | [`error`] | Error types |
//! | [`consts`] | Shared thresholds, delays and colors |
//! | `web` | `web-sys` host and WASM entry points (`hydrate` feature) |

pub mod action;
pub mod affordance;
pub mod config;
pub mod consts;
pub mod controller;
pub mod counter;
pub mod error;
pub mod host;
pub mod menu;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod timer;

#[cfg(feature = "hydrate")]
pub mod web;

pub use action::{Action, Target};
pub use config::PageConfig;
pub use controller::{PageController, PageLayout};
pub use host::{MemoryStore, PreferenceStore, apply};
pub use theme::Theme;
