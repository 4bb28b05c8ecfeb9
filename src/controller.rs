//! The page controller: every presentation behavior behind one owner.
//!
//! ARCHITECTURE
//! ============
//! `PageController` holds all transient UI state (theme, scroll chrome, reveal
//! states, the counters' "already animated" flag, menu, pending timers) as
//! plain fields. Browser events arrive as method calls carrying whatever the
//! host measured plus the current time; each returns the [`Action`]s to
//! perform. Nothing here touches the browser, so the whole page can be driven
//! from tests.
//!
//! Delayed work goes through a [`TimerQueue`]. The host calls
//! [`PageController::tick`] when [`PageController::next_deadline`] passes.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::action::{Action, ScrollDestination, Target, Toast, ToastId, Watch, WatchKind};
use crate::affordance::{self, COPY_CONFIRMATION, PrintButton};
use crate::config::PageConfig;
use crate::consts::{
    ACCENT_GREEN, BODY_FADE_IN_DELAY_MS, CONCLUSION_THRESHOLD, COPY_TOAST_HOLD_MS, COPY_TOAST_PADDING,
    COUNTER_STEP_MS, DIAGRAM_FIXUP_DELAY_MS, THEME_TOAST_HOLD_MS, THEME_TOAST_PADDING, TOAST_FADE_MS,
};
use crate::counter::CounterAnimator;
use crate::host::PreferenceStore;
use crate::menu::MenuState;
use crate::reveal::{Intersection, RevealAnimator, RevealState};
use crate::scroll::{self, ScrollTracker, SectionOffset};
use crate::theme::{Theme, ThemeManager};
use crate::timer::{Millis, TimerQueue};

/// What the host found in the markup at load time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    /// `href` of each `.nav-menu a`, in document order.
    pub nav_hrefs: Vec<String>,
    /// Elements matching the reveal selectors.
    pub animatable_count: usize,
    pub code_box_count: usize,
    pub diagram_count: usize,
    pub has_hero: bool,
    pub has_conclusion: bool,
    /// Both `#hamburger` and `#navMenu` exist.
    pub has_menu: bool,
    /// `window.innerWidth` in CSS pixels.
    pub viewport_width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timer {
    Reveal(usize),
    CounterStep(usize),
    ToastFade(ToastId),
    ToastRemove(ToastId),
    BodyFadeIn,
    DiagramFixup,
}

const CONCLUSION_WATCH: Watch =
    Watch { kind: WatchKind::Conclusion, threshold: CONCLUSION_THRESHOLD, root_margin: "0px" };

pub struct PageController<S: PreferenceStore> {
    config: PageConfig,
    layout: PageLayout,
    store: S,
    theme: Option<ThemeManager>,
    scroll: ScrollTracker,
    reveal: RevealAnimator,
    counters: CounterAnimator,
    print: PrintButton,
    menu: MenuState,
    timers: TimerQueue<Timer>,
    next_toast: u64,
}

impl<S: PreferenceStore> PageController<S> {
    /// Build the controller. Reads the stored theme once when the toggle is enabled.
    pub fn new(config: PageConfig, layout: PageLayout, store: S) -> Self {
        let theme = config.theme_toggle.then(|| ThemeManager::load(&store, &config.storage_key));
        Self {
            scroll: ScrollTracker::new(layout.nav_hrefs.clone(), layout.has_hero),
            reveal: RevealAnimator::new(layout.animatable_count),
            counters: CounterAnimator::new(),
            print: PrintButton::default(),
            menu: MenuState::default(),
            timers: TimerQueue::new(),
            next_toast: 0,
            config,
            layout,
            store,
            theme,
        }
    }

    // --- Queries ---

    /// Active theme, or `None` in the variant without a toggle.
    #[must_use]
    pub fn theme(&self) -> Option<Theme> {
        self.theme.as_ref().map(ThemeManager::current)
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[must_use]
    pub fn counters_started(&self) -> bool {
        self.counters.has_animated()
    }

    #[must_use]
    pub fn reveal_state(&self, index: usize) -> Option<RevealState> {
        self.reveal.state(index)
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    #[must_use]
    pub fn highlighted_nav_link(&self) -> Option<usize> {
        self.scroll.highlighted()
    }

    /// When the host should next call [`Self::tick`].
    #[must_use]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    // --- Page load ---

    /// Wire up the page once the DOM is ready.
    pub fn on_load(&mut self, now: Millis) -> Vec<Action> {
        let mut actions = Vec::new();

        if let Some(theme) = &self.theme {
            actions.extend(theme.initial_actions());
        }

        actions.extend(self.reveal.setup_actions());
        if self.layout.has_conclusion {
            actions.push(Action::Observe { target: Target::Conclusion, watch: CONCLUSION_WATCH });
        }

        actions.extend(affordance::code_box_setup(self.layout.code_box_count));
        actions.extend(self.print.mount(self.layout.viewport_width));

        actions.push(Action::style(Target::Body, "opacity", "0"));
        self.timers.schedule(now + BODY_FADE_IN_DELAY_MS, Timer::BodyFadeIn);
        if self.layout.diagram_count > 0 {
            self.timers.schedule(now + DIAGRAM_FIXUP_DELAY_MS, Timer::DiagramFixup);
        }

        if !self.config.banner.is_empty() {
            actions.push(Action::Banner(self.config.banner.clone()));
        }
        log::info!(
            "presentation controller loaded: {} nav links, {} animated elements",
            self.layout.nav_hrefs.len(),
            self.layout.animatable_count
        );
        actions
    }

    // --- Theme ---

    pub fn on_theme_toggle(&mut self, now: Millis) -> Vec<Action> {
        let Some(manager) = self.theme.as_mut() else {
            return Vec::new();
        };
        let (theme, mut actions) = manager.toggle(&mut self.store);
        actions.extend(self.show_toast(
            now,
            theme.notification_text(),
            theme.notification_background(),
            80,
            THEME_TOAST_PADDING,
            THEME_TOAST_HOLD_MS,
        ));
        actions
    }

    // --- Navigation & scroll ---

    /// An in-page nav link was clicked (default navigation already suppressed).
    pub fn on_nav_click(&mut self, href: &str) -> Vec<Action> {
        let mut actions = Vec::new();
        if let Some(id) = scroll::anchor_fragment(href) {
            actions.push(Action::ScrollIntoView { section_id: id.to_owned() });
        }
        if self.menu_enabled() {
            actions.extend(self.menu.close());
        }
        actions
    }

    pub fn on_scroll(&mut self, offset: f64, sections: &[SectionOffset]) -> Vec<Action> {
        self.scroll.on_scroll(offset, sections)
    }

    #[must_use]
    pub fn on_scroll_top_click(&self) -> Vec<Action> {
        vec![Action::ScrollTo(ScrollDestination::Top)]
    }

    #[must_use]
    pub fn on_key(&self, key: &str) -> Vec<Action> {
        scroll::shortcut_destination(key).map(Action::ScrollTo).into_iter().collect()
    }

    // --- Reveal & counters ---

    /// An observer batch for the animatable elements.
    pub fn on_reveal_intersections(&mut self, now: Millis, entries: &[Intersection]) -> Vec<Action> {
        for (index, delay) in self.reveal.on_intersections(entries) {
            self.timers.schedule(now + delay, Timer::Reveal(index));
        }
        self.tick(now)
    }

    /// The conclusion section crossed its visibility threshold.
    ///
    /// `stat_texts` is the current text of each `.stat-value`.
    pub fn on_conclusion_intersection(
        &mut self,
        now: Millis,
        is_intersecting: bool,
        stat_texts: &[String],
    ) -> Vec<Action> {
        if !is_intersecting {
            return Vec::new();
        }
        for index in self.counters.start(stat_texts) {
            let timer = self.timers.schedule_every(now, COUNTER_STEP_MS, Timer::CounterStep(index));
            self.counters.attach_timer(index, timer);
        }
        Vec::new()
    }

    // --- Copy & print ---

    /// A code box was clicked. `code` is its nested code element's text, if any.
    #[must_use]
    pub fn on_code_click(&self, block: usize, code: Option<&str>) -> Vec<Action> {
        code.map(|text| Action::WriteClipboard { block, text: text.to_owned() }).into_iter().collect()
    }

    /// The clipboard write for `block` finished.
    pub fn clipboard_settled(&mut self, now: Millis, block: usize, ok: bool) -> Vec<Action> {
        if !ok {
            log::debug!("clipboard write for code box {block} failed");
            return Vec::new();
        }
        self.show_toast(now, COPY_CONFIRMATION, ACCENT_GREEN, 20, COPY_TOAST_PADDING, COPY_TOAST_HOLD_MS)
    }

    #[must_use]
    pub fn on_print_click(&self) -> Vec<Action> {
        vec![Action::Print]
    }

    #[must_use]
    pub fn on_print_hover(&self, entered: bool) -> Vec<Action> {
        PrintButton::hover(entered)
    }

    #[must_use]
    pub fn on_timeline_hover(&self, index: usize, entered: bool) -> Vec<Action> {
        affordance::timeline_hover(index, entered)
    }

    pub fn on_resize(&mut self, width: f64) -> Vec<Action> {
        self.layout.viewport_width = width;
        self.print.on_resize(width)
    }

    // --- Hamburger menu ---

    pub fn on_hamburger_click(&mut self) -> Vec<Action> {
        if !self.menu_enabled() {
            return Vec::new();
        }
        self.menu.toggle()
    }

    /// Any document click. `inside_menu` is true when it hit the trigger or the panel.
    pub fn on_document_click(&mut self, inside_menu: bool) -> Vec<Action> {
        if !self.menu_enabled() {
            return Vec::new();
        }
        self.menu.on_document_click(inside_menu)
    }

    // --- Timers ---

    /// Fire every timer due at `now`.
    pub fn tick(&mut self, now: Millis) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Some((id, timer)) = self.timers.pop_due(now) {
            match timer {
                Timer::Reveal(index) => actions.extend(self.reveal.reveal(index)),
                Timer::CounterStep(index) => match self.counters.advance(index) {
                    Some(frame) => {
                        actions.push(frame.action);
                        if let Some(finished) = frame.finished {
                            self.timers.cancel(finished);
                        }
                    }
                    None => {
                        self.timers.cancel(id);
                    }
                },
                Timer::ToastFade(toast) => {
                    actions.push(Action::style(Target::Toast(toast), "animation", "fadeOut 0.3s"));
                }
                Timer::ToastRemove(toast) => actions.push(Action::RemoveToast(toast)),
                Timer::BodyFadeIn => {
                    actions.push(Action::style(Target::Body, "transition", "opacity 0.5s"));
                    actions.push(Action::style(Target::Body, "opacity", "1"));
                }
                Timer::DiagramFixup => actions.extend(self.diagram_fixups()),
            }
        }
        actions
    }

    fn menu_enabled(&self) -> bool {
        self.config.hamburger_menu && self.layout.has_menu
    }

    fn show_toast(
        &mut self,
        now: Millis,
        text: &str,
        background: &'static str,
        top_px: u32,
        padding: &'static str,
        hold: Millis,
    ) -> Vec<Action> {
        let id = ToastId(self.next_toast);
        self.next_toast += 1;
        self.timers.schedule(now + hold, Timer::ToastFade(id));
        self.timers.schedule(now + hold + TOAST_FADE_MS, Timer::ToastRemove(id));
        vec![Action::MountToast(Toast { id, text: text.to_owned(), background, top_px, padding })]
    }

    fn diagram_fixups(&self) -> Vec<Action> {
        (0..self.layout.diagram_count)
            .flat_map(|index| {
                let target = Target::Diagram(index);
                [
                    Action::style(target, "min-height", "200px"),
                    Action::style(target, "display", "flex"),
                    Action::style(target, "align-items", "center"),
                    Action::style(target, "justify-content", "center"),
                ]
            })
            .collect()
    }
}
