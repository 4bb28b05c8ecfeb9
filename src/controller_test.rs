#![allow(clippy::float_cmp)]

use super::*;
use crate::action::ScrollDestination;
use crate::affordance::PRINT_LABEL;
use crate::host::fake::FakeHost;
use crate::host::{MemoryStore, apply};
use crate::theme::{LIGHT_CLASS, LOADING_CLASS};

// =============================================================
// Helpers
// =============================================================

fn layout() -> PageLayout {
    PageLayout {
        nav_hrefs: vec!["#intro".into(), "#design".into(), "#conclusion".into()],
        animatable_count: 4,
        code_box_count: 2,
        diagram_count: 1,
        has_hero: true,
        has_conclusion: true,
        has_menu: true,
        viewport_width: 1280.0,
    }
}

fn controller(store: MemoryStore) -> PageController<MemoryStore> {
    PageController::new(PageConfig::default(), layout(), store)
}

fn loaded(store: MemoryStore) -> (PageController<MemoryStore>, FakeHost) {
    let mut page = controller(store);
    let mut host = FakeHost::default();
    apply(&mut host, page.on_load(0));
    (page, host)
}

/// Tick in 10ms steps from `from` through `to`, applying everything.
fn run_until(page: &mut PageController<MemoryStore>, host: &mut FakeHost, from: Millis, to: Millis) {
    let mut now = from;
    while now <= to {
        apply(host, page.tick(now));
        now += 10;
    }
}

fn stats(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

fn hit(index: usize) -> Intersection {
    Intersection { index, is_intersecting: true }
}

// =============================================================
// Load
// =============================================================

#[test]
fn load_wires_every_behavior() {
    let (page, host) = loaded(MemoryStore::new());

    assert_eq!(page.theme(), Some(Theme::Dark));
    assert!(host.has_class(Target::Animatable(3), "reveal"));
    assert_eq!(host.observed.len(), 5);
    assert!(host.observed.iter().any(|(t, w)| *t == Target::Conclusion && w.threshold == 0.5));
    assert_eq!(host.attribute(Target::CodeBox(1), "title"), Some("Click to copy code"));
    assert_eq!(host.print_button.as_deref(), Some(PRINT_LABEL));
    assert_eq!(host.style(Target::Body, "opacity"), Some("0"));
    assert_eq!(host.banners.len(), 1);
}

#[test]
fn load_with_stored_light_theme_applies_it() {
    let (page, host) = loaded(MemoryStore::with_entry("theme", "light"));
    assert_eq!(page.theme(), Some(Theme::Light));
    assert!(host.has_class(Target::Body, LIGHT_CLASS));
    assert!(!host.has_class(Target::Root, LOADING_CLASS));
    assert_eq!(host.text(Target::ThemeIcon), Some("🌙"));
}

#[test]
fn body_fades_in_after_delay() {
    let (mut page, mut host) = loaded(MemoryStore::new());
    apply(&mut host, page.tick(99));
    assert_eq!(host.style(Target::Body, "opacity"), Some("0"));
    apply(&mut host, page.tick(100));
    assert_eq!(host.style(Target::Body, "opacity"), Some("1"));
    assert_eq!(host.style(Target::Body, "transition"), Some("opacity 0.5s"));
}

#[test]
fn diagrams_fixed_up_after_one_second() {
    let (mut page, mut host) = loaded(MemoryStore::new());
    apply(&mut host, page.tick(999));
    assert_eq!(host.style(Target::Diagram(0), "display"), None);
    apply(&mut host, page.tick(1_000));
    assert_eq!(host.style(Target::Diagram(0), "min-height"), Some("200px"));
    assert_eq!(host.style(Target::Diagram(0), "justify-content"), Some("center"));
}

#[test]
fn no_diagram_timer_without_diagrams() {
    let mut page =
        PageController::new(PageConfig::default(), PageLayout { diagram_count: 0, ..layout() }, MemoryStore::new());
    page.on_load(0);
    assert_eq!(page.next_deadline(), Some(100));
    page.tick(100);
    assert_eq!(page.next_deadline(), None);
}

#[test]
fn deferred_tick_keeps_deadline_and_applies_load_work() {
    let (mut page, mut host) = loaded(MemoryStore::new());
    apply(&mut host, page.on_key("b"));
    apply(&mut host, page.on_resize(1_000.0));
    assert_eq!(page.next_deadline(), Some(100));

    apply(&mut host, page.tick(2_000));
    assert_eq!(host.style(Target::Body, "opacity"), Some("1"));
    assert_eq!(host.style(Target::Diagram(0), "min-height"), Some("200px"));
    assert_eq!(page.next_deadline(), None);
}

// =============================================================
// Theme
// =============================================================

#[test]
fn toggle_persists_and_shows_transient_notification() {
    let (mut page, mut host) = loaded(MemoryStore::new());
    run_until(&mut page, &mut host, 0, 2_000);

    apply(&mut host, page.on_theme_toggle(5_000));
    assert_eq!(page.theme(), Some(Theme::Light));
    assert_eq!(page.store().load("theme").as_deref(), Some("light"));
    assert!(host.has_class(Target::Body, LIGHT_CLASS));
    assert_eq!(host.toasts.len(), 1);
    let toast = host.toasts[0].clone();
    assert_eq!(toast.text, "☀️ Light Mode");
    assert_eq!(toast.top_px, 80);

    apply(&mut host, page.tick(6_499));
    assert_eq!(host.style(Target::Toast(toast.id), "animation"), None);
    apply(&mut host, page.tick(6_500));
    assert_eq!(host.style(Target::Toast(toast.id), "animation"), Some("fadeOut 0.3s"));
    apply(&mut host, page.tick(6_800));
    assert!(host.toasts.is_empty());
}

#[test]
fn double_toggle_round_trips() {
    let (mut page, mut host) = loaded(MemoryStore::with_entry("theme", "dark"));
    apply(&mut host, page.on_theme_toggle(0));
    apply(&mut host, page.on_theme_toggle(10));
    assert_eq!(page.theme(), Some(Theme::Dark));
    assert_eq!(page.store().load("theme").as_deref(), Some("dark"));
    assert!(!host.has_class(Target::Body, LIGHT_CLASS));
    assert_eq!(host.text(Target::ThemeIcon), Some("☀️"));
}

#[test]
fn variant_without_toggle_ignores_storage() {
    let config = PageConfig { theme_toggle: false, ..PageConfig::default() };
    let mut page = PageController::new(config, layout(), MemoryStore::with_entry("theme", "light"));
    let mut host = FakeHost::default();
    apply(&mut host, page.on_load(0));
    assert_eq!(page.theme(), None);
    assert!(!host.has_class(Target::Body, LIGHT_CLASS));
    assert!(page.on_theme_toggle(10).is_empty());
}

// =============================================================
// Navigation & scroll
// =============================================================

#[test]
fn nav_click_scrolls_to_section() {
    let mut page = controller(MemoryStore::new());
    assert_eq!(page.on_nav_click("#design"), vec![Action::ScrollIntoView { section_id: "design".into() }]);
    assert!(page.on_nav_click("#").is_empty());
}

#[test]
fn scroll_updates_chrome() {
    let (mut page, mut host) = loaded(MemoryStore::new());
    let sections = vec![
        SectionOffset::new("intro", 0.0),
        SectionOffset::new("design", 900.0),
        SectionOffset::new("conclusion", 2_000.0),
    ];
    apply(&mut host, page.on_scroll(850.0, &sections));
    assert!(host.has_class(Target::ScrollTopButton, "visible"));
    assert!(host.has_class(Target::Body, "scrolled"));
    assert_eq!(page.highlighted_nav_link(), Some(1));
    assert_eq!(host.style(Target::Hero, "transform"), Some("translateY(425px)"));
}

#[test]
fn scroll_top_and_shortcuts_scroll_window() {
    let page = controller(MemoryStore::new());
    assert_eq!(page.on_scroll_top_click(), vec![Action::ScrollTo(ScrollDestination::Top)]);
    assert_eq!(page.on_key("B"), vec![Action::ScrollTo(ScrollDestination::Bottom)]);
    assert_eq!(page.on_key("t"), vec![Action::ScrollTo(ScrollDestination::Top)]);
    assert!(page.on_key("Enter").is_empty());
}

// =============================================================
// Reveal
// =============================================================

#[test]
fn reveals_stagger_within_batch() {
    let (mut page, mut host) = loaded(MemoryStore::new());
    apply(&mut host, page.on_reveal_intersections(10, &[hit(2), hit(0)]));
    assert!(host.has_class(Target::Animatable(2), "active"));
    assert!(!host.has_class(Target::Animatable(0), "active"));
    assert_eq!(page.reveal_state(0), Some(RevealState::Pending));

    apply(&mut host, page.tick(60));
    assert!(host.has_class(Target::Animatable(0), "active"));
    assert_eq!(host.style(Target::Animatable(0), "opacity"), Some("1"));
}

#[test]
fn repeated_intersections_reveal_once() {
    let (mut page, mut host) = loaded(MemoryStore::new());
    let mut reveal_actions = 0;
    for now in [10, 20, 30] {
        let actions = page.on_reveal_intersections(now, &[Intersection { index: 1, is_intersecting: false }, hit(1)]);
        reveal_actions += actions.iter().filter(|a| matches!(a, Action::AddClass { class: "active", .. })).count();
        apply(&mut host, actions);
        let actions = page.tick(now + 50);
        reveal_actions += actions.iter().filter(|a| matches!(a, Action::AddClass { class: "active", .. })).count();
        apply(&mut host, actions);
    }
    assert_eq!(reveal_actions, 1);
    assert_eq!(page.reveal_state(1), Some(RevealState::Revealed));
}

// =============================================================
// Counters
// =============================================================

#[test]
fn counters_finish_on_literal_text() {
    let (mut page, mut host) = loaded(MemoryStore::new());
    let texts = stats(&["87%", "3NF", "N/A", "12"]);
    for (i, t) in texts.iter().enumerate() {
        host.texts.insert(Target::Stat(i), t.clone());
    }

    apply(&mut host, page.on_conclusion_intersection(2_000, true, &texts));
    apply(&mut host, page.tick(2_030));
    assert_eq!(host.text(Target::Stat(0)), Some("1%"));
    assert_eq!(host.text(Target::Stat(2)), Some("N/A"));

    run_until(&mut page, &mut host, 2_040, 3_600);
    assert_eq!(host.text(Target::Stat(0)), Some("87%"));
    assert_eq!(host.text(Target::Stat(1)), Some("3NF"));
    assert_eq!(host.text(Target::Stat(2)), Some("N/A"));
    assert_eq!(host.text(Target::Stat(3)), Some("12"));
    assert_eq!(page.next_deadline(), None);
}

#[test]
fn counters_run_once_per_load() {
    let (mut page, mut host) = loaded(MemoryStore::new());
    run_until(&mut page, &mut host, 0, 1_000);

    page.on_conclusion_intersection(1_000, true, &stats(&["40"]));
    assert!(page.counters_started());
    run_until(&mut page, &mut host, 1_010, 3_000);
    assert_eq!(host.text(Target::Stat(0)), Some("40"));

    host.texts.insert(Target::Stat(0), "40".into());
    page.on_conclusion_intersection(3_000, false, &stats(&["40"]));
    page.on_conclusion_intersection(3_010, true, &stats(&["40"]));
    assert_eq!(page.next_deadline(), None);
    assert!(page.tick(10_000).is_empty());
}

#[test]
fn non_intersecting_report_does_not_start_counters() {
    let mut page = controller(MemoryStore::new());
    page.on_conclusion_intersection(0, false, &stats(&["9"]));
    assert!(!page.counters_started());
}

#[test]
fn late_tick_catches_up_and_finishes() {
    let mut page = controller(MemoryStore::new());
    page.on_conclusion_intersection(0, true, &stats(&["50"]));
    let actions = page.tick(5_000);
    assert_eq!(actions.len(), 50);
    assert_eq!(actions.last(), Some(&Action::text(Target::Stat(0), "50")));
    assert_eq!(page.next_deadline(), None);
}

// =============================================================
// Copy & print
// =============================================================

#[test]
fn code_click_copies_verbatim_text() {
    let (page, mut host) = loaded(MemoryStore::new());
    let code = "  SELECT *\n  FROM attendance;\n";
    apply(&mut host, page.on_code_click(1, Some(code)));
    assert_eq!(host.clipboard_writes, vec![(1, code.to_owned())]);
    assert!(page.on_code_click(0, None).is_empty());
}

#[test]
fn successful_copy_shows_confirmation_for_two_seconds() {
    let (mut page, mut host) = loaded(MemoryStore::new());
    apply(&mut host, page.clipboard_settled(1_000, 0, true));
    assert_eq!(host.toasts.len(), 1);
    assert_eq!(host.toasts[0].text, "✓ Code copied!");
    assert_eq!(host.toasts[0].top_px, 20);

    run_until(&mut page, &mut host, 1_000, 3_290);
    assert_eq!(host.toasts.len(), 1);
    apply(&mut host, page.tick(3_300));
    assert!(host.toasts.is_empty());
}

#[test]
fn failed_copy_shows_nothing() {
    let (mut page, mut host) = loaded(MemoryStore::new());
    apply(&mut host, page.clipboard_settled(1_000, 0, false));
    assert!(host.toasts.is_empty());
}

#[test]
fn print_click_and_resize() {
    let (mut page, mut host) = loaded(MemoryStore::new());
    apply(&mut host, page.on_print_click());
    assert_eq!(host.prints, 1);

    apply(&mut host, page.on_resize(400.0));
    assert_eq!(host.style(Target::PrintButton, "bottom"), Some("80px"));
}

// =============================================================
// Hamburger menu
// =============================================================

fn menu_page() -> PageController<MemoryStore> {
    let config = PageConfig { hamburger_menu: true, theme_toggle: false, ..PageConfig::default() };
    PageController::new(config, layout(), MemoryStore::new())
}

#[test]
fn hamburger_toggles_and_nav_click_closes() {
    let mut page = menu_page();
    let mut host = FakeHost::default();
    apply(&mut host, page.on_hamburger_click());
    assert!(page.menu_open());
    assert!(host.has_class(Target::NavMenu, "active"));

    apply(&mut host, page.on_nav_click("#intro"));
    assert!(!page.menu_open());
    assert!(!host.has_class(Target::NavMenu, "active"));
    assert_eq!(host.scrolled_into_view, vec!["intro".to_owned()]);
}

#[test]
fn outside_click_closes_menu() {
    let mut page = menu_page();
    page.on_hamburger_click();
    assert!(page.on_document_click(true).is_empty());
    assert!(page.menu_open());
    assert_eq!(page.on_document_click(false).len(), 2);
    assert!(!page.menu_open());
}

#[test]
fn menu_disabled_without_config_or_markup() {
    let mut page = controller(MemoryStore::new());
    assert!(page.on_hamburger_click().is_empty());

    let config = PageConfig { hamburger_menu: true, ..PageConfig::default() };
    let mut page = PageController::new(config, PageLayout { has_menu: false, ..layout() }, MemoryStore::new());
    assert!(page.on_hamburger_click().is_empty());
    assert!(!page.menu_open());
}
