//! Browser host: `web-sys` implementations of the capability traits, DOM
//! event wiring, and the WASM entry points.
//!
//! ARCHITECTURE
//! ============
//! [`start`] measures the page once, builds the [`PageController`], and
//! registers one listener per DOM event. Every listener funnels through
//! [`dispatch`], which hands the controller the current time, applies the
//! returned actions to the [`WebHost`], and re-arms a single
//! `gloo_timers` timeout for the controller's next deadline. Replacing the
//! timeout drops (and so clears) the previous one.
//!
//! Listeners hold a `Weak` reference to the runtime; closures are leaked with
//! `forget()` because they live as long as the page.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use js_sys::{Array, Date, Function, Promise, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, Node, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Storage, Window,
};

use crate::action::{Action, ScrollDestination, Target, Toast, ToastId, Watch, WatchKind};
use crate::config::{BannerLine, CONFIG_ELEMENT_ID, PageConfig};
use crate::controller::{PageController, PageLayout};
use crate::error::{PageError, StoreError};
use crate::host::{ClipboardWriter, Console, Dom, PreferenceStore, PrintDialog, Viewport, VisibilityObserver, apply};
use crate::reveal::Intersection;
use crate::scroll::SectionOffset;
use crate::theme;
use crate::timer::Millis;

const FADE_OUT_KEYFRAMES: &str = "@keyframes fadeOut { from { opacity: 1; } to { opacity: 0; } }";

impl From<PageError> for JsValue {
    fn from(error: PageError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

// =============================================================
// Entry points
// =============================================================

/// Add the pre-paint theme class from the stored preference.
///
/// This only runs once the WASM module has loaded, which is usually after
/// first paint. Pages that must avoid a dark flash inline the output of
/// [`pre_paint_script`] in `<head>` instead.
#[wasm_bindgen]
pub fn apply_saved_theme() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    let config = load_config(&document);
    if !config.theme_toggle {
        return;
    }
    let store = LocalStorageStore::from_window(&window);
    let actions = theme::pre_paint_actions(&store, &config.storage_key);
    let elements = Elements { root: document.document_element(), ..Elements::default() };
    let mut host = WebHost::new(window, document, elements, Weak::new());
    apply(&mut host, actions);
}

/// Inline `<head>` script that adds the pre-paint class for `storage_key`.
#[wasm_bindgen(js_name = prePaintScript)]
#[must_use]
pub fn pre_paint_script(storage_key: &str) -> String {
    theme::pre_paint_script(storage_key)
}

/// Wire the page. Call once on `DOMContentLoaded`.
///
/// # Errors
///
/// Returns an error when a required element (`#scrollTop`, or
/// `#themeToggle` with the theme toggle enabled) is missing or the
/// animation stylesheet cannot be injected.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        log::debug!("console logger already installed: {e}");
    }

    let window = web_sys::window().ok_or(PageError::MissingElement("window"))?;
    let document = window.document().ok_or(PageError::MissingElement("document"))?;
    let config = load_config(&document);

    let elements = Elements::query(&document, &config);
    elements.require(&config)?;
    install_keyframes(&document)?;

    let layout = elements.layout(&window);
    let store = LocalStorageStore::from_window(&window);
    let runtime = Rc::new_cyclic(|weak| {
        RefCell::new(Runtime {
            controller: PageController::new(config, layout, store),
            host: WebHost::new(window, document, elements, weak.clone()),
            timer: None,
        })
    });

    wire(&runtime);
    dispatch(&runtime, |rt, now| rt.controller.on_load(now));
    Ok(())
}

fn load_config(document: &Document) -> PageConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{e}; falling back to default page config");
            PageConfig::default()
        }
    }
}

fn install_keyframes(document: &Document) -> Result<(), PageError> {
    let head = document.head().ok_or(PageError::MissingElement("head"))?;
    let style = document.create_element("style").map_err(js_error)?;
    style.set_text_content(Some(FADE_OUT_KEYFRAMES));
    head.append_child(&style).map_err(js_error)?;
    Ok(())
}

// =============================================================
// Runtime and dispatch
// =============================================================

struct Runtime {
    controller: PageController<LocalStorageStore>,
    host: WebHost,
    /// Armed deadline and the timeout that fires it.
    timer: Option<(Millis, Timeout)>,
}

impl Runtime {
    fn arm_timer(&mut self, runtime: &Weak<RefCell<Runtime>>) {
        let next = self.controller.next_deadline();
        if self.timer.as_ref().map(|(due, _)| *due) == next {
            return;
        }
        self.timer = None;
        let Some(deadline) = next else {
            return;
        };

        let delay = u32::try_from(deadline.saturating_sub(now())).unwrap_or(u32::MAX);
        let runtime = runtime.clone();
        let timeout = Timeout::new(delay, move || {
            if let Some(runtime) = runtime.upgrade() {
                fire_timer(&runtime);
            }
        });
        self.timer = Some((deadline, timeout));
    }
}

/// Deliver a controller deadline. A busy controller retries on the next turn
/// so the deadline is never lost.
fn fire_timer(runtime: &Rc<RefCell<Runtime>>) {
    if runtime.try_borrow_mut().is_err() {
        log::debug!("timer deferred while the controller was busy");
        let retry = Rc::downgrade(runtime);
        Timeout::new(0, move || {
            if let Some(runtime) = retry.upgrade() {
                fire_timer(&runtime);
            }
        })
        .forget();
        return;
    }
    dispatch(runtime, |rt, now| {
        // The firing timeout must not be dropped from inside its own callback.
        if let Some((_, fired)) = rt.timer.take() {
            fired.forget();
        }
        rt.controller.tick(now)
    });
}

/// Run one controller entry point and perform its actions.
fn dispatch(runtime: &Rc<RefCell<Runtime>>, event: impl FnOnce(&mut Runtime, Millis) -> Vec<Action>) {
    let Ok(mut rt) = runtime.try_borrow_mut() else {
        log::debug!("event dropped while the controller was busy");
        return;
    };
    let actions = event(&mut rt, now());
    apply(&mut rt.host, actions);
    rt.arm_timer(&Rc::downgrade(runtime));
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn now() -> Millis {
    Date::now().max(0.0) as Millis
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
fn listen<E: JsCast + 'static>(
    target: &EventTarget,
    event: &str,
    runtime: &Weak<RefCell<Runtime>>,
    mut handler: impl FnMut(&Rc<RefCell<Runtime>>, E) + 'static,
) {
    let runtime = runtime.clone();
    let callback = Closure::wrap(Box::new(move |raw: Event| {
        let Some(runtime) = runtime.upgrade() else {
            return;
        };
        if let Ok(typed) = raw.dyn_into::<E>() {
            handler(&runtime, typed);
        }
    }) as Box<dyn FnMut(Event)>);
    report(target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()), event);
    callback.forget();
}

fn wire(runtime: &Rc<RefCell<Runtime>>) {
    let weak = Rc::downgrade(runtime);
    let rt = runtime.borrow();
    let host = &rt.host;
    let elements = &host.elements;

    for link in &elements.nav_links {
        let href = link.get_attribute("href").unwrap_or_default();
        listen(link, "click", &weak, move |runtime, event: Event| {
            event.prevent_default();
            dispatch(runtime, |rt, _| rt.controller.on_nav_click(&href));
        });
    }

    listen(&host.window, "scroll", &weak, |runtime, _: Event| {
        dispatch(runtime, |rt, _| {
            let offset = rt.host.scroll_offset();
            let sections = rt.host.section_offsets();
            rt.controller.on_scroll(offset, &sections)
        });
    });

    listen(&host.window, "resize", &weak, |runtime, _: Event| {
        dispatch(runtime, |rt, _| {
            let width = viewport_width(&rt.host.window);
            rt.controller.on_resize(width)
        });
    });

    if let Some(button) = &elements.scroll_top {
        listen(button, "click", &weak, |runtime, _: Event| {
            dispatch(runtime, |rt, _| rt.controller.on_scroll_top_click());
        });
    }

    if let Some(toggle) = &elements.theme_toggle {
        listen(toggle, "click", &weak, |runtime, _: Event| {
            dispatch(runtime, |rt, now| rt.controller.on_theme_toggle(now));
        });
    }

    listen(&host.document, "keydown", &weak, |runtime, event: KeyboardEvent| {
        let key = event.key();
        dispatch(runtime, |rt, _| rt.controller.on_key(&key));
    });

    for (index, code_box) in elements.code_boxes.iter().enumerate() {
        let code_box_for_cb = code_box.clone();
        listen(code_box, "click", &weak, move |runtime, _: Event| {
            let code = first(code_box_for_cb.query_selector("code")).and_then(|code| code.text_content());
            dispatch(runtime, |rt, _| rt.controller.on_code_click(index, code.as_deref()));
        });
    }

    for (index, (item, _)) in elements.timeline.iter().enumerate() {
        for (event, entered) in [("mouseenter", true), ("mouseleave", false)] {
            listen(item, event, &weak, move |runtime, _: Event| {
                dispatch(runtime, |rt, _| rt.controller.on_timeline_hover(index, entered));
            });
        }
    }

    if rt.controller.config().hamburger_menu {
        if let Some(hamburger) = &elements.hamburger {
            listen(hamburger, "click", &weak, |runtime, _: Event| {
                dispatch(runtime, |rt, _| rt.controller.on_hamburger_click());
            });
        }
        listen(&host.document, "click", &weak, |runtime, event: Event| {
            let node = event.target().and_then(|t| t.dyn_ref::<Node>().cloned());
            dispatch(runtime, |rt, _| {
                let inside = rt.host.menu_contains(node.as_ref());
                rt.controller.on_document_click(inside)
            });
        });
    }
}

fn on_intersections(runtime: &Rc<RefCell<Runtime>>, kind: WatchKind, entries: &Array) {
    let entries: Vec<IntersectionObserverEntry> =
        entries.iter().filter_map(|entry| entry.dyn_ref::<IntersectionObserverEntry>().cloned()).collect();
    dispatch(runtime, |rt, now| match kind {
        WatchKind::Reveal => {
            let batch: Vec<Intersection> = entries
                .iter()
                .filter_map(|entry| {
                    let target = entry.target();
                    let index = rt.host.elements.animatables.iter().position(|el| *el == target)?;
                    Some(Intersection { index, is_intersecting: entry.is_intersecting() })
                })
                .collect();
            rt.controller.on_reveal_intersections(now, &batch)
        }
        WatchKind::Conclusion => {
            let visible = entries.iter().any(|entry| entry.is_intersecting());
            let texts = rt.host.stat_texts();
            rt.controller.on_conclusion_intersection(now, visible, &texts)
        }
    });
}

// =============================================================
// Preference storage
// =============================================================

/// `window.localStorage`, absent when the browser blocks it.
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    #[must_use]
    pub fn from_window(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::debug!("localStorage blocked: {}", describe(&e));
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self, key: &str) -> Option<String> {
        match self.storage.as_ref()?.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::debug!("localStorage read failed: {}", describe(&e));
                None
            }
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StoreError::Rejected(describe(&e)))
    }
}

// =============================================================
// Elements
// =============================================================

/// Everything the controller addresses, looked up once at startup.
#[derive(Default)]
struct Elements {
    root: Option<Element>,
    body: Option<Element>,
    theme_toggle: Option<Element>,
    theme_icon: Option<Element>,
    scroll_top: Option<Element>,
    nav_links: Vec<Element>,
    sections: Vec<Element>,
    hero: Option<Element>,
    animatables: Vec<Element>,
    conclusion: Option<Element>,
    stats: Vec<Element>,
    code_boxes: Vec<Element>,
    diagrams: Vec<Element>,
    /// `.timeline-item` and its `.timeline-content`.
    timeline: Vec<(Element, Element)>,
    hamburger: Option<Element>,
    nav_menu: Option<Element>,
}

impl Elements {
    fn query(document: &Document, config: &PageConfig) -> Self {
        let timeline = query_all(document, ".timeline-item")
            .into_iter()
            .filter_map(|item| {
                let content = first(item.query_selector(".timeline-content"))?;
                Some((item, content))
            })
            .collect();
        Self {
            root: document.document_element(),
            body: document.body().map(Element::from),
            theme_toggle: document.get_element_by_id("themeToggle"),
            theme_icon: first(document.query_selector(".theme-icon")),
            scroll_top: document.get_element_by_id("scrollTop"),
            nav_links: query_all(document, ".nav-menu a"),
            sections: query_all(document, "section[id]"),
            hero: first(document.query_selector(".hero-section")),
            animatables: query_all(document, &config.reveal_selector_list()),
            conclusion: first(document.query_selector(".conclusion-section")),
            stats: query_all(document, ".stat-value"),
            code_boxes: query_all(document, ".code-box"),
            diagrams: query_all(document, ".mermaid"),
            timeline,
            hamburger: document.get_element_by_id("hamburger"),
            nav_menu: document.get_element_by_id("navMenu"),
        }
    }

    fn require(&self, config: &PageConfig) -> Result<(), PageError> {
        if self.body.is_none() {
            return Err(PageError::MissingElement("body"));
        }
        if config.theme_toggle && self.theme_toggle.is_none() {
            return Err(PageError::MissingElement("#themeToggle"));
        }
        if self.scroll_top.is_none() {
            return Err(PageError::MissingElement("#scrollTop"));
        }
        Ok(())
    }

    fn layout(&self, window: &Window) -> PageLayout {
        PageLayout {
            nav_hrefs: self.nav_links.iter().map(|link| link.get_attribute("href").unwrap_or_default()).collect(),
            animatable_count: self.animatables.len(),
            code_box_count: self.code_boxes.len(),
            diagram_count: self.diagrams.len(),
            has_hero: self.hero.is_some(),
            has_conclusion: self.conclusion.is_some(),
            has_menu: self.hamburger.is_some() && self.nav_menu.is_some(),
            viewport_width: viewport_width(window),
        }
    }
}

fn first(result: Result<Option<Element>, JsValue>) -> Option<Element> {
    match result {
        Ok(element) => element,
        Err(e) => {
            log::debug!("querySelector failed: {}", describe(&e));
            None
        }
    }
}

fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::debug!("selector {selector:?} rejected: {}", describe(&e));
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

fn viewport_width(window: &Window) -> f64 {
    window.inner_width().map_or(0.0, |width| width.as_f64().unwrap_or(0.0))
}

// =============================================================
// WebHost
// =============================================================

/// The live page behind the capability traits.
pub struct WebHost {
    window: Window,
    document: Document,
    elements: Elements,
    print_button: Option<Element>,
    toasts: HashMap<ToastId, Element>,
    reveal_observer: Option<IntersectionObserver>,
    conclusion_observer: Option<IntersectionObserver>,
    runtime: Weak<RefCell<Runtime>>,
}

impl WebHost {
    fn new(window: Window, document: Document, elements: Elements, runtime: Weak<RefCell<Runtime>>) -> Self {
        Self {
            window,
            document,
            elements,
            print_button: None,
            toasts: HashMap::new(),
            reveal_observer: None,
            conclusion_observer: None,
            runtime,
        }
    }

    fn element(&self, target: Target) -> Option<&Element> {
        let els = &self.elements;
        match target {
            Target::Root => els.root.as_ref(),
            Target::Body => els.body.as_ref(),
            Target::ThemeIcon => els.theme_icon.as_ref(),
            Target::ScrollTopButton => els.scroll_top.as_ref(),
            Target::NavLink(i) => els.nav_links.get(i),
            Target::Hero => els.hero.as_ref(),
            Target::Animatable(i) => els.animatables.get(i),
            Target::Conclusion => els.conclusion.as_ref(),
            Target::Stat(i) => els.stats.get(i),
            Target::CodeBox(i) => els.code_boxes.get(i),
            Target::Diagram(i) => els.diagrams.get(i),
            Target::TimelineContent(i) => els.timeline.get(i).map(|(_, content)| content),
            Target::Hamburger => els.hamburger.as_ref(),
            Target::NavMenu => els.nav_menu.as_ref(),
            Target::PrintButton => self.print_button.as_ref(),
            Target::Toast(id) => self.toasts.get(&id),
        }
    }

    fn scroll_offset(&self) -> f64 {
        match self.window.scroll_y() {
            Ok(offset) => offset,
            Err(e) => {
                log::debug!("scrollY unavailable: {}", describe(&e));
                0.0
            }
        }
    }

    fn section_offsets(&self) -> Vec<SectionOffset> {
        self.elements
            .sections
            .iter()
            .filter_map(|section| section.dyn_ref::<HtmlElement>())
            .map(|section| SectionOffset::new(section.id(), f64::from(section.offset_top())))
            .collect()
    }

    fn stat_texts(&self) -> Vec<String> {
        self.elements.stats.iter().map(|stat| stat.text_content().unwrap_or_default()).collect()
    }

    fn menu_contains(&self, node: Option<&Node>) -> bool {
        [&self.elements.hamburger, &self.elements.nav_menu].into_iter().flatten().any(|el| el.contains(node))
    }

    fn observer(&mut self, watch: Watch) -> Option<IntersectionObserver> {
        let runtime = self.runtime.clone();
        let slot = match watch.kind {
            WatchKind::Reveal => &mut self.reveal_observer,
            WatchKind::Conclusion => &mut self.conclusion_observer,
        };
        if let Some(observer) = slot {
            return Some(observer.clone());
        }

        let kind = watch.kind;
        let callback = Closure::wrap(Box::new(move |entries: Array, _: IntersectionObserver| {
            if let Some(runtime) = runtime.upgrade() {
                on_intersections(&runtime, kind, &entries);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(watch.threshold));
        init.set_root_margin(watch.root_margin);
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => {
                callback.forget();
                *slot = Some(observer.clone());
                Some(observer)
            }
            Err(e) => {
                log::debug!("IntersectionObserver unavailable: {}", describe(&e));
                None
            }
        }
    }
}

impl Dom for WebHost {
    fn add_class(&mut self, target: Target, class: &str) {
        if let Some(el) = self.element(target) {
            report(el.class_list().add_1(class), "classList.add");
        }
    }

    fn remove_class(&mut self, target: Target, class: &str) {
        if let Some(el) = self.element(target) {
            report(el.class_list().remove_1(class), "classList.remove");
        }
    }

    fn set_style(&mut self, target: Target, property: &str, value: &str) {
        if let Some(el) = self.element(target).and_then(|el| el.dyn_ref::<HtmlElement>()) {
            report(el.style().set_property(property, value), "style.setProperty");
        }
    }

    fn set_attribute(&mut self, target: Target, name: &str, value: &str) {
        if let Some(el) = self.element(target) {
            report(el.set_attribute(name, value), "setAttribute");
        }
    }

    fn set_text(&mut self, target: Target, text: &str) {
        if let Some(el) = self.element(target) {
            el.set_text_content(Some(text));
        }
    }

    fn mount_toast(&mut self, toast: &Toast) {
        let Some(body) = self.elements.body.clone() else {
            return;
        };
        let el = match self.document.create_element("div") {
            Ok(el) => el,
            Err(e) => {
                log::debug!("notification not created: {}", describe(&e));
                return;
            }
        };
        el.set_text_content(Some(&toast.text));
        let css = format!(
            "position: fixed; top: {}px; right: 20px; background: {}; color: white; padding: {}; \
             border-radius: 8px; font-weight: bold; z-index: 9999; animation: fadeIn 0.3s;",
            toast.top_px, toast.background, toast.padding
        );
        report(el.set_attribute("style", &css), "notification style");
        report(body.append_child(&el), "notification mount");
        self.toasts.insert(toast.id, el);
    }

    fn remove_toast(&mut self, id: ToastId) {
        if let Some(el) = self.toasts.remove(&id) {
            el.remove();
        }
    }

    fn mount_print_button(&mut self, label: &str) {
        let Some(body) = self.elements.body.clone() else {
            return;
        };
        let button = match self.document.create_element("button") {
            Ok(button) => button,
            Err(e) => {
                log::debug!("print button not created: {}", describe(&e));
                return;
            }
        };
        button.set_text_content(Some(label));

        listen(&button, "click", &self.runtime, |runtime, _: Event| {
            dispatch(runtime, |rt, _| rt.controller.on_print_click());
        });
        for (event, entered) in [("mouseenter", true), ("mouseleave", false)] {
            listen(&button, event, &self.runtime, move |runtime, _: Event| {
                dispatch(runtime, |rt, _| rt.controller.on_print_hover(entered));
            });
        }

        report(body.append_child(&button), "print button mount");
        self.print_button = Some(button);
    }
}

impl Viewport for WebHost {
    fn scroll_to(&mut self, destination: ScrollDestination) {
        let top = match destination {
            ScrollDestination::Top => 0.0,
            ScrollDestination::Bottom => {
                self.elements.body.as_ref().map_or(0.0, |body| f64::from(body.scroll_height()))
            }
        };
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_into_view(&mut self, section_id: &str) {
        let Some(section) = self.document.get_element_by_id(section_id) else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        section.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

impl ClipboardWriter for WebHost {
    fn write_text(&mut self, block: usize, text: &str) {
        let pending = clipboard_write(&self.window, text);
        let runtime = self.runtime.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = match pending {
                Ok(promise) => JsFuture::from(promise).await.map(drop),
                Err(e) => Err(e),
            };
            let ok = match result {
                Ok(()) => true,
                Err(e) => {
                    log::debug!("clipboard rejected: {}", describe(&e));
                    false
                }
            };
            if let Some(runtime) = runtime.upgrade() {
                dispatch(&runtime, |rt, now| rt.controller.clipboard_settled(now, block, ok));
            }
        });
    }
}

/// `navigator.clipboard.writeText(text)`, failing when the API is absent.
fn clipboard_write(window: &Window, text: &str) -> Result<Promise, JsValue> {
    let clipboard = Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))?;
    let write_text: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))?.dyn_into()?;
    write_text.call1(&clipboard, &JsValue::from_str(text))?.dyn_into::<Promise>()
}

impl VisibilityObserver for WebHost {
    fn observe(&mut self, target: Target, watch: Watch) {
        let Some(element) = self.element(target).cloned() else {
            return;
        };
        if let Some(observer) = self.observer(watch) {
            observer.observe(&element);
        }
    }
}

impl PrintDialog for WebHost {
    fn print(&mut self) {
        report(self.window.print(), "window.print");
    }
}

impl Console for WebHost {
    fn banner(&mut self, lines: &[BannerLine]) {
        for line in lines {
            web_sys::console::log_2(&JsValue::from_str(&format!("%c{}", line.text)), &JsValue::from_str(&line.style));
        }
    }
}

// =============================================================
// JS error plumbing
// =============================================================

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

fn js_error(value: JsValue) -> PageError {
    PageError::Js(describe(&value))
}

/// Log a failed browser call at debug level; page behavior degrades silently.
fn report<T>(result: Result<T, JsValue>, what: &str) {
    if let Err(e) = result {
        log::debug!("{what} failed: {}", describe(&e));
    }
}
