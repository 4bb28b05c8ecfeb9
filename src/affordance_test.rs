use super::*;
use crate::host::apply;
use crate::host::fake::FakeHost;

#[test]
fn code_boxes_become_clickable() {
    let mut host = FakeHost::default();
    apply(&mut host, code_box_setup(2));
    for index in 0..2 {
        assert_eq!(host.style(Target::CodeBox(index), "cursor"), Some("pointer"));
        assert_eq!(host.attribute(Target::CodeBox(index), "title"), Some(COPY_TITLE));
    }
}

#[test]
fn breakpoint_is_inclusive() {
    assert_eq!(PrintLayout::for_width(320.0), PrintLayout::Mobile);
    assert_eq!(PrintLayout::for_width(768.0), PrintLayout::Mobile);
    assert_eq!(PrintLayout::for_width(769.0), PrintLayout::Desktop);
}

#[test]
fn mount_injects_button_with_layout() {
    let mut host = FakeHost::default();
    let mut button = PrintButton::default();
    apply(&mut host, button.mount(1280.0));
    assert_eq!(host.print_button.as_deref(), Some(PRINT_LABEL));
    assert_eq!(host.style(Target::PrintButton, "position"), Some("fixed"));
    assert_eq!(host.style(Target::PrintButton, "bottom"), Some("100px"));
    assert_eq!(button.layout(), Some(PrintLayout::Desktop));
}

#[test]
fn resize_reapplies_only_on_breakpoint_crossing() {
    let mut host = FakeHost::default();
    let mut button = PrintButton::default();
    apply(&mut host, button.mount(1024.0));

    assert!(button.on_resize(900.0).is_empty());
    apply(&mut host, button.on_resize(600.0));
    assert_eq!(host.style(Target::PrintButton, "right"), Some("15px"));
    assert_eq!(button.layout(), Some(PrintLayout::Mobile));

    apply(&mut host, button.on_resize(1024.0));
    assert_eq!(host.style(Target::PrintButton, "right"), Some("30px"));
}

#[test]
fn resize_before_mount_does_nothing() {
    let mut button = PrintButton::default();
    assert!(button.on_resize(500.0).is_empty());
}

#[test]
fn hover_swaps_colors() {
    let mut host = FakeHost::default();
    apply(&mut host, PrintButton::hover(true));
    assert_eq!(host.style(Target::PrintButton, "background"), Some("#667eea"));
    apply(&mut host, PrintButton::hover(false));
    assert_eq!(host.style(Target::PrintButton, "color"), Some("#667eea"));
}

#[test]
fn timeline_hover_lifts_and_settles() {
    let mut host = FakeHost::default();
    apply(&mut host, timeline_hover(3, true));
    assert_eq!(host.style(Target::TimelineContent(3), "transform"), Some("scale(1.02)"));
    apply(&mut host, timeline_hover(3, false));
    assert_eq!(host.style(Target::TimelineContent(3), "transform"), Some("scale(1)"));
}
