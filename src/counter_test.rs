#![allow(clippy::float_cmp)]

use super::*;
use crate::timer::TimerQueue;

fn texts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// Advance stat `index` until it finishes, returning every displayed text.
fn run_to_end(animator: &mut CounterAnimator, index: usize) -> Vec<String> {
    let mut shown = Vec::new();
    while let Some(frame) = animator.advance(index) {
        let Action::SetText { text, .. } = frame.action else {
            panic!("counter frames set text");
        };
        shown.push(text);
        if frame.finished.is_some() || animator.running() == 0 {
            break;
        }
    }
    shown
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_leading_int_follows_parse_int_rules() {
    assert_eq!(parse_leading_int("42"), Some(42.0));
    assert_eq!(parse_leading_int("  7 days"), Some(7.0));
    assert_eq!(parse_leading_int("-12"), Some(-12.0));
    assert_eq!(parse_leading_int("+5"), Some(5.0));
    assert_eq!(parse_leading_int("1,200"), Some(1.0));
    assert_eq!(parse_leading_int("N/A"), None);
    assert_eq!(parse_leading_int("-"), None);
    assert_eq!(parse_leading_int(""), None);
}

#[test]
fn parse_stat_handles_percent_token_and_plain() {
    let pct = parse_stat("87%").unwrap();
    assert!(pct.percent);
    assert_eq!(pct.numeric, 87.0);

    let nf = parse_stat("3NF").unwrap();
    assert!(!nf.percent);
    assert_eq!(nf.numeric, 3.0);
    assert_eq!(nf.literal, "3NF");

    let plain = parse_stat("15+").unwrap();
    assert!(!plain.percent);
    assert_eq!(plain.numeric, 15.0);

    assert_eq!(parse_stat("N/A"), None);
    assert_eq!(parse_stat("%"), None);
}

// =============================================================
// Frames
// =============================================================

#[test]
fn frames_floor_and_suffix_percent() {
    let target = parse_stat("87%").unwrap();
    assert_eq!(frame_text(&target, 1).as_deref(), Some("1%"));
    assert_eq!(frame_text(&target, 25).as_deref(), Some("43%"));
    assert_eq!(frame_text(&target, 49).as_deref(), Some("85%"));
    assert_eq!(frame_text(&target, 50), None);
}

#[test]
fn zero_target_finishes_on_first_frame() {
    let target = parse_stat("0").unwrap();
    assert_eq!(frame_text(&target, 1), None);
}

// =============================================================
// CounterAnimator
// =============================================================

#[test]
fn percent_counter_ends_on_literal_after_fifty_frames() {
    let mut animator = CounterAnimator::new();
    assert_eq!(animator.start(&texts(&["87%"])), vec![0]);
    let shown = run_to_end(&mut animator, 0);
    assert_eq!(shown.len(), 50);
    assert_eq!(shown.last().map(String::as_str), Some("87%"));
    assert!(shown[..49].iter().all(|s| s.ends_with('%')));
}

#[test]
fn normal_form_counter_restores_token() {
    let mut animator = CounterAnimator::new();
    animator.start(&texts(&["3NF"]));
    let shown = run_to_end(&mut animator, 0);
    assert_eq!(shown.first().map(String::as_str), Some("0"));
    assert_eq!(shown.last().map(String::as_str), Some("3NF"));
}

#[test]
fn unparseable_stat_is_skipped() {
    let mut animator = CounterAnimator::new();
    assert_eq!(animator.start(&texts(&["N/A", "12"])), vec![1]);
    assert_eq!(animator.advance(0), None);
}

#[test]
fn counters_start_only_once() {
    let mut animator = CounterAnimator::new();
    assert!(!animator.has_animated());
    assert_eq!(animator.start(&texts(&["5"])).len(), 1);
    assert!(animator.has_animated());
    assert!(animator.start(&texts(&["5"])).is_empty());
}

#[test]
fn final_frame_returns_attached_timer() {
    let mut queue: TimerQueue<()> = TimerQueue::new();
    let timer = queue.schedule_every(0, 30, ());

    let mut animator = CounterAnimator::new();
    animator.start(&texts(&["0"]));
    animator.attach_timer(0, timer);

    let frame = animator.advance(0).unwrap();
    assert_eq!(frame.action, Action::text(Target::Stat(0), "0"));
    assert_eq!(frame.finished, Some(timer));
    assert_eq!(animator.running(), 0);
}
