use super::*;

use std::cell::RefCell;
use std::rc::Rc;

use notchbar_animation::{AnimationSpec, EnterTransition, ExitTransition};
use notchbar_testing::FrameDriver;
use notchbar_ui_graphics::{Color, DrawPrimitive, Dp, Size};

use crate::item::default_items;

fn bar_with(style: BarStyle) -> (FancyBottomBar, FrameDriver) {
    let clock = FrameClock::new();
    let bar = FancyBottomBar::new(default_items(), style, Density::default(), &clock)
        .expect("default items are valid");
    (bar, FrameDriver::new(clock))
}

fn measured_bar() -> (FancyBottomBar, FrameDriver) {
    let (mut bar, driver) = bar_with(BarStyle::default());
    bar.measure(400.0).expect("valid width");
    (bar, driver)
}

#[test]
fn new_rejects_empty_items() {
    let clock = FrameClock::new();
    let result = FancyBottomBar::new(Vec::new(), BarStyle::default(), Density::default(), &clock);
    assert!(matches!(result, Err(BarError::NoItems)));
}

#[test]
fn new_rejects_invalid_style() {
    let clock = FrameClock::new();
    let style = BarStyle::default().with_height(Dp(-5.0));
    let result = FancyBottomBar::new(default_items(), style, Density::default(), &clock);
    assert!(matches!(result, Err(BarError::InvalidStyle { field: "height", .. })));
}

#[test]
fn unmeasured_bar_has_zero_width() {
    let (bar, _driver) = bar_with(BarStyle::default());
    assert_eq!(bar.bar_width(), 0.0);
    assert_eq!(bar.notch_position(), 0.0);
    assert_eq!(bar.phase(), NotchPhase::Initial);
    assert!(!bar.is_animating());
}

#[test]
fn first_measure_snaps_without_frames() {
    let (bar, driver) = measured_bar();
    assert_eq!(driver.frames(), 0);
    assert_eq!(bar.notch_position(), 50.0);
    assert_eq!(bar.notch_target(), 50.0);
    assert_eq!(bar.phase(), NotchPhase::Steady);
    assert!(!bar.is_animating());
}

#[test]
fn measure_rejects_bad_widths() {
    let (mut bar, _driver) = bar_with(BarStyle::default());
    assert_eq!(bar.measure(-1.0), Err(BarError::InvalidWidth { width: -1.0 }));
    assert!(bar.measure(f32::INFINITY).is_err());
    assert!(bar.measure(f32::NAN).is_err());
    assert_eq!(bar.bar_width(), 0.0);
}

#[test]
fn select_out_of_range_is_rejected() {
    let (mut bar, _driver) = measured_bar();
    assert_eq!(
        bar.select(4),
        Err(BarError::IndexOutOfRange { index: 4, count: 4 })
    );
    assert_eq!(bar.selected_index(), 0);
}

#[test]
fn select_tweens_notch_to_new_slot() {
    let (mut bar, mut driver) = measured_bar();
    bar.select(2).expect("in range");
    assert_eq!(bar.notch_target(), 250.0);
    assert_eq!(bar.notch_position(), 50.0);
    assert!(bar.is_animating());

    driver.advance_by_millis(250);
    let midway = bar.notch_position();
    // A linear tween would sit near 150 here; fast-out-slow-in is well past it.
    assert!(midway > 180.0 && midway < 250.0, "midway at {midway}");

    driver.run_until_idle(120).expect("tween settles");
    assert_eq!(bar.notch_position(), 250.0);
    assert!(!bar.is_animating());
}

#[test]
fn reselecting_current_item_does_nothing() {
    let (mut bar, _driver) = measured_bar();
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    bar.set_on_selection_changed(move |index| sink.borrow_mut().push(index));

    bar.select(0).expect("in range");
    assert!(calls.borrow().is_empty());
    assert!(!bar.is_animating());

    bar.select(3).expect("in range");
    assert_eq!(*calls.borrow(), vec![3]);
}

#[test]
fn tap_selects_slot_under_pointer() {
    let (mut bar, _driver) = measured_bar();
    assert_eq!(bar.on_tap(Point::new(320.0, 60.0)), Some(3));
    assert_eq!(bar.selected_index(), 3);
    assert_eq!(bar.notch_target(), 350.0);
}

#[test]
fn tap_above_row_is_ignored() {
    let (mut bar, _driver) = measured_bar();
    assert_eq!(bar.on_tap(Point::new(320.0, 5.0)), None);
    assert_eq!(bar.on_tap(Point::new(-3.0, 60.0)), None);
    assert_eq!(bar.selected_index(), 0);
}

#[test]
fn resize_keeps_notch_under_selection() {
    let (mut bar, mut driver) = measured_bar();
    bar.select(1).expect("in range");
    driver.run_until_idle(120).expect("settles");
    assert_eq!(bar.notch_position(), 150.0);

    bar.measure(800.0).expect("valid width");
    assert_eq!(bar.notch_target(), 300.0);
    driver.run_until_idle(120).expect("settles");
    assert_eq!(bar.notch_position(), 300.0);
}

#[test]
fn set_items_clamps_selection() {
    let (mut bar, mut driver) = measured_bar();
    bar.select(3).expect("in range");
    driver.run_until_idle(120).expect("settles");

    let mut items = default_items();
    items.truncate(2);
    bar.set_items(items).expect("non-empty");
    assert_eq!(bar.selected_index(), 1);
    assert_eq!(bar.notch_target(), 300.0);
    assert_eq!(bar.set_items(Vec::new()), Err(BarError::NoItems));
}

#[test]
fn render_paints_bar_then_icons_then_label() {
    let (bar, _driver) = measured_bar();
    let frame = bar.render();

    assert_eq!(frame.size, Size::new(400.0, 80.0));
    assert_eq!(frame.notch_center, 50.0);
    assert_eq!(frame.primitives.len(), 1 + 4 + 1);
    match &frame.primitives[0] {
        DrawPrimitive::Path { brush, .. } => {
            assert_eq!(brush.as_solid(), Some(bar.style().bar_color))
        }
        other => panic!("expected bar path, got {other:?}"),
    }
    assert!(matches!(frame.primitives[5], DrawPrimitive::Text { .. }));

    assert_eq!(frame.items[0].tint, Color::WHITE);
    assert!(frame.items[1..].iter().all(|item| item.tint == Color::LIGHT_GRAY));
    let labels: Vec<_> = frame.visible_labels().map(|label| label.text.as_str()).collect();
    assert_eq!(labels, vec!["Screen 1"]);
}

#[test]
fn exiting_label_stays_opaque_until_removed() {
    let (mut bar, mut driver) = measured_bar();
    bar.select(1).expect("in range");
    driver.advance_by_millis(100);

    let frame = bar.render();
    let exiting = frame.items[0].label.as_ref().expect("still rendered");
    assert_eq!(exiting.alpha, 1.0);
    let entering = frame.items[1].label.as_ref().expect("entering");
    let resting = bar.layout().items[1].label.expect("label space");
    assert!(entering.rect.y > resting.y);

    driver.run_until_idle(120).expect("settles");
    let frame = bar.render();
    assert!(frame.items[0].label.is_none());
    assert_eq!(frame.items[1].label.as_ref().map(|label| label.rect), Some(resting));
}

#[test]
fn fading_exit_lowers_alpha() {
    let tween = AnimationSpec::linear(400);
    let style = BarStyle::default().with_label_transitions(
        EnterTransition::slide_in_vertically(0.5, tween),
        ExitTransition::fade_out(0.0, tween),
    );
    let (mut bar, mut driver) = bar_with(style);
    bar.measure(400.0).expect("valid width");
    bar.select(2).expect("in range");

    driver.frame();
    driver.advance_by_millis(200);
    let alpha = bar.render().items[0]
        .label
        .as_ref()
        .map(|label| label.alpha)
        .expect("exiting label");
    assert!(alpha > 0.0 && alpha < 1.0, "alpha {alpha}");
}
