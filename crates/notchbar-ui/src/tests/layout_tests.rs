use super::*;

use crate::style::BarStyle;
use notchbar_ui_graphics::Density;

fn metrics() -> BarMetrics {
    BarMetrics::resolve(&BarStyle::default(), Density::default())
}

#[test]
fn row_sits_below_the_arc_band() {
    let layout = BarLayout::measure(400.0, &metrics(), &[None; 4]);
    assert_eq!(layout.size, Size::new(400.0, 80.0));
    assert_eq!(layout.row, Rect::new(0.0, 20.0, 400.0, 60.0));
    let slot_xs: Vec<f32> = layout.items.iter().map(|item| item.slot.x).collect();
    assert_eq!(slot_xs, vec![0.0, 100.0, 200.0, 300.0]);
}

#[test]
fn icon_without_label_is_centered_in_slot() {
    let layout = BarLayout::measure(400.0, &metrics(), &[None; 4]);
    let item = layout.items[1];
    assert_eq!(item.icon, Rect::new(138.0, 38.0, 24.0, 24.0));
    assert_eq!(item.label, None);
}

#[test]
fn label_stacks_under_icon_with_padding() {
    let labels = [Some(Size::new(50.0, 16.0)), None, None, None];
    let layout = BarLayout::measure(400.0, &metrics(), &labels);
    let item = layout.items[0];
    assert_eq!(item.icon, Rect::new(38.0, 25.0, 24.0, 24.0));
    assert_eq!(item.label, Some(Rect::new(25.0, 54.0, 50.0, 16.0)));
}

#[test]
fn hit_test_maps_points_to_slots() {
    let layout = BarLayout::measure(400.0, &metrics(), &[None; 4]);
    assert_eq!(layout.hit_test(10.0, 50.0), Some(0));
    assert_eq!(layout.hit_test(100.0, 50.0), Some(1));
    assert_eq!(layout.hit_test(399.9, 79.0), Some(3));
    assert_eq!(layout.hit_test(400.0, 50.0), Some(3));
    assert_eq!(layout.hit_test(250.0, 10.0), None, "arc band is not tappable");
    assert_eq!(layout.hit_test(401.0, 50.0), None);
}

#[test]
fn hit_test_covers_row_when_slot_edges_round_short() {
    let layout = BarLayout::measure(15.0, &metrics(), &[None; 7]);
    assert_eq!(layout.hit_test(14.999999, 50.0), Some(6));
    assert_eq!(layout.hit_test(15.0, 50.0), Some(6));

    for width in 1..=400u32 {
        let width = width as f32;
        let layout = BarLayout::measure(width, &metrics(), &[None; 7]);
        for step in 0..=70u32 {
            let x = width * step as f32 / 70.0;
            assert!(layout.hit_test(x, 50.0).is_some(), "width {width} x {x}");
        }
        let just_inside = f32::from_bits(width.to_bits() - 1);
        assert_eq!(layout.hit_test(just_inside, 50.0), Some(6), "width {width}");
    }
}

#[test]
fn hit_test_on_unmeasured_bar_misses() {
    let layout = BarLayout::measure(0.0, &metrics(), &[None; 4]);
    assert_eq!(layout.hit_test(0.0, 50.0), None);
    let empty = BarLayout::measure(400.0, &metrics(), &[]);
    assert_eq!(empty.hit_test(10.0, 50.0), None);
}
