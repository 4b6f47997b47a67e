use super::*;

use notchbar_ui_graphics::{Dp, PathCommand, Point};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-3 * b.abs().max(1.0)
}

#[test]
fn four_items_on_400_px() {
    let positions: Vec<f32> = (0..4).map(|index| middle_position(index, 4, 400.0)).collect();
    assert_eq!(positions, vec![50.0, 150.0, 250.0, 350.0]);
}

#[test]
fn first_and_last_slots_are_centered() {
    for count in 1..=12usize {
        for width in [1.0f32, 73.5, 360.0, 1080.0] {
            let n = count as f32;
            assert!(approx(middle_position(0, count, width), width / (2.0 * n)));
            assert!(approx(middle_position(count - 1, count, width), width - width / (2.0 * n)));
        }
    }
}

#[test]
fn single_item_sits_in_the_middle() {
    assert_eq!(middle_position(0, 1, 300.0), 150.0);
}

#[test]
fn inner_slots_strictly_increase() {
    for count in 3..=10usize {
        let width = 997.0;
        let n = count as f32;
        let mut previous = middle_position(0, count, width);
        for index in 1..count - 1 {
            let position = middle_position(index, count, width);
            assert!(approx(position, width / (2.0 * n) + (width / n) * index as f32));
            assert!(position > previous);
            previous = position;
        }
        assert!(middle_position(count - 1, count, width) > previous);
    }
}

#[test]
fn middle_position_is_pure() {
    let first = middle_position(3, 7, 512.0);
    for _ in 0..10 {
        assert_eq!(middle_position(3, 7, 512.0).to_bits(), first.to_bits());
    }
}

#[test]
fn zero_count_is_not_finite() {
    assert!(!middle_position(0, 0, 400.0).is_finite());
    assert!(middle_position(0, 0, 0.0).is_nan());
}

#[test]
fn metrics_scale_with_density() {
    let metrics = BarMetrics::resolve(&BarStyle::default(), Density::new(2.0));
    assert_eq!(metrics.height, 160.0);
    assert_eq!(metrics.arc_height, 40.0);
    assert_eq!(metrics.arc_width, 60.0);
    assert_eq!(metrics.arc_top, 20.0, "arc band offset stays in raw pixels");
    assert_eq!(metrics.row_height(), 120.0);
}

#[test]
fn bar_path_outlines_body_then_arc() {
    let metrics = BarMetrics::resolve(&BarStyle::default(), Density::default());
    let path = build_bar_path(Size::new(400.0, 80.0), &metrics, 250.0);

    assert_eq!(
        &path.commands()[..4],
        &[
            PathCommand::MoveTo(Point::new(0.0, 20.0)),
            PathCommand::LineTo(Point::new(400.0, 20.0)),
            PathCommand::LineTo(Point::new(400.0, 80.0)),
            PathCommand::LineTo(Point::new(0.0, 80.0)),
        ]
    );
    assert_eq!(
        path.commands()[4],
        PathCommand::ArcTo {
            oval: Rect::new(220.0, 20.0, 60.0, 40.0),
            start_angle_degrees: 180.0,
            sweep_angle_degrees: 180.0,
            force_move_to: true,
        }
    );
}

#[test]
fn arc_contour_spans_notch_width() {
    let style = BarStyle::default().with_arc(Dp(30.0), Dp(20.0));
    let metrics = BarMetrics::resolve(&style, Density::new(2.75));
    let center = 123.0;
    let path = build_bar_path(Size::new(990.0, 220.0), &metrics, center);

    let contours = path.flatten(0.25);
    assert_eq!(contours.len(), 2);
    let arc = &contours[1];
    let min_x = arc.iter().map(|p| p.x).fold(f32::INFINITY, f32::min);
    let max_x = arc.iter().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max);
    assert!(approx(min_x, center - metrics.arc_width));
    assert!(approx(max_x, center + metrics.arc_width));

    let bounds = path.bounds().expect("bar path has bounds");
    assert!(approx(bounds.y, metrics.arc_top.min(metrics.arc_height)));
}
