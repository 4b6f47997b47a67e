//! Vector paths made of lines and elliptical arcs.
//!
//! Angles are in degrees, measured clockwise from the positive x axis in
//! screen coordinates (y grows downward), so 270° is the top of an oval.

use smallvec::SmallVec;

use crate::geometry::{Point, Rect};

/// Rule deciding which regions of a self-overlapping path are filled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillType {
    #[default]
    NonZero,
    EvenOdd,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Arc along the ellipse inscribed in `oval`. When `force_move_to` is set
    /// the arc opens a new contour instead of connecting to the current point.
    ArcTo {
        oval: Rect,
        start_angle_degrees: f32,
        sweep_angle_degrees: f32,
        force_move_to: bool,
    },
    Close,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: SmallVec<[PathCommand; 8]>,
    fill_type: FillType,
}

/// Point on the ellipse inscribed in `oval` at `angle_degrees`.
pub fn point_on_oval(oval: &Rect, angle_degrees: f32) -> Point {
    let center = oval.center();
    let radians = angle_degrees.to_radians();
    Point::new(
        center.x + oval.width / 2.0 * radians.cos(),
        center.y + oval.height / 2.0 * radians.sin(),
    )
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill_type(mut self, fill_type: FillType) -> Self {
        self.fill_type = fill_type;
        self
    }

    pub fn fill_type(&self) -> FillType {
        self.fill_type
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
    }

    /// Adds an arc as a new contour.
    pub fn add_arc(&mut self, oval: Rect, start_angle_degrees: f32, sweep_angle_degrees: f32) {
        self.arc_to(oval, start_angle_degrees, sweep_angle_degrees, true);
    }

    pub fn arc_to(
        &mut self,
        oval: Rect,
        start_angle_degrees: f32,
        sweep_angle_degrees: f32,
        force_move_to: bool,
    ) {
        self.commands.push(PathCommand::ArcTo {
            oval,
            start_angle_degrees,
            sweep_angle_degrees,
            force_move_to,
        });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// Returns a copy scaled by `scale` around the origin, then moved by `(dx, dy)`.
    pub fn transformed(&self, scale: f32, dx: f32, dy: f32) -> Path {
        let map = |p: Point| Point::new(p.x * scale + dx, p.y * scale + dy);
        let commands = self
            .commands
            .iter()
            .map(|command| match *command {
                PathCommand::MoveTo(p) => PathCommand::MoveTo(map(p)),
                PathCommand::LineTo(p) => PathCommand::LineTo(map(p)),
                PathCommand::ArcTo {
                    oval,
                    start_angle_degrees,
                    sweep_angle_degrees,
                    force_move_to,
                } => PathCommand::ArcTo {
                    oval: Rect::new(
                        oval.x * scale + dx,
                        oval.y * scale + dy,
                        oval.width * scale,
                        oval.height * scale,
                    ),
                    start_angle_degrees,
                    sweep_angle_degrees,
                    force_move_to,
                },
                PathCommand::Close => PathCommand::Close,
            })
            .collect();
        Path {
            commands,
            fill_type: self.fill_type,
        }
    }

    /// Exact bounding box of every point the path touches.
    pub fn bounds(&self) -> Option<Rect> {
        let mut bounds: Option<Rect> = None;
        let mut include = |p: Point| {
            let point_rect = Rect::new(p.x, p.y, 0.0, 0.0);
            bounds = Some(match bounds {
                Some(current) => current.union(&point_rect),
                None => point_rect,
            });
        };
        let mut current: Option<Point> = None;
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    include(p);
                    current = Some(p);
                }
                PathCommand::LineTo(p) => {
                    if let Some(from) = current {
                        include(from);
                    }
                    include(p);
                    current = Some(p);
                }
                PathCommand::ArcTo {
                    oval,
                    start_angle_degrees,
                    sweep_angle_degrees,
                    force_move_to,
                } => {
                    if !force_move_to {
                        if let Some(from) = current {
                            include(from);
                        }
                    }
                    if !start_angle_degrees.is_finite() || !sweep_angle_degrees.is_finite() {
                        continue;
                    }
                    // One full turn already reaches every extremum.
                    let start = start_angle_degrees.rem_euclid(360.0);
                    let sweep = sweep_angle_degrees.clamp(-360.0, 360.0);
                    let end_angle = start + sweep;
                    include(point_on_oval(&oval, start));
                    include(point_on_oval(&oval, end_angle));
                    let (low, high) = if sweep >= 0.0 {
                        (start, end_angle)
                    } else {
                        (end_angle, start)
                    };
                    // Axis extrema sit at multiples of 90 degrees.
                    let mut quadrant = (low / 90.0).ceil() * 90.0;
                    while quadrant <= high {
                        include(point_on_oval(&oval, quadrant));
                        quadrant += 90.0;
                    }
                    current = Some(point_on_oval(&oval, end_angle));
                }
                PathCommand::Close => {}
            }
        }
        bounds
    }

    /// Converts the path into polylines, one per contour. Arcs are split so
    /// the chord never strays more than `tolerance` from the true curve.
    pub fn flatten(&self, tolerance: f32) -> Vec<Vec<Point>> {
        let mut contours: Vec<Vec<Point>> = Vec::new();
        let mut contour: Vec<Point> = Vec::new();
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    flush_contour(&mut contours, &mut contour);
                    contour.push(p);
                }
                PathCommand::LineTo(p) => contour.push(p),
                PathCommand::ArcTo {
                    oval,
                    start_angle_degrees,
                    sweep_angle_degrees,
                    force_move_to,
                } => {
                    if force_move_to {
                        flush_contour(&mut contours, &mut contour);
                    }
                    let segments = arc_segment_count(&oval, sweep_angle_degrees, tolerance);
                    for step in 0..=segments {
                        let fraction = step as f32 / segments as f32;
                        let angle = start_angle_degrees + sweep_angle_degrees * fraction;
                        contour.push(point_on_oval(&oval, angle));
                    }
                }
                PathCommand::Close => {
                    if let Some(first) = contour.first().copied() {
                        contour.push(first);
                    }
                    flush_contour(&mut contours, &mut contour);
                }
            }
        }
        flush_contour(&mut contours, &mut contour);
        contours
    }
}

fn flush_contour(contours: &mut Vec<Vec<Point>>, contour: &mut Vec<Point>) {
    if !contour.is_empty() {
        contours.push(std::mem::take(contour));
    }
}

fn arc_segment_count(oval: &Rect, sweep_angle_degrees: f32, tolerance: f32) -> usize {
    const MAX_SEGMENTS: usize = 256;
    let radius = (oval.width.abs().max(oval.height.abs())) / 2.0;
    let sweep = sweep_angle_degrees.abs().to_radians();
    if radius <= tolerance || tolerance <= 0.0 || sweep == 0.0 {
        return 1;
    }
    let max_step = 2.0 * (1.0 - tolerance / radius).acos();
    if !max_step.is_finite() || max_step <= 0.0 {
        return MAX_SEGMENTS;
    }
    ((sweep / max_step).ceil() as usize).clamp(1, MAX_SEGMENTS)
}

#[cfg(test)]
#[path = "tests/path_tests.rs"]
mod tests;
