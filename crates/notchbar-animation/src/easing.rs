//! Easing curves.
//!
//! Every curve except [`Easing::Linear`] is a cubic Bézier from (0, 0) to
//! (1, 1) defined by its two inner control points.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Material standard curve.
    FastOutSlowIn,
    LinearOutSlowIn,
    FastOutLinearIn,
    /// Custom curve from control points `(x1, y1)` and `(x2, y2)`.
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    fn control_points(&self) -> Option<(f32, f32, f32, f32)> {
        match *self {
            Easing::Linear => None,
            Easing::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            Easing::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            Easing::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
            Easing::FastOutSlowIn => Some((0.4, 0.0, 0.2, 1.0)),
            Easing::LinearOutSlowIn => Some((0.0, 0.0, 0.2, 1.0)),
            Easing::FastOutLinearIn => Some((0.4, 0.0, 1.0, 1.0)),
            Easing::CubicBezier(x1, y1, x2, y2) => Some((x1, y1, x2, y2)),
        }
    }

    /// Maps linear progress in [0, 1] to eased progress.
    pub fn transform(&self, fraction: f32) -> f32 {
        match self.control_points() {
            None => fraction.clamp(0.0, 1.0),
            Some((x1, y1, x2, y2)) => CubicCurve::new(x1, y1, x2, y2).solve(fraction),
        }
    }
}

/// Polynomial coefficients of one axis of the curve.
#[derive(Clone, Copy)]
struct Axis {
    a: f32,
    b: f32,
    c: f32,
}

impl Axis {
    fn new(p1: f32, p2: f32) -> Self {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        Self { a: 1.0 - c - b, b, c }
    }

    fn sample(&self, t: f32) -> f32 {
        ((self.a * t + self.b) * t + self.c) * t
    }

    fn derivative(&self, t: f32) -> f32 {
        (3.0 * self.a * t + 2.0 * self.b) * t + self.c
    }
}

struct CubicCurve {
    x: Axis,
    y: Axis,
}

impl CubicCurve {
    const EPSILON: f32 = 1e-6;

    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x: Axis::new(x1, x2),
            y: Axis::new(y1, y2),
        }
    }

    fn solve(&self, fraction: f32) -> f32 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }
        let t = self
            .newton(fraction)
            .unwrap_or_else(|| self.bisect(fraction));
        self.y.sample(t)
    }

    fn newton(&self, fraction: f32) -> Option<f32> {
        let mut t = fraction;
        for _ in 0..8 {
            let error = self.x.sample(t) - fraction;
            if error.abs() < Self::EPSILON {
                return Some(t);
            }
            let slope = self.x.derivative(t);
            if slope.abs() < Self::EPSILON {
                return None;
            }
            t = (t - error / slope).clamp(0.0, 1.0);
        }
        None
    }

    fn bisect(&self, fraction: f32) -> f32 {
        let (mut low, mut high) = (0.0f32, 1.0f32);
        let mut t = fraction;
        for _ in 0..16 {
            let error = self.x.sample(t) - fraction;
            if error.abs() < Self::EPSILON {
                break;
            }
            if error > 0.0 {
                high = t;
            } else {
                low = t;
            }
            t = 0.5 * (low + high);
        }
        t
    }
}
