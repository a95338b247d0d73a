//! Pure path generators for annotation shapes. No timing, no state.

use crate::foundation::core::{BezPath, Point, Rect, Vec2};

/// Control-point distance for approximating a quarter circle with one cubic Bezier.
pub const CIRCLE_KAPPA: f64 = 0.552_284_749_831;

/// Length of each arrow-head barb.
pub const ARROW_HEAD_LENGTH: f64 = 14.0;

/// Angle between an arrow-head barb and the shaft, in degrees.
pub const ARROW_HEAD_HALF_ANGLE_DEG: f64 = 30.0;

/// Circle centred at `center`, drawn clockwise from twelve o'clock as four cubic arcs.
pub fn circle(center: Point, radius: f64) -> BezPath {
    let r = if radius.is_finite() { radius.abs() } else { 0.0 };
    let k = r * CIRCLE_KAPPA;
    let (cx, cy) = (center.x, center.y);

    let mut p = BezPath::new();
    p.move_to((cx, cy - r));
    p.curve_to((cx + k, cy - r), (cx + r, cy - k), (cx + r, cy));
    p.curve_to((cx + r, cy + k), (cx + k, cy + r), (cx, cy + r));
    p.curve_to((cx - k, cy + r), (cx - r, cy + k), (cx - r, cy));
    p.curve_to((cx - r, cy - k), (cx - k, cy - r), (cx, cy - r));
    p.close_path();
    p
}

#[derive(Clone, Debug)]
/// Arrow geometry split into the shaft and the head so they can be timed separately.
pub struct ArrowPaths {
    /// Shaft, from the tail to the tip.
    pub line: BezPath,
    /// Head: barb, tip, barb.
    pub head: BezPath,
    /// Direction of the shaft at the tip, in radians.
    pub tip_angle_rad: f64,
}

/// Arrow from `from` to `to`.
///
/// `curve_amount` bends the shaft into a quadratic curve whose control point sits off the
/// midpoint by `curve_amount * length` along the left-hand normal; `0` keeps it straight.
pub fn arrow(from: Point, to: Point, curve_amount: f64) -> ArrowPaths {
    let mut line = BezPath::new();
    line.move_to(from);

    let chord = to - from;
    let curve_amount = if curve_amount.is_finite() {
        curve_amount
    } else {
        0.0
    };
    let tangent = if curve_amount.abs() > f64::EPSILON && chord.hypot() > f64::EPSILON {
        let normal = Vec2::new(chord.y, -chord.x).normalize();
        let control = from.midpoint(to) + normal * (curve_amount * chord.hypot());
        line.quad_to(control, to);
        to - control
    } else {
        line.line_to(to);
        chord
    };

    let tip_angle_rad = if tangent.hypot2() > f64::EPSILON {
        tangent.atan2()
    } else {
        0.0
    };
    let half = ARROW_HEAD_HALF_ANGLE_DEG.to_radians();
    let barb = |angle: f64| to - Vec2::from_angle(angle) * ARROW_HEAD_LENGTH;

    let mut head = BezPath::new();
    head.move_to(barb(tip_angle_rad - half));
    head.line_to(to);
    head.line_to(barb(tip_angle_rad + half));

    ArrowPaths {
        line,
        head,
        tip_angle_rad,
    }
}

/// Closed rectangle with top-left corner `(x, y)`, drawn clockwise.
pub fn box_path(x: f64, y: f64, w: f64, h: f64) -> BezPath {
    let mut p = BezPath::new();
    p.move_to((x, y));
    p.line_to((x + w, y));
    p.line_to((x + w, y + h));
    p.line_to((x, y + h));
    p.close_path();
    p
}

/// [`box_path`] for a [`Rect`].
pub fn rect_path(rect: Rect) -> BezPath {
    let r = rect.abs();
    box_path(r.x0, r.y0, r.width(), r.height())
}

/// Straight underline stroke.
pub fn underline(from: Point, to: Point) -> BezPath {
    let mut p = BezPath::new();
    p.move_to(from);
    p.line_to(to);
    p
}

/// Zig-zag wiping stroke covering `rect` with `passes` horizontal sweeps.
pub fn wipe(rect: Rect, passes: u32) -> BezPath {
    let r = rect.abs();
    let passes = passes.max(1);
    let step = r.height() / f64::from(passes);

    let mut p = BezPath::new();
    p.move_to((r.x0, r.y0));
    for i in 0..passes {
        let y = r.y0 + step * (f64::from(i) + 1.0);
        let x = if i % 2 == 0 { r.x1 } else { r.x0 };
        p.line_to((x, y.min(r.y1)));
    }
    p
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/shapes.rs"]
mod tests;
