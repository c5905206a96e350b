//! Arc visibility against an enclosing circle.
//!
//! Purpose
//! - Decide which of the two arcs cut by an enclosing circle to keep, by
//!   searching the forward arc for a boundary sample outside the enclosing
//!   circle (recursive bisection over turn fractions).
//!
//! Conservative bias
//! - The search stops below an angular floor of `radius / div_threshold` and
//!   reports "not outside". Near-tangent arcs therefore count as inside and
//!   stay visible. A hard depth ceiling (`GeomCfg::max_depth`) applies the same bias.
//!
//! References
//! - Code cross-refs: `geom2::Circle::{intersection, turn_of, point_at_turn}`, `compose::draw_flower_of_life`

use nalgebra::Vector2;

use crate::geom2::{Circle, Color, GeomCfg, GeomError};
use crate::surface::Surface;

/// Arc of `circle` starting at turn `start` and running `extent` turns (extent in [0, 1)).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleArc {
    pub circle: Circle,
    pub start: f64,
    pub extent: f64,
}

#[inline]
fn check_radius(radius: f64) -> Result<(), GeomError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(GeomError::InvalidGeometry { radius })
    }
}

/// True if some sampled point of the arc `[start, end)` of the circle
/// (`center`, `radius`) lies outside `enclosing` by more than `cfg.fp_slack`.
///
/// `end < start` wraps past turn 1.0.
pub fn is_arc_outside_circle(
    center: Vector2<f64>,
    radius: f64,
    start: f64,
    end: f64,
    enclosing: &Circle,
    cfg: &GeomCfg,
) -> Result<bool, GeomError> {
    check_radius(radius)?;
    let mut delta = end - start;
    if end < start {
        delta += 1.0;
    }
    let probe = ArcProbe {
        circle: Circle::new(center, radius),
        end: start + delta,
        floor: radius / cfg.div_threshold,
        enclosing_center: enclosing.center,
        limit: enclosing.radius + cfg.fp_slack,
        max_depth: cfg.max_depth,
    };
    Ok(probe.is_outside(start, delta, 0))
}

struct ArcProbe {
    circle: Circle,
    end: f64,
    floor: f64,
    enclosing_center: Vector2<f64>,
    limit: f64,
    max_depth: u32,
}

impl ArcProbe {
    /// Sub-interval starting at turn `r` with width `d`.
    fn is_outside(&self, r: f64, d: f64, depth: u32) -> bool {
        if d.abs() < self.floor || depth > self.max_depth {
            return false;
        }
        let p = self.circle.point_at_turn(r);
        if (p - self.enclosing_center).norm() > self.limit {
            return true;
        }
        let c = r + d / 2.0;
        if c + d / 4.0 > self.end {
            return false;
        }
        self.is_outside(c - d / 4.0, d / 2.0, depth + 1)
            || self.is_outside(c + d / 4.0, d / 2.0, depth + 1)
    }
}

/// Arc of `circle` kept when clipping against `enclosing`.
///
/// `None` unless the circles cross in exactly two points. The forward arc
/// between the two intersection turns is kept unless the search finds it
/// outside, in which case the reverse arc is kept.
pub fn visible_arc(
    circle: &Circle,
    enclosing: &Circle,
    cfg: &GeomCfg,
) -> Result<Option<VisibleArc>, GeomError> {
    check_radius(circle.radius)?;
    let pts = enclosing.intersection(circle);
    let [a, b] = pts.as_slice() else {
        return Ok(None);
    };
    let mut turns = [circle.turn_of(*a), circle.turn_of(*b)];
    if is_arc_outside_circle(
        circle.center,
        circle.radius,
        turns[0],
        turns[1],
        enclosing,
        cfg,
    )? {
        turns.swap(0, 1);
    }
    let mut extent = turns[1] - turns[0];
    if extent < 0.0 {
        extent += 1.0;
    }
    Ok(Some(VisibleArc {
        circle: *circle,
        start: turns[0],
        extent,
    }))
}

/// Draw the kept arc of `circle` on `surface`. Returns whether anything was drawn.
pub fn draw_circle_filtered<S: Surface + ?Sized>(
    surface: &mut S,
    circle: &Circle,
    enclosing: &Circle,
    color: Color,
    cfg: &GeomCfg,
) -> Result<bool, GeomError> {
    match visible_arc(circle, enclosing, cfg)? {
        Some(arc) => {
            surface.draw_circle_arc(&arc.circle, arc.start, arc.extent, color);
            Ok(true)
        }
        None => Ok(false),
    }
}
