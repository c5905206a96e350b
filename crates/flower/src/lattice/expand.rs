//! Intersection expander (fixed-point growth of a circle collection).

use std::collections::VecDeque;

use nalgebra::Vector2;

use super::near::PointSet;
use super::CircleCollection;
use crate::geom2::{round_point, Circle, GeomCfg};

/// Grow `circles` in place until no pair yields an admissible new center.
///
/// Each circle is popped from a worklist once and intersected with every
/// circle discovered before it. An intersection point, rounded to
/// `cfg.precision_digits`, becomes the center of a new circle (radius of
/// `circles[0]`) iff it lies within `bound_radius` of `center` and is not
/// near-identical to an admitted point. New circles join the worklist.
///
/// Returns the number of circles appended. Empty input is a no-op.
pub fn expand(
    circles: &mut CircleCollection,
    center: Vector2<f64>,
    bound_radius: f64,
    cfg: &GeomCfg,
) -> usize {
    let Some(first) = circles.first() else {
        return 0;
    };
    let circle_radius = first.radius;
    let seeded = circles.len();
    let mut points = PointSet::from_centers(circles);
    let mut pending: VecDeque<usize> = (1..circles.len()).collect();

    while let Some(index) = pending.pop_front() {
        let selected = circles[index];
        for earlier in 0..index {
            let other = circles[earlier];
            for p in selected.intersection(&other) {
                let p = round_point(p, cfg.precision_digits);
                if (p - center).norm() > bound_radius {
                    continue;
                }
                if points.insert_if_distinct(p, cfg.near) {
                    circles.push(Circle::new(p, circle_radius));
                    pending.push_back(circles.len() - 1);
                }
            }
        }
    }

    let admitted = circles.len() - seeded;
    tracing::debug!(admitted, total = circles.len(), bound_radius, "lattice expanded");
    admitted
}
