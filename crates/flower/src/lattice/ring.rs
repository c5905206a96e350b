//! Ring lattices and the Flower of Life pattern built from them.

use std::collections::HashSet;

use nalgebra::Vector2;

use super::expand::expand;
use super::CircleCollection;
use crate::geom2::{Circle, GeomCfg, GeomError};

/// Lattice of unit circles whose centers lie within `n - 1` of the origin.
///
/// - `n < 0`: empty.
/// - `n` in {0, 1}: the unit circle at the origin.
/// - otherwise: two seeds through the origin (at the origin and one radius
///   below it) expanded with bounding radius `(n - 1) + cfg.fp_slack`.
pub fn generate_ring(n: i32, cfg: &GeomCfg) -> CircleCollection {
    let origin = Vector2::<f64>::zeros();
    if n < 0 {
        return Vec::new();
    }
    if n <= 1 {
        return vec![Circle::new(origin, 1.0)];
    }
    let radius = 1.0;
    let mut circles = vec![
        Circle::new(origin, radius),
        Circle::new(Vector2::new(origin.x, origin.y - radius), radius),
    ];
    expand(&mut circles, origin, f64::from(n - 1) + cfg.fp_slack, cfg);
    circles
}

/// Full ring (drawn whole) and surrounding ring (drawn clipped) in lattice coordinates.
#[derive(Clone, Debug)]
pub struct FlowerPattern {
    pub full: CircleCollection,
    /// Ring-5 circles not equal to any full-ring circle, in discovery order.
    pub surrounding: CircleCollection,
}

impl FlowerPattern {
    pub const FULL_RING: i32 = 3;
    pub const SURROUNDING_RING: i32 = 5;

    /// Compute `(ring 3, ring 5 \ ring 3)`.
    pub fn new(cfg: &GeomCfg) -> Result<Self, GeomError> {
        cfg.validate()?;
        let pattern = Self::from_rings(
            generate_ring(Self::FULL_RING, cfg),
            generate_ring(Self::SURROUNDING_RING, cfg),
        );
        tracing::debug!(
            full = pattern.full.len(),
            surrounding = pattern.surrounding.len(),
            "flower pattern built"
        );
        Ok(pattern)
    }

    /// Set difference by circle value; `outer` order is kept.
    pub fn from_rings(full: CircleCollection, outer: CircleCollection) -> Self {
        let inner: HashSet<Circle> = full.iter().copied().collect();
        let surrounding = outer.into_iter().filter(|c| !inner.contains(c)).collect();
        Self { full, surrounding }
    }
}
