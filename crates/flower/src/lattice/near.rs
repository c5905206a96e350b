//! Near-identical point filter and the point set it guards.

use nalgebra::Vector2;

use crate::geom2::Circle;

/// True if `candidate` equals a member of `points` or lies strictly closer than `tol` to one.
pub fn is_near_identical(candidate: Vector2<f64>, points: &[Vector2<f64>], tol: f64) -> bool {
    points
        .iter()
        .any(|q| *q == candidate || (q - candidate).norm() < tol)
}

/// Points admitted during lattice growth.
///
/// Invariant: no two points inserted through `insert_if_distinct` are closer than the tolerance used.
#[derive(Clone, Debug, Default)]
pub struct PointSet {
    pts: Vec<Vector2<f64>>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from circle centers as-is.
    pub fn from_centers(circles: &[Circle]) -> Self {
        Self {
            pts: circles.iter().map(|c| c.center).collect(),
        }
    }

    #[inline]
    pub fn contains_near(&self, p: Vector2<f64>, tol: f64) -> bool {
        is_near_identical(p, &self.pts, tol)
    }

    /// Insert `p` unless it is near-identical to a member. Returns whether it was inserted.
    pub fn insert_if_distinct(&mut self, p: Vector2<f64>, tol: f64) -> bool {
        if self.contains_near(p, tol) {
            return false;
        }
        self.pts.push(p);
        true
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    pub fn as_slice(&self) -> &[Vector2<f64>] {
        &self.pts
    }
}
