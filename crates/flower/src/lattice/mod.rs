//! Circle lattice: near-identical filter, intersection expander, rings.
//!
//! Purpose
//! - Grow a set of equal-radius circles by repeatedly intersecting every pair
//!   and admitting intersection points as new centers, until no pair yields a
//!   new point inside the bounding radius.
//! - Build the two rings (3 and 5) whose difference gives the Flower of Life.
//!
//! Termination
//! - The bounding radius caps the admissible region and the near-identical
//!   filter keeps admitted points `near` apart, so only finitely many points
//!   can ever be admitted.
//!
//! References
//! - Code cross-refs: `geom2::{Circle, GeomCfg, round_point}`, `compose::draw_flower_of_life`

mod expand;
mod near;
mod ring;

pub use expand::expand;
pub use near::{is_near_identical, PointSet};
pub use ring::{generate_ring, FlowerPattern};

use crate::geom2::Circle;

/// Circles in discovery order.
pub type CircleCollection = Vec<Circle>;
