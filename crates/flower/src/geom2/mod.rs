//! 2D primitives for the circle lattice (points, circles, colors, tolerances).
//!
//! Purpose
//! - Provide the small geometry kernel the lattice and arc modules build on:
//!   circle–circle intersection, turn-fraction parametrization, and
//!   structural equality on circles so lattices can be diffed as sets.
//! - Keep every tolerance in one `GeomCfg` value passed explicitly.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>`.
//! - Angles are turn fractions in [0, 1). Turn 0 is east; increasing turns
//!   run counter-clockwise on a surface whose y axis points down.
//!
//! References
//! - Code cross-refs: `lattice::{expand, generate_ring}`, `arc::visible_arc`

mod types;
mod util;

pub use types::{Circle, Color, GeomCfg, GeomError};
pub use util::round_point;

#[cfg(test)]
mod tests;
