//! Flower of Life geometry engine.
//!
//! - `lattice`: grows equal-radius circle lattices by repeated pairwise
//!   intersection and builds the ring-3 / ring-5 pattern.
//! - `arc`: decides which arc of a circle to keep when clipped by another.
//! - `compose`: turns a pattern into draw instructions on a `Surface`.
//!
//! The engine is synchronous and does no I/O; rendering and persistence live
//! behind the `Surface` trait.

pub mod arc;
pub mod compose;
pub mod geom2;
pub mod lattice;
pub mod surface;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Circle, Color, GeomCfg, GeomError};
pub use surface::{Recorder, Surface};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::arc::{draw_circle_filtered, is_arc_outside_circle, visible_arc, VisibleArc};
    pub use crate::compose::{draw_flower_of_life, draw_overlapping_circles};
    pub use crate::geom2::{round_point, Circle, Color, GeomCfg, GeomError};
    pub use crate::lattice::{
        expand, generate_ring, is_near_identical, CircleCollection, FlowerPattern, PointSet,
    };
    pub use crate::surface::{DrawCmd, Recorder, Surface};
    pub use nalgebra::Vector2 as Vec2;
}
