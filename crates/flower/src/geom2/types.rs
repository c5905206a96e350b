//! Basic 2D types and tolerances.
//!
//! - `GeomCfg`: centralizes the coincidence tolerance, containment slack,
//!   rounding precision and the arc-bisection limits.
//! - `Circle`: center + radius with structural equality and hashing.
//! - `Color`: RGB triple handed to drawing surfaces.
//! - `GeomError`: malformed inputs (degenerate circles, bad tolerances).

use std::f64::consts::{PI, TAU};
use std::fmt;
use std::hash::{Hash, Hasher};

use nalgebra::Vector2;

use super::util::key_bits;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// Points closer than this are treated as the same lattice point.
    pub near: f64,
    /// Slack added to radii in containment checks (bounding radius, arc test).
    pub fp_slack: f64,
    /// Arc bisection gives up once the interval width drops below `radius / div_threshold`.
    pub div_threshold: f64,
    /// Decimal digits kept when rounding intersection points.
    pub precision_digits: u32,
    /// Hard ceiling on arc bisection depth. Work doubles per level; at 20 the
    /// angular floor is reached first for every radius >= 1e-3.
    pub max_depth: u32,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            near: 0.2,
            fp_slack: 1e-3,
            div_threshold: 1000.0,
            precision_digits: 5,
            max_depth: 20,
        }
    }
}

impl GeomCfg {
    /// Reject tolerances that would break termination of the expander or the arc test.
    pub fn validate(&self) -> Result<(), GeomError> {
        if !self.near.is_finite() || self.near <= 0.0 {
            return Err(GeomError::InvalidConfig {
                field: "near",
                value: self.near,
            });
        }
        if !self.fp_slack.is_finite() || self.fp_slack < 0.0 {
            return Err(GeomError::InvalidConfig {
                field: "fp_slack",
                value: self.fp_slack,
            });
        }
        if !self.div_threshold.is_finite() || self.div_threshold <= 0.0 {
            return Err(GeomError::InvalidConfig {
                field: "div_threshold",
                value: self.div_threshold,
            });
        }
        if self.precision_digits > 15 {
            return Err(GeomError::InvalidConfig {
                field: "precision_digits",
                value: f64::from(self.precision_digits),
            });
        }
        Ok(())
    }
}

/// Errors surfaced by the geometry engine.
#[derive(Clone, Debug, PartialEq)]
pub enum GeomError {
    /// A circle with zero, negative or non-finite radius reached an operation that divides by it.
    InvalidGeometry { radius: f64 },
    /// A `GeomCfg` field is outside its admissible range.
    InvalidConfig { field: &'static str, value: f64 },
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::InvalidGeometry { radius } => {
                write!(f, "invalid geometry: circle radius {} must be positive and finite", radius)
            }
            GeomError::InvalidConfig { field, value } => {
                write!(f, "invalid configuration: {} = {} is out of range", field, value)
            }
        }
    }
}

impl std::error::Error for GeomError {}

/// Circle with structural equality over (center, radius).
///
/// Equality is exact on the bit patterns (with `-0.0` folded to `0.0`);
/// tolerance-based matching belongs to `lattice::is_near_identical`.
#[derive(Clone, Copy, Debug)]
pub struct Circle {
    pub center: Vector2<f64>,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(center: Vector2<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Intersection points with `other`: empty when disjoint, nested or concentric;
    /// one point when tangent; otherwise two points, the one left of the
    /// `self → other` direction first.
    pub fn intersection(&self, other: &Circle) -> Vec<Vector2<f64>> {
        let delta = other.center - self.center;
        let d = delta.norm();
        if d == 0.0 || !d.is_finite() {
            return Vec::new();
        }
        if d > self.radius + other.radius || d < (self.radius - other.radius).abs() {
            return Vec::new();
        }
        let a = (self.radius * self.radius - other.radius * other.radius + d * d) / (2.0 * d);
        let h2 = self.radius * self.radius - a * a;
        let base = self.center + delta * (a / d);
        if h2 <= 0.0 {
            return vec![base];
        }
        let h = h2.sqrt();
        let perp = Vector2::new(-delta.y, delta.x) / d;
        vec![base + perp * h, base - perp * h]
    }

    /// Point on the boundary at turn fraction `t` (y flipped for a downward-y surface).
    #[inline]
    pub fn point_at_turn(&self, t: f64) -> Vector2<f64> {
        let theta = t * TAU;
        Vector2::new(
            self.center.x + self.radius * theta.cos(),
            self.center.y - self.radius * theta.sin(),
        )
    }

    /// Turn fraction in [0, 1) of a boundary point `p`.
    ///
    /// `acos` gives the half-turn; points below the center on screen
    /// (`p.y > center.y`) sit in the second half of the turn.
    pub fn turn_of(&self, p: Vector2<f64>) -> f64 {
        let rad = ((p.x - self.center.x) / self.radius).clamp(-1.0, 1.0).acos();
        let t = if p.y > self.center.y {
            0.5 + (PI - rad) / TAU
        } else {
            rad / TAU
        };
        if t >= 1.0 {
            t - 1.0
        } else {
            t
        }
    }

    /// Map from lattice coordinates into a frame with origin `center` and unit length `scale`.
    #[inline]
    pub fn scaled_into(&self, center: Vector2<f64>, scale: f64) -> Circle {
        Circle::new(self.center * scale + center, self.radius * scale)
    }

    #[inline]
    fn key(&self) -> [u64; 3] {
        [
            key_bits(self.center.x),
            key_bits(self.center.y),
            key_bits(self.radius),
        ]
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Circle {}

impl Hash for Circle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` form used by vector outputs.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
