//! Flower composer: turns a `FlowerPattern` into draw instructions.
//!
//! Lattice coordinates are mapped into the target frame by a uniform scale of
//! `radius / 3` (the full ring spans three lattice radii) and a translation to
//! the target center.

use nalgebra::Vector2;

use crate::arc::draw_circle_filtered;
use crate::geom2::{Circle, Color, GeomCfg, GeomError};
use crate::lattice::{generate_ring, FlowerPattern};
use crate::surface::Surface;

/// Draw the enclosing circle, every full-ring circle whole, and for each
/// surrounding circle its kept arc against every full-ring circle.
pub fn draw_flower_of_life<S: Surface + ?Sized>(
    surface: &mut S,
    pattern: &FlowerPattern,
    center: Vector2<f64>,
    radius: f64,
    color: Color,
    cfg: &GeomCfg,
) -> Result<(), GeomError> {
    cfg.validate()?;
    if !radius.is_finite() || radius <= 0.0 {
        return Err(GeomError::InvalidGeometry { radius });
    }
    let scale = radius / f64::from(FlowerPattern::FULL_RING);
    surface.draw_circle(&Circle::new(center, radius), color);

    let full: Vec<Circle> = pattern
        .full
        .iter()
        .map(|c| c.scaled_into(center, scale))
        .collect();
    for circle in &full {
        surface.draw_circle(circle, color);
    }

    let mut arcs = 0usize;
    for surrounding in &pattern.surrounding {
        let circle = surrounding.scaled_into(center, scale);
        for enclosing in &full {
            if draw_circle_filtered(surface, &circle, enclosing, color, cfg)? {
                arcs += 1;
            }
        }
    }
    tracing::debug!(full = full.len(), arcs, radius, "flower composed");
    Ok(())
}

/// Draw ring `n` whole, scaled so the ring spans `radius` (`radius / (n - 1)` per lattice unit).
///
/// Pass `circles` to reuse a ring computed earlier.
pub fn draw_overlapping_circles<S: Surface + ?Sized>(
    surface: &mut S,
    center: Vector2<f64>,
    radius: f64,
    color: Color,
    n: i32,
    circles: Option<&[Circle]>,
    cfg: &GeomCfg,
) {
    let generated;
    let circles = match circles {
        Some(c) => c,
        None => {
            generated = generate_ring(n, cfg);
            generated.as_slice()
        }
    };
    let scale = if n > 1 {
        radius / f64::from(n - 1)
    } else {
        radius
    };
    for circle in circles {
        surface.draw_circle(&circle.scaled_into(center, scale), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arc::is_arc_outside_circle;
    use crate::surface::{DrawCmd, Recorder};
    use nalgebra::vector;

    fn composed() -> Recorder {
        let cfg = GeomCfg::default();
        let pattern = FlowerPattern::new(&cfg).unwrap();
        let mut rec = Recorder::new();
        draw_flower_of_life(&mut rec, &pattern, vector![6.0, 4.5], 3.0, Color::BLACK, &cfg)
            .unwrap();
        rec
    }

    #[test]
    fn flower_instruction_stream_shape() {
        let rec = composed();
        match rec.cmds[0] {
            DrawCmd::Circle { circle, color } => {
                assert_eq!(circle, Circle::new(vector![6.0, 4.5], 3.0));
                assert_eq!(color, Color::BLACK);
            }
            other => panic!("expected outer circle first, got {other:?}"),
        }
        // outer + 19 full circles, then arcs only
        assert_eq!(rec.circle_count(), 20);
        assert_eq!(rec.arc_count(), 84);
        assert!(rec.cmds[1..20]
            .iter()
            .all(|c| matches!(c, DrawCmd::Circle { circle, .. } if (circle.radius - 1.0).abs() < 1e-12)));
        assert!(rec.cmds[20..]
            .iter()
            .all(|c| matches!(c, DrawCmd::Arc { .. })));
    }

    #[test]
    fn flower_arcs_lie_within_outer_circle() {
        let cfg = GeomCfg::default();
        let outer = Circle::new(vector![6.0, 4.5], 3.0);
        let rec = composed();
        for cmd in &rec.cmds {
            if let DrawCmd::Arc {
                circle,
                start,
                extent,
                ..
            } = *cmd
            {
                assert!(extent > 0.0 && extent < 1.0);
                assert!((0.0..1.0).contains(&start));
                let outside = is_arc_outside_circle(
                    circle.center,
                    circle.radius,
                    start,
                    start + extent,
                    &outer,
                    &cfg,
                )
                .unwrap();
                assert!(!outside);
            }
        }
    }

    #[test]
    fn flower_rejects_degenerate_radius() {
        let cfg = GeomCfg::default();
        let pattern = FlowerPattern::new(&cfg).unwrap();
        let mut rec = Recorder::new();
        let res = draw_flower_of_life(&mut rec, &pattern, vector![0.0, 0.0], 0.0, Color::BLACK, &cfg);
        assert_eq!(res, Err(GeomError::InvalidGeometry { radius: 0.0 }));
        assert!(rec.cmds.is_empty());
    }

    #[test]
    fn flower_rejects_invalid_cfg() {
        let pattern = FlowerPattern::new(&GeomCfg::default()).unwrap();
        let cfg = GeomCfg {
            div_threshold: 0.0,
            ..GeomCfg::default()
        };
        let mut rec = Recorder::new();
        let res = draw_flower_of_life(&mut rec, &pattern, vector![6.0, 4.5], 3.0, Color::BLACK, &cfg);
        assert!(matches!(
            res,
            Err(GeomError::InvalidConfig {
                field: "div_threshold",
                ..
            })
        ));
        assert!(rec.cmds.is_empty());
    }

    #[test]
    fn overlapping_circles_scale_by_ring() {
        let cfg = GeomCfg::default();
        let mut rec = Recorder::new();
        draw_overlapping_circles(&mut rec, vector![1.0, 1.0], 2.0, Color::BLACK, 3, None, &cfg);
        assert_eq!(rec.circle_count(), 19);
        for cmd in &rec.cmds {
            if let DrawCmd::Circle { circle, .. } = cmd {
                assert_eq!(circle.radius, 1.0);
            }
        }

        let single = [Circle::new(vector![0.0, 0.0], 1.0)];
        let mut rec = Recorder::new();
        draw_overlapping_circles(&mut rec, vector![2.0, 2.0], 0.5, Color::WHITE, 1, Some(&single[..]), &cfg);
        assert_eq!(
            rec.cmds,
            vec![DrawCmd::Circle {
                circle: Circle::new(vector![2.0, 2.0], 0.5),
                color: Color::WHITE,
            }]
        );
    }
}
