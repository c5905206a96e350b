//! SVG vector surface.
//!
//! Plane units map 1:1 to SVG user units through the `viewBox`; the pixel
//! size only sets the document `width`/`height`. Both use a downward y axis,
//! so turn fractions from the engine are drawn as-is.

use flower::{Circle, Color, Surface, Vec2};
use svg::node::element::path::Data;
use svg::node::element::{Circle as SvgCircle, Path as SvgPath, Rectangle};
use svg::{Document, Node};

pub struct SvgSurface {
    document: Document,
    stroke_width: f64,
}

impl SvgSurface {
    /// Plane of `width × height` units rendered at `pixels_wide × pixels_high`.
    pub fn new(width: f64, height: f64, pixels_wide: u32, pixels_high: u32) -> Self {
        let background = Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", width)
            .set("height", height)
            .set("fill", Color::WHITE.to_hex());
        let document = Document::new()
            .set("width", f64::from(pixels_wide))
            .set("height", f64::from(pixels_high))
            .set("viewBox", (0, 0, width, height))
            .add(background);
        Self {
            document,
            // one pixel, in plane units
            stroke_width: width / f64::from(pixels_wide.max(1)),
        }
    }

    pub fn finish(self) -> Document {
        self.document
    }
}

/// Endpoints of an arc and whether it spans more than half a turn.
fn arc_endpoints(circle: &Circle, start: f64, extent: f64) -> (Vec2<f64>, Vec2<f64>, bool) {
    (
        circle.point_at_turn(start),
        circle.point_at_turn(start + extent),
        extent > 0.5,
    )
}

impl Surface for SvgSurface {
    fn draw_circle(&mut self, circle: &Circle, color: Color) {
        self.document.append(
            SvgCircle::new()
                .set("fill", "none")
                .set("stroke", color.to_hex())
                .set("stroke-width", self.stroke_width)
                .set("cx", circle.center.x)
                .set("cy", circle.center.y)
                .set("r", circle.radius),
        );
    }

    fn draw_circle_arc(&mut self, circle: &Circle, start: f64, extent: f64, color: Color) {
        if extent >= 1.0 {
            self.draw_circle(circle, color);
            return;
        }
        if extent <= 0.0 {
            return;
        }
        let (from, to, large_arc) = arc_endpoints(circle, start, extent);
        let r = circle.radius as f32;
        // increasing turns run counter-clockwise on screen: sweep-flag 0
        let data = Data::new().move_to((from.x as f32, from.y as f32)).elliptical_arc_to(vec![
            r,
            r,
            0.0,
            f32::from(u8::from(large_arc)),
            0.0,
            to.x as f32,
            to.y as f32,
        ]);
        self.document.append(
            SvgPath::new()
                .set("fill", "none")
                .set("stroke", color.to_hex())
                .set("stroke-width", self.stroke_width)
                .set("d", data),
        );
    }
}
