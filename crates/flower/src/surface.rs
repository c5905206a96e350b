//! Drawing surfaces: the only boundary of the geometry engine.
//!
//! The engine emits two instructions, whole circles and circle arcs in turn
//! units. Concrete surfaces (vector files, bitmaps, canvases) live with callers.

use crate::geom2::{Circle, Color};

/// Consumer of draw instructions.
pub trait Surface {
    fn draw_circle(&mut self, circle: &Circle, color: Color);
    /// Arc from turn `start` over `extent` turns, counter-clockwise with y pointing down.
    fn draw_circle_arc(&mut self, circle: &Circle, start: f64, extent: f64, color: Color);
}

/// One recorded instruction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCmd {
    Circle {
        circle: Circle,
        color: Color,
    },
    Arc {
        circle: Circle,
        start: f64,
        extent: f64,
        color: Color,
    },
}

/// Surface that records the instruction stream for replay.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub cmds: Vec<DrawCmd>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circle_count(&self) -> usize {
        self.cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::Circle { .. }))
            .count()
    }

    pub fn arc_count(&self) -> usize {
        self.cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::Arc { .. }))
            .count()
    }

    /// Send the recorded stream, in order, to another surface.
    pub fn replay<S: Surface + ?Sized>(&self, surface: &mut S) {
        for cmd in &self.cmds {
            match *cmd {
                DrawCmd::Circle { circle, color } => surface.draw_circle(&circle, color),
                DrawCmd::Arc {
                    circle,
                    start,
                    extent,
                    color,
                } => surface.draw_circle_arc(&circle, start, extent, color),
            }
        }
    }
}

impl Surface for Recorder {
    fn draw_circle(&mut self, circle: &Circle, color: Color) {
        self.cmds.push(DrawCmd::Circle {
            circle: *circle,
            color,
        });
    }

    fn draw_circle_arc(&mut self, circle: &Circle, start: f64, extent: f64, color: Color) {
        self.cmds.push(DrawCmd::Arc {
            circle: *circle,
            start,
            extent,
            color,
        });
    }
}
