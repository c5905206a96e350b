//! JSON form of a recorded instruction stream.

use flower::surface::DrawCmd;
use flower::Recorder;
use serde::Serialize;

#[derive(Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Instruction {
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        color: String,
    },
    Arc {
        cx: f64,
        cy: f64,
        r: f64,
        start: f64,
        extent: f64,
        color: String,
    },
}

impl From<&DrawCmd> for Instruction {
    fn from(cmd: &DrawCmd) -> Self {
        match *cmd {
            DrawCmd::Circle { circle, color } => Instruction::Circle {
                cx: circle.center.x,
                cy: circle.center.y,
                r: circle.radius,
                color: color.to_hex(),
            },
            DrawCmd::Arc {
                circle,
                start,
                extent,
                color,
            } => Instruction::Arc {
                cx: circle.center.x,
                cy: circle.center.y,
                r: circle.radius,
                start,
                extent,
                color: color.to_hex(),
            },
        }
    }
}

pub fn instructions(rec: &Recorder) -> Vec<Instruction> {
    rec.cmds.iter().map(Instruction::from).collect()
}
