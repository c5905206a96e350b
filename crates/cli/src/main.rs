use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use flower::prelude::*;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod dump;
mod provenance;
mod vector;

use provenance::{write_sidecar, Payload};
use vector::SvgSurface;

#[derive(Parser)]
#[command(name = "flower")]
#[command(about = "Flower of Life pattern renderer")]
struct Cmd {
    /// Distance below which two lattice points are the same point
    #[arg(long, global = true)]
    near: Option<f64>,

    /// Slack added to radii in containment checks
    #[arg(long, global = true)]
    slack: Option<f64>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Render the Flower of Life (outer circle, full ring, clipped surrounding ring)
    Render {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Svg)]
        format: Format,
        /// Flower radius in plane units
        #[arg(long, default_value_t = 3.0)]
        radius: f64,
        #[command(flatten)]
        plane: PlaneArgs,
    },
    /// Render one ring lattice with every circle drawn whole
    Ring {
        #[arg(long, allow_negative_numbers = true)]
        n: i32,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Svg)]
        format: Format,
        /// Ring radius in plane units
        #[arg(long, default_value_t = 3.0)]
        radius: f64,
        #[command(flatten)]
        plane: PlaneArgs,
    },
    /// Print lattice and pattern statistics as JSON
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Svg,
    Json,
}

#[derive(Args, Clone, Copy, Debug)]
struct PlaneArgs {
    /// Plane width in plane units
    #[arg(long, default_value_t = 12.0)]
    width: f64,
    /// Plane height in plane units
    #[arg(long, default_value_t = 9.0)]
    height: f64,
    #[arg(long, default_value_t = 400)]
    pixels_wide: u32,
    #[arg(long, default_value_t = 300)]
    pixels_high: u32,
}

impl PlaneArgs {
    fn center(&self) -> Vec2<f64> {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl Cmd {
    fn geom_cfg(&self) -> Result<GeomCfg> {
        let mut cfg = GeomCfg::default();
        if let Some(near) = self.near {
            cfg.near = near;
        }
        if let Some(slack) = self.slack {
            cfg.fp_slack = slack;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = cmd.geom_cfg()?;
    match cmd.action {
        Action::Render {
            out,
            format,
            radius,
            plane,
        } => render(&out, format, radius, plane, &cfg),
        Action::Ring {
            n,
            out,
            format,
            radius,
            plane,
        } => ring(n, &out, format, radius, plane, &cfg),
        Action::Report => report(&cfg),
    }
}

fn render(out: &Path, format: Format, radius: f64, plane: PlaneArgs, cfg: &GeomCfg) -> Result<()> {
    tracing::info!(out = %out.display(), ?format, radius, "render");
    let pattern = FlowerPattern::new(cfg)?;
    let mut rec = Recorder::new();
    draw_flower_of_life(&mut rec, &pattern, plane.center(), radius, Color::BLACK, cfg)?;
    write_output(&rec, out, format, plane)?;

    let stats = json!({
        "full_circles": pattern.full.len(),
        "surrounding_circles": pattern.surrounding.len(),
        "circles_drawn": rec.circle_count(),
        "arcs_drawn": rec.arc_count()
    });
    tracing::info!(
        circles = rec.circle_count(),
        arcs = rec.arc_count(),
        "flower rendered"
    );
    let payload = Payload::new("render", params_json(radius, plane, cfg)).with_stats(stats);
    write_sidecar(out, payload)?;
    Ok(())
}

fn ring(
    n: i32,
    out: &Path,
    format: Format,
    radius: f64,
    plane: PlaneArgs,
    cfg: &GeomCfg,
) -> Result<()> {
    tracing::info!(n, out = %out.display(), ?format, radius, "ring");
    let circles = generate_ring(n, cfg);
    let mut rec = Recorder::new();
    draw_overlapping_circles(
        &mut rec,
        plane.center(),
        radius,
        Color::BLACK,
        n,
        Some(circles.as_slice()),
        cfg,
    );
    write_output(&rec, out, format, plane)?;

    let mut params = params_json(radius, plane, cfg);
    params["n"] = json!(n);
    let payload =
        Payload::new("ring", params).with_stats(json!({ "circles_drawn": rec.circle_count() }));
    write_sidecar(out, payload)?;
    Ok(())
}

fn report(cfg: &GeomCfg) -> Result<()> {
    let rings: Vec<_> = (0..=FlowerPattern::SURROUNDING_RING)
        .map(|n| json!({ "n": n, "circles": generate_ring(n, cfg).len() }))
        .collect();
    let pattern = FlowerPattern::new(cfg)?;
    let mut rec = Recorder::new();
    draw_flower_of_life(&mut rec, &pattern, Vec2::zeros(), 3.0, Color::BLACK, cfg)?;
    let obj = json!({
        "version": flower::VERSION,
        "code_rev": provenance::current_git_rev(),
        "cfg": cfg_json(cfg),
        "rings": rings,
        "pattern": {
            "full_circles": pattern.full.len(),
            "surrounding_circles": pattern.surrounding.len(),
            "arcs": rec.arc_count()
        }
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_output(rec: &Recorder, out: &Path, format: Format, plane: PlaneArgs) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    match format {
        Format::Svg => {
            let mut surface =
                SvgSurface::new(plane.width, plane.height, plane.pixels_wide, plane.pixels_high);
            rec.replay(&mut surface);
            svg::save(out, &surface.finish())
                .with_context(|| format!("writing {}", out.display()))?;
        }
        Format::Json => {
            let bytes = serde_json::to_vec_pretty(&dump::instructions(rec))?;
            fs::write(out, bytes).with_context(|| format!("writing {}", out.display()))?;
        }
    }
    Ok(())
}

fn cfg_json(cfg: &GeomCfg) -> serde_json::Value {
    json!({
        "near": cfg.near,
        "fp_slack": cfg.fp_slack,
        "div_threshold": cfg.div_threshold,
        "precision_digits": cfg.precision_digits,
        "max_depth": cfg.max_depth
    })
}

fn params_json(radius: f64, plane: PlaneArgs, cfg: &GeomCfg) -> serde_json::Value {
    json!({
        "radius": radius,
        "plane": {
            "width": plane.width,
            "height": plane.height,
            "pixels_wide": plane.pixels_wide,
            "pixels_high": plane.pixels_high
        },
        "cfg": cfg_json(cfg)
    })
}
