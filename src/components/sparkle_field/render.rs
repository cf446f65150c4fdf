//! Canvas painting for the sparkle field.
//!
//! One pass per frame: clear, ambient sparkles, then transients on top.
//! The surface is a transparent overlay; the clear leaves the page content
//! visible underneath. Only the frame loop calls into this module.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::SparkleField;
use super::particle::{Particle, ParticleKind};
use super::theme::{FieldTheme, SparkleStyle};

/// Ray spokes extend to 3x the particle size.
const RAY_LENGTH: f64 = 3.0;
/// The glow halo extends to 4x the particle size.
const GLOW_RADIUS: f64 = 4.0;

/// Paint the complete field. Must run after the frame's `update` so it
/// never observes stale positions.
pub fn draw(field: &SparkleField, ctx: &CanvasRenderingContext2d, theme: &FieldTheme) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());

	for p in field.ambient() {
		draw_sparkle(ctx, p, &theme.ambient);
	}
	for p in field.transient() {
		let style = match p.kind {
			ParticleKind::Burst { .. } => &theme.burst,
			_ => &theme.drift,
		};
		draw_sparkle(ctx, p, style);
	}
}

fn draw_sparkle(ctx: &CanvasRenderingContext2d, p: &Particle, style: &SparkleStyle) {
	let alpha = p.twinkle_opacity();
	if alpha < 0.005 {
		return;
	}

	ctx.set_fill_style_str(&style.color.with_alpha(alpha).to_css());
	ctx.begin_path();
	let _ = ctx.arc(p.x, p.y, p.size, 0.0, PI * 2.0);
	ctx.fill();

	if style.glow > 0.0 {
		draw_glow(ctx, p, style, alpha);
	}

	let rays = p.rays();
	if rays > 0 {
		draw_rays(ctx, p, style, alpha, rays);
	}
}

fn draw_glow(ctx: &CanvasRenderingContext2d, p: &Particle, style: &SparkleStyle, alpha: f64) {
	let glow_radius = p.size * GLOW_RADIUS;
	let gradient = ctx
		.create_radial_gradient(p.x, p.y, 0.0, p.x, p.y, glow_radius)
		.unwrap();

	gradient
		.add_color_stop(0.0, &style.color.with_alpha(alpha * style.glow).to_css())
		.unwrap();
	gradient.add_color_stop(1.0, "rgba(0, 0, 0, 0)").unwrap();

	ctx.begin_path();
	let _ = ctx.arc(p.x, p.y, glow_radius, 0.0, PI * 2.0);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill();
}

fn draw_rays(
	ctx: &CanvasRenderingContext2d,
	p: &Particle,
	style: &SparkleStyle,
	alpha: f64,
	rays: u32,
) {
	ctx.set_stroke_style_str(&style.color.with_alpha(alpha).to_css());
	ctx.set_line_width(1.0);

	// Evenly spaced spokes, anchored to the twinkle phase so each burst
	// particle keeps its own orientation.
	let step = PI * 2.0 / f64::from(rays);
	let reach = p.size * RAY_LENGTH;
	for i in 0..rays {
		let angle = p.phase + f64::from(i) * step;
		ctx.begin_path();
		ctx.move_to(p.x, p.y);
		ctx.line_to(p.x + angle.cos() * reach, p.y + angle.sin() * reach);
		ctx.stroke();
	}
}
