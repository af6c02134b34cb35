//! Canvas rendering for the particle field.
//!
//! One pass per tick: clear the surface, then for each particle in sequence
//! order draw its circle followed by the links to every later particle, so
//! each unordered pair is drawn at most once.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::{LINK_WIDTH, ParticleField};
use super::theme::PaletteMode;

/// Draws the whole field for this tick.
pub fn render(field: &ParticleField, ctx: &CanvasRenderingContext2d, mode: PaletteMode) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());

	let particles = field.particles();
	for (i, p) in particles.iter().enumerate() {
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0);
		ctx.set_fill_style_str(&mode.particle_fill(p.hue, p.opacity));
		ctx.fill();

		for q in &particles[i + 1..] {
			if let Some(strength) = p.link_strength(q) {
				ctx.begin_path();
				ctx.move_to(p.x, p.y);
				ctx.line_to(q.x, q.y);
				ctx.set_stroke_style_str(&mode.link_stroke(strength));
				ctx.set_line_width(LINK_WIDTH);
				ctx.stroke();
			}
		}
	}
}
