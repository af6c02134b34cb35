//! Particle field simulation state.
//!
//! Pure state and arithmetic: no DOM access here, so the numerical behavior
//! (wrap-around, count tiers, pairwise links) is testable off-target.
//! Drawing lives in the sibling `render` module.

/// Particles further apart than this are not linked.
pub const LINK_DISTANCE: f64 = 120.0;

/// Stroke width for proximity links, in canvas pixels.
pub const LINK_WIDTH: f64 = 0.5;

/// Viewports narrower than this get the sparse particle tier.
const NARROW_VIEWPORT: f64 = 768.0;

const SPARSE_COUNT: usize = 30;
const DENSE_COUNT: usize = 60;

/// A single drifting dot. Position is the only field that changes after
/// construction.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub opacity: f64,
	pub hue: f64, // Degrees, magenta/pink band
}

impl Particle {
	/// Link strength to `other`: 1 for coincident particles, fading linearly
	/// to the cutoff. `None` at or beyond [`LINK_DISTANCE`].
	pub fn link_strength(&self, other: &Particle) -> Option<f64> {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		let dist = (dx * dx + dy * dy).sqrt();

		if dist < LINK_DISTANCE {
			Some(1.0 - dist / LINK_DISTANCE)
		} else {
			None
		}
	}
}

/// A proximity link between two particles, by index into the field.
#[derive(Clone, Copy, Debug)]
pub struct Link {
	pub a: usize,
	pub b: usize,
	/// 1 for coincident endpoints, approaching 0 at the cutoff distance.
	pub strength: f64,
}

/// Owns all particle state and the current surface dimensions.
///
/// Created once when the canvas mounts; ticked once per animation frame.
/// Resizes update the stored dimensions only — particles keep their
/// positions and re-enter through their own wrap.
#[derive(Clone, Debug)]
pub struct ParticleField {
	particles: Vec<Particle>,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Build a field sized to the given surface, with the particle count
	/// tier chosen from the viewport width.
	pub fn new(width: f64, height: f64) -> Self {
		let count = Self::count_for_width(width);
		let mut particles = Vec::with_capacity(count);

		for i in 0..count {
			// Deterministic pseudo-random by index for a reproducible field
			let seed = (i + 1) as f64;
			particles.push(Particle {
				x: Self::pseudo_random(seed * 1.1) * width,
				y: Self::pseudo_random(seed * 2.3) * height,
				vx: (Self::pseudo_random(seed * 3.7) - 0.5) * 0.5,
				vy: (Self::pseudo_random(seed * 4.1) - 0.5) * 0.5,
				radius: 1.0 + Self::pseudo_random(seed * 5.3) * 3.0,
				opacity: 0.2 + Self::pseudo_random(seed * 6.7) * 0.5,
				hue: 320.0 + Self::pseudo_random(seed * 7.9) * 60.0,
			});
		}

		Self {
			particles,
			width,
			height,
		}
	}

	/// 30 particles on narrow viewports, 60 otherwise. The breakpoint itself
	/// (768 logical pixels) lands in the dense tier.
	pub fn count_for_width(width: f64) -> usize {
		if width < NARROW_VIEWPORT {
			SPARSE_COUNT
		} else {
			DENSE_COUNT
		}
	}

	/// Simple pseudo-random function (deterministic)
	fn pseudo_random(seed: f64) -> f64 {
		let x = (seed * 12.9898 + seed * 78.233).sin() * 43758.5453;
		x - x.floor()
	}

	/// Advance every particle by one tick: Euler step, then wrap.
	///
	/// Exactly one wrap per axis per tick: a coordinate below 0 reappears at
	/// the surface dimension; a coordinate at or past the dimension
	/// reappears at 0. Velocities are bounded well under the surface size,
	/// so no multi-wrap correction is needed.
	pub fn tick(&mut self) {
		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			if p.x < 0.0 {
				p.x = self.width;
			} else if p.x >= self.width {
				p.x = 0.0;
			}
			if p.y < 0.0 {
				p.y = self.height;
			} else if p.y >= self.height {
				p.y = 0.0;
			}
		}
	}

	/// Update the surface bounds. Particle positions are left untouched;
	/// anything outside the new bounds relocates on its next wrap.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Every unordered pair within the cutoff distance, each visited once.
	pub fn links(&self) -> Vec<Link> {
		let mut links = Vec::new();
		for (i, p) in self.particles.iter().enumerate() {
			for (j, q) in self.particles.iter().enumerate().skip(i + 1) {
				if let Some(strength) = p.link_strength(q) {
					links.push(Link { a: i, b: j, strength });
				}
			}
		}
		links
	}

	/// All particles, in sequence order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Current surface width.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Current surface height.
	pub fn height(&self) -> f64 {
		self.height
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::particle_field::theme::PaletteMode;

	fn probe(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle {
			x,
			y,
			vx,
			vy,
			radius: 2.0,
			opacity: 0.5,
			hue: 340.0,
		}
	}

	#[test]
	fn test_count_tier_breakpoint() {
		assert_eq!(ParticleField::count_for_width(500.0), 30);
		assert_eq!(ParticleField::count_for_width(767.999), 30);
		assert_eq!(ParticleField::count_for_width(768.0), 60);
		assert_eq!(ParticleField::count_for_width(1920.0), 60);

		assert_eq!(ParticleField::new(500.0, 400.0).particles().len(), 30);
		assert_eq!(ParticleField::new(768.0, 400.0).particles().len(), 60);
	}

	#[test]
	fn test_spawn_ranges() {
		let field = ParticleField::new(1024.0, 768.0);
		for p in field.particles() {
			assert!(p.x >= 0.0 && p.x < 1024.0);
			assert!(p.y >= 0.0 && p.y < 768.0);
			assert!(p.vx >= -0.25 && p.vx < 0.25);
			assert!(p.vy >= -0.25 && p.vy < 0.25);
			assert!(p.radius >= 1.0 && p.radius < 4.0);
			assert!(p.opacity >= 0.2 && p.opacity < 0.7);
			assert!(p.hue >= 320.0 && p.hue < 380.0);
		}
	}

	#[test]
	fn test_positions_stay_in_bounds() {
		let mut field = ParticleField::new(640.0, 480.0);
		for _ in 0..500 {
			field.tick();
			for p in field.particles() {
				// The closed upper bound is reachable for one tick after a
				// low-edge crossing; anything past it is a wrap bug.
				assert!(p.x >= 0.0 && p.x <= 640.0, "x out of bounds: {}", p.x);
				assert!(p.y >= 0.0 && p.y <= 480.0, "y out of bounds: {}", p.y);
			}
		}
	}

	#[test]
	fn test_wrap_at_exact_dimension() {
		// At the dimension with non-negative velocity: next tick lands at 0,
		// never clamped just inside.
		let mut field = ParticleField::new(640.0, 480.0);
		field.particles[0] = probe(640.0, 100.0, 0.0, 0.0);
		field.tick();
		assert_eq!(field.particles()[0].x, 0.0);

		field.particles[0] = probe(640.0, 100.0, 0.1, 0.0);
		field.tick();
		assert_eq!(field.particles()[0].x, 0.0);
	}

	#[test]
	fn test_wrap_below_zero_sets_dimension() {
		let mut field = ParticleField::new(640.0, 480.0);
		field.particles[0] = probe(0.0, 100.0, -0.1, 0.0);
		field.tick();
		// Low-edge crossing reappears exactly at the dimension...
		assert_eq!(field.particles()[0].x, 640.0);
		field.tick();
		// ...and re-enters on its next step.
		let x = field.particles()[0].x;
		assert!(x > 0.0 && x < 640.0);
	}

	#[test]
	fn test_link_strength_cutoff() {
		let a = probe(0.0, 0.0, 0.0, 0.0);

		// Strict inequality at the cutoff
		assert!(a.link_strength(&probe(120.0, 0.0, 0.0, 0.0)).is_none());

		let near = a.link_strength(&probe(119.999, 0.0, 0.0, 0.0)).unwrap();
		assert!(near > 0.0);

		let on_top = a.link_strength(&probe(0.0, 0.0, 0.0, 0.0)).unwrap();
		assert_eq!(on_top, 1.0);

		let mid = a.link_strength(&probe(60.0, 0.0, 0.0, 0.0)).unwrap();
		assert!((mid - 0.5).abs() < 1e-12);
	}

	#[test]
	fn test_links_visit_each_pair_once() {
		let mut field = ParticleField::new(640.0, 480.0);
		let n = 8;
		field.particles = (0..n).map(|_| probe(100.0, 100.0, 0.0, 0.0)).collect();

		let links = field.links();
		assert_eq!(links.len(), n * (n - 1) / 2);
		for link in &links {
			assert!(link.a < link.b);
			assert_eq!(link.strength, 1.0);
		}
	}

	#[test]
	fn test_palette_switch_leaves_motion_alone() {
		let mut a = ParticleField::new(800.0, 600.0);
		let mut b = a.clone();

		// Palette only feeds the draw pass; ticking under either mode must
		// produce identical trajectories.
		let _ = PaletteMode::Dark.particle_fill(330.0, 0.5);
		a.tick();
		let _ = PaletteMode::Light.particle_fill(330.0, 0.5);
		b.tick();

		for (p, q) in a.particles().iter().zip(b.particles()) {
			assert_eq!(p.x, q.x);
			assert_eq!(p.y, q.y);
			assert_eq!(p.vx, q.vx);
			assert_eq!(p.vy, q.vy);
		}
	}

	#[test]
	fn test_exact_wrap_timing_end_to_end() {
		let mut field = ParticleField::new(500.0, 400.0);
		assert_eq!(field.particles().len(), 30);

		field.particles[0] = probe(499.5, 10.0, 0.5, 0.0);

		// Advances to exactly 500 and wraps to 0 in the same tick's check.
		field.tick();
		assert_eq!(field.particles()[0].x, 0.0);

		field.tick();
		assert_eq!(field.particles()[0].x, 0.5);

		for _ in 0..98 {
			field.tick();
			let p = &field.particles()[0];
			assert!(p.x >= 0.0 && p.x <= 500.0);
			assert!(p.y >= 0.0 && p.y <= 400.0);
		}
	}

	#[test]
	fn test_resize_updates_bounds_only() {
		let mut field = ParticleField::new(800.0, 600.0);
		let before: Vec<(f64, f64)> = field.particles().iter().map(|p| (p.x, p.y)).collect();

		field.resize(400.0, 300.0);

		assert_eq!(field.width(), 400.0);
		assert_eq!(field.height(), 300.0);
		let after: Vec<(f64, f64)> = field.particles().iter().map(|p| (p.x, p.y)).collect();
		assert_eq!(before, after);
	}
}
