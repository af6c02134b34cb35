//! Palette selection for the particle background.
//!
//! One palette mode applies uniformly to all draw calls within a tick:
//! vivid colors on dark backgrounds, softened ones on light.

/// RGBA color rendered to CSS fill/stroke strings.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Link color on dark backgrounds.
const LINK_DARK: Color = Color::rgb(255, 150, 200);
/// Link color on light backgrounds.
const LINK_LIGHT: Color = Color::rgb(255, 107, 157);

const LINK_BASE_ALPHA_DARK: f64 = 0.15;
const LINK_BASE_ALPHA_LIGHT: f64 = 0.10;

/// Dark vs light color selection, applied uniformly within a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaletteMode {
	Light,
	Dark,
}

impl PaletteMode {
	/// Palette for the page-wide dark-mode flag.
	pub fn from_dark_flag(dark: bool) -> Self {
		if dark {
			PaletteMode::Dark
		} else {
			PaletteMode::Light
		}
	}

	/// Fill color for a particle with the given hue and opacity.
	pub fn particle_fill(self, hue: f64, opacity: f64) -> String {
		match self {
			PaletteMode::Dark => format!("hsla({}, 80%, 70%, {})", hue, opacity),
			PaletteMode::Light => format!("hsla({}, 70%, 60%, {})", hue, opacity * 0.7),
		}
	}

	/// Stroke color for a link of the given strength. Alpha falls off
	/// linearly with distance via the strength factor.
	pub fn link_stroke(self, strength: f64) -> String {
		let (color, base_alpha) = match self {
			PaletteMode::Dark => (LINK_DARK, LINK_BASE_ALPHA_DARK),
			PaletteMode::Light => (LINK_LIGHT, LINK_BASE_ALPHA_LIGHT),
		};
		color.with_alpha(base_alpha * strength).to_css()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_particle_fill_modes() {
		assert_eq!(
			PaletteMode::Dark.particle_fill(340.0, 0.5),
			"hsla(340, 80%, 70%, 0.5)"
		);
		// Light mode softens the opacity
		assert_eq!(
			PaletteMode::Light.particle_fill(340.0, 0.5),
			"hsla(340, 70%, 60%, 0.35)"
		);
	}

	#[test]
	fn test_link_stroke_alpha_scales_with_strength() {
		assert_eq!(
			PaletteMode::Dark.link_stroke(1.0),
			"rgba(255, 150, 200, 0.15)"
		);
		assert_eq!(
			PaletteMode::Light.link_stroke(1.0),
			"rgba(255, 107, 157, 0.1)"
		);
		assert!(PaletteMode::Dark.link_stroke(0.5).contains("0.075"));
	}

	#[test]
	fn test_color_to_css() {
		assert_eq!(Color::rgb(255, 150, 200).to_css(), "#ff96c8");
		assert_eq!(
			Color::rgb(255, 150, 200).with_alpha(0.5).to_css(),
			"rgba(255, 150, 200, 0.5)"
		);
	}

	#[test]
	fn test_from_dark_flag() {
		assert_eq!(PaletteMode::from_dark_flag(true), PaletteMode::Dark);
		assert_eq!(PaletteMode::from_dark_flag(false), PaletteMode::Light);
	}
}
