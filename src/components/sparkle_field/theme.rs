//! Visual presets for the sparkle field.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
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

/// How one particle class is tinted.
#[derive(Clone, Copy, Debug)]
pub struct SparkleStyle {
	/// Fill and glow color.
	pub color: Color,
	/// Glow halo strength relative to the disc alpha (0 disables the halo).
	pub glow: f64,
}

/// Complete visual theme: one style per particle class.
#[derive(Clone, Debug)]
pub struct FieldTheme {
	pub name: &'static str,
	pub ambient: SparkleStyle,
	pub drift: SparkleStyle,
	pub burst: SparkleStyle,
}

impl FieldTheme {
	/// Cool blue-white sparkles with golden bursts (default).
	pub fn stardust() -> Self {
		Self {
			name: "stardust",
			ambient: SparkleStyle {
				color: Color::rgb(180, 200, 255),
				glow: 0.35,
			},
			drift: SparkleStyle {
				color: Color::rgb(220, 230, 255),
				glow: 0.4,
			},
			burst: SparkleStyle {
				color: Color::rgb(255, 220, 150),
				glow: 0.5,
			},
		}
	}

	/// Warm amber sparkles, fiery bursts.
	pub fn ember() -> Self {
		Self {
			name: "ember",
			ambient: SparkleStyle {
				color: Color::rgb(205, 150, 110),
				glow: 0.35,
			},
			drift: SparkleStyle {
				color: Color::rgb(235, 175, 120),
				glow: 0.4,
			},
			burst: SparkleStyle {
				color: Color::rgb(255, 170, 80),
				glow: 0.55,
			},
		}
	}

	/// Icy cyan sparkles throughout.
	pub fn glacier() -> Self {
		Self {
			name: "glacier",
			ambient: SparkleStyle {
				color: Color::rgb(150, 200, 215),
				glow: 0.3,
			},
			drift: SparkleStyle {
				color: Color::rgb(185, 225, 235),
				glow: 0.4,
			},
			burst: SparkleStyle {
				color: Color::rgb(140, 230, 255),
				glow: 0.5,
			},
		}
	}

	/// Look up a preset by its configured name.
	pub fn by_name(name: &str) -> Option<Self> {
		match name {
			"stardust" => Some(Self::stardust()),
			"ember" => Some(Self::ember()),
			"glacier" => Some(Self::glacier()),
			_ => None,
		}
	}
}

impl Default for FieldTheme {
	fn default() -> Self {
		Self::stardust()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn css_formats_opaque_as_hex_and_translucent_as_rgba() {
		assert_eq!(Color::rgb(255, 220, 150).to_css(), "#ffdc96");
		assert_eq!(
			Color::rgb(10, 20, 30).with_alpha(0.5).to_css(),
			"rgba(10, 20, 30, 0.5)"
		);
	}

	#[test]
	fn presets_resolve_by_name() {
		assert_eq!(FieldTheme::by_name("ember").unwrap().name, "ember");
		assert_eq!(FieldTheme::by_name("glacier").unwrap().name, "glacier");
		assert!(FieldTheme::by_name("neon").is_none());
	}

	#[test]
	fn default_is_stardust() {
		assert_eq!(FieldTheme::default().name, "stardust");
	}
}
