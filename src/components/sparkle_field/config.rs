//! Host-page configuration for the sparkle field.

use serde::Deserialize;

/// Tunable knobs for the sparkle field, loaded from the host page as JSON.
///
/// Every field is optional; anything missing keeps its default, so an empty
/// object (or no config element at all) yields the stock behavior.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldOptions {
	/// Name of the visual preset (`"stardust"`, `"ember"`, `"glacier"`).
	pub theme: String,
	/// Fixed ambient population size.
	pub ambient_count: usize,
	/// The engine does not activate at or below this viewport width, in px.
	pub min_viewport_width: f64,
	/// Chance per pointer-move event of spawning one drift sparkle.
	pub drift_spawn_chance: f64,
	/// Spawn radius around the pointer for drift sparkles, in px.
	pub drift_jitter: f64,
	/// Number of intense sparkles per click burst.
	pub burst_count: usize,
	/// Spawn radius around the click point for burst sparkles, in px.
	pub burst_jitter: f64,
}

impl Default for FieldOptions {
	fn default() -> Self {
		Self {
			theme: "stardust".to_string(),
			ambient_count: 40,
			min_viewport_width: 768.0,
			drift_spawn_chance: 0.3,
			drift_jitter: 18.0,
			burst_count: 12,
			burst_jitter: 42.0,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_gives_defaults() {
		let opts: FieldOptions = serde_json::from_str("{}").unwrap();
		assert_eq!(opts, FieldOptions::default());
	}

	#[test]
	fn partial_object_overrides_only_named_fields() {
		let opts: FieldOptions =
			serde_json::from_str(r#"{"theme": "ember", "burst_count": 20}"#).unwrap();
		assert_eq!(opts.theme, "ember");
		assert_eq!(opts.burst_count, 20);
		assert_eq!(opts.ambient_count, 40);
		assert_eq!(opts.min_viewport_width, 768.0);
	}
}
