//! sparkle-field: ambient sparkle overlay for full-viewport pages.
//!
//! This crate provides a WASM-based decorative particle effect that renders
//! twinkling sparkles on a click-transparent canvas above the page content,
//! reacting to pointer movement and clicks and synchronizing its lifecycle
//! with page visibility and viewport size.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::sparkle_field::{
	FieldEngine, FieldOptions, FieldTheme, Particle, ParticleKind, SparkleField,
	SparkleFieldOverlay,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("sparkle-field: logging initialized");
}

/// Load overlay options from a script element with id="sparkle-field-config".
/// Expected format: JSON matching [`FieldOptions`]; every field is optional.
fn load_field_options() -> Option<FieldOptions> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("sparkle-field-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<FieldOptions>(&json_text) {
		Ok(options) => {
			info!(
				"sparkle-field: loaded config (theme {}, {} ambient sparkles)",
				options.theme, options.ambient_count
			);
			Some(options)
		}
		Err(e) => {
			warn!("sparkle-field: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads overlay options from the DOM and mounts the sparkle field.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let options = load_field_options().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Sparkle Field" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<SparkleFieldOverlay options=options />
	}
}
