//! Leptos mount point for the sparkle field overlay.
//!
//! The component renders no markup of its own; once mounted it hands the
//! options to the engine registry, which owns the overlay canvas and its
//! whole lifecycle. The component tree has no influence on engine state
//! beyond this boot step.

use leptos::prelude::*;

use super::config::FieldOptions;
use super::registry;

/// Boots the sparkle field after mount.
///
/// The engine only activates on viewports wider than the configured
/// breakpoint, and from then on keeps itself in sync with page visibility
/// and viewport size on its own.
#[component]
pub fn SparkleFieldOverlay(
	#[prop(default = FieldOptions::default())] options: FieldOptions,
) -> impl IntoView {
	Effect::new(move |_| {
		registry::activate(options.clone());
	});
}
