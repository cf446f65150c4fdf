//! Process-wide slot for the active engine, plus the visibility watcher.
//!
//! Exactly one engine can be active per page. Rules:
//! - [`activate`] starts an engine for the current viewport (stopping and
//!   replacing any previous one) and arms the `visibilitychange` watcher.
//! - While armed, hiding the page fully tears the engine down; showing it
//!   again constructs a fresh engine if the viewport still qualifies.
//!   Particle state is deliberately not preserved across a hide/show cycle.
//! - [`shutdown`] stops the active engine and clears the slot; the watcher
//!   stays armed, so the next visibility-regain can restart the effect.
//!
//! Single-threaded by construction (`thread_local`), matching the
//! cooperative frame-driven model: all mutation happens in event callbacks
//! or the frame loop on the one main thread.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::VisibilityState;

use super::config::FieldOptions;
use super::engine::FieldEngine;

thread_local! {
	static ACTIVE_ENGINE: RefCell<Option<FieldEngine>> = const { RefCell::new(None) };
	static VISIBILITY_WATCH: RefCell<Option<Closure<dyn FnMut()>>> = const { RefCell::new(None) };
}

/// Start the sparkle field for this page and keep it in sync with page
/// visibility. Replaces any engine already running.
pub fn activate(options: FieldOptions) {
	start_engine(&options);
	watch_visibility(options);
}

/// Stop the active engine, if any, and clear the slot. Idempotent.
pub fn shutdown() {
	ACTIVE_ENGINE.with(|slot| {
		if let Some(mut engine) = slot.borrow_mut().take() {
			engine.stop();
		}
	});
}

/// Whether an engine currently owns the overlay.
pub fn is_active() -> bool {
	ACTIVE_ENGINE.with(|slot| slot.borrow().is_some())
}

fn start_engine(options: &FieldOptions) {
	let engine = FieldEngine::start(options);
	ACTIVE_ENGINE.with(|slot| {
		let mut slot = slot.borrow_mut();
		if let Some(mut old) = slot.take() {
			old.stop();
		}
		*slot = engine;
	});
}

fn watch_visibility(options: FieldOptions) {
	let Some(window) = web_sys::window() else {
		return;
	};
	let Some(document) = window.document() else {
		return;
	};

	VISIBILITY_WATCH.with(|slot| {
		let mut slot = slot.borrow_mut();
		if let Some(old) = slot.take() {
			let _ = document.remove_event_listener_with_callback(
				"visibilitychange",
				old.as_ref().unchecked_ref(),
			);
		}

		let doc = document.clone();
		let watcher = Closure::<dyn FnMut()>::new(move || {
			if doc.visibility_state() == VisibilityState::Hidden {
				log::debug!("sparkle-field: page hidden, tearing the engine down");
				shutdown();
			} else {
				// Rebuilt from scratch; the activation policy is re-checked
				// inside FieldEngine::start.
				log::debug!("sparkle-field: page visible, rebuilding the engine");
				start_engine(&options);
			}
		});
		let _ = document
			.add_event_listener_with_callback("visibilitychange", watcher.as_ref().unchecked_ref());
		*slot = Some(watcher);
	});
}
