//! Engine lifecycle: overlay canvas, event wiring, and the frame loop.
//!
//! `FieldEngine::start` builds everything or nothing: below the activation
//! width, or in an environment without a usable DOM, it returns `None` and
//! leaves the page untouched. The registered handlers only mutate simulation
//! state; the animation closure is the single place that updates and paints,
//! so a frame always renders its own update.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::config::FieldOptions;
use super::field::SparkleField;
use super::render;
use super::theme::FieldTheme;

/// Inline style spanning the viewport above the page content while staying
/// transparent to pointer input.
const OVERLAY_STYLE: &str =
	"position:fixed;top:0;left:0;width:100vw;height:100vh;pointer-events:none;z-index:9999;";

/// A running sparkle overlay: the canvas, its listeners, and the pending
/// animation frame request. Dropping the engine tears everything down.
pub struct FieldEngine {
	canvas: HtmlCanvasElement,
	frame: Rc<RefCell<Option<i32>>>,
	animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
	resize_cb: Closure<dyn FnMut()>,
	move_cb: Closure<dyn FnMut(MouseEvent)>,
	click_cb: Closure<dyn FnMut(MouseEvent)>,
	stopped: bool,
}

impl FieldEngine {
	/// Construct and start an engine for the current viewport.
	///
	/// Returns `None` when the viewport is at or under the activation width
	/// (a deliberate skip, not an error) and when the surface cannot be
	/// created; in both cases no listener has been registered and the page
	/// is left as it was.
	pub fn start(options: &FieldOptions) -> Option<FieldEngine> {
		let window = web_sys::window()?;
		let width = window.inner_width().ok()?.as_f64()?;
		let height = window.inner_height().ok()?.as_f64()?;

		if width <= options.min_viewport_width {
			debug!(
				"sparkle-field: viewport {width}px at or under activation width {}px, skipping",
				options.min_viewport_width
			);
			return None;
		}

		let document = window.document()?;
		let canvas: HtmlCanvasElement = document.create_element("canvas").ok()?.dyn_into().ok()?;
		canvas.set_class_name("sparkle-field-canvas");
		canvas.set_attribute("style", OVERLAY_STYLE).ok()?;
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);
		document.body()?.append_child(&canvas).ok()?;

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => {
					canvas.remove();
					return None;
				}
			},
			_ => {
				canvas.remove();
				return None;
			}
		};

		let theme = FieldTheme::by_name(&options.theme).unwrap_or_else(|| {
			warn!(
				"sparkle-field: unknown theme {:?}, using default",
				options.theme
			);
			FieldTheme::default()
		});

		let seed = (js_sys::Math::random() * f64::from(u32::MAX)) as u32;
		let field = Rc::new(RefCell::new(SparkleField::new(
			options, width, height, seed,
		)));

		let (canvas_resize, field_resize) = (canvas.clone(), field.clone());
		let resize_cb = Closure::<dyn FnMut()>::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (Ok(w), Ok(h)) = (win.inner_width(), win.inner_height()) else {
				return;
			};
			let (Some(w), Some(h)) = (w.as_f64(), h.as_f64()) else {
				return;
			};
			canvas_resize.set_width(w as u32);
			canvas_resize.set_height(h as u32);
			field_resize.borrow_mut().resize(w, h);
		});
		let _ =
			window.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());

		let field_move = field.clone();
		let move_cb = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			field_move
				.borrow_mut()
				.pointer_moved(f64::from(ev.client_x()), f64::from(ev.client_y()));
		});
		let _ =
			window.add_event_listener_with_callback("mousemove", move_cb.as_ref().unchecked_ref());

		let field_click = field.clone();
		let click_cb = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			field_click
				.borrow_mut()
				.spawn_burst(f64::from(ev.client_x()), f64::from(ev.client_y()));
		});
		let _ = window.add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref());

		let frame: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
		let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
		let (field_anim, frame_anim, animate_inner) =
			(field.clone(), frame.clone(), animate.clone());
		let (ctx_anim, theme_anim) = (ctx.clone(), theme.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			{
				let mut field = field_anim.borrow_mut();
				field.update();
				render::draw(&field, &ctx_anim, &theme_anim);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
						*frame_anim.borrow_mut() = Some(id);
					}
				}
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				*frame.borrow_mut() = Some(id);
			}
		}

		info!(
			"sparkle-field: engine started at {width}x{height} ({} ambient sparkles, theme {})",
			options.ambient_count, theme.name
		);

		Some(FieldEngine {
			canvas,
			frame,
			animate,
			resize_cb,
			move_cb,
			click_cb,
			stopped: false,
		})
	}

	/// Tear the engine down: cancel the pending frame request, release the
	/// animation closure, unregister the listeners, and remove the canvas.
	/// Safe to call repeatedly.
	pub fn stop(&mut self) {
		if self.stopped {
			return;
		}
		self.stopped = true;

		if let Some(window) = web_sys::window() {
			// Cancel before removing the surface so no callback can run
			// against a detached canvas.
			if let Some(id) = self.frame.borrow_mut().take() {
				let _ = window.cancel_animation_frame(id);
			}
			let _ = window.remove_event_listener_with_callback(
				"resize",
				self.resize_cb.as_ref().unchecked_ref(),
			);
			let _ = window.remove_event_listener_with_callback(
				"mousemove",
				self.move_cb.as_ref().unchecked_ref(),
			);
			let _ = window.remove_event_listener_with_callback(
				"click",
				self.click_cb.as_ref().unchecked_ref(),
			);
		}

		// The animate closure holds a handle to its own slot; dropping it
		// here breaks that cycle and rules out any further reschedule.
		self.animate.borrow_mut().take();
		self.canvas.remove();
		info!("sparkle-field: engine stopped");
	}
}

impl Drop for FieldEngine {
	fn drop(&mut self) {
		self.stop();
	}
}
