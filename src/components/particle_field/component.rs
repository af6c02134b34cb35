//! Leptos component wrapping the particle background canvas.
//!
//! The component creates a viewport-sized canvas and drives the simulation
//! from a `requestAnimationFrame` loop. The loop keeps its pending frame
//! handle so cleanup can cancel it, and stops itself if the canvas is ever
//! detached from the document. A window resize listener updates the surface
//! dimensions; existing particles are not repositioned.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::field::ParticleField;
use super::render;
use super::theme::PaletteMode;

/// Renders the animated particle background on a fullscreen canvas.
///
/// The `dark` signal selects the palette and is read once per frame; flip it
/// between frames and only the colors of subsequent draw calls change.
#[component]
pub fn ParticleFieldCanvas(#[prop(into)] dark: Signal<bool>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field: Rc<RefCell<Option<ParticleField>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let frame_handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let (field_init, animate_init, resize_cb_init, frame_init) = (
		field.clone(),
		animate.clone(),
		resize_cb.clone(),
		frame_handle.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = (
			window.inner_width().unwrap().as_f64().unwrap(),
			window.inner_height().unwrap().as_f64().unwrap(),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		*field_init.borrow_mut() = Some(ParticleField::new(w, h));

		let (field_resize, canvas_resize) = (field_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let win: Window = web_sys::window().unwrap();
			let (nw, nh) = (
				win.inner_width().unwrap().as_f64().unwrap(),
				win.inner_height().unwrap().as_f64().unwrap(),
			);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut f) = *field_resize.borrow_mut() {
				f.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (field_anim, animate_inner, frame_anim, canvas_anim) = (
			field_init.clone(),
			animate_init.clone(),
			frame_init.clone(),
			canvas.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			frame_anim.set(None);

			// The surface can disappear out from under a pending frame;
			// stop rescheduling rather than draw blind.
			if !canvas_anim.is_connected() {
				debug!("particle field: canvas detached, stopping animation");
				return;
			}

			if let Some(ref mut f) = *field_anim.borrow_mut() {
				f.tick();
				let mode = PaletteMode::from_dark_flag(dark.get_untracked());
				render::render(f, &ctx, mode);
			}

			if let Some(ref cb) = *animate_inner.borrow() {
				if let Ok(handle) = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref())
				{
					frame_anim.set(Some(handle));
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(handle) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				frame_init.set(Some(handle));
			}
		}
	});

	on_cleanup(move || {
		if let Some(window) = web_sys::window() {
			if let Some(handle) = frame_handle.take() {
				let _ = window.cancel_animation_frame(handle);
			}
			if let Some(cb) = resize_cb.borrow_mut().take() {
				let _ =
					window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
		animate.borrow_mut().take();
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field"
			style="display: block; position: fixed; inset: 0; z-index: -1;"
		/>
	}
}
