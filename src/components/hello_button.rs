//! Canned-response interaction button.
//!
//! Clicking shows one of a fixed list of replies in a bubble, never the same
//! one twice in a row. The bubble hides a few seconds after the last click.

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// How long the response bubble stays visible, in milliseconds.
const BUBBLE_MS: i32 = 5000;

/// Index of the next response: uniform over `len`, never repeating `last`
/// when more than one option exists. `roll` is a uniform value in [0, 1).
pub fn pick_index(roll: f64, len: usize, last: Option<usize>) -> usize {
	if len == 0 {
		return 0;
	}
	let idx = ((roll * len as f64) as usize).min(len - 1);
	match last {
		Some(prev) if idx == prev && len > 1 => (idx + 1) % len,
		_ => idx,
	}
}

/// Button that replies with a random canned response in a bubble.
#[component]
pub fn HelloButton(
	/// Responses to choose from.
	responses: Vec<String>,
) -> impl IntoView {
	let bubble = RwSignal::new(None::<String>);
	let last = Rc::new(Cell::new(None::<usize>));
	// Bumped on every click so a stale hide timer cannot close a newer bubble
	let generation = Rc::new(Cell::new(0u32));

	let on_click = move |_| {
		if responses.is_empty() {
			return;
		}
		let idx = pick_index(js_sys::Math::random(), responses.len(), last.get());
		last.set(Some(idx));
		bubble.set(Some(responses[idx].clone()));

		let current = generation.get().wrapping_add(1);
		generation.set(current);

		let generation_hide = generation.clone();
		let cb = Closure::once_into_js(move || {
			if generation_hide.get() == current {
				bubble.set(None);
			}
		});
		if let Some(window) = web_sys::window() {
			let _ = window
				.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), BUBBLE_MS);
		}
	};

	view! {
		<div class="hello">
			<button class="say-hello" on:click=on_click>
				"Say hi"
			</button>
			<div class="response-bubble" class:visible=move || bubble.get().is_some()>
				{move || bubble.get().unwrap_or_default()}
			</div>
		</div>
	}
}
