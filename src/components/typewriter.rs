//! Typewriter-style greeting rotator.
//!
//! A pure state machine yields each visible prefix together with the delay
//! until the next step; the component drives it with self-rescheduling
//! timeouts so the cadence can vary between typing, pausing, and deleting.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// Milliseconds per typed character.
pub const DEFAULT_TYPE_MS: u32 = 120;
/// Pause at a fully typed string before deleting begins.
pub const DEFAULT_PAUSE_MS: u32 = 3000;
/// Pause after a full delete before the next string starts.
const NEXT_TEXT_MS: u32 = 500;

/// One step of typewriter output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeStep {
	/// Prefix of the current string to display.
	pub text: String,
	/// Delay until the next step, in milliseconds.
	pub delay_ms: u32,
}

/// Cyclic type-pause-delete state machine over a list of strings.
///
/// Deleting runs at double speed. Prefixes are taken on character
/// boundaries, so multi-byte strings are safe.
#[derive(Clone, Debug)]
pub struct Typewriter {
	texts: Vec<String>,
	text_index: usize,
	char_index: usize,
	deleting: bool,
	type_ms: u32,
	pause_ms: u32,
}

impl Typewriter {
	/// Rotator over `texts`. An empty list falls back to a single empty
	/// string so stepping never panics.
	pub fn new(texts: Vec<String>, type_ms: u32, pause_ms: u32) -> Self {
		let texts = if texts.is_empty() {
			vec![String::new()]
		} else {
			texts
		};
		Self {
			texts,
			text_index: 0,
			char_index: 0,
			deleting: false,
			type_ms,
			pause_ms,
		}
	}

	/// Advance one step and return what to display plus the next delay.
	pub fn step(&mut self) -> TypeStep {
		let len = self.texts[self.text_index].chars().count();

		if self.deleting {
			self.char_index = self.char_index.saturating_sub(1);
		} else {
			self.char_index = (self.char_index + 1).min(len);
		}

		let text: String = self.texts[self.text_index]
			.chars()
			.take(self.char_index)
			.collect();

		let mut delay_ms = if self.deleting {
			self.type_ms / 2
		} else {
			self.type_ms
		};

		if !self.deleting && self.char_index == len {
			delay_ms = self.pause_ms;
			self.deleting = true;
		} else if self.deleting && self.char_index == 0 {
			self.deleting = false;
			self.text_index = (self.text_index + 1) % self.texts.len();
			delay_ms = NEXT_TEXT_MS;
		}

		TypeStep { text, delay_ms }
	}
}

/// Types out the given strings one character at a time, looping forever.
#[component]
pub fn TypewriterText(
	/// Strings to rotate through.
	texts: Vec<String>,
	/// Milliseconds per typed character.
	#[prop(default = DEFAULT_TYPE_MS)]
	type_ms: u32,
	/// Pause at a fully typed string.
	#[prop(default = DEFAULT_PAUSE_MS)]
	pause_ms: u32,
) -> impl IntoView {
	let display = RwSignal::new(String::new());
	let machine = Rc::new(RefCell::new(Typewriter::new(texts, type_ms, pause_ms)));
	let step_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let timeout: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let (step_init, timeout_init) = (step_cb.clone(), timeout.clone());

	Effect::new(move |_| {
		let (machine_inner, step_inner, timeout_inner) =
			(machine.clone(), step_init.clone(), timeout_init.clone());
		*step_init.borrow_mut() = Some(Closure::new(move || {
			let step = machine_inner.borrow_mut().step();
			display.set(step.text);
			if let Some(ref cb) = *step_inner.borrow() {
				if let Ok(handle) = web_sys::window()
					.unwrap()
					.set_timeout_with_callback_and_timeout_and_arguments_0(
						cb.as_ref().unchecked_ref(),
						step.delay_ms as i32,
					) {
					timeout_inner.set(Some(handle));
				}
			}
		}));

		// First step runs synchronously so the element is never empty for a
		// whole delay.
		let first = machine.borrow_mut().step();
		display.set(first.text);
		if let Some(ref cb) = *step_init.borrow() {
			if let Ok(handle) = web_sys::window()
				.unwrap()
				.set_timeout_with_callback_and_timeout_and_arguments_0(
					cb.as_ref().unchecked_ref(),
					first.delay_ms as i32,
				) {
				timeout_init.set(Some(handle));
			}
		}
	});

	on_cleanup(move || {
		if let (Some(window), Some(handle)) = (web_sys::window(), timeout.take()) {
			window.clear_timeout_with_handle(handle);
		}
		step_cb.borrow_mut().take();
	});

	view! { <span class="typewriter">{move || display.get()}</span> }
}
