//! Scroll-triggered reveal animations.
//!
//! A single `IntersectionObserver` promotes `.fade-in-up` and `.skill-card`
//! elements to `visible` the first time they scroll into view. The class is
//! never removed; the CSS transition does the rest.

use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of an element that must be visible before it reveals.
const REVEAL_THRESHOLD: f64 = 0.1;

/// Observe all revealable elements currently in the document.
///
/// Call once after the page content is mounted. The observer and its
/// callback intentionally live for the page lifetime.
pub fn init_scroll_reveal() {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return;
	};

	let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
		move |entries: Array, _observer: IntersectionObserver| {
			for entry in entries.iter() {
				let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
					continue;
				};
				if entry.is_intersecting() {
					let _ = entry.target().class_list().add_1("visible");
				}
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));

	let Ok(observer) =
		IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
	else {
		return;
	};

	if let Ok(targets) = document.query_selector_all(".fade-in-up, .skill-card") {
		for i in 0..targets.length() {
			if let Some(node) = targets.item(i) {
				if let Ok(element) = node.dyn_into::<Element>() {
					observer.observe(&element);
				}
			}
		}
	}

	callback.forget();
}
