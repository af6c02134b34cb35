//! Live wall-clock display.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// Zero-padded `HH:MM:SS`.
pub fn format_hms(hours: u32, minutes: u32, seconds: u32) -> String {
	format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

fn now_hms() -> String {
	let now = js_sys::Date::new_0();
	format_hms(now.get_hours(), now.get_minutes(), now.get_seconds())
}

/// Shows the current local time, refreshed once per second.
#[component]
pub fn LiveClock() -> impl IntoView {
	let display = RwSignal::new(String::new());
	let tick_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let interval: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let (tick_init, interval_init) = (tick_cb.clone(), interval.clone());

	Effect::new(move |_| {
		display.set(now_hms());

		*tick_init.borrow_mut() = Some(Closure::new(move || display.set(now_hms())));
		if let Some(ref cb) = *tick_init.borrow() {
			if let Ok(handle) = web_sys::window()
				.unwrap()
				.set_interval_with_callback_and_timeout_and_arguments_0(
					cb.as_ref().unchecked_ref(),
					1000,
				) {
				interval_init.set(Some(handle));
			}
		}
	});

	on_cleanup(move || {
		if let (Some(window), Some(handle)) = (web_sys::window(), interval.take()) {
			window.clear_interval_with_handle(handle);
		}
		tick_cb.borrow_mut().take();
	});

	view! { <time class="clock">{move || display.get()}</time> }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_format_hms_pads() {
		assert_eq!(format_hms(9, 5, 3), "09:05:03");
		assert_eq!(format_hms(23, 59, 59), "23:59:59");
		assert_eq!(format_hms(0, 0, 0), "00:00:00");
	}
}
