//! Light/dark theme toggle with local persistence.
//!
//! The resolved flag lives in a shared signal owned by the app root; the
//! document's `data-theme` attribute tracks it reactively. On first load the
//! stored choice wins over the `prefers-color-scheme` media query.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

/// Local-storage key holding the persisted theme name.
const STORAGE_KEY: &str = "theme";
/// How long the press animation runs, in milliseconds.
const PRESS_MS: i32 = 300;

/// Stored value / attribute value for a mode.
pub fn theme_name(dark: bool) -> &'static str {
	if dark { "dark" } else { "light" }
}

/// Initial mode from the persisted value and the system preference.
/// Any stored value other than `"dark"` resolves to light; the media query
/// only decides when nothing is stored.
pub fn resolve_initial(saved: Option<&str>, prefers_dark: bool) -> bool {
	match saved {
		Some(value) => value == "dark",
		None => prefers_dark,
	}
}

/// Detect the initial dark-mode flag from storage and the media query.
pub fn initial_dark() -> bool {
	let Some(window) = web_sys::window() else {
		return false;
	};
	let saved = window
		.local_storage()
		.ok()
		.flatten()
		.and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
	let prefers_dark = window
		.match_media("(prefers-color-scheme: dark)")
		.ok()
		.flatten()
		.map(|query| query.matches())
		.unwrap_or(false);
	resolve_initial(saved.as_deref(), prefers_dark)
}

fn persist(dark: bool) {
	if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
		let _ = storage.set_item(STORAGE_KEY, theme_name(dark));
	}
}

/// Button flipping the shared dark-mode signal, persisting the choice and
/// playing a brief press animation.
#[component]
pub fn ThemeToggle(
	/// Shared page-wide dark-mode flag.
	dark: RwSignal<bool>,
) -> impl IntoView {
	let button_ref = NodeRef::<leptos::html::Button>::new();

	let on_click = move |_| {
		let next = !dark.get();
		dark.set(next);
		persist(next);

		if let Some(button) = button_ref.get() {
			let button: HtmlElement = button.into();
			let _ = button
				.style()
				.set_property("transform", "scale(0.9) rotate(180deg)");

			let reset = button.clone();
			let cb = Closure::once_into_js(move || {
				let _ = reset.style().remove_property("transform");
			});
			if let Some(window) = web_sys::window() {
				let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
					cb.unchecked_ref(),
					PRESS_MS,
				);
			}
		}
	};

	view! {
		<button node_ref=button_ref class="theme-toggle" on:click=on_click>
			{move || if dark.get() { "🌙" } else { "☀️" }}
		</button>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_resolve_initial_matrix() {
		assert!(resolve_initial(Some("dark"), false));
		assert!(resolve_initial(Some("dark"), true));
		assert!(!resolve_initial(Some("light"), true));
		assert!(!resolve_initial(Some("light"), false));
		assert!(resolve_initial(None, true));
		assert!(!resolve_initial(None, false));
		// Unknown stored values resolve to light, not the media query
		assert!(!resolve_initial(Some("solarized"), true));
	}

	#[test]
	fn test_theme_name() {
		assert_eq!(theme_name(true), "dark");
		assert_eq!(theme_name(false), "light");
	}
}
