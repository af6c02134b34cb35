//! cloud-cottage: animated client-side flourishes for a personal landing page.
//!
//! This crate is the page's visual layer, compiled to WASM: a particle
//! background on a fullscreen canvas, a typewriter greeting rotator, a live
//! clock, a persisted light/dark toggle, a canned-response button, and
//! scroll-triggered reveals.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod site;

pub use components::particle_field::{ParticleField, ParticleFieldCanvas};
pub use site::SiteData;

use components::clock::LiveClock;
use components::hello_button::HelloButton;
use components::theme_toggle::{ThemeToggle, initial_dark, theme_name};
use components::typewriter::TypewriterText;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("cloud-cottage: logging initialized");
}

/// Load page copy from a script element with id="site-data".
/// Expected format: JSON with { greetings: [...], responses: [...] }
fn load_site_data() -> Option<SiteData> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("site-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<SiteData>(&json_text) {
		Ok(data) => {
			info!(
				"cloud-cottage: loaded {} greetings, {} responses",
				data.greetings.len(),
				data.responses.len()
			);
			Some(data)
		}
		Err(e) => {
			warn!("cloud-cottage: failed to parse site data: {}", e);
			None
		}
	}
}

/// Main application component.
/// Resolves the initial theme, loads page copy from the DOM, and renders the
/// landing page with its animated background.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let data = load_site_data().unwrap_or_default();
	let dark = RwSignal::new(initial_dark());

	// Wire up reveal animations once the content below is in the document
	Effect::new(move |_| {
		components::reveal::init_scroll_reveal();
	});

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme=move || theme_name(dark.get()) />
		<Title text="Cloud Cottage" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleFieldCanvas dark=dark />

		<header class="site-header">
			<LiveClock />
			<ThemeToggle dark=dark />
		</header>

		<main class="hero fade-in-up">
			<h1 class="greeting">
				<TypewriterText texts=data.greetings />
			</h1>
			<HelloButton responses=data.responses />
		</main>

		<section class="skills">
			<div class="skill-card">"Builds small, sturdy things"</div>
			<div class="skill-card">"Keeps the lights warm"</div>
			<div class="skill-card">"Answers the doorbell"</div>
		</section>
	}
}
