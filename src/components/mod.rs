//! Leptos components for the landing page's visual layer.

pub mod clock;
pub mod hello_button;
pub mod particle_field;
pub mod reveal;
pub mod theme_toggle;
pub mod typewriter;
