//! Page copy for the interactive pieces.

use serde::Deserialize;

/// Text content for the landing page: greeting strings for the typewriter
/// and canned replies for the interaction button.
///
/// Loaded from an embedded `<script id="site-data">` JSON element when
/// present; the defaults below apply otherwise.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SiteData {
	/// Greeting strings rotated by the typewriter.
	pub greetings: Vec<String>,
	/// Canned replies for the interaction button.
	pub responses: Vec<String>,
}

impl Default for SiteData {
	fn default() -> Self {
		Self {
			greetings: vec![
				"Hi, welcome in! 👋".to_string(),
				"Good to see you again.".to_string(),
				"Make yourself at home 🏠".to_string(),
				"The kettle is always on ☕".to_string(),
			],
			responses: vec![
				"Hello there! Lovely day to ship something.".to_string(),
				"Welcome to my little corner of the cloud 💕".to_string(),
				"Hehe, you found the button!".to_string(),
				"At your service — tea first, tasks second.".to_string(),
				"Remember to take breaks, okay? ☕".to_string(),
				"Perfect weather for writing code today 🌤️".to_string(),
				"This cottage runs on good vibes and static hosting.".to_string(),
			],
		}
	}
}
