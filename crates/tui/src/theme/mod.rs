mod builtins;

use ratatui::style::Style;

pub use builtins::{DARK, LIGHT, by_name, default_theme, names};

/// Styles used when drawing the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	pub border: Style,
	pub title: Style,
	pub prompt: Style,
	pub placeholder: Style,
	pub row_highlight: Style,
	pub count: Style,
	pub empty: Style,
	pub error: Style,
}

impl Theme {
	#[must_use]
	pub fn border_style(&self) -> Style {
		self.border
	}

	#[must_use]
	pub fn title_style(&self) -> Style {
		self.title
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn placeholder_style(&self) -> Style {
		self.placeholder
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn count_style(&self) -> Style {
		self.count
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn error_style(&self) -> Style {
		self.error
	}
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
