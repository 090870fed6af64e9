use ratatui::style::{Color, Modifier, Style};

use super::Theme;

pub const DARK: Theme = Theme {
	border: Style::new().fg(Color::Gray),
	title: Style::new().fg(Color::Gray),
	prompt: Style::new().fg(Color::Yellow),
	placeholder: Style::new().fg(Color::DarkGray),
	row_highlight: Style::new()
		.bg(Color::LightGreen)
		.fg(Color::Black)
		.add_modifier(Modifier::BOLD),
	count: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
	empty: Style::new()
		.fg(Color::DarkGray)
		.add_modifier(Modifier::ITALIC),
	error: Style::new().fg(Color::LightRed),
};

pub const LIGHT: Theme = Theme {
	border: Style::new().fg(Color::Rgb(100, 116, 139)),
	title: Style::new().fg(Color::Rgb(15, 23, 42)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	placeholder: Style::new().fg(Color::Rgb(148, 163, 184)),
	row_highlight: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	count: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	error: Style::new().fg(Color::Rgb(185, 28, 28)),
};

const BUILT_IN: &[(&str, &[&str], Theme)] = &[
	("default", &["dark"], DARK),
	("light", &[], LIGHT),
];

#[must_use]
pub fn default_theme() -> Theme {
	DARK
}

/// Look up a built-in theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let wanted = name.trim().to_ascii_lowercase();
	BUILT_IN
		.iter()
		.find(|(canonical, aliases, _)| {
			*canonical == wanted || aliases.iter().any(|alias| *alias == wanted)
		})
		.map(|(_, _, theme)| *theme)
}

/// Canonical names of the built-in themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
	BUILT_IN.iter().map(|(name, _, _)| *name).collect()
}
