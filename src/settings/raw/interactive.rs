use ccd_core::DEFAULT_PAGE_SIZE;
use serde::Deserialize;

use crate::cli::CliArgs;

const DEFAULT_THEME: &str = "default";

/// The `[search]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) include_store_matches: Option<bool>,
}

impl SearchSection {
	pub(super) fn resolve(self) -> bool {
		self.include_store_matches.unwrap_or(true)
	}
}

/// The `[interactive]` table: picker behaviour and appearance.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct InteractiveSection {
	pub(super) page_size: Option<usize>,
	pub(super) hide_missing: Option<bool>,
	pub(super) theme: Option<String>,
	pub(super) initial_query: Option<String>,
}

pub(super) struct InteractiveSettings {
	pub(super) page_size: usize,
	pub(super) hide_missing: bool,
	pub(super) theme: String,
	pub(super) initial_query: String,
}

impl InteractiveSection {
	/// A pattern given together with `--interactive` seeds the query.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if cli.interactive
			&& let Some(pattern) = cli.pattern.clone()
		{
			self.initial_query = Some(pattern);
		}
	}

	pub(super) fn resolve(self) -> InteractiveSettings {
		InteractiveSettings {
			page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
			hide_missing: self.hide_missing.unwrap_or(true),
			theme: self
				.theme
				.map(|theme| theme.trim().to_string())
				.unwrap_or_else(|| DEFAULT_THEME.to_string()),
			initial_query: self.initial_query.unwrap_or_default(),
		}
	}
}
