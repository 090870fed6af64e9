use std::path::PathBuf;

use ccd_core::{CaseSensitivity, PickerOptions, SessionOptions};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Effective settings after merging every source and applying defaults.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
	pub(crate) index_command: String,
	pub(crate) limit: usize,
	pub(crate) case: CaseSensitivity,
	pub(crate) store_path: PathBuf,
	pub(crate) include_store_matches: bool,
	pub(crate) page_size: usize,
	pub(crate) hide_missing: bool,
	pub(crate) theme: String,
	pub(crate) initial_query: String,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	pub(crate) fn session_options(&self) -> SessionOptions {
		SessionOptions {
			case: self.case,
			include_store_matches: self.include_store_matches,
			hide_missing: self.hide_missing,
		}
	}

	pub(crate) fn picker_options(&self) -> PickerOptions {
		PickerOptions {
			session: self.session_options(),
			page_size: self.page_size,
			initial_query: self.initial_query.clone(),
		}
	}

	/// Print a human readable summary of the effective configuration to stderr.
	pub(crate) fn print_summary(&self) {
		summary::print_summary(self);
	}
}

#[cfg(test)]
pub(crate) fn sample() -> ResolvedConfig {
	ResolvedConfig {
		index_command: "locate".into(),
		limit: 100,
		case: CaseSensitivity::Insensitive,
		store_path: PathBuf::from("/tmp/ccd_frequency"),
		include_store_matches: true,
		page_size: 10,
		hide_missing: true,
		theme: "default".into(),
		initial_query: String::new(),
	}
}
