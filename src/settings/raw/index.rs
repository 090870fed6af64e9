use std::path::PathBuf;

use anyhow::Result;
use ccd::app_dirs;
use ccd_core::{CaseSensitivity, DEFAULT_LIMIT};
use serde::Deserialize;

use crate::cli::CliArgs;

const DEFAULT_INDEX_COMMAND: &str = "locate";

/// The `[index]` table: how the external path index is queried.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct IndexSection {
	pub(super) command: Option<String>,
	pub(super) limit: Option<usize>,
	pub(super) case_sensitive: Option<bool>,
}

pub(super) struct IndexSettings {
	pub(super) command: String,
	pub(super) limit: usize,
	pub(super) case: CaseSensitivity,
}

impl IndexSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(command) = cli.index_command.clone() {
			self.command = Some(command);
		}
		if let Some(limit) = cli.limit {
			self.limit = Some(limit);
		}
		if let Some(value) = cli.case_sensitive {
			self.case_sensitive = Some(value);
		}
	}

	pub(super) fn resolve(self) -> IndexSettings {
		IndexSettings {
			command: self
				.command
				.map(|command| command.trim().to_string())
				.unwrap_or_else(|| DEFAULT_INDEX_COMMAND.to_string()),
			limit: self.limit.unwrap_or(DEFAULT_LIMIT),
			case: CaseSensitivity::from_flag(self.case_sensitive.unwrap_or(false)),
		}
	}
}

/// The `[store]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct StoreSection {
	pub(super) path: Option<PathBuf>,
}

impl StoreSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.store.clone() {
			self.path = Some(path);
		}
	}

	pub(super) fn resolve(self) -> Result<PathBuf> {
		match self.path {
			Some(path) => Ok(path),
			None => app_dirs::frequency_file(),
		}
	}
}
