use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod index;
mod interactive;

use index::{IndexSection, StoreSection};
use interactive::{InteractiveSection, SearchSection};

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	index: IndexSection,
	store: StoreSection,
	search: SearchSection,
	interactive: InteractiveSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.index.apply_cli_overrides(cli);
		self.store.apply_cli_overrides(cli);
		self.interactive.apply_cli_overrides(cli);
	}

	/// Fill in defaults and validate, producing the [`ResolvedConfig`].
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			index_command: detect_source(
				cli.index_command.is_some().then_some("--index-command"),
				self.index.command.is_some(),
				"CCD__INDEX__COMMAND",
				"index.command",
			),
			index_limit: detect_source(
				cli.limit.is_some().then_some("--limit"),
				self.index.limit.is_some(),
				"CCD__INDEX__LIMIT",
				"index.limit",
			),
			page_size: detect_source(
				None,
				self.interactive.page_size.is_some(),
				"CCD__INTERACTIVE__PAGE_SIZE",
				"interactive.page_size",
			),
			theme: detect_source(
				cli.theme.is_some().then_some("--theme"),
				self.interactive.theme.is_some(),
				"CCD__INTERACTIVE__THEME",
				"interactive.theme",
			),
		};

		let index = self.index.resolve();
		let store_path = self.store.resolve()?;
		let include_store_matches = self.search.resolve();
		let interactive = self.interactive.resolve();

		let config = ResolvedConfig {
			index_command: index.command,
			limit: index.limit,
			case: index.case,
			store_path,
			include_store_matches,
			page_size: interactive.page_size,
			hide_missing: interactive.hide_missing,
			theme: interactive.theme,
			initial_query: interactive.initial_query,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

/// Work out where a value came from. `cli_flag` is set when the flag was
/// given on the command line.
fn detect_source(
	cli_flag: Option<&'static str>,
	value_present: bool,
	env_var: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if let Some(flag) = cli_flag {
		return Some(SettingSource::CliFlag(flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
