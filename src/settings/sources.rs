use std::path::PathBuf;

use anyhow::{Result, anyhow};
use ccd::app_dirs;
use config::{Config, ConfigError, File};

use crate::cli::CliArgs;

pub(super) const ENV_PREFIX: &str = "ccd";
pub(super) const ENV_SEPARATOR: &str = "__";

/// Build a [`Config`] from the default file, `--config` files and the
/// environment, in increasing order of precedence.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix(ENV_PREFIX)
			.separator(ENV_SEPARATOR)
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Default configuration file locations, which may not exist.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	match app_dirs::get_config_dir() {
		Ok(dir) => vec![dir.join("config.toml")],
		Err(err) => {
			log::debug!("no default configuration directory: {err}");
			Vec::new()
		}
	}
}
