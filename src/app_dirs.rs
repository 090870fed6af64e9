//! Resolve the configuration directory and the frequency store location.
//!
//! Environment overrides win; otherwise the `directories` crate supplies the
//! platform locations.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::{BaseDirs, ProjectDirs};

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "ccd";
const APPLICATION: &str = "ccd";

const CONFIG_DIR_ENV: &str = "CCD_CONFIG_DIR";
/// Overrides the frequency store location.
pub const FREQUENCY_FILE_ENV: &str = "CCD_FREQUENCY_FILE";
const FREQUENCY_FILE_NAME: &str = ".ccd_frequency";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for ccd"))
}

/// Read a path from an environment variable. An empty value counts as unset.
fn path_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = path_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_dir().to_path_buf())
}

/// Default frequency store: `$CCD_FREQUENCY_FILE`, else `~/.ccd_frequency`.
pub fn frequency_file() -> Result<PathBuf> {
	if let Some(path) = path_from_env(FREQUENCY_FILE_ENV) {
		return Ok(path);
	}

	let base = BaseDirs::new().ok_or_else(|| anyhow!("unable to determine the home directory"))?;
	Ok(base.home_dir().join(FREQUENCY_FILE_NAME))
}
