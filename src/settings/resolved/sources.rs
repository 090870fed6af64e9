use std::fmt;

/// Where a configuration value came from, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Origins of the validated settings. `None` means the default was used.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) index_command: Option<SettingSource>,
	pub(crate) index_limit: Option<SettingSource>,
	pub(crate) page_size: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_command(&self) -> SettingSource {
		self.index_command
			.clone()
			.unwrap_or(SettingSource::ConfigKey("index.command"))
	}

	pub(crate) fn source_for_limit(&self) -> SettingSource {
		self.index_limit
			.clone()
			.unwrap_or(SettingSource::ConfigKey("index.limit"))
	}

	pub(crate) fn source_for_page_size(&self) -> SettingSource {
		self.page_size
			.clone()
			.unwrap_or(SettingSource::ConfigKey("interactive.page_size"))
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.theme
			.clone()
			.unwrap_or(SettingSource::ConfigKey("interactive.theme"))
	}
}
