use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.index_command.is_empty() {
		return Err(ConfigError::invalid(
			"index.command",
			config.index_command.clone(),
			sources.source_for_command(),
			"must name a program",
		));
	}

	if config.limit == 0 {
		return Err(ConfigError::invalid(
			"index.limit",
			config.limit.to_string(),
			sources.source_for_limit(),
			"must be at least 1",
		));
	}

	if config.page_size == 0 {
		return Err(ConfigError::invalid(
			"interactive.page_size",
			config.page_size.to_string(),
			sources.source_for_page_size(),
			"must be at least 1",
		));
	}

	if ccd_tui::theme::by_name(&config.theme).is_none() {
		return Err(ConfigError::invalid(
			"interactive.theme",
			config.theme.clone(),
			sources.source_for_theme(),
			format!("unknown theme; expected one of {}", ccd_tui::theme::names().join(", ")),
		));
	}

	Ok(())
}
