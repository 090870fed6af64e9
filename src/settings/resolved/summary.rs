use std::io::{self, Write};

use ccd_core::CaseSensitivity;

use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	if let Err(err) = write_summary(&mut io::stderr().lock(), config) {
		log::debug!("failed to print configuration summary: {err}");
	}
}

fn write_summary(out: &mut impl Write, config: &ResolvedConfig) -> io::Result<()> {
	writeln!(out, "Effective configuration:")?;
	writeln!(out, "  Index command: {}", config.index_command)?;
	writeln!(out, "  Result limit: {}", config.limit)?;
	writeln!(
		out,
		"  Case sensitive: {}",
		bool_to_word(config.case == CaseSensitivity::Sensitive)
	)?;
	writeln!(out, "  Frequency store: {}", config.store_path.display())?;
	writeln!(
		out,
		"  Include store matches: {}",
		bool_to_word(config.include_store_matches)
	)?;
	writeln!(out, "  Page size: {}", config.page_size)?;
	writeln!(
		out,
		"  Hide missing directories: {}",
		bool_to_word(config.hide_missing)
	)?;
	writeln!(out, "  UI theme: {}", config.theme)?;
	if !config.initial_query.is_empty() {
		writeln!(out, "  Initial query: {}", config.initial_query)?;
	}
	Ok(())
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use super::super::sample;
	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(bool_to_word(true), "yes");
		assert_eq!(bool_to_word(false), "no");
	}

	#[test]
	fn summary_lists_every_setting() {
		let config = ResolvedConfig {
			initial_query: "proj".into(),
			..sample()
		};
		let mut out = Vec::new();
		write_summary(&mut out, &config).unwrap();
		let text = String::from_utf8(out).unwrap();

		assert!(text.starts_with("Effective configuration:"));
		assert!(text.contains("Index command: locate"));
		assert!(text.contains("Frequency store: /tmp/ccd_frequency"));
		assert!(text.contains("Case sensitive: no"));
		assert!(text.contains("Initial query: proj"));
	}

	#[test]
	fn empty_initial_query_is_omitted() {
		let mut out = Vec::new();
		write_summary(&mut out, &sample()).unwrap();
		assert!(!String::from_utf8(out).unwrap().contains("Initial query"));
	}
}
