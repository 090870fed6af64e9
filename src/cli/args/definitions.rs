use std::path::PathBuf;

use clap::builder::{BoolishValueParser, NonEmptyStringValueParser};
use clap::{ArgAction, ColorChoice, Parser};

use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `ccd-pick` binary.
#[derive(Parser, Debug)]
#[command(
	name = "ccd-pick",
	version,
	long_version = long_version(),
	about = "Pick a directory from the locate index, ranked by how often you use it",
	after_help = "Run `eval \"$(ccd-pick --shell-init)\"` to install the `ccd` shell function.",
	color = ColorChoice::Auto,
	styles = cli_styles(),
	arg_required_else_help = true
)]
pub(crate) struct CliArgs {
	#[arg(
		value_name = "PATTERN",
		value_parser = NonEmptyStringValueParser::new(),
		help = "Print the best matching directory without opening the picker"
	)]
	pub(crate) pattern: Option<String>,
	#[arg(
		short = 'i',
		long,
		help = "Open the interactive picker; PATTERN, if given, becomes the initial query"
	)]
	pub(crate) interactive: bool,
	#[arg(
		short = 'b',
		long,
		conflicts_with_all = ["pattern", "interactive", "increment"],
		help = "Count one use of the current directory without searching"
	)]
	pub(crate) bookmark: bool,
	#[arg(
		long,
		value_name = "PATH",
		hide = true,
		conflicts_with_all = ["pattern", "interactive"],
		help = "Count one use of PATH without searching"
	)]
	pub(crate) increment: Option<PathBuf>,
	#[arg(
		long = "shell-init",
		conflicts_with_all = ["pattern", "interactive", "bookmark", "increment"],
		help = "Print the `ccd` shell function and exit"
	)]
	pub(crate) shell_init: bool,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "CCD_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading the default configuration file (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long = "case-sensitive",
		value_name = "BOOL",
		num_args = 0..=1,
		require_equals = true,
		default_missing_value = "true",
		value_parser = BoolishValueParser::new(),
		help = "Match the pattern case-sensitively (default: disabled)"
	)]
	pub(crate) case_sensitive: Option<bool>,
	#[arg(
		long,
		value_name = "NUM",
		help = "Maximum number of index results to consider (default: 100)"
	)]
	pub(crate) limit: Option<usize>,
	#[arg(
		long = "index-command",
		value_name = "CMD",
		help = "Program queried for matching paths (default: locate)"
	)]
	pub(crate) index_command: Option<String>,
	#[arg(
		long,
		value_name = "FILE",
		help = "Frequency store to use (default: $CCD_FREQUENCY_FILE or ~/.ccd_frequency)"
	)]
	pub(crate) store: Option<PathBuf>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: default)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration to stderr before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
}
