use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use ccd_core::{
	CandidateSource, FrequencyStore, LocateSource, Outcome as PickOutcome, Picker, SessionOptions,
	direct_lookup,
};

use crate::cli::{CliArgs, Outcome};
use crate::settings::ResolvedConfig;

/// What the invocation asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
	Interactive,
	Direct(String),
	Bookmark,
	Increment(PathBuf),
}

impl Action {
	/// `None` when only informational flags were given.
	pub(crate) fn from_cli(cli: &CliArgs) -> Option<Self> {
		if cli.interactive {
			return Some(Self::Interactive);
		}
		if cli.bookmark {
			return Some(Self::Bookmark);
		}
		if let Some(path) = &cli.increment {
			return Some(Self::Increment(path.clone()));
		}
		cli.pattern.clone().map(Self::Direct)
	}
}

/// Runs one [`Action`] against the configured index and store.
pub(crate) struct Workflow {
	config: ResolvedConfig,
	action: Action,
}

impl Workflow {
	pub(crate) fn new(config: ResolvedConfig, action: Action) -> Self {
		Self { config, action }
	}

	pub(crate) fn run(self) -> Result<Outcome> {
		let Self { config, action } = self;
		log::debug!("running {action:?} with store {}", config.store_path.display());
		let store = open_store(&config.store_path);

		match action {
			Action::Interactive => run_interactive(&config, store),
			Action::Direct(pattern) => {
				let source = LocateSource::new(config.index_command.as_str(), config.limit);
				run_direct(
					&source,
					&store,
					&pattern,
					&config.session_options(),
					&mut io::stderr().lock(),
				)
			}
			Action::Bookmark => {
				let cwd = env::current_dir().context("failed to determine working directory")?;
				record_use(store, &cwd, &mut io::stderr().lock())
			}
			Action::Increment(path) => {
				let path = absolute(path)?;
				record_use(store, &path, &mut io::sink())
			}
		}
	}
}

/// Open the store, or fall back to one that will not be written when the
/// file exists but cannot be read.
fn open_store(path: &Path) -> FrequencyStore {
	match FrequencyStore::open(path) {
		Ok(store) => store,
		Err(err) => {
			log::warn!("{err}; usage counts will not be updated");
			FrequencyStore::unloaded(path)
		}
	}
}

fn run_interactive(config: &ResolvedConfig, store: FrequencyStore) -> Result<Outcome> {
	let theme = ccd_tui::theme::by_name(&config.theme).unwrap_or_default();
	let source = LocateSource::new(config.index_command.as_str(), config.limit);
	let mut picker = Picker::new(source, store, config.picker_options());

	match ccd_tui::run(&mut picker, &theme)? {
		PickOutcome::Confirmed { path, save_error } => {
			if let Some(err) = save_error {
				eprintln!("warning: {err}");
			}
			Ok(Outcome::Selected(path))
		}
		PickOutcome::Cancelled => Ok(Outcome::Cancelled),
	}
}

/// Resolve `pattern` to its best directory without touching the store.
fn run_direct<S: CandidateSource>(
	source: &S,
	store: &FrequencyStore,
	pattern: &str,
	options: &SessionOptions,
	report: &mut impl Write,
) -> Result<Outcome> {
	log::info!("searching for directories matching {pattern:?}");
	let Some(found) = direct_lookup(source, store, pattern, options)? else {
		writeln!(report, "No directories found matching '{pattern}'")?;
		return Ok(Outcome::NoMatches);
	};

	let files = if found.filtered > 0 {
		format!("; {} matching files not shown", found.filtered)
	} else {
		String::new()
	};
	let usage = if found.best.count > 0 {
		format!(" (used {} times)", found.best.count)
	} else {
		String::new()
	};
	writeln!(
		report,
		"Found {} directories{files}, selected: {}{usage}",
		found.directories, found.best.path
	)?;
	Ok(Outcome::Selected(found.best.path))
}

fn record_use(mut store: FrequencyStore, path: &Path, report: &mut impl Write) -> Result<Outcome> {
	let path = path
		.to_str()
		.ok_or_else(|| anyhow!("{} is not valid UTF-8", path.display()))?;
	let count = store.increment(path)?;
	writeln!(report, "Bookmarked {path} (used {count} times)")?;
	Ok(Outcome::Recorded)
}

fn absolute(path: PathBuf) -> Result<PathBuf> {
	if path.is_absolute() {
		return Ok(path);
	}
	let cwd = env::current_dir().context("failed to determine working directory")?;
	Ok(cwd.join(path))
}
