use std::collections::HashSet;
use std::io;
use std::path::Path;
use std::process::Command;

use crate::error::SourceError;
use crate::path::normalize;

/// Maximum number of index entries considered per query.
pub const DEFAULT_LIMIT: usize = 100;

/// Whether a pattern must match the indexed paths with exact case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseSensitivity {
	#[default]
	Insensitive,
	Sensitive,
}

impl CaseSensitivity {
	pub fn from_flag(case_sensitive: bool) -> Self {
		if case_sensitive {
			Self::Sensitive
		} else {
			Self::Insensitive
		}
	}

	/// Substring test with the same case rules the index applies.
	pub fn contains(self, haystack: &str, needle: &str) -> bool {
		match self {
			Self::Sensitive => haystack.contains(needle),
			Self::Insensitive => haystack.to_lowercase().contains(&needle.to_lowercase()),
		}
	}
}

/// Directories returned for one query, in index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
	pub directories: Vec<String>,
	/// Entries the index matched that were not directories.
	pub filtered: usize,
}

impl CandidateSet {
	pub fn is_empty(&self) -> bool {
		self.directories.is_empty()
	}
}

/// Something that can turn a pattern into candidate directories.
///
/// An empty [`CandidateSet`] means the index had no matches; an `Err` means
/// the index itself could not be consulted.
pub trait CandidateSource {
	fn query(&self, pattern: &str, case: CaseSensitivity) -> Result<CandidateSet, SourceError>;
}

impl<T: CandidateSource + ?Sized> CandidateSource for &T {
	fn query(&self, pattern: &str, case: CaseSensitivity) -> Result<CandidateSet, SourceError> {
		(**self).query(pattern, case)
	}
}

/// [`CandidateSource`] backed by the `locate` command line tool.
#[derive(Debug, Clone)]
pub struct LocateSource {
	command: String,
	limit: usize,
}

impl Default for LocateSource {
	fn default() -> Self {
		Self::new("locate", DEFAULT_LIMIT)
	}
}

impl LocateSource {
	pub fn new(command: impl Into<String>, limit: usize) -> Self {
		Self {
			command: command.into(),
			limit: limit.max(1),
		}
	}

	fn build_command(&self, pattern: &str, case: CaseSensitivity) -> Command {
		let mut command = Command::new(&self.command);
		command.arg("--limit").arg(self.limit.to_string());
		if case == CaseSensitivity::Insensitive {
			command.arg("-i");
		}
		command.arg("--").arg(pattern);
		command
	}
}

impl CandidateSource for LocateSource {
	fn query(&self, pattern: &str, case: CaseSensitivity) -> Result<CandidateSet, SourceError> {
		log::debug!("querying `{}` for {pattern:?} ({case:?})", self.command);
		let output = self
			.build_command(pattern, case)
			.output()
			.map_err(|err| match err.kind() {
				io::ErrorKind::NotFound => SourceError::unavailable(&self.command, "command not found"),
				_ => SourceError::unavailable(&self.command, err.to_string()),
			})?;

		if !output.status.success() {
			let stderr = String::from_utf8_lossy(&output.stderr);
			let reason = stderr.trim();
			if !reason.is_empty() {
				let first_line = reason.lines().next().unwrap_or(reason);
				return Err(SourceError::unavailable(&self.command, first_line));
			}
			// locate exits non-zero without a message when nothing matched.
			log::debug!("`{}` exited with {} and no output", self.command, output.status);
		}

		let stdout = String::from_utf8_lossy(&output.stdout);
		let raw = stdout
			.lines()
			.filter(|line| !line.is_empty())
			.take(self.limit);
		Ok(retain_directories(raw, |path| Path::new(path).is_dir()))
	}
}

/// Keep the entries of `raw` that `is_dir` accepts, normalized and
/// deduplicated, in their original order.
pub fn retain_directories<'a, I, F>(raw: I, mut is_dir: F) -> CandidateSet
where
	I: IntoIterator<Item = &'a str>,
	F: FnMut(&str) -> bool,
{
	let mut seen = HashSet::new();
	let mut set = CandidateSet::default();
	for entry in raw {
		let Some(path) = normalize(entry) else {
			log::debug!("ignoring unusable index entry {entry:?}");
			continue;
		};
		if !is_dir(&path) {
			set.filtered += 1;
			continue;
		}
		if seen.insert(path.clone()) {
			set.directories.push(path);
		}
	}
	set
}
