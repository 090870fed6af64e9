//! Persistent path → usage-count mapping.
//!
//! The on-disk format is versioned plain text:
//!
//! ```text
//! # ccd frequency store v1
//! 12	/home/me/projects
//! 3	/srv/www
//! ```
//!
//! Each entry line is `<count>\t<path>`, sorted by path. Loading is tolerant:
//! lines that do not parse (including ones that are not UTF-8) are skipped and
//! the rest of the file still loads. A zero count is read as an absent entry.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::StoreError;
use crate::path::normalize;

/// First line written to every store file.
pub const FORMAT_HEADER: &str = "# ccd frequency store v1";

const HEADER_PREFIX: &str = "# ccd frequency store v";
const FORMAT_VERSION: u32 = 1;

/// Usage counters keyed by normalized absolute path.
///
/// Mutations are written through immediately: [`increment`](Self::increment)
/// and [`reset`](Self::reset) update memory and then [`save`](Self::save),
/// which replaces the file atomically. Two processes updating the store at the
/// same time can still lose one of the updates (last writer wins).
#[derive(Debug, Clone)]
pub struct FrequencyStore {
	path: PathBuf,
	counts: BTreeMap<String, u32>,
	skipped: usize,
	loaded: bool,
}

impl FrequencyStore {
	/// Open the store at `path`, loading it if the file exists.
	pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
		let mut store = Self::unloaded(path);
		store.load()?;
		Ok(store)
	}

	/// A store bound to `path` whose contents were never read.
	///
	/// Lookups return zero and [`save`](Self::save) refuses to write, so a
	/// file that could not be read is never replaced by an empty one.
	pub fn unloaded(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			counts: BTreeMap::new(),
			skipped: 0,
			loaded: false,
		}
	}

	/// Replace the in-memory mapping with the contents of the file.
	pub fn load(&mut self) -> Result<(), StoreError> {
		let file = match File::open(&self.path) {
			Ok(file) => file,
			Err(err) if err.kind() == io::ErrorKind::NotFound => {
				log::debug!("no frequency store at {}", self.path.display());
				self.counts.clear();
				self.skipped = 0;
				self.loaded = true;
				return Ok(());
			}
			Err(source) => {
				return Err(StoreError::Read {
					path: self.path.clone(),
					source,
				});
			}
		};

		let (counts, skipped) =
			parse_entries(BufReader::new(file)).map_err(|source| StoreError::Read {
				path: self.path.clone(),
				source,
			})?;
		if skipped > 0 {
			log::debug!(
				"skipped {skipped} malformed line(s) in {}",
				self.path.display()
			);
		}
		self.counts = counts;
		self.skipped = skipped;
		self.loaded = true;
		Ok(())
	}

	pub fn get(&self, path: &str) -> u32 {
		normalize(path)
			.and_then(|key| self.counts.get(&key).copied())
			.unwrap_or(0)
	}

	/// Bump the count for `path` by one and persist. Returns the new count.
	///
	/// The in-memory count is updated even when saving fails.
	pub fn increment(&mut self, path: &str) -> Result<u32, StoreError> {
		let key = normalize(path).ok_or_else(|| StoreError::InvalidPath {
			path: path.to_string(),
		})?;
		let count = self.counts.entry(key).or_insert(0);
		*count = count.saturating_add(1);
		let updated = *count;
		self.save()?;
		Ok(updated)
	}

	/// Forget `path` and persist. Returns the count it had.
	pub fn reset(&mut self, path: &str) -> Result<u32, StoreError> {
		let key = normalize(path).ok_or_else(|| StoreError::InvalidPath {
			path: path.to_string(),
		})?;
		let previous = self.counts.remove(&key).unwrap_or(0);
		self.save()?;
		Ok(previous)
	}

	/// Atomically replace the store file with the in-memory mapping.
	///
	/// An existing file keeps its permissions. A new file gets the private
	/// mode of the temporary file it is renamed from.
	pub fn save(&self) -> Result<(), StoreError> {
		if !self.loaded {
			return Err(StoreError::NotLoaded {
				path: self.path.clone(),
			});
		}
		self.write_atomically().map_err(|source| StoreError::Write {
			path: self.path.clone(),
			source,
		})?;
		log::debug!(
			"saved {} frequency entries to {}",
			self.counts.len(),
			self.path.display()
		);
		Ok(())
	}

	fn write_atomically(&self) -> io::Result<()> {
		let parent = match self.path.parent() {
			Some(parent) if !parent.as_os_str().is_empty() => parent,
			_ => Path::new("."),
		};
		fs::create_dir_all(parent)?;

		let temp = NamedTempFile::new_in(parent)?;
		{
			let mut writer = BufWriter::new(temp.as_file());
			writeln!(writer, "{FORMAT_HEADER}")?;
			for (path, count) in &self.counts {
				writeln!(writer, "{count}\t{path}")?;
			}
			writer.flush()?;
		}
		match fs::metadata(&self.path) {
			Ok(existing) => temp.as_file().set_permissions(existing.permissions())?,
			Err(err) if err.kind() == io::ErrorKind::NotFound => {}
			Err(err) => return Err(err),
		}
		temp.as_file().sync_all()?;
		temp.persist(&self.path).map_err(|err| err.error)?;
		Ok(())
	}

	/// Entries in path order.
	pub fn entries(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
		self.counts
			.iter()
			.map(|(path, count)| (path.as_str(), *count))
	}

	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn is_loaded(&self) -> bool {
		self.loaded
	}

	/// Number of lines ignored by the last [`load`](Self::load).
	pub fn skipped_lines(&self) -> usize {
		self.skipped
	}
}

fn parse_entries(reader: impl BufRead) -> io::Result<(BTreeMap<String, u32>, usize)> {
	let mut counts = BTreeMap::new();
	let mut skipped = 0;

	for line in reader.split(b'\n') {
		let bytes = line?;
		let Ok(line) = std::str::from_utf8(&bytes) else {
			skipped += 1;
			continue;
		};
		let line = line.trim_end_matches('\r');
		if line.trim().is_empty() {
			continue;
		}
		if let Some(version) = line.strip_prefix(HEADER_PREFIX) {
			check_version(version);
			continue;
		}
		if line.starts_with('#') {
			continue;
		}

		match parse_line(line) {
			Some((_, 0)) => {}
			Some((path, count)) => {
				let entry = counts.entry(path).or_insert(0u32);
				*entry = entry.saturating_add(count);
			}
			None => skipped += 1,
		}
	}

	Ok((counts, skipped))
}

fn parse_line(line: &str) -> Option<(String, u32)> {
	let (count, path) = line.split_once(['\t', ' '])?;
	let count = count.parse::<u32>().ok()?;
	let path = normalize(path)?;
	Some((path, count))
}

fn check_version(version: &str) {
	match version.trim().parse::<u32>() {
		Ok(FORMAT_VERSION) => {}
		Ok(other) => log::warn!(
			"frequency store declares format v{other}, reading it as v{FORMAT_VERSION}"
		),
		Err(_) => log::warn!("unrecognized frequency store header version {version:?}"),
	}
}
