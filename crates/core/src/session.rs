use std::path::Path;

use crate::error::SourceError;
use crate::rank::{RankedResult, rank, rank_entries};
use crate::source::{CandidateSet, CandidateSource, CaseSensitivity};
use crate::store::FrequencyStore;

/// Which list the session is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
	/// Index results for the current pattern.
	#[default]
	Search,
	/// Everything in the frequency store, regardless of the pattern.
	Frequent,
}

impl Mode {
	pub fn toggled(self) -> Self {
		match self {
			Self::Search => Self::Frequent,
			Self::Frequent => Self::Search,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
	pub case: CaseSensitivity,
	/// Merge store entries whose path contains the pattern into search results.
	pub include_store_matches: bool,
	/// Hide store entries whose directory no longer exists.
	pub hide_missing: bool,
}

impl Default for SessionOptions {
	fn default() -> Self {
		Self {
			case: CaseSensitivity::default(),
			include_store_matches: true,
			hide_missing: true,
		}
	}
}

/// Query the index for `pattern` and fold in matching store entries.
pub fn collect_candidates<S: CandidateSource>(
	source: &S,
	store: &FrequencyStore,
	pattern: &str,
	options: &SessionOptions,
) -> Result<CandidateSet, SourceError> {
	let mut set = source.query(pattern, options.case)?;
	if options.include_store_matches {
		let extra: Vec<String> = store
			.entries()
			.map(|(path, _)| path)
			.filter(|path| options.case.contains(path, pattern))
			.filter(|path| !set.directories.iter().any(|known| known == path))
			.filter(|path| !options.hide_missing || Path::new(path).is_dir())
			.map(str::to_string)
			.collect();
		set.directories.extend(extra);
	}
	Ok(set)
}

/// Pattern text plus the ranked list currently on screen.
#[derive(Debug)]
pub struct SearchSession<S> {
	source: S,
	options: SessionOptions,
	pattern: String,
	mode: Mode,
	candidates: CandidateSet,
	/// Pattern the cached candidates were fetched for.
	candidates_pattern: Option<String>,
	results: Vec<RankedResult>,
	selected: Option<usize>,
}

impl<S: CandidateSource> SearchSession<S> {
	pub fn new(source: S, options: SessionOptions) -> Self {
		Self {
			source,
			options,
			pattern: String::new(),
			mode: Mode::Search,
			candidates: CandidateSet::default(),
			candidates_pattern: None,
			results: Vec::new(),
			selected: None,
		}
	}

	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	pub fn mode(&self) -> Mode {
		self.mode
	}

	pub fn results(&self) -> &[RankedResult] {
		&self.results
	}

	/// Index entries hidden from the last search because they were files.
	pub fn filtered(&self) -> usize {
		match self.mode {
			Mode::Search => self.candidates.filtered,
			Mode::Frequent => 0,
		}
	}

	pub fn selected(&self) -> Option<usize> {
		self.selected
	}

	pub fn selected_result(&self) -> Option<&RankedResult> {
		self.selected.and_then(|index| self.results.get(index))
	}

	/// Replace the pattern, recomputing when searching.
	pub fn set_pattern(
		&mut self,
		pattern: impl Into<String>,
		store: &FrequencyStore,
	) -> Result<(), SourceError> {
		self.pattern = pattern.into();
		self.pattern_changed(store)
	}

	pub fn push_char(&mut self, c: char, store: &FrequencyStore) -> Result<(), SourceError> {
		self.pattern.push(c);
		self.pattern_changed(store)
	}

	pub fn pop_char(&mut self, store: &FrequencyStore) -> Result<(), SourceError> {
		if self.pattern.pop().is_none() {
			return Ok(());
		}
		self.pattern_changed(store)
	}

	fn pattern_changed(&mut self, store: &FrequencyStore) -> Result<(), SourceError> {
		match self.mode {
			Mode::Search => self.search(store),
			Mode::Frequent => Ok(()),
		}
	}

	/// Switch between search and frequent lists, keeping the pattern.
	pub fn toggle_mode(&mut self, store: &FrequencyStore) -> Result<(), SourceError> {
		self.mode = self.mode.toggled();
		match self.mode {
			Mode::Frequent => {
				self.show_frequent(store, false);
				Ok(())
			}
			Mode::Search if self.candidates_pattern.as_deref() == Some(self.pattern.as_str()) => {
				self.rerank_search(store, false);
				Ok(())
			}
			Mode::Search => self.search(store),
		}
	}

	/// Re-order the visible list after the store changed, without a new
	/// index query. The selection stays on the same path, or on the same row
	/// if that path is gone.
	pub fn rerank(&mut self, store: &FrequencyStore) {
		match self.mode {
			Mode::Search => self.rerank_search(store, true),
			Mode::Frequent => self.show_frequent(store, true),
		}
	}

	fn search(&mut self, store: &FrequencyStore) -> Result<(), SourceError> {
		if self.pattern.is_empty() {
			self.candidates = CandidateSet::default();
			self.candidates_pattern = Some(String::new());
			self.apply(Vec::new(), false);
			return Ok(());
		}

		match collect_candidates(&self.source, store, &self.pattern, &self.options) {
			Ok(set) => {
				self.candidates = set;
				self.candidates_pattern = Some(self.pattern.clone());
				self.rerank_search(store, false);
				Ok(())
			}
			Err(err) => {
				self.candidates = CandidateSet::default();
				self.candidates_pattern = None;
				self.apply(Vec::new(), false);
				Err(err)
			}
		}
	}

	fn rerank_search(&mut self, store: &FrequencyStore, keep_row: bool) {
		let ranked = rank(self.candidates.directories.iter().cloned(), store);
		self.apply(ranked, keep_row);
	}

	fn show_frequent(&mut self, store: &FrequencyStore, keep_row: bool) {
		let hide_missing = self.options.hide_missing;
		let ranked = rank_entries(
			store
				.entries()
				.filter(|(path, _)| !hide_missing || Path::new(path).is_dir()),
		);
		self.apply(ranked, keep_row);
	}

	fn apply(&mut self, results: Vec<RankedResult>, keep_row: bool) {
		let previous_path = self.selected_result().map(|result| result.path.clone());
		let previous_row = self.selected;
		self.results = results;

		if self.results.is_empty() {
			self.selected = None;
			return;
		}

		let last = self.results.len() - 1;
		let followed = previous_path
			.and_then(|path| self.results.iter().position(|result| result.path == path));
		self.selected = Some(match (followed, previous_row) {
			(Some(row), _) => row,
			(None, Some(row)) if keep_row => row.min(last),
			_ => 0,
		});
	}

	/// Move the selection by `delta` rows, clamped to the list.
	pub fn move_selection(&mut self, delta: isize) {
		let Some(current) = self.selected else {
			return;
		};
		let last = self.results.len().saturating_sub(1);
		let target = current.saturating_add_signed(delta).min(last);
		self.selected = Some(target);
	}

	pub fn select_first(&mut self) {
		if !self.results.is_empty() {
			self.selected = Some(0);
		}
	}

	pub fn select_last(&mut self) {
		if !self.results.is_empty() {
			self.selected = Some(self.results.len() - 1);
		}
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use std::cell::Cell;
	use std::collections::HashMap;

	use tempfile::TempDir;

	use super::*;

	/// Index stand-in answering from a fixed table and counting queries.
	#[derive(Default)]
	pub(crate) struct StubSource {
		answers: HashMap<String, Vec<String>>,
		fail: bool,
		pub(crate) queries: Cell<usize>,
	}

	impl StubSource {
		pub(crate) fn failing() -> Self {
			Self {
				fail: true,
				..Self::default()
			}
		}

		pub(crate) fn with(mut self, pattern: &str, paths: &[&str]) -> Self {
			self.answers.insert(
				pattern.to_string(),
				paths.iter().map(|path| path.to_string()).collect(),
			);
			self
		}
	}

	impl CandidateSource for StubSource {
		fn query(&self, pattern: &str, _case: CaseSensitivity) -> Result<CandidateSet, SourceError> {
			self.queries.set(self.queries.get() + 1);
			if self.fail {
				return Err(SourceError::unavailable("stub", "offline"));
			}
			Ok(CandidateSet {
				directories: self.answers.get(pattern).cloned().unwrap_or_default(),
				filtered: 0,
			})
		}
	}

	pub(crate) fn offline_options() -> SessionOptions {
		SessionOptions {
			hide_missing: false,
			..SessionOptions::default()
		}
	}

	fn paths<S: CandidateSource>(session: &SearchSession<S>) -> Vec<&str> {
		session
			.results()
			.iter()
			.map(|result| result.path.as_str())
			.collect()
	}

	fn store(dir: &TempDir) -> FrequencyStore {
		FrequencyStore::open(dir.path().join("frequency")).unwrap()
	}

	#[test]
	fn typing_requeries_and_ranks() {
		let dir = TempDir::new().unwrap();
		let store = store(&dir);
		let source = StubSource::default()
			.with("t", &["/tmpfs", "/tmp", "/usr/t"])
			.with("tm", &["/tmpfs", "/tmp"]);
		let mut session = SearchSession::new(source, offline_options());

		session.push_char('t', &store).unwrap();
		assert_eq!(paths(&session), vec!["/tmp", "/tmpfs", "/usr/t"]);
		session.push_char('m', &store).unwrap();
		assert_eq!(paths(&session), vec!["/tmp", "/tmpfs"]);
		assert_eq!(session.selected(), Some(0));
	}

	#[test]
	fn empty_pattern_clears_without_querying() {
		let dir = TempDir::new().unwrap();
		let store = store(&dir);
		let source = StubSource::default().with("a", &["/a"]);
		let mut session = SearchSession::new(&source, offline_options());

		session.push_char('a', &store).unwrap();
		session.pop_char(&store).unwrap();
		assert!(session.results().is_empty());
		assert_eq!(session.selected(), None);
		assert_eq!(source.queries.get(), 1);
	}

	#[test]
	fn selection_follows_previous_path() {
		let dir = TempDir::new().unwrap();
		let store = store(&dir);
		let source = StubSource::default()
			.with("p", &["/p1", "/p2", "/p3"])
			.with("p3", &["/p3"])
			.with("p4", &["/other"]);
		let mut session = SearchSession::new(source, offline_options());

		session.push_char('p', &store).unwrap();
		session.move_selection(2);
		assert_eq!(session.selected_result().unwrap().path, "/p3");

		session.push_char('3', &store).unwrap();
		assert_eq!(session.selected(), Some(0));
		assert_eq!(session.selected_result().unwrap().path, "/p3");

		session.set_pattern("p", &store).unwrap();
		assert_eq!(session.selected_result().unwrap().path, "/p3");

		session.set_pattern("p4", &store).unwrap();
		assert_eq!(session.selected(), Some(0));
	}

	#[test]
	fn rerank_reorders_without_querying_again() {
		let dir = TempDir::new().unwrap();
		let mut store = store(&dir);
		let source = StubSource::default().with("p", &["/p1", "/p2", "/p3"]);
		let mut session = SearchSession::new(&source, offline_options());

		session.push_char('p', &store).unwrap();
		session.move_selection(1);
		assert_eq!(session.selected_result().unwrap().path, "/p2");

		store.increment("/p3").unwrap();
		session.rerank(&store);
		assert_eq!(paths(&session), vec!["/p3", "/p1", "/p2"]);
		assert_eq!(session.selected_result().unwrap().path, "/p2");
		assert_eq!(source.queries.get(), 1);
	}

	#[test]
	fn store_matches_are_merged_into_search() {
		let dir = TempDir::new().unwrap();
		let mut store = store(&dir);
		store.increment("/home/u/Projects").unwrap();
		store.increment("/srv").unwrap();
		let source = StubSource::default().with("proj", &["/proj", "/home/u/Projects"]);
		let mut session = SearchSession::new(source, offline_options());

		session.set_pattern("proj", &store).unwrap();
		assert_eq!(paths(&session), vec!["/home/u/Projects", "/proj"]);
	}

	#[test]
	fn store_matches_can_be_disabled() {
		let dir = TempDir::new().unwrap();
		let mut store = store(&dir);
		store.increment("/data/archive").unwrap();
		let options = SessionOptions {
			include_store_matches: false,
			..offline_options()
		};
		let mut session = SearchSession::new(StubSource::default(), options);

		session.set_pattern("arch", &store).unwrap();
		assert!(session.results().is_empty());
	}

	#[test]
	fn frequent_mode_lists_store_and_ignores_pattern() {
		let dir = TempDir::new().unwrap();
		let mut store = store(&dir);
		store.increment("/a/long/path").unwrap();
		store.increment("/a/long/path").unwrap();
		store.increment("/b").unwrap();
		let mut session = SearchSession::new(StubSource::default(), offline_options());

		session.set_pattern("zzz", &store).unwrap();
		session.toggle_mode(&store).unwrap();
		assert_eq!(session.mode(), Mode::Frequent);
		assert_eq!(paths(&session), vec!["/a/long/path", "/b"]);

		session.push_char('q', &store).unwrap();
		assert_eq!(session.pattern(), "zzzq");
		assert_eq!(paths(&session), vec!["/a/long/path", "/b"]);
	}

	#[test]
	fn frequent_mode_hides_missing_directories() {
		let dir = TempDir::new().unwrap();
		let existing = dir.path().join("kept");
		std::fs::create_dir(&existing).unwrap();
		let existing = existing.display().to_string();
		let mut store = store(&dir);
		store.increment(&existing).unwrap();
		store.increment("/ccd/definitely/missing").unwrap();

		let mut session = SearchSession::new(StubSource::default(), SessionOptions::default());
		session.toggle_mode(&store).unwrap();
		assert_eq!(paths(&session), vec![existing.as_str()]);
	}

	#[test]
	fn tab_round_trip_restores_filtered_view() {
		let dir = TempDir::new().unwrap();
		let mut store = store(&dir);
		store.increment("/elsewhere").unwrap();
		let source = StubSource::default().with("proj", &["/x/proj", "/proj", "/y/proj"]);
		let mut session = SearchSession::new(&source, offline_options());

		for c in "proj".chars() {
			session.push_char(c, &store).unwrap();
		}
		let before: Vec<String> = paths(&session).into_iter().map(String::from).collect();
		assert_eq!(before.len(), 3);
		let queries = source.queries.get();

		session.toggle_mode(&store).unwrap();
		assert_eq!(paths(&session), vec!["/elsewhere"]);
		session.toggle_mode(&store).unwrap();

		assert_eq!(session.mode(), Mode::Search);
		assert_eq!(session.pattern(), "proj");
		assert_eq!(paths(&session), before);
		assert_eq!(source.queries.get(), queries);
	}

	#[test]
	fn editing_in_frequent_mode_requeries_on_return() {
		let dir = TempDir::new().unwrap();
		let store = store(&dir);
		let source = StubSource::default()
			.with("a", &["/a"])
			.with("ab", &["/ab"]);
		let mut session = SearchSession::new(&source, offline_options());

		session.push_char('a', &store).unwrap();
		session.toggle_mode(&store).unwrap();
		session.push_char('b', &store).unwrap();
		session.toggle_mode(&store).unwrap();
		assert_eq!(paths(&session), vec!["/ab"]);
	}

	#[test]
	fn selection_is_clamped() {
		let dir = TempDir::new().unwrap();
		let store = store(&dir);
		let source = StubSource::default().with("d", &["/d1", "/d2", "/d3"]);
		let mut session = SearchSession::new(source, offline_options());
		session.push_char('d', &store).unwrap();

		session.move_selection(-1);
		assert_eq!(session.selected(), Some(0));
		session.move_selection(10);
		assert_eq!(session.selected(), Some(2));
		session.select_first();
		assert_eq!(session.selected(), Some(0));
		session.select_last();
		assert_eq!(session.selected(), Some(2));
	}

	#[test]
	fn navigation_on_empty_list_is_a_no_op() {
		let mut session = SearchSession::new(StubSource::default(), offline_options());
		session.move_selection(1);
		session.select_last();
		session.select_first();
		assert_eq!(session.selected(), None);
	}

	#[test]
	fn source_failure_clears_results() {
		let dir = TempDir::new().unwrap();
		let store = store(&dir);
		let source = StubSource::failing();
		let mut session = SearchSession::new(source, offline_options());
		let err = session.push_char('x', &store).unwrap_err();
		assert!(matches!(err, SourceError::BackendUnavailable { .. }));
		assert!(session.results().is_empty());
		assert_eq!(session.pattern(), "x");
	}
}
