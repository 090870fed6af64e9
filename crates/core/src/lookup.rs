//! Single-shot lookup used when a pattern is passed on the command line.

use crate::error::SourceError;
use crate::rank::{RankedResult, rank};
use crate::session::{SessionOptions, collect_candidates};
use crate::source::CandidateSource;
use crate::store::FrequencyStore;

/// Best candidate of a direct lookup, with context for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectMatch {
	pub best: RankedResult,
	/// Directories that matched.
	pub directories: usize,
	/// Index entries dropped because they were not directories.
	pub filtered: usize,
}

/// Rank the candidates for `pattern` and return the top one.
///
/// The store is only read: a direct hit is not evidence of deliberate reuse,
/// so it never earns a usage count.
pub fn direct_lookup<S: CandidateSource>(
	source: &S,
	store: &FrequencyStore,
	pattern: &str,
	options: &SessionOptions,
) -> Result<Option<DirectMatch>, SourceError> {
	let candidates = collect_candidates(source, store, pattern, options)?;
	let filtered = candidates.filtered;
	let ranked = rank(candidates.directories, store);
	let directories = ranked.len();
	Ok(ranked.into_iter().next().map(|best| DirectMatch {
		best,
		directories,
		filtered,
	}))
}
