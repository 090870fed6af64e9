use std::cmp::Ordering;
use std::collections::HashSet;

use crate::store::FrequencyStore;

/// A candidate paired with its usage count and position in the ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedResult {
	pub path: String,
	pub count: u32,
	pub rank: usize,
}

/// Order `candidates` by usage count, then by shorter path, then
/// lexicographically. Duplicate paths are collapsed.
pub fn rank<I, S>(candidates: I, store: &FrequencyStore) -> Vec<RankedResult>
where
	I: IntoIterator<Item = S>,
	S: Into<String>,
{
	let mut seen = HashSet::new();
	let scored = candidates
		.into_iter()
		.map(Into::into)
		.filter(|path| seen.insert(path.clone()))
		.map(|path| {
			let count = store.get(&path);
			(path, count)
		});
	rank_entries(scored)
}

/// Apply the ranking order to `(path, count)` pairs that already carry
/// their counts.
pub fn rank_entries<I, S>(entries: I) -> Vec<RankedResult>
where
	I: IntoIterator<Item = (S, u32)>,
	S: Into<String>,
{
	let mut results: Vec<RankedResult> = entries
		.into_iter()
		.map(|(path, count)| RankedResult {
			path: path.into(),
			count,
			rank: 0,
		})
		.collect();
	results.sort_by(compare);
	for (position, result) in results.iter_mut().enumerate() {
		result.rank = position;
	}
	results
}

fn compare(a: &RankedResult, b: &RankedResult) -> Ordering {
	b.count
		.cmp(&a.count)
		.then_with(|| a.path.len().cmp(&b.path.len()))
		.then_with(|| a.path.cmp(&b.path))
}
