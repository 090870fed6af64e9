//! Normalization policy for paths used as store and ranking keys.
//!
//! Every path that enters the engine goes through [`normalize`], so `/a/b/`,
//! `/a//b` and `/a/./b` all refer to the same frequency entry.

/// Normalize `raw` into the canonical key form.
///
/// Returns `None` for relative paths and for paths containing line breaks,
/// which could not survive the line-oriented store format. The cleanup is
/// purely lexical: symlinks are not resolved and the filesystem is never
/// consulted.
pub fn normalize(raw: &str) -> Option<String> {
	if !raw.starts_with('/') || raw.contains(['\n', '\r']) {
		return None;
	}

	let mut parts: Vec<&str> = Vec::new();
	for part in raw.split('/') {
		match part {
			"" | "." => {}
			".." => {
				parts.pop();
			}
			other => parts.push(other),
		}
	}

	if parts.is_empty() {
		return Some("/".to_string());
	}

	let mut normalized = String::with_capacity(raw.len());
	for part in parts {
		normalized.push('/');
		normalized.push_str(part);
	}
	Some(normalized)
}
