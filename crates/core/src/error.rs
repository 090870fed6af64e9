use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while querying the external path index.
#[derive(Debug, Error)]
pub enum SourceError {
	/// The index tool could not be started or reported an error of its own.
	#[error("path index `{command}` is unavailable: {reason}")]
	BackendUnavailable { command: String, reason: String },
}

impl SourceError {
	pub fn unavailable(command: impl Into<String>, reason: impl Into<String>) -> Self {
		Self::BackendUnavailable {
			command: command.into(),
			reason: reason.into(),
		}
	}
}

/// Failures raised by the [`FrequencyStore`](crate::FrequencyStore).
#[derive(Debug, Error)]
pub enum StoreError {
	#[error("failed to read frequency store {}: {source}", .path.display())]
	Read { path: PathBuf, source: io::Error },

	#[error("failed to write frequency store {}: {source}", .path.display())]
	Write { path: PathBuf, source: io::Error },

	/// The store was never loaded, so writing it would discard its contents.
	#[error("frequency store {} was not loaded; refusing to overwrite it", .path.display())]
	NotLoaded { path: PathBuf },

	/// A key that cannot be normalized into an absolute, single-line path.
	#[error("`{path}` is not a usable absolute path")]
	InvalidPath { path: String },
}
