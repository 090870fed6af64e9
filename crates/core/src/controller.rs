//! Keystroke-driven state machine for an interactive picking session.

use crate::error::{SourceError, StoreError};
use crate::session::{Mode, SearchSession, SessionOptions};
use crate::source::CandidateSource;
use crate::store::FrequencyStore;

/// Rows skipped by page up/down unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Front-end independent input understood by the [`Picker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
	Char(char),
	Backspace,
	Up,
	Down,
	PageUp,
	PageDown,
	Home,
	End,
	Tab,
	Enter,
	Escape,
	ResetSelection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerState {
	SearchMode,
	FrequentMode,
	Confirmed(String),
	Cancelled,
}

impl ControllerState {
	pub fn is_terminal(&self) -> bool {
		matches!(self, Self::Confirmed(_) | Self::Cancelled)
	}

	fn for_mode(mode: Mode) -> Self {
		match mode {
			Mode::Search => Self::SearchMode,
			Mode::Frequent => Self::FrequentMode,
		}
	}
}

/// How a session ended.
#[derive(Debug)]
pub enum Outcome {
	/// The user picked `path`. `save_error` is set when the usage count could
	/// not be persisted; the pick itself still stands.
	Confirmed {
		path: String,
		save_error: Option<StoreError>,
	},
	Cancelled,
}

/// One-line feedback shown beneath the results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
	pub message: String,
	pub is_error: bool,
}

impl Status {
	fn info(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			is_error: false,
		}
	}

	fn error(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			is_error: true,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOptions {
	pub session: SessionOptions,
	pub page_size: usize,
	pub initial_query: String,
}

impl Default for PickerOptions {
	fn default() -> Self {
		Self {
			session: SessionOptions::default(),
			page_size: DEFAULT_PAGE_SIZE,
			initial_query: String::new(),
		}
	}
}

/// Owns the session and the frequency store for the lifetime of one
/// interactive run.
#[derive(Debug)]
pub struct Picker<S> {
	session: SearchSession<S>,
	store: FrequencyStore,
	page_size: usize,
	state: ControllerState,
	status: Option<Status>,
}

impl<S: CandidateSource> Picker<S> {
	pub fn new(source: S, store: FrequencyStore, options: PickerOptions) -> Self {
		let mut picker = Self {
			session: SearchSession::new(source, options.session),
			store,
			page_size: options.page_size.max(1),
			state: ControllerState::SearchMode,
			status: None,
		};
		if !options.initial_query.is_empty() {
			let result = picker
				.session
				.set_pattern(options.initial_query, &picker.store);
			picker.record_source_result(result);
		}
		picker
	}

	pub fn session(&self) -> &SearchSession<S> {
		&self.session
	}

	pub fn store(&self) -> &FrequencyStore {
		&self.store
	}

	pub fn state(&self) -> &ControllerState {
		&self.state
	}

	pub fn status(&self) -> Option<&Status> {
		self.status.as_ref()
	}

	/// Feed one key into the state machine. Returns the outcome once the
	/// session reaches a terminal state; keys after that are ignored.
	pub fn handle_key(&mut self, key: Key) -> Option<Outcome> {
		if self.state.is_terminal() {
			return None;
		}
		self.status = None;

		match key {
			Key::Char(c) if !c.is_control() => {
				let result = self.session.push_char(c, &self.store);
				self.record_source_result(result);
			}
			Key::Char(_) => {}
			Key::Backspace => {
				let result = self.session.pop_char(&self.store);
				self.record_source_result(result);
			}
			Key::Up => self.session.move_selection(-1),
			Key::Down => self.session.move_selection(1),
			Key::PageUp => self.session.move_selection(-self.page_delta()),
			Key::PageDown => self.session.move_selection(self.page_delta()),
			Key::Home => self.session.select_first(),
			Key::End => self.session.select_last(),
			Key::Tab => {
				let result = self.session.toggle_mode(&self.store);
				self.record_source_result(result);
				self.state = ControllerState::for_mode(self.session.mode());
			}
			Key::Enter => return self.confirm(),
			Key::Escape => {
				self.state = ControllerState::Cancelled;
				return Some(Outcome::Cancelled);
			}
			Key::ResetSelection => self.reset_selected(),
		}
		None
	}

	fn page_delta(&self) -> isize {
		isize::try_from(self.page_size).unwrap_or(isize::MAX)
	}

	fn confirm(&mut self) -> Option<Outcome> {
		let path = self.session.selected_result()?.path.clone();
		let save_error = match self.store.increment(&path) {
			Ok(count) => {
				log::debug!("{path} picked, usage count now {count}");
				None
			}
			Err(err) => {
				log::warn!("could not record pick of {path}: {err}");
				Some(err)
			}
		};
		self.state = ControllerState::Confirmed(path.clone());
		Some(Outcome::Confirmed { path, save_error })
	}

	fn reset_selected(&mut self) {
		let Some(path) = self
			.session
			.selected_result()
			.map(|result| result.path.clone())
		else {
			return;
		};
		self.status = Some(match self.store.reset(&path) {
			Ok(previous) => Status::info(format!("reset {path} (was {previous})")),
			Err(err) => Status::error(err.to_string()),
		});
		self.session.rerank(&self.store);
	}

	fn record_source_result(&mut self, result: Result<(), SourceError>) {
		if let Err(err) = result {
			log::debug!("index query failed: {err}");
			self.status = Some(Status::error(err.to_string()));
		}
	}
}
