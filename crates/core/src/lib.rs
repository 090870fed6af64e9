//! Engine behind the `ccd` directory picker.
//!
//! Candidates come from an external path index ([`CandidateSource`]), are
//! ranked against learned usage counts ([`FrequencyStore`]) and presented
//! through a keystroke-driven [`Picker`]. Nothing in this crate touches the
//! terminal; front ends translate their own input events into [`Key`]s.

pub mod controller;
pub mod error;
pub mod lookup;
pub mod path;
pub mod rank;
pub mod session;
pub mod source;
pub mod store;

pub use controller::{
	ControllerState, DEFAULT_PAGE_SIZE, Key, Outcome, Picker, PickerOptions, Status,
};
pub use error::{SourceError, StoreError};
pub use lookup::{DirectMatch, direct_lookup};
pub use path::normalize;
pub use rank::{RankedResult, rank, rank_entries};
pub use session::{Mode, SearchSession, SessionOptions};
pub use source::{CandidateSet, CandidateSource, CaseSensitivity, DEFAULT_LIMIT, LocateSource};
pub use store::{FORMAT_HEADER, FrequencyStore};
