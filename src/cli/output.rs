use std::io::{self, Write};
use std::process::ExitCode;

/// The path was printed, or a bookmark/increment was recorded.
const EXIT_SUCCESS: u8 = 0;
/// The picker was cancelled or nothing matched.
const EXIT_NOTHING_CHOSEN: u8 = 1;
/// Operational failure or invalid arguments.
pub(crate) const EXIT_FAILURE: u8 = 2;

/// What a workflow produced, as seen by the enclosing shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome {
	Selected(String),
	Cancelled,
	NoMatches,
	Recorded,
}

impl Outcome {
	pub(crate) fn exit_code(&self) -> u8 {
		match self {
			Self::Selected(_) | Self::Recorded => EXIT_SUCCESS,
			Self::Cancelled | Self::NoMatches => EXIT_NOTHING_CHOSEN,
		}
	}
}

/// Write the selection, if any, without a trailing newline.
pub(crate) fn write_outcome(out: &mut impl Write, outcome: &Outcome) -> io::Result<()> {
	if let Outcome::Selected(path) = outcome {
		out.write_all(path.as_bytes())?;
		out.flush()?;
	}
	Ok(())
}

/// Print the outcome on stdout and map it to the process exit code.
pub(crate) fn print_outcome(outcome: &Outcome) -> io::Result<ExitCode> {
	write_outcome(&mut io::stdout().lock(), outcome)?;
	Ok(ExitCode::from(outcome.exit_code()))
}
