//! Terminal setup and the blocking event loop.

use std::io;

use anyhow::{Result, anyhow};
use ccd_core::{CandidateSource, Outcome, Picker};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
	EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

use crate::keys::translate;
use crate::render::draw;
use crate::theme::Theme;

/// Take over the terminal, run `picker` until the user confirms or cancels,
/// then hand the terminal back.
///
/// The UI is drawn on stderr so stdout stays free for the chosen path.
pub fn run<S: CandidateSource>(picker: &mut Picker<S>, theme: &Theme) -> Result<Outcome> {
	let guard = TerminalGuard::enter()?;
	let mut terminal = Terminal::new(CrosstermBackend::new(io::stderr()))?;
	terminal.clear()?;
	let events = std::iter::repeat_with(event::read);
	let result = drive(&mut terminal, events, picker, theme);
	terminal.show_cursor()?;
	drop(guard);
	result
}

/// Redraw, read one event, repeat. Only key presses reach the picker;
/// releases and repeats reported by some terminals are dropped.
pub fn drive<B, I, S>(
	terminal: &mut Terminal<B>,
	events: I,
	picker: &mut Picker<S>,
	theme: &Theme,
) -> Result<Outcome>
where
	B: Backend,
	I: IntoIterator<Item = io::Result<Event>>,
	S: CandidateSource,
{
	let mut events = events.into_iter();
	loop {
		terminal.draw(|frame| draw(frame, picker, theme))?;

		let event = events
			.next()
			.ok_or_else(|| anyhow!("input ended before a directory was chosen"))??;
		match event {
			Event::Key(key) if key.kind == KeyEventKind::Press => {
				let Some(key) = translate(key) else {
					continue;
				};
				if let Some(outcome) = picker.handle_key(key) {
					return Ok(outcome);
				}
			}
			Event::Resize(_, _) => {}
			_ => {}
		}
	}
}

struct TerminalGuard;

impl TerminalGuard {
	fn enter() -> Result<Self> {
		enable_raw_mode()?;
		if let Err(err) = execute!(io::stderr(), EnterAlternateScreen) {
			let _ = disable_raw_mode();
			return Err(err.into());
		}
		Ok(Self)
	}
}

impl Drop for TerminalGuard {
	fn drop(&mut self) {
		if let Err(err) = execute!(io::stderr(), LeaveAlternateScreen) {
			log::debug!("failed to leave alternate screen: {err}");
		}
		if let Err(err) = disable_raw_mode() {
			log::debug!("failed to disable raw mode: {err}");
		}
	}
}
