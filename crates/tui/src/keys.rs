//! Translation from terminal key events to picker [`Key`]s.

use ccd_core::Key;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to the picker input it stands for, if any.
///
/// Besides the plain keys, `Ctrl+C` cancels like `Esc`, and `Ctrl+R` resets
/// the selected entry like `Shift+Delete`, for terminals that do not report
/// shifted delete.
pub fn translate(event: KeyEvent) -> Option<Key> {
	let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
	let alt = event.modifiers.contains(KeyModifiers::ALT);
	let shift = event.modifiers.contains(KeyModifiers::SHIFT);

	let key = match event.code {
		KeyCode::Char('c') if ctrl => Key::Escape,
		KeyCode::Char('r') if ctrl => Key::ResetSelection,
		KeyCode::Char(_) if ctrl || alt => return None,
		KeyCode::Char(c) => Key::Char(c),
		KeyCode::Backspace => Key::Backspace,
		KeyCode::Up => Key::Up,
		KeyCode::Down => Key::Down,
		KeyCode::PageUp => Key::PageUp,
		KeyCode::PageDown => Key::PageDown,
		KeyCode::Home => Key::Home,
		KeyCode::End => Key::End,
		KeyCode::Tab | KeyCode::BackTab => Key::Tab,
		KeyCode::Enter => Key::Enter,
		KeyCode::Esc => Key::Escape,
		KeyCode::Delete if shift => Key::ResetSelection,
		_ => return None,
	};
	Some(key)
}
