use ccd_core::{CandidateSource, Mode, Picker, RankedResult};
use ratatui::{
	Frame,
	layout::{Constraint, Direction, Layout, Rect},
	text::{Line, Span},
	widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

const HIGHLIGHT_SYMBOL: &str = ">> ";
const KEY_HELP: &str =
	"↑/↓ PgUp/PgDn Home/End: move | Tab: search/frequent | Shift+Del: reset count | Enter: go | Esc: quit";

/// Draw the whole picker into `frame`.
pub fn draw<S: CandidateSource>(frame: &mut Frame, picker: &Picker<S>, theme: &Theme) {
	let layout = Layout::default()
		.direction(Direction::Vertical)
		.margin(1)
		.constraints([
			Constraint::Length(3),
			Constraint::Min(1),
			Constraint::Length(3),
		])
		.split(frame.area());

	render_input(frame, picker, theme, layout[0]);
	render_results(frame, picker, theme, layout[1]);
	render_footer(frame, picker, theme, layout[2]);
}

fn render_input<S: CandidateSource>(
	frame: &mut Frame,
	picker: &Picker<S>,
	theme: &Theme,
	area: Rect,
) {
	let session = picker.session();
	let (title, placeholder) = match session.mode() {
		Mode::Search => (
			"Search all directories",
			"Start typing, or press Tab for frequently used directories",
		),
		Mode::Frequent => (
			"Frequently used",
			"Press Tab to go back to searching all directories",
		),
	};

	let pattern = session.pattern();
	let text = if pattern.is_empty() {
		Span::styled(placeholder, theme.placeholder_style())
	} else {
		Span::styled(pattern, theme.prompt_style())
	};

	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.border_style())
		.title(Span::styled(title, theme.title_style()));
	frame.render_widget(Paragraph::new(Line::from(text)).block(block), area);

	let offset = u16::try_from(pattern.width()).unwrap_or(u16::MAX);
	let max_x = area.right().saturating_sub(2);
	let cursor_x = area.x.saturating_add(1).saturating_add(offset).min(max_x);
	frame.set_cursor_position((cursor_x, area.y + 1));
}

fn render_results<S: CandidateSource>(
	frame: &mut Frame,
	picker: &Picker<S>,
	theme: &Theme,
	area: Rect,
) {
	let session = picker.session();
	let results = session.results();
	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.border_style())
		.title(Span::styled(results_title(picker), theme.title_style()));

	if results.is_empty() {
		let message = empty_message(session.mode(), session.pattern());
		let empty = Paragraph::new(Line::from(Span::styled(message, theme.empty_style())))
			.block(block);
		frame.render_widget(empty, area);
		return;
	}

	let items: Vec<ListItem> = results
		.iter()
		.map(|result| result_item(result, theme))
		.collect();
	let list = List::new(items)
		.block(block)
		.highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL)
		.highlight_spacing(HighlightSpacing::Always);

	let mut state = ListState::default().with_selected(session.selected());
	frame.render_stateful_widget(list, area, &mut state);
}

fn results_title<S: CandidateSource>(picker: &Picker<S>) -> String {
	let session = picker.session();
	let found = session.results().len();
	match session.mode() {
		Mode::Search if session.filtered() > 0 => format!(
			"Results ({found} found; {} matching files not shown)",
			session.filtered()
		),
		Mode::Search => format!("Results ({found} found)"),
		Mode::Frequent if found == 0 => "Frequent directories (none)".to_string(),
		Mode::Frequent => format!("Frequent directories ({found})"),
	}
}

fn empty_message(mode: Mode, pattern: &str) -> &'static str {
	match mode {
		Mode::Frequent => "No frequently used directories yet",
		Mode::Search if pattern.is_empty() => "Type part of a directory name",
		Mode::Search => "No matching directories",
	}
}

fn result_item<'a>(result: &'a RankedResult, theme: &Theme) -> ListItem<'a> {
	let mut spans = vec![Span::raw(result.path.as_str())];
	if result.count > 0 {
		spans.push(Span::styled(
			format!(" [{}]", result.count),
			theme.count_style(),
		));
	}
	ListItem::new(Line::from(spans))
}

fn render_footer<S: CandidateSource>(
	frame: &mut Frame,
	picker: &Picker<S>,
	theme: &Theme,
	area: Rect,
) {
	let line = match picker.status() {
		Some(status) if status.is_error => {
			Line::from(Span::styled(status.message.as_str(), theme.error_style()))
		}
		Some(status) => Line::from(Span::styled(status.message.as_str(), theme.prompt_style())),
		None => Line::from(Span::styled(KEY_HELP, theme.title_style())),
	};
	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.border_style())
		.title(Span::styled("Keys", theme.title_style()));
	frame.render_widget(Paragraph::new(line).block(block), area);
}

#[cfg(test)]
mod tests {
	use ccd_core::{
		CandidateSet, CaseSensitivity, FrequencyStore, Key, PickerOptions, SessionOptions,
		SourceError,
	};
	use ratatui::{Terminal, backend::TestBackend};
	use tempfile::TempDir;

	use super::*;

	struct FixedSource(Vec<&'static str>);

	impl CandidateSource for FixedSource {
		fn query(&self, _pattern: &str, _case: CaseSensitivity) -> Result<CandidateSet, SourceError> {
			Ok(CandidateSet {
				directories: self.0.iter().map(|path| path.to_string()).collect(),
				filtered: 2,
			})
		}
	}

	fn picker(dir: &TempDir, paths: Vec<&'static str>) -> Picker<FixedSource> {
		let mut store = FrequencyStore::open(dir.path().join("frequency")).unwrap();
		store.increment("/srv/www").unwrap();
		let options = PickerOptions {
			session: SessionOptions {
				hide_missing: false,
				..SessionOptions::default()
			},
			..PickerOptions::default()
		};
		Picker::new(FixedSource(paths), store, options)
	}

	fn screen(picker: &Picker<FixedSource>) -> String {
		let mut terminal = Terminal::new(TestBackend::new(110, 16)).unwrap();
		terminal
			.draw(|frame| draw(frame, picker, &Theme::default()))
			.unwrap();
		let buffer = terminal.backend().buffer();
		let width = usize::from(buffer.area.width);
		buffer
			.content()
			.chunks(width)
			.map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
			.collect::<Vec<_>>()
			.join("\n")
	}

	#[test]
	fn empty_session_shows_placeholder_and_help() {
		let dir = TempDir::new().unwrap();
		let picker = picker(&dir, vec![]);
		let view = screen(&picker);
		assert!(view.contains("Search all directories"));
		assert!(view.contains("Start typing"));
		assert!(view.contains("Type part of a directory name"));
		assert!(view.contains("Enter: go"));
	}

	#[test]
	fn results_show_counts_and_selection() {
		let dir = TempDir::new().unwrap();
		let mut picker = picker(&dir, vec!["/srv", "/srv/www"]);
		picker.handle_key(Key::Char('s'));
		let view = screen(&picker);
		assert!(view.contains("Results (2 found; 2 matching files not shown)"));
		assert!(view.contains(">> /srv/www [1]"));
		assert!(view.contains("/srv"));
	}

	#[test]
	fn frequent_mode_has_its_own_titles() {
		let dir = TempDir::new().unwrap();
		let mut picker = picker(&dir, vec![]);
		picker.handle_key(Key::Tab);
		let view = screen(&picker);
		assert!(view.contains("Frequently used"));
		assert!(view.contains("Frequent directories (1)"));
		assert!(view.contains("/srv/www [1]"));
	}

	#[test]
	fn status_replaces_help_line() {
		let dir = TempDir::new().unwrap();
		let mut picker = picker(&dir, vec!["/srv/www"]);
		picker.handle_key(Key::Char('w'));
		picker.handle_key(Key::ResetSelection);
		let view = screen(&picker);
		assert!(view.contains("reset /srv/www (was 1)"));
		assert!(!view.contains("Enter: go"));
	}
}
