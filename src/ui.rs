use crate::app::{App, AppMode, Focus};
use crossterm::{
	execute,
	terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use std::io;
use unicode_bidi::BidiInfo;
use ratatui::{
	layout::{Alignment, Constraint, Layout, Rect},
	widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
	text::{Line, Span},
	style::{Style, Color},
	prelude::*,
};

fn highlight() -> Style {
	Style::default().fg(Color::Black).bg(Color::White)
}

/// Raw mode and the alternate screen for as long as the guard lives.
/// Dropping it puts the terminal back, on error paths too.
pub struct TerminalGuard {
	_private: (),
}

impl TerminalGuard {
	pub fn enter(title: &str) -> io::Result<Self> {
		enable_raw_mode()?;
		let guard = Self { _private: () };
		execute!(io::stdout(), EnterAlternateScreen, SetTitle(title))?;
		Ok(guard)
	}
}

impl Drop for TerminalGuard {
	fn drop(&mut self) {
		let _ = restore_terminal();
	}
}

pub fn restore_terminal() -> io::Result<()> {
	disable_raw_mode()?;
	execute!(io::stdout(), LeaveAlternateScreen)
}

pub fn is_rtl(text: &str) -> bool {
	BidiInfo::new(text, None).has_rtl()
}

/// Reorder right-to-left runs into visual order, line by line.
fn process_rtl_text(text: &str) -> String {
	text
		.lines()
		.map(|line| {
			let bidi_info = BidiInfo::new(line, None);
			match bidi_info.paragraphs.first() {
				Some(para) => bidi_info.reorder_line(para, para.range.clone()).into_owned(),
				None => line.to_string(),
			}
		})
		.collect::<Vec<_>>()
		.join("\n")
}

/// Wrap to `width` columns, then put RTL text into visual order.
pub fn render_display_text(text: &str, width: usize) -> String {
	let wrapped = textwrap::fill(text, textwrap::Options::new(width.max(1)));
	if is_rtl(text) {
		process_rtl_text(&wrapped)
	} else {
		wrapped
	}
}

pub fn render_status_bar(items: Vec<(&str, &str)>) -> Paragraph<'static> {
	let spans: Vec<Span<'static>> = items.into_iter().flat_map(|(key, desc)| vec![
		Span::styled(key.to_string(), Style::default().fg(Color::Yellow)),
		Span::raw(": ".to_string()),
		Span::raw(desc.to_string()),
		Span::raw(" | ".to_string()),
	]).collect();
	let mut spans = spans;
	if !spans.is_empty() {
		spans.pop();
	}
	Paragraph::new(Line::from(spans)).alignment(Alignment::Left)
}

pub fn popup_area(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
	let popup_layout = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Percentage((100 - height_percent) / 2),
			Constraint::Percentage(height_percent),
			Constraint::Percentage((100 - height_percent) / 2),
		])
		.split(area);

	Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Percentage((100 - width_percent) / 2),
			Constraint::Percentage(width_percent),
			Constraint::Percentage((100 - width_percent) / 2),
		])
		.split(popup_layout[1])[1]
}

fn list_block(title: &str, focused: bool) -> Block<'static> {
	let title_style = if focused {
		Style::default().fg(Color::Yellow)
	} else {
		Style::default().fg(Color::Gray)
	};
	let block = Block::default().title(Span::styled(title.to_string(), title_style)).borders(Borders::ALL);
	if focused {
		block.border_type(BorderType::Thick)
	} else {
		block
	}
}

fn status_bar(app: &App) -> Paragraph<'static> {
	match app.mode {
		AppMode::Browsing => render_status_bar(vec![
			("q", "quit"),
			("tab/←/→", "switch list"),
			("↑/↓", "select"),
			("/", "filter"),
			("r", "random country"),
			("backspace", "clear"),
		]),
		AppMode::Filter => render_status_bar(vec![
			("Esc", "cancel"),
			("↑/↓", "select"),
			("enter", "choose"),
		]),
	}
}

pub fn draw(f: &mut Frame, app: &mut App) {
	let chunks = Layout::default()
		.direction(Direction::Vertical)
		.constraints([Constraint::Min(3), Constraint::Length(5), Constraint::Length(1)].as_ref())
		.split(f.size());
	let columns = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([Constraint::Percentage(40), Constraint::Percentage(60)].as_ref())
		.split(chunks[0]);

	let languages: Vec<ListItem> = app.indexes.languages.names().iter().map(|n| ListItem::new(n.clone())).collect();
	let language_list = List::new(languages)
		.block(list_block("Languages", app.focus == Focus::Languages))
		.style(Style::default().fg(Color::White))
		.highlight_style(highlight());
	f.render_stateful_widget(language_list, columns[0], &mut app.language_list_state);

	let countries: Vec<ListItem> = app.indexes.countries.names().iter().map(|n| ListItem::new(n.clone())).collect();
	let country_list = List::new(countries)
		.block(list_block("Countries", app.focus == Focus::Countries))
		.style(Style::default().fg(Color::White))
		.highlight_style(highlight());
	f.render_stateful_widget(country_list, columns[1], &mut app.country_list_state);

	let display_block = Block::default()
		.title(Span::styled(format!(" {} ", app.display_title()), Style::default().fg(Color::Yellow)))
		.borders(Borders::ALL);
	let inner = display_block.inner(chunks[1]);
	let alignment = if is_rtl(&app.display) { Alignment::Right } else { Alignment::Center };
	let text = render_display_text(&app.display, inner.width as usize);
	f.render_widget(display_block, chunks[1]);
	f.render_widget(Paragraph::new(text).style(Style::default().fg(Color::White)).alignment(alignment), inner);

	if app.mode == AppMode::Filter {
		let popup = popup_area(f.size(), 50, 50);
		f.render_widget(Clear, popup);
		let names = app.focused_names();
		let items: Vec<ListItem> = app
			.filter_results
			.iter()
			.filter_map(|&i| names.get(i))
			.map(|n| ListItem::new(n.clone()))
			.collect();
		let list = List::new(items)
			.block(Block::default()
				.title(Span::styled(format!("Filter: {} ", app.filter_query), Style::default().fg(Color::Yellow)))
				.borders(Borders::ALL)
				.border_type(BorderType::Double))
			.highlight_style(highlight());
		f.render_stateful_widget(list, popup, &mut app.filter_list_state);
	}

	f.render_widget(status_bar(app), chunks[2]);
}
