use crate::models::Catalog;
use crate::resolve::{resolve_and_display, Indexes, Placeholders};
use crate::codes::LanguageCode;
use rand::Rng;
use ratatui::widgets::ListState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
	Languages,
	Countries,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
	Browsing,
	Filter,
}

pub struct App {
	pub catalog: Catalog,
	pub indexes: Indexes,
	pub placeholders: Placeholders,
	pub focus: Focus,
	pub mode: AppMode,
	pub language_list_state: ListState,
	pub country_list_state: ListState,
	pub filter_query: String,
	pub filter_results: Vec<usize>,
	pub filter_list_state: ListState,
	pub display: String,
}

impl App {
	pub fn new(catalog: Catalog, placeholders: Placeholders, default_language: Option<&LanguageCode>) -> Self {
		let indexes = Indexes::build(&catalog);
		let mut language_list_state = ListState::default();
		let preferred = default_language.and_then(|code| {
			let found = indexes.languages.name_of(code).and_then(|name| indexes.languages.position(name));
			if found.is_none() {
				log::warn!("default language {} has no translations, ignored", code);
			}
			found
		});
		if let Some(i) = preferred.or_else(|| (!indexes.languages.is_empty()).then_some(0)) {
			language_list_state.select(Some(i));
		}
		let mut country_list_state = ListState::default();
		if !indexes.countries.is_empty() {
			country_list_state.select(Some(0));
		}
		let mut app = Self {
			catalog,
			indexes,
			placeholders,
			focus: Focus::Languages,
			mode: AppMode::Browsing,
			language_list_state,
			country_list_state,
			filter_query: String::new(),
			filter_results: Vec::new(),
			filter_list_state: ListState::default(),
			display: String::new(),
		};
		app.refresh();
		app
	}
	pub fn selected_language(&self) -> Option<&str> {
		self.language_list_state.selected().and_then(|i| self.indexes.languages.names().get(i)).map(String::as_str)
	}
	pub fn selected_country(&self) -> Option<&str> {
		self.country_list_state.selected().and_then(|i| self.indexes.countries.names().get(i)).map(String::as_str)
	}
	/// Re-run the resolve step for the current selections.
	pub fn refresh(&mut self) {
		self.display = resolve_and_display(
			&self.indexes,
			&self.catalog.translator,
			&self.placeholders,
			self.selected_language(),
			self.selected_country(),
		);
	}
	pub fn focused_names(&self) -> &[String] {
		match self.focus {
			Focus::Languages => self.indexes.languages.names(),
			Focus::Countries => self.indexes.countries.names(),
		}
	}
	fn focused_state(&mut self) -> &mut ListState {
		match self.focus {
			Focus::Languages => &mut self.language_list_state,
			Focus::Countries => &mut self.country_list_state,
		}
	}
	pub fn toggle_focus(&mut self) {
		self.focus = match self.focus {
			Focus::Languages => Focus::Countries,
			Focus::Countries => Focus::Languages,
		};
	}
	pub fn next(&mut self) {
		let len = self.focused_names().len();
		if len == 0 {
			return;
		}
		let state = self.focused_state();
		let i = match state.selected() {
			Some(i) => (i + 1) % len,
			None => 0,
		};
		state.select(Some(i));
		self.refresh();
	}
	pub fn previous(&mut self) {
		let len = self.focused_names().len();
		if len == 0 {
			return;
		}
		let state = self.focused_state();
		let i = match state.selected() {
			Some(i) => if i == 0 { len - 1 } else { i - 1 },
			None => 0,
		};
		state.select(Some(i));
		self.refresh();
	}
	pub fn clear_selection(&mut self) {
		self.focused_state().select(None);
		self.refresh();
	}
	pub fn random_country<R: Rng>(&mut self, rng: &mut R) {
		let len = self.indexes.countries.len();
		if len == 0 {
			return;
		}
		self.country_list_state.select(Some(rng.gen_range(0..len)));
		self.refresh();
	}
	pub fn open_filter(&mut self) {
		self.mode = AppMode::Filter;
		self.filter_query.clear();
		self.update_filter_results();
	}
	pub fn cancel_filter(&mut self) {
		self.mode = AppMode::Browsing;
	}
	pub fn update_filter_results(&mut self) {
		let query = self.filter_query.to_lowercase();
		self.filter_results = self
			.focused_names()
			.iter()
			.enumerate()
			.filter(|(_, name)| name.to_lowercase().contains(&query))
			.map(|(i, _)| i)
			.collect();
		if self.filter_results.is_empty() {
			self.filter_list_state.select(None);
		} else {
			self.filter_list_state.select(Some(0));
		}
	}
	pub fn next_filtered(&mut self) {
		if self.filter_results.is_empty() {
			return;
		}
		let i = match self.filter_list_state.selected() {
			Some(i) => (i + 1) % self.filter_results.len(),
			None => 0,
		};
		self.filter_list_state.select(Some(i));
	}
	pub fn previous_filtered(&mut self) {
		if self.filter_results.is_empty() {
			return;
		}
		let len = self.filter_results.len();
		let i = match self.filter_list_state.selected() {
			Some(i) => if i == 0 { len - 1 } else { i - 1 },
			None => 0,
		};
		self.filter_list_state.select(Some(i));
	}
	/// Select the highlighted match in the focused list and leave the popup.
	pub fn apply_filter(&mut self) {
		let picked = self.filter_list_state.selected().and_then(|i| self.filter_results.get(i)).copied();
		if let Some(index) = picked {
			self.focused_state().select(Some(index));
			self.refresh();
		}
		self.mode = AppMode::Browsing;
	}
	pub fn display_title(&self) -> String {
		match (self.selected_country(), self.selected_language()) {
			(Some(country), Some(language)) => format!("{} in {}", country, language),
			(Some(country), None) => format!("{} (pick a language)", country),
			(None, Some(language)) => format!("(pick a country) in {}", language),
			(None, None) => "Translation".to_string(),
		}
	}
}
