//! Display-name indexes and the selection -> display string step.

use crate::codes::{CodeTable, CountryCode, LanguageCode};
use crate::models::Catalog;
use crate::translator::Translator;
use serde::{Deserialize, Serialize};
use std::{
	collections::{BTreeMap, HashMap},
	fmt,
	str::FromStr,
};

/// Reverse display-name -> code index over the codes the translator knows.
#[derive(Debug, Clone)]
pub struct NameIndex<C> {
	by_name: HashMap<String, C>,
	by_code: BTreeMap<C, String>,
	names: Vec<String>,
}

impl<C: Ord + Clone + fmt::Display> NameIndex<C> {
	/// Codes without a display name are left out. So is a code whose name
	/// is already taken by an earlier code.
	pub fn build(codes: impl IntoIterator<Item = C>, table: &CodeTable<C>) -> Self {
		let mut by_name = HashMap::new();
		let mut by_code = BTreeMap::new();
		for code in codes {
			let Some(name) = table.name(&code) else {
				log::debug!("no display name for {}, dropped", code);
				continue;
			};
			if by_name.contains_key(name) {
				log::debug!("display name {:?} already used, dropped {}", name, code);
				continue;
			}
			by_name.insert(name.to_string(), code.clone());
			by_code.insert(code, name.to_string());
		}
		let mut names: Vec<String> = by_name.keys().cloned().collect();
		names.sort();
		Self { by_name, by_code, names }
	}

	pub fn code(&self, name: &str) -> Option<&C> {
		self.by_name.get(name)
	}

	pub fn name_of(&self, code: &C) -> Option<&str> {
		self.by_code.get(code).map(String::as_str)
	}

	/// Names in plain string order, as shown in the selection list.
	pub fn names(&self) -> &[String] {
		&self.names
	}

	pub fn position(&self, name: &str) -> Option<usize> {
		self.names.iter().position(|n| n == name)
	}

	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}
}

impl<C> NameIndex<C>
where
	C: Ord + Clone + fmt::Display + FromStr,
{
	/// Accept either a code or a display name and return the display name.
	/// A known code wins over a display name spelled the same way.
	/// Arguments that match neither come back unchanged.
	pub fn display_name<'a>(&'a self, arg: &'a str) -> &'a str {
		arg.parse::<C>().ok().and_then(|code| self.name_of(&code)).unwrap_or(arg)
	}
}

#[derive(Debug, Clone)]
pub struct Indexes {
	pub languages: NameIndex<LanguageCode>,
	pub countries: NameIndex<CountryCode>,
}

impl Indexes {
	pub fn build(catalog: &Catalog) -> Self {
		let translator = &catalog.translator;
		let languages = NameIndex::build(translator.language_codes(), &catalog.languages);
		let countries = NameIndex::build(translator.country_codes(), &catalog.countries);
		log::info!("{} selectable languages, {} selectable countries", languages.len(), countries.len());
		Self { languages, countries }
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placeholders {
	pub none_selected: String,
	pub no_translation: String,
}

impl Default for Placeholders {
	fn default() -> Self {
		Self {
			none_selected: "-".to_string(),
			no_translation: "(no translation)".to_string(),
		}
	}
}

/// Turn the current selections into the string to display.
pub fn resolve_and_display(
	indexes: &Indexes,
	translator: &Translator,
	placeholders: &Placeholders,
	language: Option<&str>,
	country: Option<&str>,
) -> String {
	let (Some(language), Some(country)) = (language, country) else {
		return placeholders.none_selected.clone();
	};
	let codes = indexes.languages.code(language).zip(indexes.countries.code(country));
	match codes.and_then(|(l, c)| translator.translate(c, l)) {
		Some(name) => name.to_string(),
		None => {
			log::debug!("no translation for {:?} in {:?}", country, language);
			placeholders.no_translation.clone()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn catalog() -> Catalog {
		Catalog::from_json(
			r#"{"CAN": "Canada", "FRA": "France", "USA": "United States"}"#,
			r#"{"fr": "French", "de": "German", "en": "English", "ja": "Japanese"}"#,
			r#"{
				"can": {"fr": "Canada", "de": "Kanada"},
				"fra": {"fr": "France", "tok": "ma Kanse"},
				"xkx": {"en": "Kosovo"}
			}"#,
		)
		.unwrap()
	}

	#[test]
	fn indexes_hold_only_named_translator_codes() {
		let catalog = catalog();
		let indexes = Indexes::build(&catalog);
		assert_eq!(indexes.countries.names(), ["Canada", "France"]);
		assert_eq!(indexes.languages.names(), ["English", "French", "German"]);
		assert!(indexes.languages.code("Japanese").is_none());
	}

	#[test]
	fn duplicate_names_keep_the_first_code() {
		let table = crate::codes::parse_table::<CountryCode>(
			[("AAA", "Same"), ("BBB", "Same")].iter().map(|(c, n)| (c.to_string(), n.to_string())).collect(),
		)
		.unwrap();
		let codes: Vec<CountryCode> = vec!["aaa".parse().unwrap(), "bbb".parse().unwrap()];
		let index = NameIndex::build(codes, &table);
		assert_eq!(index.len(), 1);
		assert_eq!(index.code("Same").map(CountryCode::as_str), Some("AAA"));
	}

	#[test]
	fn names_sort_by_plain_string_order() {
		let table = crate::codes::parse_table::<CountryCode>(
			[("AAA", "beta"), ("BBB", "Alpha"), ("CCC", "Gamma")]
				.iter()
				.map(|(c, n)| (c.to_string(), n.to_string()))
				.collect(),
		)
		.unwrap();
		let codes = table.iter().map(|(c, _)| c.clone()).collect::<Vec<_>>();
		let index = NameIndex::build(codes, &table);
		assert_eq!(index.names(), ["Alpha", "Gamma", "beta"]);
		assert_eq!(index.position("Gamma"), Some(1));
	}

	#[test]
	fn placeholders_cover_missing_selections_and_data() {
		let catalog = catalog();
		let indexes = Indexes::build(&catalog);
		let p = Placeholders::default();
		let resolve = |l, c| resolve_and_display(&indexes, &catalog.translator, &p, l, c);
		assert_eq!(resolve(None, None), "-");
		assert_eq!(resolve(Some("French"), None), "-");
		assert_eq!(resolve(None, Some("Canada")), "-");
		assert_eq!(resolve(Some("French"), Some("Canada")), "Canada");
		assert_eq!(resolve(Some("German"), Some("Canada")), "Kanada");
		assert_eq!(resolve(Some("German"), Some("France")), "(no translation)");
		assert_eq!(resolve(Some("Klingon"), Some("France")), "(no translation)");
	}

	#[test]
	fn display_name_accepts_codes() {
		let catalog = catalog();
		let indexes = Indexes::build(&catalog);
		assert_eq!(indexes.countries.display_name("can"), "Canada");
		assert_eq!(indexes.countries.display_name("Canada"), "Canada");
		assert_eq!(indexes.languages.display_name("DE"), "German");
		assert_eq!(indexes.languages.display_name("ja"), "ja");
		assert_eq!(indexes.countries.display_name("Atlantis"), "Atlantis");
	}

	#[test]
	fn known_code_wins_over_same_spelled_name() {
		let catalog = Catalog::from_json(
			r#"{"ABC": "Abc", "XYZ": "ABC"}"#,
			r#"{"fr": "French"}"#,
			r#"{"abc": {"fr": "Abécé"}, "xyz": {"fr": "Ixyz"}}"#,
		)
		.unwrap();
		let indexes = Indexes::build(&catalog);
		assert_eq!(indexes.countries.display_name("ABC"), "Abc");
		assert_eq!(indexes.countries.display_name("xyz"), "ABC");
		let p = Placeholders::default();
		let country = indexes.countries.display_name("abc");
		assert_eq!(resolve_and_display(&indexes, &catalog.translator, &p, Some("French"), Some(country)), "Abécé");
	}
}
