use crate::codes::{CountryCode, LanguageCode};
use std::collections::{BTreeMap, BTreeSet};

/// Country -> language -> translated country name.
#[derive(Debug, Clone, Default)]
pub struct Translator {
	table: BTreeMap<CountryCode, BTreeMap<LanguageCode, String>>,
}

impl Translator {
	pub fn new(table: BTreeMap<CountryCode, BTreeMap<LanguageCode, String>>) -> Self {
		Self { table }
	}

	fn entries(&self) -> impl Iterator<Item = (&CountryCode, &LanguageCode, &str)> {
		self.table.iter().flat_map(|(country, names)| {
			names
				.iter()
				.filter(|(_, name)| !name.is_empty())
				.map(move |(language, name)| (country, language, name.as_str()))
		})
	}

	/// Languages with at least one translation entry.
	pub fn language_codes(&self) -> BTreeSet<LanguageCode> {
		self.entries().map(|(_, language, _)| language.clone()).collect()
	}

	/// Countries with at least one translation entry.
	pub fn country_codes(&self) -> BTreeSet<CountryCode> {
		self.entries().map(|(country, _, _)| country.clone()).collect()
	}

	/// The stored name for the pair, verbatim. An empty stored name counts
	/// as no entry.
	pub fn translate(&self, country: &CountryCode, language: &LanguageCode) -> Option<&str> {
		self.table
			.get(country)?
			.get(language)
			.map(String::as_str)
			.filter(|name| !name.is_empty())
	}

	pub fn translations_for<'a>(&'a self, country: &CountryCode) -> impl Iterator<Item = (&'a LanguageCode, &'a str)> + 'a {
		self.table
			.get(country)
			.into_iter()
			.flat_map(|names| names.iter())
			.filter(|(_, name)| !name.is_empty())
			.map(|(language, name)| (language, name.as_str()))
	}

	pub fn entry_count(&self) -> usize {
		self.entries().count()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn cc(s: &str) -> CountryCode {
		s.parse().unwrap()
	}
	fn lc(s: &str) -> LanguageCode {
		s.parse().unwrap()
	}

	fn translator() -> Translator {
		let mut table = BTreeMap::new();
		table.insert(
			cc("can"),
			[(lc("fr"), "Canada".to_string()), (lc("de"), "Kanada".to_string())].into_iter().collect(),
		);
		table.insert(
			cc("jpn"),
			[(lc("ja"), "日本".to_string()), (lc("he"), String::new())].into_iter().collect(),
		);
		table.insert(cc("nor"), BTreeMap::new());
		Translator::new(table)
	}

	#[test]
	fn translate_returns_stored_string() {
		let t = translator();
		assert_eq!(t.translate(&cc("can"), &lc("fr")), Some("Canada"));
		assert_eq!(t.translate(&cc("CAN"), &lc("DE")), Some("Kanada"));
		assert_eq!(t.translate(&cc("jpn"), &lc("ja")), Some("日本"));
	}

	#[test]
	fn unknown_pairs_are_absent() {
		let t = translator();
		assert_eq!(t.translate(&cc("can"), &lc("ja")), None);
		assert_eq!(t.translate(&cc("usa"), &lc("fr")), None);
		assert_eq!(t.translate(&cc("jpn"), &lc("he")), None);
	}

	#[test]
	fn code_sets_only_count_real_entries() {
		let t = translator();
		let countries: Vec<_> = t.country_codes().into_iter().map(|c| c.to_string()).collect();
		assert_eq!(countries, ["CAN", "JPN"]);
		let languages: Vec<_> = t.language_codes().into_iter().map(|l| l.to_string()).collect();
		assert_eq!(languages, ["de", "fr", "ja"]);
		assert_eq!(t.entry_count(), 3);
	}

	#[test]
	fn translations_for_lists_one_country() {
		let t = translator();
		let names: Vec<_> = t.translations_for(&cc("can")).map(|(l, n)| (l.to_string(), n)).collect();
		assert_eq!(names, [("de".to_string(), "Kanada"), ("fr".to_string(), "Canada")]);
		assert_eq!(t.translations_for(&cc("usa")).count(), 0);
	}
}
