use crate::codes::{parse_table, CountryCode, CountryNames, LanguageCode, LanguageNames};
use crate::error::DataError;
use crate::translator::Translator;
use serde::de::DeserializeOwned;
use std::{collections::BTreeMap, fs, path::Path};

const COUNTRIES_JSON: &str = include_str!("../data/countries.json");
const LANGUAGES_JSON: &str = include_str!("../data/languages.json");
const TRANSLATIONS_JSON: &str = include_str!("../data/translations.json");

type RawTranslations = BTreeMap<String, BTreeMap<String, String>>;

/// Everything loaded from the static data, immutable after startup.
#[derive(Debug, Clone)]
pub struct Catalog {
	pub countries: CountryNames,
	pub languages: LanguageNames,
	pub translator: Translator,
}

impl Catalog {
	pub fn from_json(countries: &str, languages: &str, translations: &str) -> Result<Self, DataError> {
		let countries = parse_table::<CountryCode>(parse_json("country", countries)?)?;
		let languages = parse_table::<LanguageCode>(parse_json("language", languages)?)?;
		let translator = build_translator(parse_json("translation", translations)?)?;
		Ok(Self { countries, languages, translator })
	}

	/// The data compiled into the binary.
	pub fn bundled() -> Result<Self, DataError> {
		Self::from_json(COUNTRIES_JSON, LANGUAGES_JSON, TRANSLATIONS_JSON)
	}
}

fn parse_json<T: DeserializeOwned>(table: &'static str, text: &str) -> Result<T, DataError> {
	serde_json::from_str(text).map_err(|source| DataError::Json { table, source })
}

fn build_translator(raw: RawTranslations) -> Result<Translator, DataError> {
	let mut table = BTreeMap::new();
	for (country, names) in raw {
		let country: CountryCode = country.parse()?;
		let names = names
			.into_iter()
			.map(|(language, name)| Ok((language.parse::<LanguageCode>()?, name)))
			.collect::<Result<BTreeMap<_, _>, DataError>>()?;
		table.entry(country).or_insert_with(BTreeMap::new).extend(names);
	}
	Ok(Translator::new(table))
}

fn read_override(dir: &Path, file: &str, bundled: &'static str) -> Result<String, DataError> {
	let path = dir.join(file);
	if !path.exists() {
		return Ok(bundled.to_string());
	}
	log::info!("using {} from {}", file, dir.display());
	fs::read_to_string(&path).map_err(|source| DataError::Io { path, source })
}

/// Load the catalog, letting files in `data_dir` replace the bundled ones.
pub fn load_catalog(data_dir: Option<&Path>) -> Result<Catalog, DataError> {
	let catalog = match data_dir {
		Some(dir) => {
			let countries = read_override(dir, "countries.json", COUNTRIES_JSON)?;
			let languages = read_override(dir, "languages.json", LANGUAGES_JSON)?;
			let translations = read_override(dir, "translations.json", TRANSLATIONS_JSON)?;
			Catalog::from_json(&countries, &languages, &translations)?
		}
		None => Catalog::bundled()?,
	};
	log::info!(
		"loaded {} country names, {} language names, {} translations",
		catalog.countries.len(),
		catalog.languages.len(),
		catalog.translator.entry_count()
	);
	Ok(catalog)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bundled_data_loads() {
		let catalog = Catalog::bundled().unwrap();
		let can: CountryCode = "can".parse().unwrap();
		let fr: LanguageCode = "fr".parse().unwrap();
		assert_eq!(catalog.countries.name(&can), Some("Canada"));
		assert_eq!(catalog.languages.name(&fr), Some("French"));
		assert_eq!(catalog.translator.translate(&can, &fr), Some("Canada"));
	}

	#[test]
	fn translation_keys_may_use_any_case() {
		let catalog = Catalog::from_json(
			r#"{"CAN": "Canada"}"#,
			r#"{"fr": "French"}"#,
			r#"{"can": {"FR": "Canada"}}"#,
		)
		.unwrap();
		let can: CountryCode = "CAN".parse().unwrap();
		let fr: LanguageCode = "fr".parse().unwrap();
		assert_eq!(catalog.translator.translate(&can, &fr), Some("Canada"));
	}

	#[test]
	fn malformed_json_names_the_table() {
		let err = Catalog::from_json("{}", "[1, 2]", "{}").unwrap_err();
		assert!(matches!(err, DataError::Json { table: "language", .. }));
	}

	#[test]
	fn invalid_codes_are_startup_errors() {
		let err = Catalog::from_json("{}", "{}", r#"{"canada": {"fr": "Canada"}}"#).unwrap_err();
		assert!(matches!(err, DataError::InvalidCode { kind: "country", .. }));
	}
}
