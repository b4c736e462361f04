//! ISO 3166-1 alpha-3 country codes, ISO 639 language codes, and the
//! code/display-name tables for both.

use crate::error::DataError;
use std::{collections::BTreeMap, fmt, str::FromStr};

/// Three-letter country code, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CountryCode(String);

/// Two- or three-letter language code, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LanguageCode(String);

impl CountryCode {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl LanguageCode {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

fn is_ascii_letters(s: &str, lengths: &[usize]) -> bool {
	lengths.contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphabetic())
}

impl FromStr for CountryCode {
	type Err = DataError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		if is_ascii_letters(s, &[3]) {
			Ok(Self(s.to_ascii_uppercase()))
		} else {
			Err(DataError::InvalidCode {
				kind: "country",
				code: s.to_string(),
				expected: "three ASCII letters (ISO 3166-1 alpha-3)",
			})
		}
	}
}

impl FromStr for LanguageCode {
	type Err = DataError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		if is_ascii_letters(s, &[2, 3]) {
			Ok(Self(s.to_ascii_lowercase()))
		} else {
			Err(DataError::InvalidCode {
				kind: "language",
				code: s.to_string(),
				expected: "two or three ASCII letters (ISO 639); region or script tags like zh-Hans are not supported",
			})
		}
	}
}

impl fmt::Display for CountryCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl fmt::Display for LanguageCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Read-only code -> display name lookup.
///
/// Unknown codes are a lookup miss, never an error.
#[derive(Debug, Clone)]
pub struct CodeTable<C> {
	names: BTreeMap<C, String>,
}

pub type CountryNames = CodeTable<CountryCode>;
pub type LanguageNames = CodeTable<LanguageCode>;

impl<C: Ord> CodeTable<C> {
	pub fn new(names: BTreeMap<C, String>) -> Self {
		Self { names }
	}
	pub fn name(&self, code: &C) -> Option<&str> {
		self.names.get(code).map(String::as_str)
	}
	/// Exact-match reverse lookup. The first code in code order wins when
	/// two codes share a name.
	pub fn code_for(&self, name: &str) -> Option<&C> {
		self.names.iter().find(|(_, n)| n.as_str() == name).map(|(c, _)| c)
	}
	pub fn iter(&self) -> impl Iterator<Item = (&C, &str)> {
		self.names.iter().map(|(c, n)| (c, n.as_str()))
	}
	pub fn len(&self) -> usize {
		self.names.len()
	}
	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}
}

/// Parse every key of a raw JSON table into a code.
pub fn parse_table<C>(raw: BTreeMap<String, String>) -> Result<CodeTable<C>, DataError>
where
	C: Ord + FromStr<Err = DataError>,
{
	let names = raw
		.into_iter()
		.map(|(code, name)| Ok((code.parse::<C>()?, name)))
		.collect::<Result<BTreeMap<_, _>, DataError>>()?;
	Ok(CodeTable::new(names))
}
