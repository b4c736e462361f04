use crate::codes::LanguageCode;
use crate::error::ConfigError;
use crate::resolve::Placeholders;
use serde::{Deserialize, Serialize};
use std::{fs, io, path::{Path, PathBuf}};

pub const LOG_ENV: &str = "COUNTRYNAME_LOG";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
	pub data_dir: Option<PathBuf>,
	pub default_language: Option<String>,
	pub placeholders: Placeholders,
	pub log_file: Option<PathBuf>,
	pub log_filter: Option<String>,
}

impl Config {
	pub fn default_language_code(&self) -> Result<Option<LanguageCode>, ConfigError> {
		self.default_language
			.as_deref()
			.map(|code| code.parse().map_err(|_| ConfigError::InvalidLanguage(code.to_string())))
			.transpose()
	}

	/// `COUNTRYNAME_LOG` wins over the file's `log_filter`.
	pub fn effective_log_filter(&self) -> Option<String> {
		std::env::var(LOG_ENV).ok().filter(|s| !s.is_empty()).or_else(|| self.log_filter.clone())
	}
}

pub fn default_path() -> Option<PathBuf> {
	let home = std::env::var_os("HOME")?;
	Some(PathBuf::from(home).join(".config").join("countryname").join("config.yaml"))
}

pub fn parse(path: &Path, text: &str) -> Result<Config, ConfigError> {
	if text.trim().is_empty() {
		return Ok(Config::default());
	}
	serde_yaml::from_str(text).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
}

/// An explicit path must exist. A missing file at the default location
/// just means defaults.
pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
	let (path, required) = match explicit {
		Some(path) => (path.to_path_buf(), true),
		None => match default_path() {
			Some(path) => (path, false),
			None => return Ok(Config::default()),
		},
	};
	match fs::read_to_string(&path) {
		Ok(text) => parse(&path, &text),
		Err(e) if e.kind() == io::ErrorKind::NotFound && !required => Ok(Config::default()),
		Err(source) => Err(ConfigError::Read { path, source }),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_file_is_defaults() {
		let config = parse(Path::new("c.yaml"), "\n").unwrap();
		assert_eq!(config, Config::default());
		assert_eq!(config.placeholders.no_translation, "(no translation)");
	}

	#[test]
	fn partial_placeholders_keep_other_default() {
		let config = parse(Path::new("c.yaml"), "placeholders:\n  no_translation: \"n/a\"\n").unwrap();
		assert_eq!(config.placeholders.no_translation, "n/a");
		assert_eq!(config.placeholders.none_selected, "-");
	}

	#[test]
	fn default_language_is_validated() {
		let config = parse(Path::new("c.yaml"), "default_language: FR\n").unwrap();
		assert_eq!(config.default_language_code().unwrap().unwrap().as_str(), "fr");
		let config = parse(Path::new("c.yaml"), "default_language: french\n").unwrap();
		assert!(matches!(config.default_language_code(), Err(ConfigError::InvalidLanguage(_))));
	}

	#[test]
	fn malformed_yaml_is_an_error() {
		let err = parse(Path::new("c.yaml"), "placeholders: [1, 2\n").unwrap_err();
		assert!(matches!(err, ConfigError::Parse { .. }));
	}
}
