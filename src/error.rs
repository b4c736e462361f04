use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
	#[error("could not read data file `{path}`: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("malformed {table} table: {source}")]
	Json {
		table: &'static str,
		#[source]
		source: serde_json::Error,
	},
	#[error("invalid {kind} code `{code}`, expected {expected}")]
	InvalidCode {
		kind: &'static str,
		code: String,
		expected: &'static str,
	},
}

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("could not read config file `{path}`: {source}")]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("malformed config file `{path}`: {source}")]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_yaml::Error,
	},
	#[error("`default_language` is not a language code: `{0}`")]
	InvalidLanguage(String),
}
