//! File logger. The terminal belongs to the UI, so log records go to the
//! file named in the config and nowhere else.

use anyhow::{Context, Result};
use log::{Log, Metadata, Record};
use std::{
	fs::{File, OpenOptions},
	io::Write,
	path::Path,
	sync::Mutex,
};

const DEFAULT_FILTER: &str = "info";

pub struct FileLogger {
	filter: env_filter::Filter,
	file: Mutex<File>,
}

impl FileLogger {
	pub fn new(file: File, filters: &str) -> Self {
		let filter = env_filter::Builder::new().parse(filters).build();
		Self { filter, file: Mutex::new(file) }
	}
}

impl Log for FileLogger {
	fn enabled(&self, metadata: &Metadata) -> bool {
		self.filter.enabled(metadata)
	}

	fn log(&self, record: &Record) {
		if !self.filter.matches(record) {
			return;
		}
		if let Ok(mut file) = self.file.lock() {
			let _ = writeln!(
				file,
				"{} {:<5} {}: {}",
				chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
				record.level(),
				record.target(),
				record.args()
			);
		}
	}

	fn flush(&self) {
		if let Ok(mut file) = self.file.lock() {
			let _ = file.flush();
		}
	}
}

/// Install the file logger. Without a path logging stays off.
pub fn init(path: Option<&Path>, filters: Option<&str>) -> Result<()> {
	let Some(path) = path else {
		return Ok(());
	};
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("could not open log file {}", path.display()))?;
	let logger = FileLogger::new(file, filters.unwrap_or(DEFAULT_FILTER));
	let level = logger.filter.filter();
	log::set_boxed_logger(Box::new(logger)).context("logger already installed")?;
	log::set_max_level(level);
	Ok(())
}
