use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::KeywordError;
use crate::io;

/// How long front ends keep a notification on screen.
pub const NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(3);

/// CSV header line.
pub const CSV_HEADER: &str = "Keyword";

/// File format used to export keywords.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
	Csv,
	Txt,
}

impl ExportFormat {
	/// Download file name.
	pub fn filename(&self) -> &'static str {
		match self {
			ExportFormat::Csv => "keywords.csv",
			ExportFormat::Txt => "keywords.txt",
		}
	}

	pub fn mime_type(&self) -> &'static str {
		match self {
			ExportFormat::Csv => "text/csv",
			ExportFormat::Txt => "text/plain",
		}
	}

	/// Renders the file contents.
	///
	/// - CSV: a `Keyword` header line followed by one keyword per line
	/// - TXT: one keyword per line
	///
	/// Keywords are written as-is (no CSV quoting).
	///
	/// # Errors
	/// Returns `NothingToActOn` if `keywords` is empty.
	pub fn render<S: AsRef<str>>(&self, keywords: &[S]) -> Result<String, KeywordError> {
		if keywords.is_empty() {
			return Err(KeywordError::NothingToActOn("No keywords to export!".to_owned()));
		}

		let body = join_lines(keywords);
		Ok(match self {
			ExportFormat::Csv => format!("{CSV_HEADER}\n{body}"),
			ExportFormat::Txt => body,
		})
	}
}

impl fmt::Display for ExportFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ExportFormat::Csv => f.write_str("CSV"),
			ExportFormat::Txt => f.write_str("TXT"),
		}
	}
}

impl FromStr for ExportFormat {
	type Err = KeywordError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_lowercase().as_str() {
			"csv" => Ok(ExportFormat::Csv),
			"txt" => Ok(ExportFormat::Txt),
			other => Err(KeywordError::InvalidInput(format!("Export format must be 'csv' or 'txt', got '{other}'"))),
		}
	}
}

/// Text put on the clipboard by "copy all".
///
/// # Errors
/// Returns `NothingToActOn` if `keywords` is empty.
pub fn copy_all_text<S: AsRef<str>>(keywords: &[S]) -> Result<String, KeywordError> {
	if keywords.is_empty() {
		return Err(KeywordError::NothingToActOn("No keywords to copy!".to_owned()));
	}
	Ok(join_lines(keywords))
}

/// Writes the export file in `folder` (`"."` is the working directory) and
/// returns its path.
pub fn export_to_dir<P: AsRef<Path>, S: AsRef<str>>(
	folder: P,
	format: ExportFormat,
	keywords: &[S],
) -> Result<PathBuf, KeywordError> {
	let contents = format.render(keywords)?;
	let path = io::write_in_folder(folder, format.filename(), &contents)?;
	info!("Exported {} keywords to {}", keywords.len(), path.display());
	Ok(path)
}

pub fn copied_one_message() -> String {
	"Keyword copied to clipboard!".to_owned()
}

pub fn copied_all_message(count: usize) -> String {
	format!("Copied {count} keywords to clipboard!")
}

pub fn exported_message(count: usize, format: ExportFormat) -> String {
	format!("Exported {count} keywords as {format}!")
}

fn join_lines<S: AsRef<str>>(keywords: &[S]) -> String {
	keywords.iter().map(|k| k.as_ref()).collect::<Vec<&str>>().join("\n")
}
