use thiserror::Error;

/// Top-level error type for keyword generation and its adapters.
#[derive(Debug, Error)]
pub enum KeywordError {
	/// Request rejected before generation (blank topic, non-positive count...).
	#[error("invalid input: {0}")]
	InvalidInput(String),

	/// An action needing generated keywords was invoked without any.
	#[error("{0}")]
	NothingToActOn(String),

	/// Template table is empty or malformed.
	#[error("invalid template table: {0}")]
	InvalidTemplate(String),

	/// I/O error.
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),

	/// Template file could not be parsed.
	#[error("template parse error: {0}")]
	Toml(#[from] toml::de::Error),
}

impl KeywordError {
	/// Returns `true` when the error comes from the caller's input rather
	/// than from the environment.
	pub fn is_user_error(&self) -> bool {
		matches!(self, KeywordError::InvalidInput(_) | KeywordError::NothingToActOn(_))
	}
}
