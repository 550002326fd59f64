use crate::error::KeywordError;

/// Keyword count used when the caller does not pick one.
pub const DEFAULT_COUNT: usize = 20;

/// Topic pre-filled by front ends on start-up.
pub const DEMO_TOPIC: &str = "digital marketing";

/// Description pre-filled by front ends on start-up.
pub const DEMO_DESCRIPTION: &str = "Learn effective strategies for online marketing and SEO optimization";

/// A validated generation request.
///
/// # Invariants
/// - `topic` is trimmed and non-empty
/// - `description` is trimmed (possibly empty)
/// - `count` is strictly positive
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
	topic: String,
	description: String,
	count: usize,
}

impl GenerationRequest {
	/// Trims and validates user input.
	///
	/// # Errors
	/// Returns `InvalidInput` if the topic is blank or `count` is zero.
	pub fn new(topic: &str, description: &str, count: usize) -> Result<Self, KeywordError> {
		let topic = topic.trim();
		if topic.is_empty() {
			return Err(KeywordError::InvalidInput("Please enter a topic".to_owned()));
		}
		if count == 0 {
			return Err(KeywordError::InvalidInput("count must be a positive integer".to_owned()));
		}

		Ok(Self {
			topic: topic.to_owned(),
			description: description.trim().to_owned(),
			count,
		})
	}

	pub fn topic(&self) -> &str {
		&self.topic
	}

	pub fn description(&self) -> &str {
		&self.description
	}

	pub fn count(&self) -> usize {
		self.count
	}
}

/// Coerces a count typed by the user into a positive integer.
///
/// # Errors
/// Returns `InvalidInput` for non-numeric, zero or negative values.
pub fn parse_count(input: &str) -> Result<usize, KeywordError> {
	let input = input.trim();
	let value: i64 = input
		.parse()
		.map_err(|_| KeywordError::InvalidInput(format!("count must be a whole number, got '{input}'")))?;

	if value <= 0 {
		return Err(KeywordError::InvalidInput(format!("count must be a positive integer, got {value}")));
	}

	usize::try_from(value).map_err(|_| KeywordError::InvalidInput(format!("count {value} is too large")))
}
