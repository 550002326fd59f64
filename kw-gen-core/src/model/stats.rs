use serde::{Deserialize, Serialize};

/// Minimum number of space-separated tokens for a long-tail keyword.
pub const LONG_TAIL_MIN_WORDS: usize = 3;

/// Statistics displayed next to a list of generated keywords.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeywordStats {
	/// Number of keywords.
	pub total: usize,
	/// Keywords made of three words or more.
	pub long_tail: usize,
	/// Mean keyword length in characters, rounded to the nearest integer.
	pub avg_length: usize,
}

impl KeywordStats {
	/// Computes the statistics of the keywords actually returned (not of the
	/// full candidate set).
	///
	/// An empty list yields all-zero statistics.
	pub fn compute<S: AsRef<str>>(keywords: &[S]) -> Self {
		let total = keywords.len();
		if total == 0 {
			return Self::default();
		}

		let long_tail = keywords.iter().filter(|k| is_long_tail(k.as_ref())).count();
		let chars: usize = keywords.iter().map(|k| k.as_ref().chars().count()).sum();
		// round half up: floor(chars / total + 1/2)
		let avg_length = (2 * chars + total) / (2 * total);

		Self { total, long_tail, avg_length }
	}
}

/// Returns `true` if `keyword` has at least `LONG_TAIL_MIN_WORDS` tokens
/// when split on single spaces.
pub fn is_long_tail(keyword: &str) -> bool {
	keyword.split(' ').count() >= LONG_TAIL_MIN_WORDS
}
