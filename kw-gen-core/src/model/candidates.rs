use indexmap::IndexSet;
use log::trace;

/// Description words must be strictly longer than this (in characters).
pub const MIN_WORD_LEN: usize = 3;

/// Maximum number of description words used for long-tail expansion.
pub const MAX_SAMPLE_WORDS: usize = 3;

/// Picks the description words used for long-tail expansion.
///
/// The description is split on single spaces (no stemming, no stop words),
/// words of `MIN_WORD_LEN` characters or less are dropped and only the
/// first `MAX_SAMPLE_WORDS` remaining words are kept.
pub fn sample_words(description: &str) -> Vec<&str> {
	description
		.split(' ')
		.filter(|word| word.chars().count() > MIN_WORD_LEN)
		.take(MAX_SAMPLE_WORDS)
		.collect()
}

/// Builds the deduplicated candidate set for a topic.
///
/// Phrases are inserted in this order:
/// 1. the topic itself
/// 2. for every base term `t`: `"{topic} {t}"`, `"{t} {topic}"`, `"{topic} for {t}"`
/// 3. for every sampled description word `w`: `"{topic} {w}"`, then
///    `"{topic} {t} {w}"` for every base term `t`
///
/// Exact duplicates collapse and keep their first position. Empty phrases
/// are never inserted.
pub fn generate_candidates(topic: &str, base_terms: &[String], description: &str) -> IndexSet<String> {
	let mut keywords = IndexSet::new();

	insert(&mut keywords, topic.to_owned());

	for term in base_terms {
		insert(&mut keywords, format!("{topic} {term}"));
		insert(&mut keywords, format!("{term} {topic}"));
		insert(&mut keywords, format!("{topic} for {term}"));
	}

	if !description.is_empty() {
		for word in sample_words(description) {
			insert(&mut keywords, format!("{topic} {word}"));
			for term in base_terms {
				insert(&mut keywords, format!("{topic} {term} {word}"));
			}
		}
	}

	trace!("Built {} candidates for '{topic}'", keywords.len());
	keywords
}

fn insert(keywords: &mut IndexSet<String>, phrase: String) {
	if !phrase.is_empty() {
		keywords.insert(phrase);
	}
}
