use indexmap::IndexSet;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::KeywordError;
use crate::model::candidates::generate_candidates;
use crate::model::request::GenerationRequest;
use crate::model::sampler::sample_to_count;
use crate::model::stats::KeywordStats;
use crate::model::template_table::TemplateTable;

/// Keywords returned to a front end, with their statistics.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GeneratedKeywords {
	/// Selected keywords, no duplicates.
	pub keywords: Vec<String>,
	/// Statistics of `keywords`.
	pub stats: KeywordStats,
	/// Size of the candidate set before sampling.
	pub candidates: usize,
}

/// High-level keyword generator.
///
/// # Responsibilities
/// - Own the (read-only) template table
/// - Chain resolver, candidate builder and sampler for a request
///
/// The generator holds no other state: it can be shared freely and two
/// calls with the same input and the same rng state give the same output.
#[derive(Clone, Debug, Default)]
pub struct KeywordGenerator {
	table: TemplateTable,
}

impl KeywordGenerator {
	/// Creates a generator using the given template table.
	pub fn new(table: TemplateTable) -> Self {
		Self { table }
	}

	/// Returns the template table used for lookups.
	pub fn table(&self) -> &TemplateTable {
		&self.table
	}

	/// Builds the full candidate set of a request (before sampling).
	pub fn candidates(&self, request: &GenerationRequest) -> IndexSet<String> {
		let base_terms = self.table.resolve_base_terms(request.topic());
		generate_candidates(request.topic(), &base_terms, request.description())
	}

	/// Generates keywords for a validated request.
	///
	/// # Behavior
	/// - Resolves base terms and builds the candidate set
	/// - Keeps every candidate (insertion order) if there are at most
	///   `count`, otherwise a uniform random subset of `count`
	/// - Computes statistics on the selected keywords
	pub fn generate_with_stats<R: Rng + ?Sized>(&self, request: &GenerationRequest, rng: &mut R) -> GeneratedKeywords {
		let candidates = self.candidates(request);
		let candidate_count = candidates.len();
		let keywords = sample_to_count(candidates, request.count(), rng);
		let stats = KeywordStats::compute(&keywords);

		debug!(
			"Generated {} keywords ({} candidates) for '{}'",
			keywords.len(),
			candidate_count,
			request.topic()
		);

		GeneratedKeywords { keywords, stats, candidates: candidate_count }
	}

	/// Generates keywords from raw user input.
	///
	/// # Errors
	/// Returns `InvalidInput` if the topic is blank or `count` is zero.
	pub fn generate<R: Rng + ?Sized>(
		&self,
		topic: &str,
		description: &str,
		count: usize,
		rng: &mut R,
	) -> Result<Vec<String>, KeywordError> {
		let request = GenerationRequest::new(topic, description, count)?;
		Ok(self.generate_with_stats(&request, rng).keywords)
	}
}
