use std::collections::HashSet;

use kw_gen_core::error::KeywordError;
use kw_gen_core::export::{ExportFormat, copy_all_text};
use kw_gen_core::model::generator::KeywordGenerator;
use kw_gen_core::model::request::{GenerationRequest, parse_count};
use kw_gen_core::model::stats::{KeywordStats, is_long_tail};
use kw_gen_core::model::template_table::GENERIC_TERMS;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rng(seed: u64) -> StdRng {
	StdRng::seed_from_u64(seed)
}

fn assert_unique(keywords: &[String]) {
	let unique: HashSet<&String> = keywords.iter().collect();
	assert_eq!(unique.len(), keywords.len(), "duplicates in {keywords:?}");
	assert!(keywords.iter().all(|k| !k.is_empty()));
}

#[test]
fn digital_marketing_without_description_returns_every_candidate() {
	let generator = KeywordGenerator::default();
	let keywords = generator.generate("digital marketing", "", 50, &mut rng(1)).unwrap();

	assert_eq!(keywords.len(), 31);
	assert_unique(&keywords);
	assert_eq!(keywords[0], "digital marketing");
	assert!(keywords.contains(&"digital marketing SEO".to_owned()));
	assert!(keywords.contains(&"PPC digital marketing".to_owned()));
	assert!(keywords.contains(&"digital marketing for brand awareness".to_owned()));
}

#[test]
fn unknown_topic_uses_generic_terms_and_samples_five() {
	let generator = KeywordGenerator::default();
	let request = GenerationRequest::new("xyz123", "", 5).unwrap();
	let candidates = generator.candidates(&request);
	assert_eq!(candidates.len(), 31);
	for term in GENERIC_TERMS {
		assert!(candidates.contains(&format!("xyz123 {term}")));
	}

	for seed in 0..20 {
		let keywords = generator.generate("xyz123", "", 5, &mut rng(seed)).unwrap();
		assert_eq!(keywords.len(), 5);
		assert_unique(&keywords);
		assert!(keywords.iter().all(|k| candidates.contains(k)));
	}
}

#[test]
fn technology_description_adds_two_sample_words() {
	let generator = KeywordGenerator::default();
	let request = GenerationRequest::new("technology", "a bb ccc dddd eeeee", 100).unwrap();
	let candidates = generator.candidates(&request);

	assert_eq!(candidates.len(), 31 + 2 + 2 * 10);
	assert!(candidates.contains("technology dddd"));
	assert!(candidates.contains("technology eeeee"));
	assert!(candidates.contains("technology AI dddd"));
	assert!(candidates.contains("technology tech trends eeeee"));
	assert!(!candidates.contains("technology ccc"));

	let keywords = generator.generate("technology", "a bb ccc dddd eeeee", 100, &mut rng(0)).unwrap();
	assert_eq!(keywords.len(), 53);
}

#[test]
fn non_positive_count_is_rejected() {
	let generator = KeywordGenerator::default();
	assert!(matches!(
		generator.generate("technology", "", 0, &mut rng(0)),
		Err(KeywordError::InvalidInput(_))
	));
	assert!(matches!(parse_count("-4"), Err(KeywordError::InvalidInput(_))));
	assert!(matches!(parse_count("0"), Err(KeywordError::InvalidInput(_))));
}

#[test]
fn topic_is_present_when_nothing_is_dropped() {
	let generator = KeywordGenerator::default();
	for topic in ["fitness", "Healthy Recipes for kids", "quantum knitting"] {
		let keywords = generator.generate(topic, "some description here", 1000, &mut rng(5)).unwrap();
		assert!(keywords.contains(&topic.to_owned()), "{topic} missing");
	}
}

#[test]
fn single_keyword_request_returns_one_candidate() {
	let generator = KeywordGenerator::default();
	let request = GenerationRequest::new("fitness", "", 1).unwrap();
	let candidates = generator.candidates(&request);
	let result = generator.generate_with_stats(&request, &mut rng(8));

	assert_eq!(result.keywords.len(), 1);
	assert!(candidates.contains(&result.keywords[0]));
}

#[test]
fn length_is_min_of_count_and_candidates() {
	let generator = KeywordGenerator::default();
	for count in [1, 10, 30, 31, 32, 60, 200] {
		let request = GenerationRequest::new("travel destinations", "cheap flights to europe", count).unwrap();
		let candidates = generator.candidates(&request).len();
		let result = generator.generate_with_stats(&request, &mut rng(count as u64));

		assert_eq!(result.keywords.len(), count.min(candidates));
		assert_eq!(result.candidates, candidates);
		assert_unique(&result.keywords);
	}
}

#[test]
fn description_yields_long_tail_candidates() {
	let generator = KeywordGenerator::default();
	let request = GenerationRequest::new("seo", "improve ranking", 5).unwrap();
	let candidates = generator.candidates(&request);

	assert!(candidates.contains("seo best improve"));
	assert!(candidates.iter().filter(|k| is_long_tail(k)).count() >= 20);
}

#[test]
fn untruncated_output_is_reproducible() {
	let generator = KeywordGenerator::default();
	let a = generator.generate("fitness", "daily workout plans", 500, &mut rng(1)).unwrap();
	let b = generator.generate("fitness", "daily workout plans", 500, &mut rng(99)).unwrap();
	assert_eq!(a, b);
}

#[test]
fn truncated_output_is_reproducible_with_same_seed() {
	let generator = KeywordGenerator::default();
	let a = generator.generate("fitness", "daily workout plans", 7, &mut rng(3)).unwrap();
	let b = generator.generate("fitness", "daily workout plans", 7, &mut rng(3)).unwrap();
	assert_eq!(a, b);
}

#[test]
fn stats_are_consistent_with_keywords() {
	let generator = KeywordGenerator::default();
	let request = GenerationRequest::new("digital marketing", "", 50).unwrap();
	let result = generator.generate_with_stats(&request, &mut rng(0));

	let stats = result.stats;
	assert!(stats.long_tail <= stats.total);
	assert_eq!(stats.total, 31);
	// every combined phrase has at least three words, only the topic has two
	assert_eq!(stats.long_tail, 30);

	let chars: usize = result.keywords.iter().map(|k| k.chars().count()).sum();
	let mean = chars as f64 / result.keywords.len() as f64;
	assert_eq!(stats.avg_length, mean.round() as usize);
	assert_eq!(stats, KeywordStats::compute(&result.keywords));
}

#[test]
fn copy_and_export_need_keywords() {
	let none: Vec<String> = Vec::new();
	assert!(matches!(copy_all_text(&none), Err(KeywordError::NothingToActOn(_))));
	assert!(matches!(ExportFormat::Csv.render(&none), Err(KeywordError::NothingToActOn(_))));

	let generator = KeywordGenerator::default();
	let keywords = generator.generate("fitness", "", 3, &mut rng(0)).unwrap();
	let csv = ExportFormat::Csv.render(&keywords).unwrap();
	assert_eq!(csv.lines().count(), 4);
	assert!(csv.starts_with("Keyword\n"));
}
