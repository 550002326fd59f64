use std::path::Path;

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;

use crate::error::KeywordError;
use crate::io;

/// Modifiers used when no category label is found in the topic.
pub const GENERIC_TERMS: [&str; 10] = [
	"best",
	"top",
	"guide",
	"tips",
	"review",
	"how to",
	"what is",
	"benefits of",
	"vs",
	"comparison",
];

/// Built-in categories, in lookup order.
const DEFAULT_CATEGORIES: [(&str, [&str; 10]); 5] = [
	(
		"digital marketing",
		[
			"SEO",
			"PPC",
			"social media",
			"content marketing",
			"email marketing",
			"marketing strategy",
			"digital advertising",
			"online marketing",
			"marketing automation",
			"brand awareness",
		],
	),
	(
		"healthy recipes",
		[
			"low calorie",
			"vegetarian",
			"gluten free",
			"quick meals",
			"meal prep",
			"keto diet",
			"vegan recipes",
			"healthy snacks",
			"protein rich",
			"family friendly",
		],
	),
	(
		"travel destinations",
		[
			"budget travel",
			"adventure travel",
			"luxury vacation",
			"beach destinations",
			"cultural tours",
			"family travel",
			"solo travel",
			"romantic getaways",
			"eco tourism",
			"winter destinations",
		],
	),
	(
		"technology",
		[
			"AI",
			"machine learning",
			"blockchain",
			"cybersecurity",
			"cloud computing",
			"IoT",
			"big data",
			"software development",
			"mobile apps",
			"tech trends",
		],
	),
	(
		"fitness",
		[
			"workout routines",
			"home exercises",
			"weight loss",
			"muscle building",
			"cardio training",
			"yoga poses",
			"fitness equipment",
			"nutrition tips",
			"personal training",
			"sports nutrition",
		],
	),
];

/// On-disk layout of a template file.
///
/// ```toml
/// [categories]
/// "digital marketing" = ["SEO", "PPC"]
/// fitness = ["weight loss"]
/// ```
#[derive(Deserialize)]
struct TemplateFile {
	categories: IndexMap<String, Vec<String>>,
}

/// Read-only mapping from a category label to its ordered modifiers.
///
/// # Invariants
/// - At least one category
/// - Labels are lowercase, trimmed, non-empty and unique
/// - Every category holds at least one non-empty modifier
/// - Declaration order is preserved and drives the lookup
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateTable {
	categories: IndexMap<String, Vec<String>>,
}

impl Default for TemplateTable {
	/// The built-in table (five categories of ten modifiers).
	fn default() -> Self {
		let categories = DEFAULT_CATEGORIES
			.iter()
			.map(|(label, terms)| {
				((*label).to_owned(), terms.iter().map(|t| (*t).to_owned()).collect())
			})
			.collect();
		Self { categories }
	}
}

impl TemplateTable {
	/// Builds a table from labelled modifier lists, keeping their order.
	///
	/// Labels are trimmed and lowercased, modifiers are trimmed and blank
	/// ones dropped.
	///
	/// # Errors
	/// Returns `InvalidTemplate` if the table is empty, a label is blank or
	/// duplicated, or a category ends up without modifiers.
	pub fn new(categories: IndexMap<String, Vec<String>>) -> Result<Self, KeywordError> {
		if categories.is_empty() {
			return Err(KeywordError::InvalidTemplate("no category defined".to_owned()));
		}

		let mut normalized = IndexMap::with_capacity(categories.len());
		for (label, terms) in categories {
			let label = label.trim().to_lowercase();
			if label.is_empty() {
				return Err(KeywordError::InvalidTemplate("category label cannot be blank".to_owned()));
			}

			let terms: Vec<String> = terms
				.iter()
				.map(|t| t.trim())
				.filter(|t| !t.is_empty())
				.map(str::to_owned)
				.collect();
			if terms.is_empty() {
				return Err(KeywordError::InvalidTemplate(format!("category '{label}' has no modifier")));
			}

			if normalized.insert(label.clone(), terms).is_some() {
				return Err(KeywordError::InvalidTemplate(format!("category '{label}' is defined twice")));
			}
		}

		Ok(Self { categories: normalized })
	}

	/// Parses a TOML template document (see `TemplateFile`).
	pub fn from_toml_str(contents: &str) -> Result<Self, KeywordError> {
		let file: TemplateFile = toml::from_str(contents)?;
		Self::new(file.categories)
	}

	/// Loads a TOML template file from disk.
	pub fn load<P: AsRef<Path>>(filepath: P) -> Result<Self, KeywordError> {
		let contents = io::read_file(&filepath)?;
		let table = Self::from_toml_str(&contents)?;
		debug!("Loaded {} template categories from {}", table.len(), filepath.as_ref().display());
		Ok(table)
	}

	/// Category labels in lookup order.
	pub fn categories(&self) -> impl Iterator<Item = &str> {
		self.categories.keys().map(String::as_str)
	}

	/// Modifiers of a given category, if it exists.
	pub fn terms(&self, label: &str) -> Option<&[String]> {
		self.categories.get(label).map(Vec::as_slice)
	}

	/// Number of categories.
	pub fn len(&self) -> usize {
		self.categories.len()
	}

	/// Always `false`, an empty table cannot be built.
	pub fn is_empty(&self) -> bool {
		self.categories.is_empty()
	}

	/// Returns the modifiers to combine with `topic`.
	///
	/// The lowercased topic is checked against every label in declaration
	/// order and the first label contained in it wins, even if a later label
	/// would be a longer match. Without any match, `GENERIC_TERMS` is used.
	///
	/// The returned list is a copy; the table itself is never modified.
	pub fn resolve_base_terms(&self, topic: &str) -> Vec<String> {
		let lower_topic = topic.to_lowercase();

		for (label, terms) in &self.categories {
			if lower_topic.contains(label.as_str()) {
				debug!("Topic '{topic}' matched category '{label}'");
				return terms.clone();
			}
		}

		debug!("Topic '{topic}' matched no category, using generic terms");
		GENERIC_TERMS.iter().map(|t| (*t).to_owned()).collect()
	}
}
