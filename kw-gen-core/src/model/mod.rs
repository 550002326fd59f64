//! Top-level module for the keyword generation pipeline.
//!
//! The pipeline is split into small stages:
//! - Category lookup (`TemplateTable`)
//! - Candidate construction (`generate_candidates`)
//! - Random down-sampling (`sample_to_count`)
//! - Statistics (`KeywordStats`)
//! - A high-level entry point chaining them (`KeywordGenerator`)

/// High-level generator chaining every stage for a request.
pub mod generator;

/// Ordered category → modifiers table and first-match lookup.
///
/// Ships a built-in table and can load another one from TOML.
pub mod template_table;

/// Combinatorial phrase construction and description-driven long-tail
/// expansion.
pub mod candidates;

/// Unbiased shuffle and truncation to the requested count.
pub mod sampler;

/// Count, long-tail count and average length of a keyword list.
pub mod stats;

/// Validated generation input and count parsing.
pub mod request;
