//! SEO keyword phrase generation library.
//!
//! This crate provides the keyword generation pipeline, including:
//! - Category template lookup (first match in declaration order)
//! - Combinatorial phrase construction and description-driven long-tail expansion
//! - Unbiased random down-sampling to a requested count
//! - Derived statistics and copy/export formatting for front ends
//!
//! The generator has no UI dependency: adapters (HTTP server, desktop UI,
//! command line) call into it with plain inputs and get plain outputs back.

/// Keyword generation pipeline.
///
/// Exposes the high-level `KeywordGenerator` as well as the individual
/// stages (resolver, candidate builder, sampler, statistics).
pub mod model;

/// Clipboard and file export formatting.
pub mod export;

/// Error type shared by every stage.
pub mod error;

/// I/O utilities (file loading, path helpers).
///
/// Not exposed
pub(crate) mod io;
