//! Top-level module for the Markov chain.
//!
//! - The transition table and its learning / generation operations (`Chain`)
//! - The random source used to pick start tokens and successors (`Picker`)
//! - A lazy random walk over the table (`Walk`)

/// First-order transition table.
///
/// Handles sequence ingestion, merging, and bounded or open-ended generation.
pub mod chain;

/// Uniform index selection, backed by `rand` or by a test double.
pub mod picker;

/// Iterator performing one random step per item.
pub mod walk;
