//! First-order Markov chain library.
//!
//! This crate learns "has been observed to follow" relationships between
//! discrete tokens and walks them back out as new sequences:
//! - Unweighted transition table (repeated observations simply repeat)
//! - Bounded or open-ended random generation
//! - Injectable random source for reproducible runs
//!
//! Tokens can be any value implementing `Eq + Hash + Clone`.

/// Transition table, generation and the random source it draws from.
pub mod model;

/// Error type returned by fallible chain operations.
pub mod error;

pub use error::ChainError;
pub use model::chain::Chain;
pub use model::picker::{Picker, RngPicker};
pub use model::walk::Walk;
