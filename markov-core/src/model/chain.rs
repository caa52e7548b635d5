use std::hash::Hash;

use indexmap::{Equivalent, IndexMap};
use log::{debug, trace, warn};

use super::picker::{Picker, RngPicker};
use super::walk::Walk;
use crate::error::ChainError;

/// First-order Markov chain over tokens of type `T`.
///
/// The chain maps every token it has seen to the ordered list of tokens
/// observed right after it. Lists keep duplicates and insertion order, so a
/// transition seen twice is twice as likely to be picked during generation.
///
/// # Responsibilities
/// - Register tokens and record transitions (`add`)
/// - Produce random walks following recorded transitions (`generate`, `walk`)
/// - Merge with another chain (ex. tables built from separate corpora)
///
/// # Invariants
/// - Every token ever passed to `add` has exactly one entry, possibly empty
/// - Every successor stored in a list is itself a registered token
/// - Entries are only removed by `reset`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chain<T: Eq + Hash> {
	/// Successor lists indexed by token, in registration order.
	/// Example: { "the" => ["cat", "dog", "cat"], "cat" => [] }
	transitions: IndexMap<T, Vec<T>>,
}

impl<T: Eq + Hash> Default for Chain<T> {
	fn default() -> Self {
		Self { transitions: IndexMap::new() }
	}
}

impl<T: Eq + Hash + Clone> Chain<T> {
	/// Creates a chain with an empty transition table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Discards every token and transition.
	pub fn reset(&mut self) {
		debug!("Resetting chain ({} tokens dropped)", self.transitions.len());
		self.transitions.clear();
	}

	/// Learns a sequence of tokens.
	///
	/// - Every token of the sequence is registered first; known tokens keep
	///   their successor list untouched.
	/// - Then, for each consecutive pair `(a, b)`, `b` is appended to the
	///   successor list of `a`, left to right.
	///
	/// A single token is only registered. Self-loops (`a, a`) are recorded
	/// like any other pair.
	///
	/// # Errors
	/// Returns `ChainError::InvalidArgument` if `tokens` is empty. The table
	/// is left unchanged in that case.
	pub fn add<I>(&mut self, tokens: I) -> Result<(), ChainError>
	where
		I: IntoIterator<Item = T>,
	{
		let tokens: Vec<T> = tokens.into_iter().collect();
		if tokens.is_empty() {
			warn!("Rejected add without tokens");
			return Err(ChainError::InvalidArgument("at least one token required".to_owned()));
		}

		for token in &tokens {
			if !self.transitions.contains_key(token) {
				self.transitions.insert(token.clone(), Vec::new());
			}
		}

		for pair in tokens.windows(2) {
			// Registered by the loop above
			if let Some(successors) = self.transitions.get_mut(&pair[0]) {
				successors.push(pair[1].clone());
			}
		}

		trace!("Added {} tokens ({} links)", tokens.len(), tokens.len() - 1);
		Ok(())
	}

	/// Generates a sequence using the thread-local random generator.
	///
	/// `max_length` bounds the output; `None` leaves it unbounded, in which
	/// case generation only stops on a token without successors. On a chain
	/// where every reachable token has successors, an unbounded call never
	/// returns.
	///
	/// Returns an empty sequence if the chain is empty or `max_length` is 0.
	pub fn generate(&self, max_length: Option<usize>) -> Vec<T> {
		self.generate_with(max_length, &mut RngPicker::thread())
	}

	/// Generates a sequence, drawing every random choice from `picker`.
	///
	/// Same contract as [`generate`](Self::generate). The bound is checked
	/// before each draw, so `Some(0)` consumes no randomness.
	pub fn generate_with<P>(&self, max_length: Option<usize>, picker: &mut P) -> Vec<T>
	where
		P: Picker + ?Sized,
	{
		let walk = self.walk(picker);
		let sequence: Vec<T> = match max_length {
			Some(limit) => walk.take(limit).cloned().collect(),
			None => walk.cloned().collect(),
		};
		trace!("Generated {} tokens (bound: {:?})", sequence.len(), max_length);
		sequence
	}

	/// Returns a lazy random walk over the chain.
	///
	/// Useful for open-ended generation where the caller decides when to stop.
	pub fn walk<P: Picker>(&self, picker: P) -> Walk<'_, T, P> {
		Walk::new(&self.transitions, picker)
	}

	/// Merges another chain into this one.
	///
	/// Tokens unknown to `self` are registered; successor lists of `other`
	/// are appended after the ones already present. The result is the chain
	/// obtained by replaying the sequences of `self`, then those of `other`.
	pub fn merge(&mut self, other: &Self) {
		for (token, successors) in &other.transitions {
			match self.transitions.get_mut(token) {
				Some(existing) => existing.extend(successors.iter().cloned()),
				None => {
					self.transitions.insert(token.clone(), successors.clone());
				}
			}
		}
		debug!("Merged {} tokens, chain now holds {}", other.transitions.len(), self.transitions.len());
	}
}

impl<T: Eq + Hash> Chain<T> {
	/// Returns the successor list of `token`, or `None` if it was never added.
	pub fn successors<Q>(&self, token: &Q) -> Option<&[T]>
	where
		Q: ?Sized + Hash + Equivalent<T>,
	{
		self.transitions.get(token).map(Vec::as_slice)
	}

	/// Returns true if `token` is registered.
	pub fn contains<Q>(&self, token: &Q) -> bool
	where
		Q: ?Sized + Hash + Equivalent<T>,
	{
		self.transitions.contains_key(token)
	}

	/// Number of registered tokens.
	pub fn len(&self) -> usize {
		self.transitions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.transitions.is_empty()
	}

	/// Registered tokens, in registration order.
	pub fn tokens(&self) -> impl Iterator<Item = &T> {
		self.transitions.keys()
	}

	/// Every token with its successor list, in registration order.
	pub fn transitions(&self) -> impl Iterator<Item = (&T, &[T])> {
		self.transitions.iter().map(|(token, successors)| (token, successors.as_slice()))
	}
}
