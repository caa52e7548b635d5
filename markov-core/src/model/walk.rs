use std::hash::Hash;
use std::iter::FusedIterator;

use indexmap::IndexMap;

use super::picker::Picker;

/// Where the walk stands between two calls to `next`.
enum Position<'a, T> {
	Start,
	At(&'a T),
	Done,
}

/// Lazy random walk over a transition table.
///
/// The first item is drawn uniformly from every registered token, including
/// tokens without successors. Each following item is drawn uniformly from
/// the successor list of the previous one. The walk ends once it has yielded
/// a token whose successor list is empty, and never ends if it enters a
/// cycle without dead end.
///
/// Each random draw happens inside `next`, so `walk.take(0)` draws nothing.
///
/// Built by [`Chain::walk`](crate::Chain::walk).
pub struct Walk<'a, T, P> {
	transitions: &'a IndexMap<T, Vec<T>>,
	picker: P,
	position: Position<'a, T>,
}

impl<'a, T, P> Walk<'a, T, P> {
	pub(crate) fn new(transitions: &'a IndexMap<T, Vec<T>>, picker: P) -> Self {
		Self { transitions, picker, position: Position::Start }
	}
}

impl<'a, T: Eq + Hash, P: Picker> Walk<'a, T, P> {
	fn start(&mut self) -> Option<&'a T> {
		if self.transitions.is_empty() {
			return None;
		}
		let index = self.picker.pick(self.transitions.len());
		self.transitions.get_index(index).map(|(token, _)| token)
	}

	fn step(&mut self, current: &'a T) -> Option<&'a T> {
		let successors = self.transitions.get(current)?;
		if successors.is_empty() {
			return None;
		}
		successors.get(self.picker.pick(successors.len()))
	}
}

impl<'a, T: Eq + Hash, P: Picker> Iterator for Walk<'a, T, P> {
	type Item = &'a T;

	fn next(&mut self) -> Option<&'a T> {
		let next = match self.position {
			Position::Start => self.start(),
			Position::At(current) => self.step(current),
			Position::Done => None,
		};
		self.position = match next {
			Some(token) => Position::At(token),
			None => Position::Done,
		};
		next
	}
}

impl<'a, T: Eq + Hash, P: Picker> FusedIterator for Walk<'a, T, P> {}
