use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of the uniform choices made while walking a chain.
///
/// Every random decision of a generation (the start token, then each
/// successor) goes through `pick`, so a deterministic implementation makes
/// the whole walk reproducible.
pub trait Picker {
	/// Returns an index in `0..len`.
	///
	/// Callers never pass `len == 0`.
	fn pick(&mut self, len: usize) -> usize;
}

impl<P: Picker + ?Sized> Picker for &mut P {
	fn pick(&mut self, len: usize) -> usize {
		(**self).pick(len)
	}
}

/// `Picker` drawing uniformly from a `rand` generator.
#[derive(Debug, Clone)]
pub struct RngPicker<R: Rng> {
	rng: R,
}

impl<R: Rng> RngPicker<R> {
	/// Wraps an existing generator.
	pub fn new(rng: R) -> Self {
		Self { rng }
	}

	/// Returns a mutable reference to the underlying generator.
	pub fn inner_mut(&mut self) -> &mut R {
		&mut self.rng
	}
}

impl RngPicker<ThreadRng> {
	/// Picker backed by the thread-local generator.
	pub fn thread() -> Self {
		Self::new(rand::rng())
	}
}

impl RngPicker<StdRng> {
	/// Picker with a fixed seed: same seed, same chain, same output.
	pub fn seeded(seed: u64) -> Self {
		Self::new(StdRng::seed_from_u64(seed))
	}
}

impl<R: Rng> Picker for RngPicker<R> {
	fn pick(&mut self, len: usize) -> usize {
		self.rng.random_range(0..len)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn picks_stay_in_range() {
		let mut picker = RngPicker::thread();
		for len in 1..50 {
			assert!(picker.pick(len) < len);
		}
	}

	#[test]
	fn single_candidate_is_always_index_zero() {
		let mut picker = RngPicker::seeded(7);
		for _ in 0..20 {
			assert_eq!(picker.pick(1), 0);
		}
	}

	#[test]
	fn seeded_pickers_agree() {
		let mut a = RngPicker::seeded(42);
		let mut b = RngPicker::seeded(42);
		let left: Vec<usize> = (0..32).map(|_| a.pick(10)).collect();
		let right: Vec<usize> = (0..32).map(|_| b.pick(10)).collect();
		assert_eq!(left, right);
	}

	#[test]
	fn borrowed_picker_advances_the_original() {
		let mut original = RngPicker::seeded(3);
		let mut replay = RngPicker::seeded(3);
		fn draw_once<P: Picker>(mut picker: P) {
			picker.pick(100);
		}
		draw_once(&mut original);
		replay.pick(100);
		assert_eq!(original.pick(100), replay.pick(100));
	}
}
