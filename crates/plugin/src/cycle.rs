//! Cyclic value advancement.

use thiserror::Error;

/// Error from [`advance`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CycleError {
	#[error("cannot cycle over an empty option list")]
	EmptyOptions,
}

/// Returns the element after the first occurrence of `current`, wrapping
/// past the end. A `current` not present in `options` is treated as
/// preceding the start, so the first element is returned.
///
/// Pure; errs only when `options` is empty.
pub fn advance<'a, T: PartialEq>(current: &T, options: &'a [T]) -> Result<&'a T, CycleError> {
	if options.is_empty() {
		return Err(CycleError::EmptyOptions);
	}
	let next = match options.iter().position(|option| option == current) {
		Some(index) => (index + 1) % options.len(),
		None => 0,
	};
	Ok(&options[next])
}

/// A statically non-empty cyclic option list.
///
/// Non-emptiness is asserted in the `const` constructor, so [`Cycle::advance`]
/// is total. The shipped cycle orders live in [`crate::actions`].
#[derive(Debug, Clone, Copy)]
pub struct Cycle<T: 'static> {
	options: &'static [T],
}

impl<T: PartialEq + Copy> Cycle<T> {
	/// Wraps an option list, rejecting empty slices at construction.
	pub const fn new(options: &'static [T]) -> Self {
		assert!(!options.is_empty(), "cyclic option list must be non-empty");
		Self { options }
	}

	/// The next value after `current`, wrapping around; unrecognized values
	/// restart the cycle at the first option.
	pub fn advance(&self, current: T) -> T {
		let next = match self.options.iter().position(|option| *option == current) {
			Some(index) => (index + 1) % self.options.len(),
			None => 0,
		};
		self.options[next]
	}

	pub const fn options(&self) -> &'static [T] {
		self.options
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	const LETTERS: &[char] = &['a', 'b', 'c', 'd', 'e'];

	#[test]
	fn advances_to_the_next_element() {
		assert_eq!(advance(&'a', LETTERS), Ok(&'b'));
		assert_eq!(advance(&'d', LETTERS), Ok(&'e'));
	}

	#[test]
	fn wraps_past_the_end() {
		assert_eq!(advance(&'e', LETTERS), Ok(&'a'));
	}

	#[test]
	fn unknown_current_restarts_at_the_first_element() {
		assert_eq!(advance(&'z', LETTERS), Ok(&'a'));
	}

	#[test]
	fn empty_options_are_an_error() {
		let empty: &[char] = &[];
		assert_eq!(advance(&'a', empty), Err(CycleError::EmptyOptions));
	}

	#[test]
	fn five_advances_return_to_the_start() {
		let cycle = Cycle::new(LETTERS);
		let mut current = 'a';
		for _ in 0..LETTERS.len() {
			current = cycle.advance(current);
		}
		assert_eq!(current, 'a');
	}

	#[test]
	fn advance_matches_the_indexing_identity() {
		let cycle = Cycle::new(LETTERS);
		for (index, letter) in LETTERS.iter().enumerate() {
			let expected = LETTERS[(index + 1) % LETTERS.len()];
			assert_eq!(cycle.advance(*letter), expected);
			assert_eq!(advance(letter, LETTERS), Ok(&expected));
		}
	}
}
