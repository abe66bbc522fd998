//! Order validated words for presentation

use crate::{pool::LetterPool, validate::Validated};
use std::cmp::Ordering;

/// Longest words first, ties broken alphabetically
#[must_use]
pub fn by_value(a: &str, b: &str) -> Ordering {
	b.chars()
		.count()
		.cmp(&a.chars().count())
		.then_with(|| a.cmp(b))
}

/// Order validated words with [`by_value`]
#[must_use]
pub fn aggregate(validated: Validated) -> Vec<String> {
	let mut words: Vec<_> = validated.into_iter().collect();
	words.sort_by(|a, b| by_value(a, b));
	words
}

/// Answer to a puzzle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
	/// Validated words, longest first
	pub words: Vec<String>,
	/// Words using every tile exactly once, alphabetically
	pub pangrams: Vec<String>,
	/// Size of the dictionary the words were taken from
	pub base_words: usize,
	/// Words that passed local checks and were sent to the oracle
	pub candidates: usize,
}

impl Solution {
	/// Order `validated` and pick out the pangrams of `pool`. Counters are
	/// left for the caller to fill.
	#[must_use]
	pub fn new(validated: Validated, pool: &LetterPool) -> Self {
		let words = aggregate(validated);
		let mut pangrams: Vec<_> = words
			.iter()
			.filter(|w| pool.is_pangram(w))
			.cloned()
			.collect();
		pangrams.sort();

		Self {
			words,
			pangrams,
			..Self::default()
		}
	}

	/// Length in letters of the longest word, `0` without words
	#[must_use]
	pub fn max_len(&self) -> usize {
		self.words.first().map_or(0, |w| w.chars().count())
	}

	/// Every word sharing the maximum length
	#[must_use]
	pub fn longest(&self) -> &[String] {
		let max = self.max_len();
		let end = self
			.words
			.iter()
			.position(|w| w.chars().count() < max)
			.unwrap_or(self.words.len());
		&self.words[..end]
	}

	/// Whether the puzzle has no answer
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn validated(words: &[&str]) -> Validated {
		words.iter().map(ToString::to_string).collect()
	}

	#[test]
	fn orders_by_length_then_alphabet() {
		let words = aggregate(validated(&["ten", "rental", "later", "antler", "learnt", "alter"]));
		assert_eq!(words, ["antler", "learnt", "rental", "alter", "later", "ten"]);
	}

	#[test]
	fn reports_longest_and_pangrams() {
		let pool = LetterPool::new("aelnrst", "e").unwrap();
		let solution = Solution::new(
			validated(&["learnt", "rental", "later", "antlers", "sternal"]),
			&pool,
		);

		assert_eq!(solution.max_len(), 7);
		assert_eq!(solution.longest(), ["antlers", "sternal"]);
		assert_eq!(solution.pangrams, ["antlers", "sternal"]);
		assert_eq!(solution.words.len(), 5);
	}

	#[test]
	fn empty_solution() {
		let pool = LetterPool::new("aelnrst", "e").unwrap();
		let solution = Solution::new(Validated::new(), &pool);
		assert!(solution.is_empty());
		assert_eq!(solution.max_len(), 0);
		assert!(solution.longest().is_empty());
	}
}
