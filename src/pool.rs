//! The wheel's tiles and its mandatory letter

use std::collections::BTreeMap;
use std::fmt;

/// Ways the puzzle letters can be malformed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LetterSetError {
	/// Nothing but whitespace on the wheel
	#[error("no letters given")]
	Empty,

	/// Wheel holds something outside `a` to `z`
	#[error("`{0}` is not a letter from a to z")]
	NotAlphabetic(char),

	/// Mandatory letter is missing, longer than a letter or not a letter
	#[error("mandatory letter must be exactly one letter from a to z, got `{0}`")]
	Mandatory(String),

	/// Mandatory letter has no tile on the wheel
	#[error("mandatory letter `{0}` is not among the letters")]
	MandatoryMissing(char),
}

/// Multiset of available letters, lowercase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
	counts: BTreeMap<char, usize>,
	mandatory: char,
	len: usize,
}

impl LetterPool {
	/// Build a pool from the wheel letters, where repetitions are meaningful,
	/// and the letter every answer must contain.
	///
	/// # Errors
	///
	/// Will error if `letters` is empty or holds something else than letters,
	/// or if `mandatory` is not a single letter present in `letters`.
	pub fn new(letters: &str, mandatory: &str) -> Result<Self, LetterSetError> {
		let mut counts = BTreeMap::<char, usize>::new();
		let mut len = 0;
		for c in letters.trim().chars().flat_map(char::to_lowercase) {
			if !c.is_ascii_lowercase() {
				return Err(LetterSetError::NotAlphabetic(c));
			}
			*counts.entry(c).or_default() += 1;
			len += 1;
		}
		if len == 0 {
			return Err(LetterSetError::Empty);
		}

		let mut chars = mandatory.trim().chars().flat_map(char::to_lowercase);
		let mandatory = match (chars.next(), chars.next()) {
			(Some(c), None) if c.is_ascii_lowercase() => c,
			_ => return Err(LetterSetError::Mandatory(mandatory.to_owned())),
		};
		if !counts.contains_key(&mandatory) {
			return Err(LetterSetError::MandatoryMissing(mandatory));
		}

		Ok(Self {
			counts,
			mandatory,
			len,
		})
	}

	/// Letter every answer must contain
	#[must_use]
	pub const fn mandatory(&self) -> char {
		self.mandatory
	}

	/// Number of tiles on the wheel
	#[must_use]
	pub const fn len(&self) -> usize {
		self.len
	}

	/// Always `false` for a constructed pool
	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// How many tiles carry this letter
	#[must_use]
	pub fn count(&self, letter: char) -> usize {
		self.counts.get(&letter).copied().unwrap_or_default()
	}

	/// Whether `word` can be spelled without using a tile more often than it
	/// appears on the wheel
	#[must_use]
	pub fn covers(&self, word: &str) -> bool {
		let mut used = BTreeMap::<char, usize>::new();
		word.chars().flat_map(char::to_lowercase).all(|c| {
			let n = used.entry(c).or_default();
			*n += 1;
			*n <= self.count(c)
		})
	}

	/// Whether `word` uses the mandatory letter at least once
	#[must_use]
	pub fn contains_mandatory(&self, word: &str) -> bool {
		word.chars()
			.flat_map(char::to_lowercase)
			.any(|c| c == self.mandatory)
	}

	/// Whether `word` uses every tile exactly once
	#[must_use]
	pub fn is_pangram(&self, word: &str) -> bool {
		word.chars().count() == self.len && self.covers(word)
	}
}

impl fmt::Display for LetterPool {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (letter, count) in &self.counts {
			for _ in 0..*count {
				write!(f, "{letter}")?;
			}
		}
		Ok(())
	}
}
