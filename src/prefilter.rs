//! Narrow the dictionary down to the words worth asking the oracle about

use crate::{
	blacklist::Blacklist,
	dic::{BaseWord, WordList},
	heuristic::{HeuristicFilter, Rejection},
	pool::LetterPool,
};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Words that passed every local check, sorted
pub type Candidates = BTreeSet<String>;

/// Why a base word did not become a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Reject {
	/// Under the configured minimum length
	TooShort,
	/// Needs a letter more often than the wheel has it
	NotCovered,
	/// Does not use the mandatory letter
	MissingMandatory,
	/// Broke a heuristic rule
	Unreasonable(Rejection),
	/// Listed in the blacklist
	Blacklisted,
}

impl fmt::Display for Reject {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::TooShort => write!(f, "shorter than minimum"),
			Self::NotCovered => write!(f, "not coverable by the letters"),
			Self::MissingMandatory => write!(f, "missing mandatory letter"),
			Self::Unreasonable(rejection) => write!(f, "unreasonable ({rejection})"),
			Self::Blacklisted => write!(f, "blacklisted"),
		}
	}
}

/// Local checks a base word goes through, cheapest first
#[derive(Debug, Clone, Copy)]
pub struct Prefilter<'a> {
	/// Letters words are spelled from
	pub pool: &'a LetterPool,
	/// Minimum length in letters
	pub min_len: usize,
	/// Plausibility rules
	pub heuristic: HeuristicFilter,
	/// Words always excluded
	pub blacklist: &'a Blacklist,
}

impl Prefilter<'_> {
	/// Run every check on `word`, cheapest first.
	///
	/// # Errors
	///
	/// Returns the first check `word` fails.
	pub fn check(&self, word: &BaseWord<'_>) -> Result<(), Reject> {
		if word.text.chars().count() < self.min_len {
			return Err(Reject::TooShort);
		}
		if !self.pool.covers(word.text) {
			return Err(Reject::NotCovered);
		}
		if !self.pool.contains_mandatory(word.text) {
			return Err(Reject::MissingMandatory);
		}
		if let Some(rejection) = self.heuristic.rejection(word) {
			return Err(Reject::Unreasonable(rejection));
		}
		if self.blacklist.contains(word.text) {
			return Err(Reject::Blacklisted);
		}
		Ok(())
	}

	/// Every word of `words` passing [`Prefilter::check`]
	#[must_use]
	pub fn run(&self, words: &WordList) -> Candidates {
		let mut tally = BTreeMap::<Reject, usize>::new();
		let mut candidates = Candidates::new();

		for word in words.iter() {
			match self.check(&word) {
				Ok(()) => {
					candidates.insert(word.text.to_owned());
				}
				Err(reject) => *tally.entry(reject).or_default() += 1,
			}
		}

		for (reject, count) in &tally {
			log::debug!("{count} words rejected: {reject}");
		}
		log::info!(
			"prefiltered {} candidates from {} base words",
			candidates.len(),
			words.len()
		);

		candidates
	}
}

/// Every word of `words` passing all local checks
#[must_use]
pub fn prefilter(
	words: &WordList,
	pool: &LetterPool,
	min_len: usize,
	heuristic: HeuristicFilter,
	blacklist: &Blacklist,
) -> Candidates {
	Prefilter {
		pool,
		min_len,
		heuristic,
		blacklist,
	}
	.run(words)
}
