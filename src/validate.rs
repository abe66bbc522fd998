//! Confirm prefiltered candidates with an [`Oracle`] in a single batch

use crate::{
	oracle::{Oracle, OracleError},
	prefilter::Candidates,
};
use std::collections::BTreeSet;

/// Candidates the oracle recognized
pub type Validated = BTreeSet<String>;

/// Turns candidates into validated words with a single oracle call
#[derive(Debug, Clone)]
pub struct Validator<O> {
	oracle: O,
}

impl<O: Oracle> Validator<O> {
	/// Validate through `oracle`
	pub const fn new(oracle: O) -> Self {
		Self { oracle }
	}

	/// Send every candidate, sorted, to the oracle in one call and keep the
	/// ones it recognized. Nothing is returned unless every candidate got a
	/// verdict.
	///
	/// # Errors
	///
	/// Will error if the oracle fails or does not answer exactly one verdict
	/// per candidate.
	pub fn validate(&self, candidates: &Candidates) -> Result<Validated, OracleError> {
		if candidates.is_empty() {
			return Ok(Validated::new());
		}

		let words: Vec<&str> = candidates.iter().map(String::as_str).collect();
		let verdicts = self.oracle.check_batch(&words)?;
		if verdicts.len() != words.len() {
			return Err(OracleError::Count {
				expected: words.len(),
				got: verdicts.len(),
			});
		}

		let validated: Validated = words
			.into_iter()
			.zip(verdicts)
			.filter(|(_, verdict)| verdict.is_valid())
			.map(|(word, _)| word.to_owned())
			.collect();

		log::info!(
			"oracle recognized {} of {} candidates",
			validated.len(),
			candidates.len()
		);
		Ok(validated)
	}
}
