//! The whole pipeline, from puzzle letters to a [`Solution`]

use crate::{
	aggregate::Solution,
	blacklist::Blacklist,
	config::{Config, ConfigError},
	dic::WordList,
	dictionary::DictionaryPair,
	heuristic::HeuristicFilter,
	oracle::{Hunspell, Oracle, OracleError},
	pool::LetterPool,
	prefilter::Prefilter,
	validate::Validator,
	Error,
};

/// Solves puzzles against one configuration
#[derive(Debug)]
pub struct Solver<'c> {
	config: &'c Config,
	blacklist: Blacklist,
}

impl<'c> Solver<'c> {
	/// Reads the blacklist so configuration problems surface before any
	/// puzzle is looked at.
	///
	/// # Errors
	///
	/// Will error if the configured blacklist cannot be read.
	pub fn new(config: &'c Config) -> Result<Self, Error> {
		let blacklist = match &config.blacklist_path {
			Some(path) => Blacklist::file(path).map_err(|source| ConfigError::Blacklist {
				path: path.clone(),
				source,
			})?,
			None => Blacklist::default(),
		};

		Ok(Self { config, blacklist })
	}

	/// Solve with `hunspell` as the oracle.
	///
	/// # Errors
	///
	/// See [`Error`] for every way a run aborts. No partial solution is ever
	/// returned.
	pub fn solve(&self, letters: &str, mandatory: &str) -> Result<Solution, Error> {
		self.solve_using(letters, mandatory, |pair| {
			Hunspell::new(&self.config.hunspell_bin, &self.config.hunspell_dir, &pair.name)
		})
	}

	/// Solve with the oracle `connect` builds for the located dictionary.
	///
	/// # Errors
	///
	/// See [`Error`].
	pub fn solve_using<O, F>(&self, letters: &str, mandatory: &str, connect: F) -> Result<Solution, Error>
	where
		O: Oracle,
		F: FnOnce(&DictionaryPair) -> Result<O, OracleError>,
	{
		let pool = LetterPool::new(letters, mandatory)?;
		let pair = DictionaryPair::locate(&self.config.hunspell_dir, &self.config.dict_candidates)?;
		// a missing oracle is reported before any filtering happens
		let oracle = connect(&pair)?;
		let words = pair.load(&self.config.encodings)?;

		self.solve_with(&pool, &words, oracle)
	}

	/// Run the in-memory stages: prefilter, validate, aggregate.
	///
	/// # Errors
	///
	/// Will error if the oracle fails.
	pub fn solve_with<O: Oracle>(
		&self,
		pool: &LetterPool,
		words: &WordList,
		oracle: O,
	) -> Result<Solution, Error> {
		let candidates = Prefilter {
			pool,
			min_len: self.config.min_len,
			heuristic: HeuristicFilter::new(self.config.filter_reasonable),
			blacklist: &self.blacklist,
		}
		.run(words);

		let validated = Validator::new(oracle).validate(&candidates)?;

		Ok(Solution {
			base_words: words.len(),
			candidates: candidates.len(),
			..Solution::new(validated, pool)
		})
	}
}
