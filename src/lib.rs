//! wordwheel
//!
//! Solves word-wheel puzzles: every dictionary word spelled from a pool of
//! letters, containing a mandatory letter, confirmed by Hunspell.
//!
//! A run goes through [`Solver`]: the [`Config`] names a Hunspell dictionary,
//! whose words are narrowed down locally by [`prefilter`] before the
//! survivors are sent to an [`Oracle`] in a single batch. The answer is a
//! [`Solution`], longest words first.
//!
//! ```no_run
//! use wordwheel::{Config, Solver};
//!
//! # fn main() -> Result<(), wordwheel::Error> {
//! let config = Config::from_env()?;
//! let solution = Solver::new(&config)?.solve("aelnrst", "e")?;
//! for word in &solution.words {
//! 	println!("{word}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod blacklist;
pub mod config;
pub mod dic;
pub mod dictionary;
pub mod heuristic;
pub mod oracle;
pub mod pool;
pub mod prefilter;
pub mod solver;
pub mod validate;

pub use aggregate::{aggregate, Solution};
pub use config::{Config, ConfigError};
pub use dictionary::{DictionaryPair, LoadError};
pub use oracle::{Hunspell, Oracle, OracleError, Verdict};
pub use pool::{LetterPool, LetterSetError};
pub use prefilter::prefilter;
pub use solver::Solver;

/// Everything that aborts a run
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// Settings are malformed or a configured file is unreadable
	#[error("configuration error: {0}")]
	Config(#[from] ConfigError),

	/// No dictionary found or it could not be decoded
	#[error("dictionary error: {0}")]
	Dictionary(#[from] LoadError),

	/// The puzzle letters are malformed
	#[error("invalid letters: {0}")]
	LetterSet(#[from] LetterSetError),

	/// The oracle is missing, failed or broke its protocol
	#[error("validator error: {0}")]
	Validator(#[from] OracleError),
}

impl Error {
	/// Whether the oracle is missing, as opposed to misbehaving
	#[must_use]
	pub const fn is_validator_unavailable(&self) -> bool {
		matches!(self, Self::Validator(OracleError::Unavailable(_)))
	}
}
