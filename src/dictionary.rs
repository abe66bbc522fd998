//! Locate and load a Hunspell dictionary pair from disk
//!
//! Entrypoint methods are
//! - [`DictionaryPair::locate`]: picks the first candidate base name present in a directory
//! - [`DictionaryPair::load`]: decodes the `.dic` file and collects its [`WordList`]

use crate::dic::WordList;
use encoding_rs::Encoding;
use std::{
	fs, io,
	path::{Path, PathBuf},
};

/// Ways loading a dictionary could go wrong
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
	/// None of the candidate base names exist in the directory
	#[error("no dictionary among [{}] found in `{}`", .candidates.join(", "), .dir.display())]
	NotFound {
		/// Directory searched
		dir: PathBuf,
		/// Base names tried, in order
		candidates: Vec<String>,
	},

	/// Every configured encoding failed on the `.dic` file
	#[error("could not decode `{}` as any of [{}]", .path.display(), .tried.join(", "))]
	Decode {
		/// The `.dic` file
		path: PathBuf,
		/// Names of the encodings tried, in order
		tried: Vec<String>,
	},

	/// Could not correctly read the file
	#[error(transparent)]
	Io(#[from] io::Error),
}

/// A `.dic` file and its optional `.aff` companion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryPair {
	/// Name the oracle knows this dictionary by, e.g. `en_US`
	pub name: String,
	/// Word list
	pub dic: PathBuf,
	/// Affix file, absent for bare word lists
	pub aff: Option<PathBuf>,
}

impl DictionaryPair {
	/// Given candidates like `en_US` or `en_US.dic`, return the first one with
	/// a `.dic` file in `dir`. Candidates are never merged.
	///
	/// # Errors
	///
	/// Will error with [`LoadError::NotFound`] if no candidate exists.
	pub fn locate(dir: &Path, candidates: &[String]) -> Result<Self, LoadError> {
		for candidate in candidates {
			let name = candidate.strip_suffix(".dic").unwrap_or(candidate);
			let dic = dir.join(format!("{name}.dic"));
			if !dic.is_file() {
				log::debug!("no dictionary at `{}`", dic.display());
				continue;
			}

			let aff = dic.with_extension("aff");
			let aff = if aff.is_file() {
				Some(aff)
			} else {
				log::warn!("`{}` has no affix file, the oracle may refuse it", dic.display());
				None
			};

			log::info!("using dictionary `{}`", dic.display());
			return Ok(Self {
				name: name.to_owned(),
				dic,
				aff,
			});
		}

		Err(LoadError::NotFound {
			dir: dir.to_owned(),
			candidates: candidates.to_vec(),
		})
	}

	/// Read the `.dic` file with the first encoding that decodes all of it.
	///
	/// # Errors
	///
	/// Will error if the file cannot be read or if no encoding fits.
	pub fn load(&self, encodings: &[&'static Encoding]) -> Result<WordList, LoadError> {
		let bytes = fs::read(&self.dic)?;
		let content = decode(&bytes, encodings).ok_or_else(|| LoadError::Decode {
			path: self.dic.clone(),
			tried: encodings.iter().map(|e| e.name().to_owned()).collect(),
		})?;

		let words = WordList::from_slice(&content);
		log::info!("loaded {} base words", words.len());
		Ok(words)
	}
}

/// Decode `bytes` with the first encoding that accepts the whole input
#[must_use]
pub fn decode(bytes: &[u8], encodings: &[&'static Encoding]) -> Option<String> {
	encodings.iter().find_map(|encoding| {
		let decoded = encoding.decode_without_bom_handling_and_without_replacement(bytes);
		match decoded {
			Some(text) => {
				log::debug!("decoded dictionary as {}", encoding.name());
				Some(text.into_owned())
			}
			None => {
				log::debug!("dictionary is not valid {}", encoding.name());
				None
			}
		}
	})
}
