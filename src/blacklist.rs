//! Words excluded from every solution regardless of the oracle

use crate::dic::is_plain_word;
use std::{collections::HashSet, fs, io, path::Path};

/// Lowercase words that never make it to the oracle
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Blacklist {
	words: HashSet<String>,
}

impl Blacklist {
	/// Parse a newline-delimited list. Blank lines, `#` comments and lines
	/// that are not a single plain word are skipped.
	#[must_use]
	pub fn from_slice(content: &str) -> Self {
		content.lines().collect()
	}

	/// Read a list from disk, skipping lines that are not valid UTF-8
	///
	/// # Errors
	///
	/// Will error if the file cannot be read.
	pub fn file(path: &Path) -> Result<Self, io::Error> {
		let bytes = fs::read(path)?;
		let list: Self = bytes
			.split(|b| *b == b'\n')
			.filter_map(|line| match std::str::from_utf8(line) {
				Ok(line) => Some(line),
				Err(err) => {
					log::trace!("skipping undecodable blacklist line: {err}");
					None
				}
			})
			.collect();

		log::debug!("blacklisted {} words from `{}`", list.len(), path.display());
		Ok(list)
	}

	/// Case-insensitive membership
	#[must_use]
	pub fn contains(&self, word: &str) -> bool {
		self.words.contains(&word.to_lowercase())
	}

	/// Number of distinct words
	#[must_use]
	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// Whether nothing is excluded
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}
}

impl<'a> FromIterator<&'a str> for Blacklist {
	fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
		let words = iter
			.into_iter()
			.map(str::trim)
			.filter(|line| !line.is_empty() && !line.starts_with('#'))
			.map(str::to_lowercase)
			.filter(|line| {
				let is_word = is_plain_word(line);
				if !is_word {
					log::trace!("skipping malformed blacklist line `{line}`");
				}
				is_word
			})
			.collect();

		Self { words }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn skips_comments_and_malformed_lines() {
		let list = Blacklist::from_slice(
			"\
# words the newspaper does not accept
Learnt

rental
two words
x-ray
",
		);

		assert_eq!(list.len(), 2);
		assert!(list.contains("learnt"));
		assert!(list.contains("LEARNT"));
		assert!(!list.contains("x-ray"));
	}

	#[test]
	fn skips_words_outside_a_to_z() {
		let list = Blacklist::from_slice("rösten\nстол\nİzmir\nRente\n");
		assert_eq!(list.len(), 1);
		assert!(list.contains("rente"));
		assert!(!list.contains("rösten"));
	}

	#[test]
	fn skips_undecodable_lines() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("blacklist.txt");
		fs::write(&path, b"learnt\r\nr\xf6sten\nrental\n").unwrap();

		let list = Blacklist::file(&path).unwrap();
		assert_eq!(list.len(), 2);
		assert!(list.contains("learnt"));
		assert!(list.contains("rental"));
	}

	#[test]
	fn unreadable_file_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		assert!(Blacklist::file(&dir.path().join("missing.txt")).is_err());
	}
}
