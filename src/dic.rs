//! Parsing of Hunspell `.dic` word lists into a set of base words

use nom::{
	bytes::complete::{tag, take_till1},
	character::complete::{space0, u64 as u64_p},
	combinator::{all_consuming, opt},
	sequence::{delimited, preceded, terminated},
	IResult,
};
use std::collections::{btree_map, BTreeMap};
use std::fmt;

/// Deduplicated, lowercase words taken from a `.dic` file
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordList {
	/// Lowercased word mapped to the casing it was found with
	words: BTreeMap<String, Casing>,
}

impl WordList {
	/// Parse already decoded `.dic` content. Lines that do not hold a plain
	/// word (see [`is_plain_word`]) are dropped.
	#[must_use]
	pub fn from_slice(content: &str) -> Self {
		let content = content.strip_prefix('\u{feff}').unwrap_or(content);
		let mut lines = content.lines().peekable();

		// Hunspell puts an approximate word count on the first line
		if lines.peek().is_some_and(|l| count_header(l).is_ok()) {
			lines.next();
		}

		let mut list = Self::default();
		for line in lines {
			let kept = parse_entry(line.trim()).is_ok_and(|(_, root)| list.insert(root));
			if !kept {
				log::trace!("skipping dictionary line `{line}`");
			}
		}
		list
	}

	/// Insert a word, merging casings so that a lowercase occurrence wins.
	/// Returns `false`, leaving the list untouched, if `root` is not a plain
	/// word.
	pub fn insert(&mut self, root: &str) -> bool {
		let lower = root.to_lowercase();
		if !is_plain_word(&lower) {
			return false;
		}

		let casing = Casing::guess(root);
		match self.words.entry(lower) {
			btree_map::Entry::Vacant(entry) => {
				entry.insert(casing);
			}
			btree_map::Entry::Occupied(mut entry) => {
				if casing == Casing::No {
					entry.insert(Casing::No);
				}
			}
		}
		true
	}

	/// Number of distinct words
	#[must_use]
	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// Whether no line held a plain word
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	/// Case-insensitive membership
	#[must_use]
	pub fn contains(&self, word: &str) -> bool {
		self.words.contains_key(&word.to_lowercase())
	}

	/// Words in lexicographic order
	pub fn iter(&self) -> impl Iterator<Item = BaseWord<'_>> {
		self.words
			.iter()
			.map(|(text, casing)| BaseWord {
				text: text.as_str(),
				casing: *casing,
			})
	}
}

/// Whether `word` only holds the letters `a` to `z`
///
/// Accented letters, other scripts and anything lowercasing to more than
/// one letter (`İ`) are refused.
#[must_use]
pub fn is_plain_word(word: &str) -> bool {
	!word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}

impl<'a> FromIterator<&'a str> for WordList {
	fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
		let mut list = Self::default();
		for word in iter {
			list.insert(word);
		}
		list
	}
}

/// A cleaned dictionary word along with how it was capitalized in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseWord<'a> {
	/// Lowercase text, letters `a` to `z` only
	pub text: &'a str,
	/// Capitalization the word was found with
	pub casing: Casing,
}

impl<'a> BaseWord<'a> {
	/// A word as if it was found in lowercase
	#[must_use]
	pub const fn plain(text: &'a str) -> Self {
		Self {
			text,
			casing: Casing::No,
		}
	}
}

impl fmt::Display for BaseWord<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.text)
	}
}

fn count_header(i: &str) -> IResult<&str, u64> {
	all_consuming(delimited(space0, u64_p, space0))(i)
}

/// Take the root of a `root/FLAGS morphological fields` line, leaving the
/// data fields behind. Those only matter to the oracle.
fn parse_entry(i: &str) -> IResult<&str, &str> {
	terminated(
		take_till1(|c: char| c == '/' || c.is_whitespace()),
		opt(preceded(tag("/"), take_till1(char::is_whitespace))),
	)(i)
}

/// Capitalization of a dictionary root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Casing {
	/// All lowercase (“foo”)
	No,
	/// Titlecase, only initial letter is capitalized (“Foo”)
	Init,
	/// All uppercase (“FOO”)
	All,
	/// Mixed capitalization (“fooBar”)
	Huh,
	/// Mixed capitalization, first letter is capitalized (“FooBar”)
	HuhInit,
}

impl Casing {
	/// Classify the capitalization of `s`
	#[must_use]
	pub fn guess(s: &str) -> Self {
		let first_char_is_upper = s.chars().next().is_some_and(char::is_uppercase);
		let chars = s.chars().skip(1).filter(|c| c.is_alphabetic());

		#[allow(clippy::match_bool)]
		match first_char_is_upper {
			false if chars.clone().all(char::is_lowercase) => Self::No,
			false => Self::Huh,
			true if chars.clone().all(char::is_lowercase) => Self::Init,
			true if chars.clone().all(char::is_uppercase) => Self::All,
			true => Self::HuhInit,
		}
	}
}
