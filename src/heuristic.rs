//! Cheap plausibility rules run before candidates reach the oracle
//!
//! The rules are a fixed policy. They accept a few false negatives
//! (`bonbon`, `schifffahrt`) in exchange for keeping abbreviations, proper
//! nouns and dictionary artifacts away from the oracle.

use crate::dic::{BaseWord, Casing};
use regex::RegexSet;
use std::{fmt, sync::LazyLock};

/// Shortest word considered whatever the configured minimum length is
const MIN_REASONABLE_LEN: usize = 3;

/// Words this long are checked for vowels, consonants and Roman numerals
const ARTIFACT_CHECK_LEN: usize = 4;

/// Doubled words (`abab`) are only rejected up to this length
const DOUBLING_CHECK_MAX_LEN: usize = 8;

/// Artifact patterns, checked in order, and what matching one means
const ARTIFACTS: [(&str, Rejection); 3] = [
	("^[^aeiouy]+$", Rejection::NoVowel),
	("^[aeiouy]+$", Rejection::NoConsonant),
	(
		"^m{0,4}(cm|cd|d?c{0,3})(xc|xl|l?x{0,3})(ix|iv|v?i{0,3})$",
		Rejection::RomanNumeral,
	),
];

static ARTIFACT_SET: LazyLock<RegexSet> = LazyLock::new(|| {
	RegexSet::new(ARTIFACTS.map(|(pattern, _)| pattern)).expect("artifact patterns are constant")
});

/// Why a word was deemed unreasonable
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rejection {
	/// Hyphens, apostrophes, digits or letters outside `a` to `z`
	NotAlphabetic,
	/// Proper nouns, acronyms and mixed case forms
	Capitalized,
	/// Under three letters
	TooShort,
	/// `aaaa`
	SingleLetter,
	/// `baaad`
	TripleLetter,
	/// `abab`
	Doubled,
	/// `grrl`
	NoVowel,
	/// `aeio`
	NoConsonant,
	/// `mmxi`
	RomanNumeral,
}

impl fmt::Display for Rejection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::NotAlphabetic => "not alphabetic",
			Self::Capitalized => "capitalized",
			Self::TooShort => "too short",
			Self::SingleLetter => "single repeated letter",
			Self::TripleLetter => "triple letter",
			Self::Doubled => "doubled",
			Self::NoVowel => "no vowel",
			Self::NoConsonant => "no consonant",
			Self::RomanNumeral => "roman numeral",
		})
	}
}

/// Rejects structurally implausible words when enabled, accepts everything
/// otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicFilter {
	enabled: bool,
}

impl HeuristicFilter {
	/// A filter rejecting nothing unless `enabled`
	#[must_use]
	pub const fn new(enabled: bool) -> Self {
		Self { enabled }
	}

	/// Whether the rules are applied
	#[must_use]
	pub const fn is_enabled(&self) -> bool {
		self.enabled
	}

	/// Whether `word` breaks no rule
	#[must_use]
	pub fn is_reasonable(&self, word: &BaseWord<'_>) -> bool {
		self.rejection(word).is_none()
	}

	/// First rule `word` breaks, if any
	#[must_use]
	pub fn rejection(&self, word: &BaseWord<'_>) -> Option<Rejection> {
		if !self.enabled {
			return None;
		}

		let text = word.text;
		let chars: Vec<char> = text.chars().collect();
		let len = chars.len();

		if !chars.iter().all(char::is_ascii_alphabetic) {
			return Some(Rejection::NotAlphabetic);
		}
		if word.casing != Casing::No || chars.iter().any(|c| c.is_uppercase()) {
			return Some(Rejection::Capitalized);
		}
		if len < MIN_REASONABLE_LEN {
			return Some(Rejection::TooShort);
		}
		if chars.iter().all(|c| *c == chars[0]) {
			return Some(Rejection::SingleLetter);
		}
		if chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2]) {
			return Some(Rejection::TripleLetter);
		}
		if len <= DOUBLING_CHECK_MAX_LEN && len % 2 == 0 && chars[..len / 2] == chars[len / 2..] {
			return Some(Rejection::Doubled);
		}
		if len < ARTIFACT_CHECK_LEN {
			return None;
		}

		let matches = ARTIFACT_SET.matches(text);
		ARTIFACTS
			.iter()
			.enumerate()
			.find(|(i, _)| matches.matched(*i))
			.map(|(_, (_, rejection))| *rejection)
	}
}

impl Default for HeuristicFilter {
	fn default() -> Self {
		Self::new(true)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn applies_every_rule() {
		let filter = HeuristicFilter::default();

		macro_rules! test {
			($word:literal => $res:expr) => {{
				assert_eq!(filter.rejection(&BaseWord::plain($word)), $res, "{}", $word);
			}};
		}

		test!("rental" => None);
		test!("learnt" => None);
		test!("rhythm" => None);
		test!("mix" => None);
		test!("won't" => Some(Rejection::NotAlphabetic));
		test!("x-ray" => Some(Rejection::NotAlphabetic));
		test!("b2b" => Some(Rejection::NotAlphabetic));
		test!("Paris" => Some(Rejection::Capitalized));
		test!("ok" => Some(Rejection::TooShort));
		test!("zzzz" => Some(Rejection::SingleLetter));
		test!("baaad" => Some(Rejection::TripleLetter));
		test!("abab" => Some(Rejection::Doubled));
		test!("effeff" => Some(Rejection::Doubled));
		test!("tsktsktsk" => Some(Rejection::NoVowel));
		test!("grrl" => Some(Rejection::NoVowel));
		test!("aeio" => Some(Rejection::NoConsonant));
		test!("mmxi" => Some(Rejection::RomanNumeral));
		test!("xvii" => Some(Rejection::RomanNumeral));
		test!("rösten" => Some(Rejection::NotAlphabetic));
	}

	#[test]
	fn long_doubling_is_allowed() {
		let filter = HeuristicFilter::default();
		assert!(filter.is_reasonable(&BaseWord::plain("blahblahblah")));
	}

	#[test]
	fn rejects_words_only_seen_capitalized() {
		let filter = HeuristicFilter::default();
		let word = BaseWord {
			text: "nasa",
			casing: Casing::All,
		};
		assert_eq!(filter.rejection(&word), Some(Rejection::Capitalized));
	}

	#[test]
	fn disabled_accepts_everything() {
		let filter = HeuristicFilter::new(false);
		assert!(filter.is_reasonable(&BaseWord::plain("mmxi")));
		assert!(filter.is_reasonable(&BaseWord::plain("a")));
	}
}
