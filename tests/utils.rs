#![allow(dead_code)]

use std::{cell::Cell, collections::HashSet, fs, path::Path};
use wordwheel::{Config, Oracle, OracleError, Verdict};

/// A small English word list in Hunspell format
pub(crate) const ENGLISH_DIC: &str = "\
24
learnt
rental/S
antler/SM
alert/SGD
later
alter/SGD
planets
planet/SM
longie
fling/SG
golf/SGD
foil/SGD
life
ten
Ernst
NASA
lantern/SM
artel
ratel
taler
sternal
antlers
renal
lent
";

/// Recognizes a fixed set of words and counts how often it was called
pub(crate) struct FakeOracle {
	known: HashSet<&'static str>,
	pub(crate) calls: Cell<usize>,
	pub(crate) words_seen: Cell<usize>,
}

impl FakeOracle {
	pub(crate) fn new(known: &[&'static str]) -> Self {
		Self {
			known: known.iter().copied().collect(),
			calls: Cell::new(0),
			words_seen: Cell::new(0),
		}
	}
}

impl Oracle for FakeOracle {
	fn check_batch(&self, words: &[&str]) -> Result<Vec<Verdict>, OracleError> {
		self.calls.set(self.calls.get() + 1);
		self.words_seen.set(self.words_seen.get() + words.len());

		Ok(words
			.iter()
			.map(|w| {
				if self.known.contains(w) {
					Verdict::Correct
				} else {
					Verdict::Misspelled(vec![])
				}
			})
			.collect())
	}
}

/// Write `en_US.dic`/`en_US.aff` into `dir` and point a configuration at them
pub(crate) fn english_dictionary(dir: &Path) -> Config {
	fs::write(dir.join("en_US.dic"), ENGLISH_DIC).unwrap();
	fs::write(dir.join("en_US.aff"), "SET UTF-8\nTRY esianrtolcdugmphbyfvkwzESIANRTOLCDUGMPHBYFVKWZ'\n")
		.unwrap();

	Config {
		hunspell_dir: dir.to_owned(),
		dict_candidates: vec!["en_GB".into(), "en_US".into()],
		..Config::default()
	}
}
