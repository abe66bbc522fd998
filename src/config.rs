//! Process-wide settings, read once at startup
//!
//! Values come from the environment first, then from a `.env` file.

use encoding_rs::Encoding;
use nom::{
	bytes::complete::{tag, take_while1},
	character::complete::{char as char_p, space0, space1},
	combinator::rest,
	sequence::delimited,
	IResult, Parser,
};
use nom_supreme::ParserExt;
use std::{
	collections::HashMap,
	env, fs, io,
	path::{Path, PathBuf},
};

const DEFAULT_DICT_CANDIDATES: &str = "de_DE_frami,de_DE_neu,de_DE";
const DEFAULT_ENCODINGS: &str = "utf-8,latin-1,cp1252";
const DEFAULT_MIN_LEN: usize = 4;
const DEFAULT_BINARY: &str = "hunspell";
const DEFAULT_DOTENV: &str = ".env";

/// Invalid or unusable configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// Value does not parse as the setting's type
	#[error("`{key}` has an invalid value `{value}`: expected {expected}")]
	Invalid {
		/// Setting name
		key: &'static str,
		/// Value as found
		value: String,
		/// What would have been accepted
		expected: &'static str,
	},

	/// A comma-separated setting holds no item
	#[error("`{key}` lists nothing")]
	EmptyList {
		/// Setting name
		key: &'static str,
	},

	/// Label is not a known text encoding
	#[error("unknown text encoding `{0}`")]
	UnknownEncoding(String),

	/// `BLACKLIST_PATH` is set but cannot be read
	#[error("blacklist `{}` is unreadable: {source}", .path.display())]
	Blacklist {
		/// Configured path
		path: PathBuf,
		/// Why reading failed
		source: io::Error,
	},

	/// The `.env` file exists but cannot be read
	#[error("could not read `{}`: {source}", .path.display())]
	DotEnv {
		/// Path of the `.env` file
		path: PathBuf,
		/// Why reading failed
		source: io::Error,
	},
}

/// Runtime configuration of the solver
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
	/// `HUNSPELL_DIR`
	pub hunspell_dir: PathBuf,
	/// `HUNSPELL_DICT_CANDIDATES`, tried in order
	pub dict_candidates: Vec<String>,
	/// `HUNSPELL_DIC_ENCODINGS`, tried in order
	pub encodings: Vec<&'static Encoding>,
	/// `MINLEN`
	pub min_len: usize,
	/// `FILTER_REASONABLE`
	pub filter_reasonable: bool,
	/// `BLACKLIST_PATH`
	pub blacklist_path: Option<PathBuf>,
	/// `HUNSPELL_BIN`
	pub hunspell_bin: PathBuf,
}

impl Config {
	/// Read the environment, falling back to the `.env` file named by
	/// `DOTENV_PATH` (or `./.env`) when present.
	///
	/// # Errors
	///
	/// Will error if a value is malformed or the `.env` file is unreadable.
	pub fn from_env() -> Result<Self, ConfigError> {
		let dotenv = env::var_os("DOTENV_PATH")
			.map_or_else(|| PathBuf::from(DEFAULT_DOTENV), PathBuf::from);
		Self::from_env_with(&dotenv)
	}

	/// Like [`Config::from_env`] with an explicit `.env` location. A missing
	/// file is not an error.
	///
	/// # Errors
	///
	/// Will error if a value is malformed or the `.env` file is unreadable.
	pub fn from_env_with(dotenv: &Path) -> Result<Self, ConfigError> {
		let file = match fs::read_to_string(dotenv) {
			Ok(content) => {
				log::debug!("reading settings from `{}`", dotenv.display());
				parse_dotenv(&content)
			}
			Err(err) if err.kind() == io::ErrorKind::NotFound => HashMap::new(),
			Err(source) => {
				return Err(ConfigError::DotEnv {
					path: dotenv.to_owned(),
					source,
				})
			}
		};

		Self::from_lookup(|key| env::var(key).ok().or_else(|| file.get(key).cloned()))
	}

	/// Build a configuration from any key lookup, using defaults for keys
	/// it does not know.
	///
	/// # Errors
	///
	/// Will error if a value is malformed.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
		let value = |key: &str| lookup(key).map(|v| v.trim().to_owned());

		let hunspell_dir = value("HUNSPELL_DIR")
			.filter(|v| !v.is_empty())
			.map_or_else(default_hunspell_dir, |v| expand_home(&v));

		let dict_candidates = list(
			"HUNSPELL_DICT_CANDIDATES",
			value("HUNSPELL_DICT_CANDIDATES").as_deref().unwrap_or(DEFAULT_DICT_CANDIDATES),
		)?;

		let mut encodings = Vec::<&'static Encoding>::new();
		for label in list(
			"HUNSPELL_DIC_ENCODINGS",
			value("HUNSPELL_DIC_ENCODINGS").as_deref().unwrap_or(DEFAULT_ENCODINGS),
		)? {
			let encoding = encoding_for(&label).ok_or(ConfigError::UnknownEncoding(label))?;
			// several labels name the same decoder, e.g. `latin-1` and `cp1252`
			if !encodings.contains(&encoding) {
				encodings.push(encoding);
			}
		}

		let min_len = match value("MINLEN") {
			None => DEFAULT_MIN_LEN,
			Some(v) => v.parse().map_err(|_| ConfigError::Invalid {
				key: "MINLEN",
				value: v.clone(),
				expected: "a non-negative integer",
			})?,
		};

		let filter_reasonable = match value("FILTER_REASONABLE") {
			None => true,
			Some(v) => parse_bool(&v).ok_or(ConfigError::Invalid {
				key: "FILTER_REASONABLE",
				value: v.clone(),
				expected: "a boolean",
			})?,
		};

		let blacklist_path = value("BLACKLIST_PATH")
			.filter(|v| !v.is_empty())
			.map(|v| expand_home(&v));

		let hunspell_bin = value("HUNSPELL_BIN")
			.filter(|v| !v.is_empty())
			.map_or_else(|| PathBuf::from(DEFAULT_BINARY), |v| expand_home(&v));

		Ok(Self {
			hunspell_dir,
			dict_candidates,
			encodings,
			min_len,
			filter_reasonable,
			blacklist_path,
			hunspell_bin,
		})
	}
}

impl Default for Config {
	fn default() -> Self {
		Self {
			hunspell_dir: default_hunspell_dir(),
			dict_candidates: DEFAULT_DICT_CANDIDATES.split(',').map(ToOwned::to_owned).collect(),
			encodings: vec![encoding_rs::UTF_8, encoding_rs::WINDOWS_1252],
			min_len: DEFAULT_MIN_LEN,
			filter_reasonable: true,
			blacklist_path: None,
			hunspell_bin: PathBuf::from(DEFAULT_BINARY),
		}
	}
}

fn list(key: &'static str, raw: &str) -> Result<Vec<String>, ConfigError> {
	let items: Vec<String> = raw
		.split(',')
		.map(str::trim)
		.filter(|s| !s.is_empty())
		.map(ToOwned::to_owned)
		.collect();

	if items.is_empty() {
		Err(ConfigError::EmptyList { key })
	} else {
		Ok(items)
	}
}

fn parse_bool(value: &str) -> Option<bool> {
	match value.to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "y" | "on" => Some(true),
		"0" | "false" | "no" | "n" | "off" => Some(false),
		_ => None,
	}
}

/// Resolve a WHATWG label, also accepting spellings like `latin-1`
#[must_use]
pub fn encoding_for(label: &str) -> Option<&'static Encoding> {
	Encoding::for_label(label.as_bytes()).or_else(|| {
		let squashed: String = label.chars().filter(|c| !matches!(c, '-' | '_')).collect();
		Encoding::for_label(squashed.as_bytes())
	})
}

fn expand_home(path: &str) -> PathBuf {
	match (path.strip_prefix('~'), dirs::home_dir()) {
		(Some(rest), Some(home)) if rest.is_empty() || rest.starts_with('/') => {
			home.join(rest.trim_start_matches('/'))
		}
		_ => PathBuf::from(path),
	}
}

#[cfg(target_os = "macos")]
fn default_hunspell_dir() -> PathBuf {
	dirs::home_dir()
		.unwrap_or_else(|| PathBuf::from("/"))
		.join("Library/Spelling")
}

#[cfg(not(target_os = "macos"))]
fn default_hunspell_dir() -> PathBuf {
	PathBuf::from("/usr/share/hunspell")
}

/// Parse `KEY=VALUE` lines. Comments, blank lines and malformed lines are
/// skipped; the first assignment of a key wins.
#[must_use]
pub fn parse_dotenv(content: &str) -> HashMap<String, String> {
	let mut vars = HashMap::new();
	for line in content.lines() {
		let line = line.trim();
		if line.is_empty() || line.starts_with('#') {
			continue;
		}

		match assignment(line) {
			Ok((_, (key, value))) => {
				vars.entry(key.to_owned()).or_insert_with(|| unquote(value).to_owned());
			}
			Err(_) => log::trace!("skipping malformed .env line `{line}`"),
		}
	}
	vars
}

/// `[export ]KEY = value`
fn assignment(i: &str) -> IResult<&str, (&str, &str)> {
	tag("export")
		.terminated(space1)
		.opt()
		.precedes(take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_'))
		.terminated(delimited(space0, char_p('='), space0))
		.and(rest)
		.parse(i)
}

fn unquote(value: &str) -> &str {
	value.trim().trim_matches(|c| c == '"' || c == '\'')
}

#[cfg(test)]
mod tests {
	use super::*;

	fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
		move |key: &str| {
			pairs
				.iter()
				.find(|(k, _)| *k == key)
				.map(|(_, v)| (*v).to_owned())
		}
	}

	#[test]
	fn defaults_apply_to_missing_keys() {
		let config = Config::from_lookup(lookup(&[])).unwrap();
		assert_eq!(config.dict_candidates, ["de_DE_frami", "de_DE_neu", "de_DE"]);
		assert_eq!(config.min_len, 4);
		assert!(config.filter_reasonable);
		assert_eq!(config.blacklist_path, None);
		assert_eq!(config.hunspell_bin, PathBuf::from("hunspell"));
		assert_eq!(config.encodings, [encoding_rs::UTF_8, encoding_rs::WINDOWS_1252]);
		assert_eq!(config, Config::default());
	}

	#[test]
	fn reads_every_key() {
		let config = Config::from_lookup(lookup(&[
			("HUNSPELL_DIR", "/opt/dicts"),
			("HUNSPELL_DICT_CANDIDATES", " en_GB , en_US.dic ,"),
			("HUNSPELL_DIC_ENCODINGS", "ISO8859-15"),
			("MINLEN", "5"),
			("FILTER_REASONABLE", "Off"),
			("BLACKLIST_PATH", "/tmp/blacklist.txt"),
			("HUNSPELL_BIN", "/usr/local/bin/hunspell"),
		]))
		.unwrap();

		assert_eq!(config.hunspell_dir, PathBuf::from("/opt/dicts"));
		assert_eq!(config.dict_candidates, ["en_GB", "en_US.dic"]);
		assert_eq!(config.encodings, [encoding_rs::ISO_8859_15]);
		assert_eq!(config.min_len, 5);
		assert!(!config.filter_reasonable);
		assert_eq!(config.blacklist_path, Some(PathBuf::from("/tmp/blacklist.txt")));
		assert_eq!(config.hunspell_bin, PathBuf::from("/usr/local/bin/hunspell"));
	}

	#[test]
	fn malformed_values_are_errors() {
		macro_rules! test {
			($key:literal = $value:literal => $err:pat) => {{
				let res = Config::from_lookup(lookup(&[($key, $value)]));
				assert!(matches!(res, Err($err)), "{} = {}: {res:?}", $key, $value);
			}};
		}

		test!("MINLEN" = "four" => ConfigError::Invalid { key: "MINLEN", .. });
		test!("MINLEN" = "-1" => ConfigError::Invalid { key: "MINLEN", .. });
		test!("FILTER_REASONABLE" = "maybe" => ConfigError::Invalid { key: "FILTER_REASONABLE", .. });
		test!("HUNSPELL_DIC_ENCODINGS" = "utf-8,klingon" => ConfigError::UnknownEncoding(_));
		test!("HUNSPELL_DICT_CANDIDATES" = " , " => ConfigError::EmptyList { .. });
	}

	#[test]
	fn resolves_python_style_labels() {
		assert_eq!(encoding_for("latin-1"), Some(encoding_rs::WINDOWS_1252));
		assert_eq!(encoding_for("UTF_8"), Some(encoding_rs::UTF_8));
		assert_eq!(encoding_for("cp1252"), Some(encoding_rs::WINDOWS_1252));
		assert_eq!(encoding_for("klingon"), None);
	}

	#[test]
	fn parses_dotenv_files() {
		let vars = parse_dotenv(
			"\
# solver settings
HUNSPELL_DIR=\"/opt/dicts\"
export MINLEN = 5
FILTER_REASONABLE='no'
not an assignment
MINLEN=7
",
		);

		assert_eq!(vars.len(), 3);
		assert_eq!(vars["HUNSPELL_DIR"], "/opt/dicts");
		assert_eq!(vars["MINLEN"], "5");
		assert_eq!(vars["FILTER_REASONABLE"], "no");
	}

	#[test]
	fn dotenv_fills_unset_keys() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join(".env");
		fs::write(&path, "HUNSPELL_DICT_CANDIDATES=xx_XX_dotenv_only\n").unwrap();

		let config = Config::from_env_with(&path).unwrap();
		assert_eq!(config.dict_candidates, ["xx_XX_dotenv_only"]);
	}

	#[test]
	fn missing_dotenv_is_fine() {
		let dir = tempfile::tempdir().unwrap();
		assert!(Config::from_env_with(&dir.path().join(".env")).is_ok());
	}
}
