//! The external spell-checker every candidate is confirmed with
//!
//! [`Oracle`] is the batch boundary, [`Hunspell`] implements it by driving
//! `hunspell -a` (the Ispell pipe protocol) in a single process.

use nom::{
	branch::alt,
	bytes::complete::{is_not, tag},
	character::complete::{space0, space1, u64 as u64_p},
	combinator::{all_consuming, map},
	multi::separated_list0,
	sequence::{preceded, terminated, tuple},
	IResult,
};
use std::{
	env,
	ffi::OsString,
	fmt, io,
	io::Write,
	path::{Path, PathBuf},
	process::{Command, ExitStatus, Stdio},
	thread,
};

/// Informs why the oracle could not give a verdict for a batch
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
	/// Executable is missing or not executable
	#[error("spell-check oracle `{}` is not installed or not executable", .0.display())]
	Unavailable(PathBuf),

	/// Verdicts do not pair one to one with the words sent
	#[error("oracle answered {got} verdicts for {expected} words")]
	Count {
		/// Words sent
		expected: usize,
		/// Verdicts received
		got: usize,
	},

	/// A blank line came where a verdict was expected
	#[error("oracle answered a blank line for `{word}`")]
	Blank {
		/// Word the verdict belonged to
		word: String,
	},

	/// Line does not follow the verdict grammar
	#[error("unrecognized oracle verdict `{line}`")]
	Grammar {
		/// Offending line
		line: String,
	},

	/// Oracle exited unsuccessfully, its verdicts are not trusted
	#[error("oracle exited with {status}: {stderr}")]
	Failed {
		/// Exit status
		status: ExitStatus,
		/// What the oracle printed on stderr
		stderr: String,
	},

	/// Talking to the oracle process failed
	#[error(transparent)]
	Io(#[from] io::Error),
}

/// Answer of the oracle for a single word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
	/// `*`
	Correct,
	/// `+ ROOT`, correct as an affixed form of `ROOT`
	Affixed(String),
	/// `-`
	Compound,
	/// `& word count offset: suggestions`
	Misspelled(Vec<String>),
	/// `# word offset`
	Unknown,
}

impl Verdict {
	/// Whether the word is accepted as spelled
	#[must_use]
	pub const fn is_valid(&self) -> bool {
		matches!(self, Self::Correct | Self::Affixed(_) | Self::Compound)
	}

	fn parse(i: &str) -> IResult<&str, Self> {
		all_consuming(terminated(
			alt((
				map(tag("*"), |_| Self::Correct),
				map(preceded(tuple((tag("+"), space1)), is_not(" ")), |root: &str| {
					Self::Affixed(root.to_owned())
				}),
				map(tag("-"), |_| Self::Compound),
				map(
					preceded(
						tuple((
							tag("&"),
							space1,
							is_not(" "),
							preceded(space1, u64_p),
							preceded(space1, u64_p),
							tag(":"),
							space0,
						)),
						separated_list0(tag(", "), is_not(",")),
					),
					|suggestions: Vec<&str>| {
						Self::Misspelled(suggestions.into_iter().map(|s| s.trim().to_owned()).collect())
					},
				),
				map(
					tuple((tag("#"), space1, is_not(" "), preceded(space1, u64_p))),
					|_| Self::Unknown,
				),
			)),
			space0,
		))(i)
	}
}

impl fmt::Display for Verdict {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Correct => write!(f, "correct"),
			Self::Affixed(root) => write!(f, "correct, from `{root}`"),
			Self::Compound => write!(f, "correct compound"),
			Self::Misspelled(suggestions) => {
				write!(f, "misspelled, suggesting {}", suggestions.join(", "))
			}
			Self::Unknown => write!(f, "unknown"),
		}
	}
}

/// Anything able to judge a batch of words in one go
pub trait Oracle {
	/// Return one verdict per word, in order.
	///
	/// # Errors
	///
	/// Will error if the oracle cannot be reached or answers outside its
	/// protocol.
	fn check_batch(&self, words: &[&str]) -> Result<Vec<Verdict>, OracleError>;
}

impl<O: Oracle + ?Sized> Oracle for &O {
	fn check_batch(&self, words: &[&str]) -> Result<Vec<Verdict>, OracleError> {
		(**self).check_batch(words)
	}
}

/// `hunspell -a` run once per batch
#[derive(Debug, Clone)]
pub struct Hunspell {
	binary: PathBuf,
	dictionary: String,
	dic_dir: PathBuf,
}

impl Hunspell {
	/// Resolve the `binary` (searching `PATH` for bare names) so a missing
	/// oracle is noticed before any filtering work.
	///
	/// # Errors
	///
	/// Will error with [`OracleError::Unavailable`] if `binary` cannot be
	/// found or executed.
	pub fn new(binary: &Path, dic_dir: &Path, dictionary: &str) -> Result<Self, OracleError> {
		let binary =
			find_executable(binary).ok_or_else(|| OracleError::Unavailable(binary.to_owned()))?;
		log::debug!("using oracle `{}`", binary.display());

		Ok(Self {
			binary,
			dictionary: dictionary.to_owned(),
			dic_dir: dic_dir.to_owned(),
		})
	}

	fn command(&self) -> Command {
		let mut command = Command::new(&self.binary);
		command
			.args(["-a", "-d", &self.dictionary, "-i", "UTF-8"])
			.env("DICPATH", &self.dic_dir)
			.stdin(Stdio::piped())
			.stdout(Stdio::piped())
			.stderr(Stdio::piped());
		command
	}
}

impl Oracle for Hunspell {
	fn check_batch(&self, words: &[&str]) -> Result<Vec<Verdict>, OracleError> {
		// candidates are alphabetic, none can be mistaken for a pipe command
		let input: String = words.iter().map(|w| format!("{w}\n")).collect();

		let mut command = self.command();
		log::debug!("spawning {command:?} for {} words", words.len());
		let mut child = command.spawn().map_err(|err| match err.kind() {
			io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
				OracleError::Unavailable(self.binary.clone())
			}
			_ => OracleError::Io(err),
		})?;

		let mut stdin = child
			.stdin
			.take()
			.ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "oracle stdin is closed"))?;
		// feed from another thread so a full stdout pipe cannot block us
		let writer = thread::spawn(move || stdin.write_all(input.as_bytes()));

		let output = child.wait_with_output()?;
		let written = writer
			.join()
			.map_err(|_| io::Error::other("oracle writer panicked"))?;

		if !output.status.success() {
			return Err(OracleError::Failed {
				status: output.status,
				stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
			});
		}
		written?;

		parse_response(&String::from_utf8_lossy(&output.stdout), words)
	}
}

/// Pair the pipe-mode response back with the `words` that were sent.
///
/// The response is an `@(#)` banner, then for every word its verdict line
/// followed by a blank terminator line.
///
/// # Errors
///
/// Will error if a verdict is blank, malformed, missing or superfluous.
pub fn parse_response(output: &str, words: &[&str]) -> Result<Vec<Verdict>, OracleError> {
	let mut lines = output.lines().peekable();
	if lines.peek().is_some_and(|l| l.starts_with("@(#)")) {
		lines.next();
	}

	let count_err = |got| OracleError::Count {
		expected: words.len(),
		got,
	};

	let mut verdicts = Vec::with_capacity(words.len());
	for word in words {
		let line = lines.next().ok_or_else(|| count_err(verdicts.len()))?;
		if line.trim().is_empty() {
			return Err(OracleError::Blank {
				word: (*word).to_owned(),
			});
		}

		let (_, verdict) = Verdict::parse(line).map_err(|_| OracleError::Grammar {
			line: line.to_owned(),
		})?;
		log::trace!("`{word}` is {verdict}");
		verdicts.push(verdict);

		match lines.next() {
			Some(terminator) if terminator.trim().is_empty() => {}
			// more than one verdict for a single word
			Some(_) => return Err(count_err(verdicts.len() + 1)),
			None => {}
		}
	}

	let extra = lines.filter(|l| !l.trim().is_empty()).count();
	if extra > 0 {
		return Err(count_err(verdicts.len() + extra));
	}

	Ok(verdicts)
}

/// Resolve `binary` the way a shell would
fn find_executable(binary: &Path) -> Option<PathBuf> {
	if binary.components().count() > 1 {
		return is_executable(binary).then(|| binary.to_owned());
	}

	let path = env::var_os("PATH").unwrap_or_else(OsString::new);
	env::split_paths(&path)
		.map(|dir| dir.join(binary))
		.find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
	use std::os::unix::fs::PermissionsExt;

	path.metadata()
		.is_ok_and(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
	path.is_file() || path.with_extension("exe").is_file()
}
