//! wordwheel CLI
//!
//! Example puzzle: `wordwheel aelnrst e`

use clap::Parser;
use std::{path::PathBuf, process::ExitCode};
use wordwheel::{Config, Solution, Solver};

/// Words shown with `--report`
const REPORT_TOP: usize = 30;

#[derive(clap::Parser)]
#[command(version, about)]
struct Args {
	/// Letters on the wheel, repeated as often as they appear
	letters: String,

	/// Letter every answer must contain
	mandatory: String,

	/// Settings file read after the environment [default: .env]
	#[arg(long, env = "DOTENV_PATH")]
	env_file: Option<PathBuf>,

	/// Print pangrams, longest words and a summary instead of a plain list
	#[arg(long, short)]
	report: bool,
}

fn main() -> ExitCode {
	pretty_env_logger::init();

	let args = Args::parse();

	match run(&args) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("error: {err}");
			ExitCode::FAILURE
		}
	}
}

fn run(args: &Args) -> Result<(), wordwheel::Error> {
	let config = match &args.env_file {
		Some(path) => Config::from_env_with(path)?,
		None => Config::from_env()?,
	};
	let solver = Solver::new(&config)?;
	let solution = solver.solve(&args.letters, &args.mandatory)?;

	if args.report {
		print_report(args, &solution);
	} else {
		solution.words.iter().for_each(|w| println!("{w}"));
	}
	Ok(())
}

fn print_report(args: &Args, solution: &Solution) {
	println!(
		"Prefiltered candidates: {} (from {} base words)",
		solution.candidates, solution.base_words
	);
	println!();
	println!("Allowed letters : {}", args.letters.trim().to_lowercase());
	println!("Mandatory letter: {}", args.mandatory.trim().to_lowercase());
	println!("Valid words     : {}", solution.words.len());

	println!();
	println!("Pangrams:");
	for word in &solution.pangrams {
		println!("  {word}");
	}

	if !solution.is_empty() {
		println!();
		println!("Longest word length: {}", solution.max_len());
		println!("Longest word(s):");
		for word in solution.longest() {
			println!("  {word}");
		}
	}

	println!();
	println!("Top {REPORT_TOP} words:");
	for word in solution.words.iter().take(REPORT_TOP) {
		println!("  {word} ({})", word.chars().count());
	}
}
