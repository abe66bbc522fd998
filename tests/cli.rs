#![cfg(unix)]

use std::{fs, os::unix::fs::PermissionsExt, path::Path, process::Command};

/// Speaks the `hunspell -a` pipe protocol, recognizing a fixed set of words
const FAKE_HUNSPELL: &str = r##"#!/bin/sh
echo "@(#) International Ispell Version 3.2.06 (but really Hunspell 1.7.2)"
while IFS= read -r word; do
	case "$word" in
		learnt|rental|antler|later) echo "*" ;;
		alter) echo "+ alter" ;;
		*) echo "# $word 0" ;;
	esac
	echo
done
"##;

const DIC: &str = "\
8
learnt
rental/S
antler/SM
later
alter/SGD
planets
lanter
Ernst
";

fn write_executable(path: &Path, content: &str) {
	fs::write(path, content).unwrap();
	let mut permissions = fs::metadata(path).unwrap().permissions();
	permissions.set_mode(0o755);
	fs::set_permissions(path, permissions).unwrap();
}

// a single test keeps the fake oracle from being written while another
// thread forks
#[test]
fn cli_solves_and_reports_errors() {
	let exe = env!("CARGO_BIN_EXE_wordwheel");
	let dir = tempfile::tempdir().unwrap();
	let hunspell = dir.path().join("hunspell");
	write_executable(&hunspell, FAKE_HUNSPELL);
	fs::write(dir.path().join("en_US.dic"), DIC).unwrap();
	fs::write(dir.path().join("en_US.aff"), "SET UTF-8\n").unwrap();
	let env_file = dir.path().join("settings.env");
	fs::write(
		&env_file,
		format!(
			"HUNSPELL_DIR={}\nHUNSPELL_DICT_CANDIDATES=en_US\nHUNSPELL_BIN={}\n",
			dir.path().display(),
			hunspell.display()
		),
	)
	.unwrap();

	let wordwheel = || {
		let mut command = Command::new(exe);
		command
			.arg("--env-file")
			.arg(&env_file)
			.env_remove("HUNSPELL_DIR")
			.env_remove("HUNSPELL_DICT_CANDIDATES")
			.env_remove("HUNSPELL_BIN")
			.env_remove("BLACKLIST_PATH")
			.env_remove("MINLEN")
			.env_remove("FILTER_REASONABLE")
			.env_remove("HUNSPELL_DIC_ENCODINGS");
		command
	};

	let output = wordwheel().args(["aelnrst", "e"]).output().unwrap();
	assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
	assert_eq!(
		String::from_utf8_lossy(&output.stdout),
		"antler\nlearnt\nrental\nalter\nlater\n"
	);

	let output = wordwheel().args(["aelnrst", "e", "--report"]).output().unwrap();
	assert!(output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("Valid words     : 5"));
	assert!(stdout.contains("Longest word length: 6"));

	// no solution is still a success
	let output = wordwheel().args(["xyz", "x"]).output().unwrap();
	assert!(output.status.success());
	assert!(output.stdout.is_empty());

	let output = wordwheel().args(["aelnrst", "z"]).output().unwrap();
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("mandatory letter `z`"));

	let output = wordwheel()
		.args(["aelnrst", "e"])
		.env("HUNSPELL_BIN", dir.path().join("missing"))
		.output()
		.unwrap();
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("not installed"));
}
