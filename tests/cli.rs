//! Drives the `ccd-pick` binary against a scripted stand-in for `locate`.
#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

struct Fixture {
	dir: TempDir,
	locate: PathBuf,
	store: PathBuf,
}

impl Fixture {
	/// Lays out `tmp/`, `tmpfs/` and `tmp/notes.txt`, plus a `locate` script
	/// that answers `tmp` with all three, `zzz` with nothing and `boom` with
	/// an error.
	fn new() -> Self {
		let dir = TempDir::new().unwrap();
		let root = dir.path();
		fs::create_dir(root.join("tmp")).unwrap();
		fs::create_dir(root.join("tmpfs")).unwrap();
		fs::write(root.join("tmp/notes.txt"), "notes").unwrap();

		let locate = root.join("fake-locate");
		let script = format!(
			"#!/bin/sh\n\
			 for last; do :; done\n\
			 case \"$last\" in\n\
			   tmp) printf '%s\\n' '{root}/tmpfs' '{root}/tmp' '{root}/tmp/notes.txt' ;;\n\
			   boom) echo 'locate: database unavailable' >&2; exit 1 ;;\n\
			   *) exit 1 ;;\n\
			 esac\n",
			root = root.display()
		);
		fs::write(&locate, script).unwrap();
		fs::set_permissions(&locate, fs::Permissions::from_mode(0o755)).unwrap();

		let store = root.join("frequency");
		Self { dir, locate, store }
	}

	fn path(&self, name: &str) -> String {
		self.dir.path().join(name).display().to_string()
	}

	fn command(&self) -> Command {
		self.command_with_index(&self.locate)
	}

	fn command_with_index(&self, index: &Path) -> Command {
		let mut command = Command::new(env!("CARGO_BIN_EXE_ccd-pick"));
		command
			.arg("--no-config")
			.arg("--index-command")
			.arg(index)
			.env("CCD_FREQUENCY_FILE", &self.store)
			.env("CCD_CONFIG_DIR", self.dir.path().join("config"))
			.env_remove("CCD_CONFIG")
			.env_remove("CCD_LOG");
		command
	}

	fn run(&self, args: &[&str]) -> Output {
		self.command().args(args).output().unwrap()
	}

	fn run_in(&self, cwd: &Path, args: &[&str]) -> Output {
		self.command().current_dir(cwd).args(args).output().unwrap()
	}
}

fn stdout(output: &Output) -> String {
	String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
	String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn direct_mode_prints_only_the_best_path() {
	let fixture = Fixture::new();
	let seeded = format!("# ccd frequency store v1\n4\t{}\n", fixture.path("elsewhere"));
	fs::write(&fixture.store, &seeded).unwrap();

	let output = fixture.run(&["tmp"]);
	assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
	assert_eq!(stdout(&output), fixture.path("tmp"));
	assert!(stderr(&output).contains("1 matching files not shown"));
	assert_eq!(fs::read_to_string(&fixture.store).unwrap(), seeded);
}

#[test]
fn usage_counts_outrank_shorter_paths() {
	let fixture = Fixture::new();
	let store = format!("# ccd frequency store v1\n3\t{}\n", fixture.path("tmpfs"));
	fs::write(&fixture.store, store).unwrap();

	let output = fixture.run(&["tmp"]);
	assert_eq!(output.status.code(), Some(0));
	assert_eq!(stdout(&output), fixture.path("tmpfs"));
	assert!(stderr(&output).contains("(used 3 times)"));
}

#[test]
fn no_match_exits_with_one() {
	let fixture = Fixture::new();
	let output = fixture.run(&["zzz"]);
	assert_eq!(output.status.code(), Some(1));
	assert!(stdout(&output).is_empty());
	assert!(stderr(&output).contains("No directories found matching 'zzz'"));
	assert!(!fixture.store.exists());
}

#[test]
fn index_failure_exits_with_two() {
	let fixture = Fixture::new();
	let output = fixture.run(&["boom"]);
	assert_eq!(output.status.code(), Some(2));
	assert!(stdout(&output).is_empty());
	assert!(stderr(&output).contains("database unavailable"));
}

#[test]
fn missing_index_command_exits_with_two() {
	let fixture = Fixture::new();
	let output = fixture
		.command_with_index(&fixture.dir.path().join("no-such-locate"))
		.arg("tmp")
		.output()
		.unwrap();
	assert_eq!(output.status.code(), Some(2));
	assert!(stderr(&output).contains("unavailable"));
}

#[test]
fn bookmark_counts_the_working_directory() {
	let fixture = Fixture::new();
	let cwd = fixture.dir.path().join("tmp");

	for _ in 0..2 {
		let output = fixture.run_in(&cwd, &["--bookmark"]);
		assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
		assert!(stdout(&output).is_empty());
	}

	let contents = fs::read_to_string(&fixture.store).unwrap();
	assert!(contents.starts_with("# ccd frequency store v1\n"));
	assert!(contents.contains(&format!("2\t{}", cwd.display())));
}

#[test]
fn hidden_increment_records_a_path() {
	let fixture = Fixture::new();
	let target = fixture.path("tmpfs");
	let output = fixture.run(&["--increment", &target]);
	assert_eq!(output.status.code(), Some(0));
	assert!(
		fs::read_to_string(&fixture.store)
			.unwrap()
			.contains(&format!("1\t{target}"))
	);
}

#[test]
fn invalid_limit_is_an_operational_error() {
	let fixture = Fixture::new();
	let output = fixture.run(&["--limit", "0", "tmp"]);
	assert_eq!(output.status.code(), Some(2));
	assert!(stderr(&output).contains("index.limit"));
}

#[test]
fn shell_init_prints_the_wrapper() {
	let fixture = Fixture::new();
	let output = fixture.run(&["--shell-init"]);
	assert_eq!(output.status.code(), Some(0));
	assert!(stdout(&output).contains("ccd()"));
}

#[test]
fn no_arguments_prints_help() {
	let output = Command::new(env!("CARGO_BIN_EXE_ccd-pick"))
		.output()
		.unwrap();
	assert_eq!(output.status.code(), Some(2));
	assert!(stderr(&output).contains("Usage"));
	assert!(output.stdout.is_empty());
}
