mod cli;
mod settings;
mod workflow;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Result, bail};
use cli::{EXIT_FAILURE, parse_cli, print_outcome};
use workflow::{Action, Workflow};

fn main() -> ExitCode {
	ccd::logging::initialize();
	match run() {
		Ok(code) => code,
		Err(err) => {
			eprintln!("ccd: {err:#}");
			ExitCode::from(EXIT_FAILURE)
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = parse_cli();

	if cli.shell_init {
		let mut stdout = io::stdout().lock();
		stdout.write_all(ccd::SHELL_INIT.as_bytes())?;
		stdout.flush()?;
		return Ok(ExitCode::SUCCESS);
	}

	if cli.list_themes {
		for name in ccd_tui::theme::names() {
			println!("{name}");
		}
		return Ok(ExitCode::SUCCESS);
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let Some(action) = Action::from_cli(&cli) else {
		if cli.print_config {
			return Ok(ExitCode::SUCCESS);
		}
		bail!("nothing to do: pass a PATTERN, --interactive or --bookmark (see --help)");
	};

	let outcome = Workflow::new(resolved, action).run()?;
	Ok(print_outcome(&outcome)?)
}
