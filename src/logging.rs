//! Logger setup for the `ccd-pick` binary.

/// Environment variable holding the log filter, e.g. `CCD_LOG=debug`.
pub const LOG_ENV: &str = "CCD_LOG";

/// Send `log` records to stderr, filtered by `CCD_LOG` (default `warn`).
///
/// stdout carries the chosen path, so nothing is ever logged there.
pub fn initialize() {
	let env = env_logger::Env::default().filter_or(LOG_ENV, "warn");
	let result = env_logger::Builder::from_env(env)
		.target(env_logger::Target::Stderr)
		.format_timestamp(None)
		.try_init();
	if result.is_err() {
		log::debug!("logger already initialized");
	}
}
