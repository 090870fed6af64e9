//! Support code for the `ccd-pick` binary.
//!
//! The picker itself lives in `ccd-core` and `ccd-tui`; this crate adds the
//! pieces tied to the process environment.

pub mod app_dirs;
pub mod logging;

/// Shell function that wraps `ccd-pick` and performs the actual `cd`.
pub const SHELL_INIT: &str = include_str!("../shell/ccd.sh");
