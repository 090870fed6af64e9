//! Full-screen terminal front end for the `ccd` picker.
//!
//! The picker renders on stderr so that stdout stays free for the chosen path,
//! which lets a shell function capture it with `$(ccd-pick -i)`.

pub mod keys;
pub mod render;
mod runtime;
pub mod theme;

pub use keys::translate;
pub use runtime::{drive, run};
pub use theme::Theme;
