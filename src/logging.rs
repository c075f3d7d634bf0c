//! Log output setup
//!
//! The display owns the terminal, so logs only go to stderr when stderr has
//! been redirected away from it.

use std::io::{self, IsTerminal};
use tracing::Level;

/// Install the stderr subscriber if stderr is not a terminal
///
/// Returns whether a subscriber was installed.
pub fn init() -> bool {
    if io::stderr().is_terminal() {
        return false;
    }

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .with_ansi(false)
        .try_init()
        .is_ok()
}
