//! Termination signals
//!
//! Ctrl+C, termination and hang-up requests (SIGINT/SIGTERM/SIGHUP on Unix,
//! console control events on Windows) set a flag the interactive loop checks
//! every tick, so a killed stopwatch still restores the terminal on its way
//! out.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

static TERMINATION_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Whether a termination signal has been received
pub fn termination_requested() -> bool {
    TERMINATION_REQUESTED.load(Ordering::SeqCst)
}

/// Route termination signals to the flag
///
/// Calling this again once a handler is in place is not an error.
pub fn install() -> io::Result<()> {
    match ctrlc::try_set_handler(|| TERMINATION_REQUESTED.store(true, Ordering::SeqCst)) {
        Ok(()) | Err(ctrlc::Error::MultipleHandlers) => Ok(()),
        Err(ctrlc::Error::System(e)) => Err(e),
        Err(e) => Err(io::Error::new(io::ErrorKind::Other, e.to_string())),
    }
}
