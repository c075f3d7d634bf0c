//! Elapsed-time tracking
//!
//! Pause-aware stopwatch and the monotonic clocks it reads from.

pub mod clock;
pub mod stopwatch;

pub use clock::{Clock, ManualClock, SystemClock};
pub use stopwatch::Stopwatch;
