//! Loop state and command decoding
//!
//! Maps raw input bytes to stopwatch commands and tracks whether the
//! interactive loop should keep running.

/// Interactive loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    /// Rendering and polling
    #[default]
    Active,
    /// Quit received; the loop exits after the current tick
    Terminated,
}

/// Commands that can be triggered by a key byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start if stopped, stop if running (space)
    Toggle,
    /// Zero the stopwatch (r, R)
    Reset,
    /// Leave the loop (q, Q)
    Quit,
}

impl Command {
    /// Decode a single input byte; bytes without a binding yield `None`
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b' ' => Some(Command::Toggle),
            b'r' | b'R' => Some(Command::Reset),
            b'q' | b'Q' => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Loop state holder
#[derive(Debug, Default)]
pub struct StateManager {
    current_state: LoopState,
}

impl StateManager {
    /// Create a new state manager in the active state
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current loop state
    pub fn current_state(&self) -> LoopState {
        self.current_state
    }

    /// Check if the loop should exit
    pub fn should_quit(&self) -> bool {
        self.current_state == LoopState::Terminated
    }

    /// Move to the terminal state
    pub fn quit(&mut self) {
        self.current_state = LoopState::Terminated;
    }
}
