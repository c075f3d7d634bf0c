//! Keyboard input sources
//!
//! Every source offers the same capability: wait up to a timeout for one
//! byte of input. The interactive loop never needs to know which platform
//! mechanism sits behind it.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::VecDeque;
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Source of single input bytes
pub trait InputSource {
    /// Wait at most `timeout` for one byte.
    ///
    /// Read failures are reported as `None`; they never abort the caller.
    fn poll_byte(&mut self, timeout: Duration) -> Option<u8>;
}

impl<T: InputSource + ?Sized> InputSource for Box<T> {
    fn poll_byte(&mut self, timeout: Duration) -> Option<u8> {
        (**self).poll_byte(timeout)
    }
}

/// Terminal keyboard via crossterm's event queue
///
/// Expects raw mode to be enabled by the caller.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl CrosstermInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for CrosstermInput {
    fn poll_byte(&mut self, timeout: Duration) -> Option<u8> {
        match event::poll(timeout) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key)) => key_to_byte(key),
                Ok(_) => None,
                Err(err) => {
                    debug!(error = %err, "failed to read terminal event");
                    None
                }
            },
            Ok(false) => None,
            Err(err) => {
                debug!(error = %err, "failed to poll terminal events");
                // Keep the tick length even when polling fails outright.
                thread::sleep(timeout);
                None
            }
        }
    }
}

/// Translate a key event into the byte a raw-mode terminal would deliver
pub fn key_to_byte(key: KeyEvent) -> Option<u8> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if c.is_ascii_alphabetic() {
                Some(c.to_ascii_lowercase() as u8 & 0x1f)
            } else {
                None
            }
        }
        KeyCode::Char(c) if c.is_ascii() => Some(c as u8),
        KeyCode::Enter => Some(b'\r'),
        KeyCode::Tab => Some(b'\t'),
        KeyCode::Backspace => Some(0x7f),
        KeyCode::Esc => Some(0x1b),
        _ => None,
    }
}

/// Input for a non-interactive stdin: never yields a byte
///
/// Still waits out the timeout so the loop keeps its cadence.
#[derive(Debug, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn poll_byte(&mut self, timeout: Duration) -> Option<u8> {
        thread::sleep(timeout);
        None
    }
}

/// Pre-recorded input, delivered one byte per poll in order
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    pending: VecDeque<u8>,
}

impl ScriptedInput {
    pub fn new(bytes: impl IntoIterator<Item = u8>) -> Self {
        Self {
            pending: bytes.into_iter().collect(),
        }
    }

    /// Queue another byte behind the existing ones
    pub fn push(&mut self, byte: u8) {
        self.pending.push_back(byte);
    }

    /// Bytes not yet delivered
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_byte(&mut self, _timeout: Duration) -> Option<u8> {
        self.pending.pop_front()
    }
}
