//! Terminal mode management
//!
//! Acquires raw mode, the alternate screen and a hidden cursor, and gives
//! them back on every exit path: explicit restore, drop, or panic. Whichever
//! path runs first does the restore; the others find nothing left to undo.

use crate::{Result, SwatchError};
use crossterm::{
    cursor, execute,
    terminal::{self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, IsTerminal, Write};
use std::mem;
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;
use tracing::{debug, info};

static PANIC_HOOK: Once = Once::new();

/// Alternate screen entered and not yet left
static SCREEN_ACTIVE: AtomicBool = AtomicBool::new(false);
/// Raw mode enabled and not yet disabled
static RAW_MODE_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Holds the terminal in stopwatch mode until dropped
#[derive(Debug)]
pub struct TerminalGuard {
    raw_mode: bool,
    screen: bool,
}

impl TerminalGuard {
    /// Put the terminal into stopwatch mode
    ///
    /// Raw mode is only requested when stdin is a terminal; otherwise the
    /// stopwatch runs as a passive display. Failing to enable raw mode on a
    /// real terminal is fatal.
    pub fn acquire() -> Result<Self> {
        install_panic_hook();

        let mut guard = Self {
            raw_mode: false,
            screen: false,
        };

        if io::stdin().is_terminal() {
            enable_raw_mode()
                .map_err(|e| SwatchError::TerminalError(format!("cannot enable raw mode: {}", e)))?;
            RAW_MODE_ACTIVE.store(true, Ordering::SeqCst);
            guard.raw_mode = true;
        } else {
            info!("stdin is not a terminal, running as a passive display");
        }

        // On error the guard is dropped here and undoes raw mode.
        guard
            .enter_screen(&mut io::stdout())
            .map_err(|e| SwatchError::TerminalError(format!("cannot prepare screen: {}", e)))?;

        debug!(raw_mode = guard.raw_mode, "terminal acquired");
        Ok(guard)
    }

    /// Whether keystrokes are delivered unbuffered
    pub fn is_interactive(&self) -> bool {
        self.raw_mode
    }

    /// Restore terminal to original state; safe to call more than once
    pub fn restore(&mut self) -> io::Result<()> {
        self.restore_to(&mut io::stdout())
    }

    fn enter_screen<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        execute!(
            out,
            EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )?;
        SCREEN_ACTIVE.store(true, Ordering::SeqCst);
        self.screen = true;
        Ok(())
    }

    fn restore_to<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let screen = if mem::take(&mut self.screen) {
            release_screen(out)
        } else {
            Ok(())
        };
        let raw = if mem::take(&mut self.raw_mode) {
            release_raw_mode()
        } else {
            Ok(())
        };
        screen.and(raw)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Ensure terminal is restored even if restore() wasn't called
        let _ = self.restore();
    }
}

/// Clear, show the cursor and leave the alternate screen, unless already done
fn release_screen<W: Write>(out: &mut W) -> io::Result<()> {
    if !SCREEN_ACTIVE.swap(false, Ordering::SeqCst) {
        return Ok(());
    }
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::Show,
        LeaveAlternateScreen
    )?;
    out.flush()
}

fn release_raw_mode() -> io::Result<()> {
    if RAW_MODE_ACTIVE.swap(false, Ordering::SeqCst) {
        disable_raw_mode()
    } else {
        Ok(())
    }
}

/// Restore the terminal before the default panic message is printed
///
/// The guard dropped during unwinding then finds nothing to restore, so the
/// message is not cleared away.
fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = release_screen(&mut io::stdout());
            let _ = release_raw_mode();
            previous(info);
        }));
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{
        app::App,
        input::ScriptedInput,
        render::{RenderRequest, Renderer},
        state::LoopState,
    };
    use crate::config::StopwatchConfig;
    use std::sync::{Mutex, MutexGuard};

    const CLEAR_ALL: &str = "\x1b[2J";
    const SHOW_CURSOR: &str = "\x1b[?25h";
    const HIDE_CURSOR: &str = "\x1b[?25l";
    const ENTER_ALT_SCREEN: &str = "\x1b[?1049h";
    const LEAVE_ALT_SCREEN: &str = "\x1b[?1049l";

    // Tests below share the process-wide screen flag
    static SCREEN_LOCK: Mutex<()> = Mutex::new(());

    fn lock_screen() -> MutexGuard<'static, ()> {
        SCREEN_LOCK.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// A guard in the alternate screen without touching the real terminal
    fn entered_guard() -> (TerminalGuard, String) {
        let mut guard = TerminalGuard {
            raw_mode: false,
            screen: false,
        };
        let mut out = Vec::new();
        guard.enter_screen(&mut out).unwrap();
        (guard, String::from_utf8(out).unwrap())
    }

    fn restore_output(guard: &mut TerminalGuard) -> String {
        let mut out = Vec::new();
        guard.restore_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    struct NullRenderer;

    impl Renderer for NullRenderer {
        fn render(&mut self, _request: &RenderRequest) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_restore_is_idempotent_when_nothing_acquired() {
        let _lock = lock_screen();
        let mut guard = TerminalGuard {
            raw_mode: false,
            screen: false,
        };
        assert!(!guard.is_interactive());
        assert_eq!(restore_output(&mut guard), "");
        assert_eq!(restore_output(&mut guard), "");
    }

    #[test]
    fn test_enter_hides_cursor_in_alternate_screen() {
        let _lock = lock_screen();
        let (mut guard, entered) = entered_guard();
        assert!(entered.contains(ENTER_ALT_SCREEN));
        assert!(entered.contains(HIDE_CURSOR));
        restore_output(&mut guard);
    }

    #[test]
    fn test_restore_shows_cursor_and_leaves_screen_once() {
        let _lock = lock_screen();
        let (mut guard, _) = entered_guard();

        let first = restore_output(&mut guard);
        assert_eq!(first.matches(CLEAR_ALL).count(), 1);
        assert_eq!(first.matches(SHOW_CURSOR).count(), 1);
        assert_eq!(first.matches(LEAVE_ALT_SCREEN).count(), 1);

        assert_eq!(restore_output(&mut guard), "");
    }

    #[test]
    fn test_guard_restore_after_panic_hook_writes_nothing() {
        let _lock = lock_screen();
        let (mut guard, _) = entered_guard();

        // What the panic hook emits before the panic message
        let mut hook_out = Vec::new();
        release_screen(&mut hook_out).unwrap();
        let hook_out = String::from_utf8(hook_out).unwrap();
        assert!(hook_out.contains(LEAVE_ALT_SCREEN));

        // The guard dropped while unwinding must not clear the message away
        let after = restore_output(&mut guard);
        assert!(!after.contains(CLEAR_ALL));
        assert_eq!(after, "");
    }

    #[test]
    fn test_quit_while_running_leaves_terminal_restored() {
        let _lock = lock_screen();
        let (mut guard, _) = entered_guard();

        let mut app = App::new(&StopwatchConfig::default(), ScriptedInput::new(*b" q"), NullRenderer)
            .unwrap();
        app.run().unwrap();
        assert_eq!(app.state(), LoopState::Terminated);
        assert!(app.stopwatch().is_running());

        let restored = restore_output(&mut guard);
        assert!(restored.contains(CLEAR_ALL));
        assert!(restored.contains(SHOW_CURSOR));
        assert!(restored.ends_with(LEAVE_ALT_SCREEN));
    }
}
