//! Termination signals end the loop. Runs in its own process so the global
//! flag cannot leak into other tests.
#![cfg(unix)]

use std::thread;
use std::time::{Duration, Instant};
use swatch::app::{signals, App, LoopState, RenderRequest, Renderer, ScriptedInput};
use swatch::config::StopwatchConfig;

struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _request: &RenderRequest) -> std::io::Result<()> {
        Ok(())
    }
}

/// The handler runs on its own thread, so the flag flips shortly after delivery
fn wait_for_termination_flag() -> bool {
    let deadline = Instant::now() + Duration::from_secs(2);
    while Instant::now() < deadline {
        if signals::termination_requested() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    false
}

#[test]
fn test_sigterm_terminates_watching_loop() {
    signals::install().expect("install handlers");
    signals::install().expect("second install is harmless");
    assert!(!signals::termination_requested());

    // SAFETY: SIGTERM is routed to the installed handler, which only sets a flag.
    let rc = unsafe { libc::raise(libc::SIGTERM) };
    assert_eq!(rc, 0);
    assert!(wait_for_termination_flag());

    let mut ignoring = App::new(&StopwatchConfig::default(), ScriptedInput::default(), NullRenderer)
        .expect("app");
    assert_eq!(ignoring.tick(), LoopState::Active);

    let mut watching = App::new(&StopwatchConfig::default(), ScriptedInput::default(), NullRenderer)
        .expect("app")
        .watch_signals(true);
    watching.run().expect("run");
    assert_eq!(watching.state(), LoopState::Terminated);
    assert_eq!(watching.ticks(), 1);
}
