//! Main application controller
//!
//! Owns the stopwatch and drives the render/poll/dispatch loop.

use crate::{
    app::{
        input::{CrosstermInput, InputSource, NoInput},
        render::{RenderRequest, Renderer, TerminalRenderer},
        signals,
        state::{Command, LoopState, StateManager},
        tui::TerminalGuard,
    },
    config::StopwatchConfig,
    timer::{Clock, Stopwatch, SystemClock},
    Result,
};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Interactive stopwatch loop
pub struct App<I: InputSource, R: Renderer, C: Clock = SystemClock> {
    stopwatch: Stopwatch<C>,
    input: I,
    renderer: R,
    state_manager: StateManager,
    tick_rate: Duration,
    last_tick: Instant,
    ticks: u64,
    render_failures: u64,
    watch_signals: bool,
}

impl<I: InputSource, R: Renderer> App<I, R, SystemClock> {
    /// Create an application with a fresh stopwatch on the system clock
    pub fn new(config: &StopwatchConfig, input: I, renderer: R) -> Result<Self> {
        Self::with_stopwatch(config, Stopwatch::new(), input, renderer)
    }
}

impl<I: InputSource, R: Renderer, C: Clock> App<I, R, C> {
    /// Create an application around an existing stopwatch
    pub fn with_stopwatch(
        config: &StopwatchConfig,
        stopwatch: Stopwatch<C>,
        input: I,
        renderer: R,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            stopwatch,
            input,
            renderer,
            state_manager: StateManager::new(),
            tick_rate: config.tick_rate,
            last_tick: Instant::now(),
            ticks: 0,
            render_failures: 0,
            watch_signals: false,
        })
    }

    /// Also stop when a termination signal has been received
    pub fn watch_signals(mut self, watch: bool) -> Self {
        self.watch_signals = watch;
        self
    }

    /// Run ticks until a quit command arrives
    pub fn run(&mut self) -> Result<()> {
        info!(tick_rate = ?self.tick_rate, "stopwatch loop started");
        while !self.state_manager.should_quit() {
            self.tick();
        }
        info!(
            ticks = self.ticks,
            elapsed = %humantime::format_duration(Duration::from_millis(self.stopwatch.elapsed())),
            "stopwatch loop finished"
        );
        Ok(())
    }

    /// One loop iteration: render, wait for at most one byte, dispatch it
    pub fn tick(&mut self) -> LoopState {
        self.draw();

        let timeout = self
            .tick_rate
            .checked_sub(self.last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if let Some(byte) = self.input.poll_byte(timeout) {
            self.handle_byte(byte);
        }

        if self.last_tick.elapsed() >= self.tick_rate {
            self.last_tick = Instant::now();
        }

        if self.watch_signals && signals::termination_requested() {
            info!("termination signal received");
            self.state_manager.quit();
        }

        self.ticks += 1;
        self.state_manager.current_state()
    }

    /// Apply the command bound to `byte`, if any
    pub fn handle_byte(&mut self, byte: u8) {
        let Some(command) = Command::from_byte(byte) else {
            return;
        };

        match command {
            Command::Toggle => self.stopwatch.toggle(),
            Command::Reset => self.stopwatch.reset(),
            Command::Quit => self.state_manager.quit(),
        }
        debug!(
            ?command,
            running = self.stopwatch.is_running(),
            elapsed_ms = self.stopwatch.elapsed(),
            "command applied"
        );
    }

    /// Snapshot of what the display should show right now
    pub fn render_request(&self) -> RenderRequest {
        RenderRequest::new(self.stopwatch.elapsed(), self.stopwatch.is_running())
    }

    fn draw(&mut self) {
        let request = self.render_request();
        if let Err(e) = self.renderer.render(&request) {
            self.render_failures += 1;
            if self.render_failures == 1 {
                warn!(error = %e, "render failed, continuing");
            } else {
                debug!(error = %e, failures = self.render_failures, "render failed");
            }
        }
    }

    /// Get the stopwatch
    pub fn stopwatch(&self) -> &Stopwatch<C> {
        &self.stopwatch
    }

    /// Get the renderer
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Get the input source
    pub fn input(&self) -> &I {
        &self.input
    }

    /// Get the current loop state
    pub fn state(&self) -> LoopState {
        self.state_manager.current_state()
    }

    /// Ticks completed so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Frames the renderer failed to draw
    pub fn render_failures(&self) -> u64 {
        self.render_failures
    }
}

/// Run the stopwatch on the process terminal until the user quits
pub fn run_interactive(config: StopwatchConfig) -> Result<()> {
    config.validate()?;
    if let Err(e) = signals::install() {
        warn!(error = %e, "could not install signal handlers");
    }

    let mut guard = TerminalGuard::acquire()?;
    let input: Box<dyn InputSource> = if guard.is_interactive() {
        Box::new(CrosstermInput::new())
    } else {
        Box::new(NoInput)
    };
    let renderer = TerminalRenderer::stdout(&config)?;

    info!(scene = config.scene.description(), "starting stopwatch");
    let mut app = App::new(&config, input, renderer)?.watch_signals(true);
    app.run()?;

    if let Err(e) = guard.restore() {
        warn!(error = %e, "terminal restore incomplete");
    }
    Ok(())
}
