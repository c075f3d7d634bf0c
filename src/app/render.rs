//! Display contract and the ratatui-backed renderer

use crate::{
    app::screens::{ClockScreen, OrbitScreen},
    config::{Scene, StopwatchConfig},
    util::units::TimeParts,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, Stdout};

/// Everything the display needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderRequest {
    pub hours: u64,
    pub minutes: u8,
    pub seconds: u8,
    pub millis: u16,
    pub running: bool,
}

impl RenderRequest {
    /// Build a request from an elapsed millisecond count
    pub fn new(elapsed_ms: u64, running: bool) -> Self {
        let parts = TimeParts::from_millis(elapsed_ms);
        Self {
            hours: parts.hours,
            minutes: parts.minutes,
            seconds: parts.seconds,
            millis: parts.millis,
            running,
        }
    }

    /// Clock-face fields of this request
    pub fn parts(&self) -> TimeParts {
        TimeParts {
            hours: self.hours,
            minutes: self.minutes,
            seconds: self.seconds,
            millis: self.millis,
        }
    }

    /// Elapsed time as `HH:MM:SS.mmm`
    pub fn clock_text(&self) -> String {
        self.parts().to_string()
    }

    /// Status word shown next to the time
    pub fn status_text(&self) -> &'static str {
        if self.running {
            "RUNNING"
        } else {
            "STOPPED"
        }
    }
}

/// Produces the on-screen representation of a frame
///
/// Must return promptly; the loop treats errors as a skipped frame.
pub trait Renderer {
    fn render(&mut self, request: &RenderRequest) -> io::Result<()>;
}

/// Renderer drawing the configured scene through ratatui
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    scene: Scene,
    clock_screen: ClockScreen,
    orbit_screen: OrbitScreen,
}

impl TerminalRenderer<CrosstermBackend<Stdout>> {
    /// Create a renderer on the process stdout
    pub fn stdout(config: &StopwatchConfig) -> io::Result<Self> {
        Self::new(CrosstermBackend::new(io::stdout()), config)
    }
}

impl<B: Backend> TerminalRenderer<B> {
    /// Create a renderer on any ratatui backend
    pub fn new(backend: B, config: &StopwatchConfig) -> io::Result<Self> {
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            scene: config.scene,
            clock_screen: ClockScreen::new(config.show_help),
            orbit_screen: OrbitScreen::new(config.show_help),
        })
    }

    /// Get the underlying backend
    pub fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn render(&mut self, request: &RenderRequest) -> io::Result<()> {
        let scene = self.scene;
        let clock_screen = &self.clock_screen;
        let orbit_screen = &mut self.orbit_screen;
        self.terminal.draw(|f| match scene {
            Scene::Plain => clock_screen.render(f, request),
            Scene::Orbit => orbit_screen.render(f, request),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::test_support::screen_text;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_request_from_millis() {
        let request = RenderRequest::new(3_723_456, true);
        assert_eq!(request.hours, 1);
        assert_eq!(request.minutes, 2);
        assert_eq!(request.seconds, 3);
        assert_eq!(request.millis, 456);
        assert!(request.running);
        assert_eq!(request.clock_text(), "01:02:03.456");
        assert_eq!(request.parts().total_millis(), 3_723_456);
    }

    #[test]
    fn test_status_text() {
        assert_eq!(RenderRequest::new(0, true).status_text(), "RUNNING");
        assert_eq!(RenderRequest::new(0, false).status_text(), "STOPPED");
    }

    #[test]
    fn test_plain_scene_draws_status() {
        let config = StopwatchConfig::plain();
        let mut renderer = TerminalRenderer::new(TestBackend::new(80, 24), &config).unwrap();
        renderer.render(&RenderRequest::new(1_500, false)).unwrap();

        let text = screen_text(renderer.backend());
        assert!(text.contains("STOPPED"));
        assert!(text.contains("space"));
    }

    #[test]
    fn test_orbit_scene_draws_time() {
        let config = StopwatchConfig::orbit();
        let mut renderer = TerminalRenderer::new(TestBackend::new(80, 24), &config).unwrap();
        renderer.render(&RenderRequest::new(61_250, true)).unwrap();

        let text = screen_text(renderer.backend());
        assert!(text.contains("00:01:01.250"));
        assert!(text.contains("RUNNING"));
    }
}
