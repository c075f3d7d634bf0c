//! Runtime settings
//!
//! Settings are fixed per binary; nothing is read from disk or the
//! environment.

use crate::{Result, SwatchError, DEFAULT_TICK_MS};
use std::time::Duration;

/// Stopwatch settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwatchConfig {
    /// Length of one loop iteration (input poll + redraw)
    pub tick_rate: Duration,
    /// Which display scene to draw
    pub scene: Scene,
    /// Whether to show the key hint line
    pub show_help: bool,
}

/// Display scene variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scene {
    /// Large digits and a status line
    #[default]
    Plain,
    /// Starfield with an orbiting body
    Orbit,
}

impl Scene {
    /// Get a human-readable name of the scene
    pub fn description(&self) -> &'static str {
        match self {
            Scene::Plain => "Plain clock",
            Scene::Orbit => "Orbit",
        }
    }
}

impl Default for StopwatchConfig {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(DEFAULT_TICK_MS),
            scene: Scene::Plain,
            show_help: true,
        }
    }
}

impl StopwatchConfig {
    /// Smallest accepted tick
    pub const MIN_TICK: Duration = Duration::from_millis(1);
    /// Largest accepted tick
    pub const MAX_TICK: Duration = Duration::from_secs(1);

    /// Create configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration for the plain clock face
    pub fn plain() -> Self {
        Self {
            scene: Scene::Plain,
            ..Self::default()
        }
    }

    /// Configuration for the starfield variant
    pub fn orbit() -> Self {
        Self {
            scene: Scene::Orbit,
            ..Self::default()
        }
    }

    /// Set the tick length
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    /// Set the scene
    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.scene = scene;
        self
    }

    /// Set whether the key hint line is shown
    pub fn with_show_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.tick_rate < Self::MIN_TICK || self.tick_rate > Self::MAX_TICK {
            return Err(SwatchError::ConfigError(format!(
                "Tick rate must be between {}ms and {}ms, got {}ms",
                Self::MIN_TICK.as_millis(),
                Self::MAX_TICK.as_millis(),
                self.tick_rate.as_millis()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StopwatchConfig::default();
        assert_eq!(config.tick_rate, Duration::from_millis(50));
        assert_eq!(config.scene, Scene::Plain);
        assert!(config.show_help);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(StopwatchConfig::orbit().scene, Scene::Orbit);
        assert_eq!(StopwatchConfig::plain().scene, Scene::Plain);
        assert_eq!(StopwatchConfig::orbit().tick_rate, StopwatchConfig::plain().tick_rate);
    }

    #[test]
    fn test_builder() {
        let config = StopwatchConfig::new()
            .with_tick_rate(Duration::from_millis(20))
            .with_scene(Scene::Orbit)
            .with_show_help(false);
        assert_eq!(config.tick_rate, Duration::from_millis(20));
        assert_eq!(config.scene, Scene::Orbit);
        assert!(!config.show_help);
    }

    #[test]
    fn test_validate_rejects_out_of_range_tick() {
        let zero = StopwatchConfig::new().with_tick_rate(Duration::ZERO);
        assert!(matches!(zero.validate(), Err(SwatchError::ConfigError(_))));

        let slow = StopwatchConfig::new().with_tick_rate(Duration::from_secs(2));
        assert!(matches!(slow.validate(), Err(SwatchError::ConfigError(_))));

        let edge = StopwatchConfig::new().with_tick_rate(StopwatchConfig::MAX_TICK);
        assert!(edge.validate().is_ok());
    }
}
