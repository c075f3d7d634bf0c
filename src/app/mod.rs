//! TUI application module
//!
//! Contains the interactive loop, input sources, terminal mode handling
//! and the display scenes.

pub mod app;
pub mod input;
pub mod render;
pub mod screens;
pub mod signals;
pub mod state;
pub mod tui;

pub use app::{run_interactive, App};
pub use input::{CrosstermInput, InputSource, NoInput, ScriptedInput};
pub use render::{RenderRequest, Renderer, TerminalRenderer};
pub use screens::{ClockScreen, OrbitScreen};
pub use state::{Command, LoopState, StateManager};
pub use tui::TerminalGuard;
