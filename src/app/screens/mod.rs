//! Screen components for the two display scenes

pub mod clock;
pub mod digits;
pub mod orbit;

pub use clock::ClockScreen;
pub use orbit::OrbitScreen;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Colour used for the time and status in each state
pub(crate) fn status_color(running: bool) -> Color {
    if running {
        Color::Green
    } else {
        Color::Yellow
    }
}

/// Key hint line shared by both scenes
pub(crate) fn render_help(f: &mut Frame, area: Rect) {
    let help = Line::from(vec![
        Span::styled("space", Style::default().fg(Color::Cyan)),
        Span::raw(" start/stop  "),
        Span::styled("r", Style::default().fg(Color::Cyan)),
        Span::raw(" reset  "),
        Span::styled("q", Style::default().fg(Color::Cyan)),
        Span::raw(" quit"),
    ]);
    f.render_widget(Paragraph::new(help).alignment(Alignment::Center), area);
}

/// Sub-rectangle of `height` rows, vertically centered in `area`
pub(crate) fn centered_rows(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        x: area.x,
        y: area.y + (area.height - height) / 2,
        width: area.width,
        height,
    }
}
