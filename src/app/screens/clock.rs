//! Plain clock face
//!
//! Large block digits with a status line underneath. Falls back to a single
//! line of text when the terminal is too small for the digits.

use super::digits::{big_text, big_text_width, GLYPH_HEIGHT};
use super::{centered_rows, render_help, status_color};
use crate::{app::render::RenderRequest, APP_NAME};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Plain clock-face screen
#[derive(Debug, Clone)]
pub struct ClockScreen {
    show_help: bool,
}

impl ClockScreen {
    pub fn new(show_help: bool) -> Self {
        Self { show_help }
    }

    /// Render the clock face
    pub fn render(&self, f: &mut Frame, request: &RenderRequest) {
        let size = f.size();
        let help_height = if self.show_help { 1 } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(help_height)])
            .split(size);

        let color = status_color(request.running);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", APP_NAME))
            .border_style(Style::default().fg(color));
        let inner = block.inner(chunks[0]);
        f.render_widget(block, chunks[0]);

        let clock_text = request.clock_text();
        let big_height = GLYPH_HEIGHT as u16 + 2;
        if (inner.width as usize) >= big_text_width(&clock_text) && inner.height >= big_height {
            self.render_big(f, inner, request, &clock_text);
        } else {
            self.render_compact(f, inner, request, &clock_text);
        }

        if self.show_help {
            render_help(f, chunks[1]);
        }
    }

    fn render_big(&self, f: &mut Frame, area: Rect, request: &RenderRequest, clock_text: &str) {
        let rows = centered_rows(area, GLYPH_HEIGHT as u16 + 2);
        let style = Style::default().fg(status_color(request.running));

        let mut lines: Vec<Line> = big_text(clock_text)
            .into_iter()
            .map(|row| Line::styled(row, style))
            .collect();
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            request.status_text(),
            style.add_modifier(Modifier::BOLD),
        ));

        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rows);
    }

    fn render_compact(&self, f: &mut Frame, area: Rect, request: &RenderRequest, clock_text: &str) {
        let rows = centered_rows(area, 2);
        let style = Style::default().fg(status_color(request.running));
        let lines = vec![
            Line::styled(clock_text.to_string(), style.add_modifier(Modifier::BOLD)),
            Line::styled(request.status_text(), Style::default().fg(Color::Gray)),
        ];
        f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::test_support::screen_text;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(width: u16, height: u16, show_help: bool, request: RenderRequest) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let screen = ClockScreen::new(show_help);
        terminal.draw(|f| screen.render(f, &request)).unwrap();
        screen_text(terminal.backend())
    }

    #[test]
    fn test_big_digits_on_roomy_terminal() {
        let text = draw(80, 24, true, RenderRequest::new(8_888, true));
        assert!(text.contains("RUNNING"));
        assert!(text.contains("███"));
        assert!(text.contains("quit"));
        // Large glyphs replace the plain text rendering
        assert!(!text.contains("00:00:08.888"));
    }

    #[test]
    fn test_compact_fallback_on_narrow_terminal() {
        let text = draw(30, 8, false, RenderRequest::new(1_500, false));
        assert!(text.contains("00:00:01.500"));
        assert!(text.contains("STOPPED"));
        assert!(!text.contains("quit"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let text = draw(4, 2, true, RenderRequest::new(42, true));
        assert_eq!(text.lines().count(), 2);
    }
}
