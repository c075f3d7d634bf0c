//! Starfield scene
//!
//! A twinkling starfield with two bodies in orbit around the time readout:
//! the outer one completes a lap every minute of elapsed time, the inner one
//! every second.

use super::{render_help, status_color};
use crate::{app::render::RenderRequest, APP_NAME};
use rand::{rngs::SmallRng, Rng, SeedableRng};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Points},
        Block, Borders,
    },
    Frame,
};
use std::f64::consts::TAU;

const STAR_COUNT: usize = 120;
const STAR_SEED: u64 = 0x5eed_0f_57a2;
const TWINKLE_PERIOD: u64 = 16;
const OUTER_RADIUS: f64 = 0.75;
const INNER_RADIUS: f64 = 0.45;

#[derive(Debug, Clone, Copy)]
struct Star {
    x: f64,
    y: f64,
    phase: u64,
}

/// Orbit scene with its own animation frame counter
#[derive(Debug, Clone)]
pub struct OrbitScreen {
    stars: Vec<Star>,
    frame: u64,
    show_help: bool,
}

impl OrbitScreen {
    pub fn new(show_help: bool) -> Self {
        let mut rng = SmallRng::seed_from_u64(STAR_SEED);
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                x: rng.gen_range(-1.0..1.0),
                y: rng.gen_range(-1.0..1.0),
                phase: rng.gen_range(0..TWINKLE_PERIOD),
            })
            .collect();

        Self {
            stars,
            frame: 0,
            show_help,
        }
    }

    /// Frames drawn so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Render the scene and advance the animation by one frame
    pub fn render(&mut self, f: &mut Frame, request: &RenderRequest) {
        let size = f.size();
        let help_height = if self.show_help { 1 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(help_height)])
            .split(size);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", APP_NAME))
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(chunks[0]);

        let (bright, dim) = self.visible_stars();
        let (outer, inner_body) = body_positions(request);
        let body_color = status_color(request.running);

        let clock_text = request.clock_text();
        let status = request.status_text();
        // One terminal cell in canvas units, to center the text
        let cell_w = 2.0 / f64::from(inner.width.max(1));
        let cell_h = 2.0 / f64::from(inner.height.max(1));
        let clock_x = -(clock_text.len() as f64) * cell_w / 2.0;
        let status_x = -(status.len() as f64) * cell_w / 2.0;

        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds([-1.0, 1.0])
            .y_bounds([-1.0, 1.0])
            .paint(|ctx| {
                ctx.draw(&Points {
                    coords: &dim,
                    color: Color::DarkGray,
                });
                ctx.draw(&Points {
                    coords: &bright,
                    color: Color::White,
                });
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: OUTER_RADIUS,
                    color: Color::Blue,
                });
                ctx.layer();
                ctx.draw(&Points {
                    coords: &body_cluster(outer),
                    color: body_color,
                });
                ctx.draw(&Points {
                    coords: &body_cluster(inner_body),
                    color: Color::Cyan,
                });
                ctx.print(
                    clock_x,
                    cell_h / 2.0,
                    Line::from(Span::styled(
                        clock_text.clone(),
                        Style::default().fg(body_color).add_modifier(Modifier::BOLD),
                    )),
                );
                ctx.print(
                    status_x,
                    -cell_h,
                    Line::from(Span::styled(status, Style::default().fg(Color::Gray))),
                );
            });

        f.render_widget(canvas, chunks[0]);
        if self.show_help {
            render_help(f, chunks[1]);
        }

        self.frame = self.frame.wrapping_add(1);
    }

    /// Stars split into (bright, dim) for the current frame
    fn visible_stars(&self) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
        let mut bright = Vec::new();
        let mut dim = Vec::new();
        for star in &self.stars {
            match (self.frame + star.phase) % TWINKLE_PERIOD {
                0 => {}
                1 | 2 => bright.push((star.x, star.y)),
                _ => dim.push((star.x, star.y)),
            }
        }
        (bright, dim)
    }
}

/// Positions of the (outer, inner) bodies; angle zero is twelve o'clock
fn body_positions(request: &RenderRequest) -> ((f64, f64), (f64, f64)) {
    let within_minute = u64::from(request.seconds) * 1000 + u64::from(request.millis);
    let outer_angle = TAU * within_minute as f64 / 60_000.0;
    let inner_angle = TAU * f64::from(request.millis) / 1000.0;
    (
        (OUTER_RADIUS * outer_angle.sin(), OUTER_RADIUS * outer_angle.cos()),
        (INNER_RADIUS * inner_angle.sin(), INNER_RADIUS * inner_angle.cos()),
    )
}

/// A small plus-shaped cluster so a body reads larger than a star
fn body_cluster((x, y): (f64, f64)) -> Vec<(f64, f64)> {
    const D: f64 = 0.02;
    vec![(x, y), (x + D, y), (x - D, y), (x, y + D), (x, y - D)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::test_support::screen_text;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_starfield_is_deterministic() {
        let a = OrbitScreen::new(true);
        let b = OrbitScreen::new(true);
        assert_eq!(a.stars.len(), STAR_COUNT);
        for (sa, sb) in a.stars.iter().zip(&b.stars) {
            assert_eq!((sa.x, sa.y, sa.phase), (sb.x, sb.y, sb.phase));
        }
    }

    #[test]
    fn test_twinkle_hides_some_stars() {
        let screen = OrbitScreen::new(false);
        let (bright, dim) = screen.visible_stars();
        let hidden = STAR_COUNT - bright.len() - dim.len();
        let expected_hidden = screen.stars.iter().filter(|s| s.phase == 0).count();
        assert_eq!(hidden, expected_hidden);
    }

    #[test]
    fn test_body_positions() {
        let (outer, inner) = body_positions(&RenderRequest::new(0, true));
        assert!((outer.0).abs() < 1e-9);
        assert!((outer.1 - OUTER_RADIUS).abs() < 1e-9);
        assert!((inner.1 - INNER_RADIUS).abs() < 1e-9);

        // A quarter of a minute puts the outer body at three o'clock
        let (outer, _) = body_positions(&RenderRequest::new(15_000, true));
        assert!((outer.0 - OUTER_RADIUS).abs() < 1e-9);
        assert!(outer.1.abs() < 1e-9);
    }

    #[test]
    fn test_render_advances_frame() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let mut screen = OrbitScreen::new(true);
        let request = RenderRequest::new(5_000, false);
        terminal.draw(|f| screen.render(f, &request)).unwrap();
        terminal.draw(|f| screen.render(f, &request)).unwrap();
        assert_eq!(screen.frame(), 2);

        let text = screen_text(terminal.backend());
        assert!(text.contains("00:00:05.000"));
        assert!(text.contains("STOPPED"));
    }
}
