use anyhow::{Context, Result};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::Display;
use crate::game::{BOARD_SIZE, Image};

/// What the matrix currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Matrix(Image),
    Text(String),
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Matrix(Image::new())
    }
}

/// Effective pixel level once the global brightness is applied
pub fn scale(pixel: u8, brightness: u8) -> u8 {
    (pixel as u16 * brightness as u16 / 255) as u8
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, screen: &Screen, brightness: u8) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(BOARD_SIZE as u16 + 2), // Matrix
                Constraint::Length(1),                     // Footer
                Constraint::Min(0),
            ])
            .split(frame.area());

        let matrix_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(BOARD_SIZE as u16 * 2 + 4),
                Constraint::Min(0),
            ])
            .split(chunks[0])[0];

        let matrix = match screen {
            Screen::Matrix(image) => self.render_matrix(image, brightness),
            Screen::Text(text) => self.render_text(text),
        };
        frame.render_widget(matrix, matrix_area);

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[1]);
    }

    fn render_matrix(&self, image: &Image, brightness: u8) -> Paragraph<'_> {
        let lines: Vec<Line> = image
            .rows()
            .iter()
            .map(|row| {
                Line::from(
                    row.iter()
                        .map(|&pixel| pixel_span(scale(pixel, brightness)))
                        .collect::<Vec<_>>(),
                )
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .alignment(Alignment::Center)
    }

    fn render_text(&self, text: &str) -> Paragraph<'_> {
        let mut lines = vec![Line::from(""); BOARD_SIZE / 2];
        lines.push(Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("A/←", Style::default().fg(Color::Cyan)),
            Span::raw(" left | "),
            Span::styled("B/→", Style::default().fg(Color::Cyan)),
            Span::raw(" right | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" quit"),
        ])];

        Paragraph::new(text)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn pixel_span(level: u8) -> Span<'static> {
    if level == 0 {
        return Span::styled("· ", Style::default().fg(Color::DarkGray));
    }
    // Lift dim pixels so the body stays visible in a terminal
    let red = 60 + (level as u16 * 195 / 255) as u8;
    Span::styled("██", Style::default().fg(Color::Rgb(red, 0, 0)))
}

/// Terminal emulation of the LED matrix
pub struct TerminalDisplay<B: Backend> {
    terminal: Terminal<B>,
    renderer: Renderer,
    screen: Screen,
    brightness: u8,
}

impl<B: Backend> TerminalDisplay<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self {
            terminal,
            renderer: Renderer::new(),
            screen: Screen::default(),
            brightness: u8::MAX,
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn brightness(&self) -> u8 {
        self.brightness
    }

    fn draw(&mut self) -> Result<()> {
        let renderer = &self.renderer;
        let screen = &self.screen;
        let brightness = self.brightness;
        self.terminal
            .draw(|frame| renderer.render(frame, screen, brightness))
            .context("Failed to draw frame")?;
        Ok(())
    }
}

impl<B: Backend> Display for TerminalDisplay<B> {
    fn show(&mut self, image: &Image) -> Result<()> {
        self.screen = Screen::Matrix(*image);
        self.draw()
    }

    fn set_brightness(&mut self, level: u8) -> Result<()> {
        self.brightness = level;
        self.draw()
    }

    fn show_text(&mut self, text: &str) -> Result<()> {
        self.screen = Screen::Text(text.to_string());
        self.draw()
    }
}
