//! Recipe card - image area on top, name below

use crate::components::layout::IMAGE_HEIGHT;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// A recipe card, a pure function of name and image URI
///
/// The terminal cannot show the image, so the image area always falls back
/// to a broken-image frame labelled with the URI.
pub struct Card<'a> {
    pub name: &'a str,
    pub image: &'a str,
}

impl<'a> Card<'a> {
    pub fn new(name: &'a str, image: &'a str) -> Self {
        Self { name, image }
    }
}

impl Widget for Card<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Gray))
            .style(Style::default().bg(Color::Rgb(243, 244, 246)).fg(Color::Black));
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(IMAGE_HEIGHT), Constraint::Length(1)])
            .split(inner);

        Paragraph::new(vec![
            Line::from(Span::styled("▨ image", Style::default().fg(Color::DarkGray))),
            Line::from(Span::styled(
                self.image,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(chunks[0], buf);

        Paragraph::new(Line::from(Span::styled(
            self.name,
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .render(chunks[1], buf);
    }
}
