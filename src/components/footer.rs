//! Page footer

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

pub const COPYRIGHT: &str = "© 2024 Recipes App";
pub const CONTACT: &str = "Contact us: info@recipesapp.com";

pub struct Footer;

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(vec![Line::from(COPYRIGHT), Line::from(CONTACT)])
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::TOP | Borders::BOTTOM))
            .style(Style::default().bg(Color::Rgb(31, 41, 55)).fg(Color::White))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_text() {
        let area = Rect::new(0, 0, 50, 4);
        let mut buf = Buffer::empty(area);
        Footer.render(area, &mut buf);

        let content: String = buf.content.iter().map(|c| c.symbol()).collect();
        assert!(content.contains("2024 Recipes App"));
        assert!(content.contains(CONTACT));
    }
}
