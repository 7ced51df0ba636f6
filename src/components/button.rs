//! Button rendering shared by the page sections

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

fn label_style(focused: bool) -> Style {
    let style = Style::default()
        .fg(Color::White)
        .bg(Color::Blue)
        .add_modifier(Modifier::BOLD);
    if focused {
        style.add_modifier(Modifier::REVERSED)
    } else {
        style
    }
}

/// Button with a border, as tall as a text field
pub fn render_boxed(label: &str, area: Rect, buf: &mut Buffer, focused: bool) {
    let border = if focused { Color::Cyan } else { Color::Blue };
    Paragraph::new(Line::from(Span::styled(
        format!(" {} ", label),
        label_style(focused),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border)),
    )
    .render(area, buf);
}

/// Full-width single-line button
pub fn render_inline(label: &str, area: Rect, buf: &mut Buffer, focused: bool) {
    Paragraph::new(Line::from(Span::raw(label.to_string())))
        .alignment(Alignment::Center)
        .style(label_style(focused))
        .render(area, buf);
}
