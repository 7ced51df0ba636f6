//! Single-line text field used by the search bar and the login form

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MASK_CHAR: char = '•';
const CURSOR: &str = "_";

/// Editable text with a placeholder, optionally masked on screen
#[derive(Debug, Clone)]
pub struct TextField {
    value: String,
    placeholder: &'static str,
    masked: bool,
}

impl TextField {
    pub fn new(placeholder: &'static str) -> Self {
        Self {
            value: String::new(),
            placeholder,
            masked: false,
        }
    }

    /// Field whose characters render as bullets
    pub fn masked(placeholder: &'static str) -> Self {
        Self {
            masked: true,
            ..Self::new(placeholder)
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop(&mut self) {
        self.value.pop();
    }

    /// What the user sees, before the cursor and truncation are applied
    pub fn display_text(&self) -> String {
        if self.masked {
            std::iter::repeat(MASK_CHAR)
                .take(self.value.chars().count())
                .collect()
        } else {
            self.value.clone()
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, focused: bool) {
        let border = if focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border));
        let inner_width = block.inner(area).width as usize;

        let line = if self.value.is_empty() && !focused {
            Line::from(Span::styled(
                self.placeholder,
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            let mut text = self.display_text();
            if focused {
                text.push_str(CURSOR);
            }
            Line::from(Span::styled(
                visible_tail(&text, inner_width).to_string(),
                Style::default().fg(Color::White),
            ))
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}

/// Longest suffix of `text` that fits in `width` columns
///
/// Keeps the end of the text visible while typing past the field edge.
pub fn visible_tail(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }
    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}
