//! Swipe list demo - literal rows that acknowledge taps and long presses
//!
//! There is no real swipe gesture. A long press stands in for it.

use crate::model::{Focus, SwipeItem};
use crate::notify::Notifier;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

#[derive(Debug)]
pub struct SwipeList {
    items: &'static [SwipeItem],
}

impl Default for SwipeList {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeList {
    pub fn new() -> Self {
        Self {
            items: SwipeItem::all(),
        }
    }

    pub fn items(&self) -> &'static [SwipeItem] {
        self.items
    }

    /// Acknowledge a tap on a row; unknown rows are ignored
    pub fn tap(&self, index: usize, notifier: &mut dyn Notifier) {
        if let Some(item) = self.items.get(index) {
            tracing::debug!(key = item.key, "row tapped");
            notifier.notify(&format!("You clicked {}", item.name));
        }
    }

    /// Acknowledge a long press on a row; unknown rows are ignored
    pub fn long_press(&self, index: usize, notifier: &mut dyn Notifier) {
        if let Some(item) = self.items.get(index) {
            tracing::debug!(key = item.key, "row long-pressed");
            notifier.notify(&format!("Swipe action simulated for {}", item.name));
        }
    }

    /// Render the rows into their hit areas, in declaration order
    pub fn render(&self, rows: &[Rect], buf: &mut Buffer, focus: Focus) {
        for (index, (item, area)) in self.items.iter().zip(rows).enumerate() {
            let border = if focus == Focus::Row(index) {
                Color::Cyan
            } else {
                Color::DarkGray
            };
            Paragraph::new(Line::from(Span::raw(item.name)))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(border)),
                )
                .style(Style::default().bg(Color::Rgb(243, 244, 246)).fg(Color::Black))
                .render(*area, buf);
        }
    }
}
