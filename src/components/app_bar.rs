//! App bar - title, menu toggle and the navigation menu it reveals

use crate::components::layout::PageLayout;
use crate::model::{Focus, NavEntry};
use crate::notify::Notifier;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub const TITLE: &str = "Recipes";
pub const MENU_ICON: &str = "≡";

/// App bar state: whether the menu is open and whether the pointer is on the toggle
#[derive(Debug, Default)]
pub struct AppBar {
    pub menu_open: bool,
    pub hovered: bool,
}

impl AppBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        tracing::debug!(menu_open = self.menu_open, "menu toggled");
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Acknowledge a menu entry
    ///
    /// Navigation is not wired up: the entry only reports its destination.
    /// The menu stays as it is.
    pub fn select_entry(&self, entry: NavEntry, notifier: &mut dyn Notifier) {
        notifier.notify(&format!("Go to {}", entry.label()));
    }

    pub fn render(&self, layout: &PageLayout, buf: &mut Buffer, focus: Focus) {
        let bar_style = Style::default().bg(Color::Blue).fg(Color::White);

        Paragraph::new(Line::from(Span::styled(
            format!(" {}", TITLE),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM).style(bar_style))
        .render(layout.app_bar, buf);

        let mut icon_style = Style::default()
            .bg(Color::Blue)
            .fg(if self.hovered { Color::Yellow } else { Color::White })
            .add_modifier(Modifier::BOLD);
        if focus == Focus::MenuToggle {
            icon_style = icon_style.add_modifier(Modifier::REVERSED);
        }
        let toggle = layout.menu_toggle;
        let icon_row = Rect::new(toggle.x, toggle.y + toggle.height / 2, toggle.width, 1);
        Paragraph::new(Line::from(Span::styled(MENU_ICON, icon_style)))
            .alignment(Alignment::Center)
            .render(icon_row, buf);

        if let Some(menu) = layout.menu {
            Block::default()
                .borders(Borders::LEFT)
                .border_style(Style::default().fg(Color::Blue))
                .style(Style::default().bg(Color::Rgb(219, 234, 254)).fg(Color::Black))
                .render(menu, buf);

            for (entry, rect) in &layout.menu_entries {
                let mut style = Style::default().add_modifier(Modifier::BOLD);
                if focus == Focus::MenuEntry(*entry) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Paragraph::new(Line::from(Span::styled(entry.label(), style))).render(*rect, buf);
            }
        }
    }
}
