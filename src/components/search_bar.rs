//! Search bar - one text field and a submit button that only acknowledges

use crate::components::button;
use crate::components::layout::PageLayout;
use crate::components::text_input::TextField;
use crate::model::Focus;
use crate::notify::Notifier;
use ratatui::{
    buffer::Buffer,
    style::{Color, Style},
    widgets::{Block, Widget},
};

pub const PLACEHOLDER: &str = "Search for recipes";
pub const BUTTON_LABEL: &str = "Buscar";
pub const SEARCH_ACK: &str = "Busqueda realizada con exito";

#[derive(Debug)]
pub struct SearchBar {
    pub search_text: TextField,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            search_text: TextField::new(PLACEHOLDER),
        }
    }

    /// Acknowledge a search
    ///
    /// There is no search backend; the query is neither checked nor used.
    pub fn submit(&self, notifier: &mut dyn Notifier) {
        tracing::debug!(query = self.search_text.value(), "search submitted");
        notifier.notify(SEARCH_ACK);
    }

    pub fn render(&self, layout: &PageLayout, buf: &mut Buffer, focus: Focus) {
        Block::default()
            .style(Style::default().bg(Color::Rgb(191, 219, 254)))
            .render(layout.search, buf);
        self.search_text
            .render(layout.search_field, buf, focus == Focus::SearchField);
        button::render_boxed(
            BUTTON_LABEL,
            layout.search_button,
            buf,
            focus == Focus::SearchButton,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::RecordingNotifier;

    #[test]
    fn test_starts_empty() {
        assert_eq!(SearchBar::new().search_text.value(), "");
    }

    #[test]
    fn test_submit_ignores_query() {
        let mut bar = SearchBar::new();
        let mut notifier = RecordingNotifier::default();

        bar.submit(&mut notifier);
        for c in "pasta".chars() {
            bar.search_text.push(c);
        }
        bar.submit(&mut notifier);

        assert_eq!(notifier.messages, vec![SEARCH_ACK, SEARCH_ACK]);
        assert_eq!(bar.search_text.value(), "pasta");
    }
}
