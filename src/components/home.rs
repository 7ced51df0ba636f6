//! Home component - the page root
//!
//! Owns the active tab and composes every page section. Also owns the
//! host-side interaction state: keyboard focus, scroll position and pointer
//! press tracking.

use crate::action::Action;
use crate::component::Component;
use crate::components::card::Card;
use crate::components::footer::Footer;
use crate::components::layout::{contains, PageLayout};
use crate::components::{AppBar, LoginForm, SearchBar, SwipeList};
use crate::config::Config;
use crate::model::{Field, Focus, NavEntry, Panel, Tab};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Widget},
    Frame,
};
use std::time::{Duration, Instant};

// ═══════════════════════════════════════════════════════════════════════════════
// Pointer Press Tracking
// ═══════════════════════════════════════════════════════════════════════════════

/// A mouse button held down over a target
#[derive(Debug, Clone, Copy)]
struct PendingPress {
    target: Focus,
    started: Instant,
    /// The long press already fired while held; the release is swallowed
    fired: bool,
}

// ═══════════════════════════════════════════════════════════════════════════════
// Home Component
// ═══════════════════════════════════════════════════════════════════════════════

/// Page root
pub struct HomeComponent {
    /// Current active tab
    pub active_tab: Tab,

    // ─────────────────────────────────────────────────────────────────────────
    // Page sections, each owning its own state
    // ─────────────────────────────────────────────────────────────────────────
    pub app_bar: AppBar,
    pub search_bar: SearchBar,
    pub login_form: LoginForm,
    pub swipe_list: SwipeList,

    // ─────────────────────────────────────────────────────────────────────────
    // Host interaction state
    // ─────────────────────────────────────────────────────────────────────────
    /// Keyboard focus
    pub focus: Focus,
    /// First page row shown in the viewport
    pub scroll: u16,
    /// Scroll the focused target into view on the next draw
    follow_focus: bool,
    /// Screen area the page was last drawn into
    viewport: Rect,
    /// Layout of the last drawn page, for hit-testing
    layout: Option<PageLayout>,
    hover_enabled: bool,
    long_press: Duration,
    press: Option<PendingPress>,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            active_tab: Tab::default(),
            app_bar: AppBar::new(),
            search_bar: SearchBar::new(),
            login_form: LoginForm::new(),
            swipe_list: SwipeList::new(),
            focus: Focus::default(),
            scroll: 0,
            follow_focus: false,
            viewport: Rect::default(),
            layout: None,
            hover_enabled: config.mouse && config.hover_highlight,
            long_press: config.long_press(),
            press: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tabs
    // ─────────────────────────────────────────────────────────────────────────

    /// Panel for the active tab
    pub fn panel(&self) -> Panel {
        self.active_tab.panel()
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if tab == self.active_tab {
            return;
        }
        tracing::debug!(tab = tab.label(), "tab selected");
        self.active_tab = tab;
        self.normalize_focus();
    }

    /// Select a tab by index; out-of-range indices change nothing
    pub fn select_tab_index(&mut self, index: usize) -> bool {
        match Tab::from_index(index) {
            Some(tab) => {
                self.select_tab(tab);
                true
            }
            None => false,
        }
    }

    pub fn toggle_menu(&mut self) {
        self.app_bar.toggle_menu();
        self.normalize_focus();
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        if self.hover_enabled {
            self.app_bar.set_hovered(hovered);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Text Fields
    // ─────────────────────────────────────────────────────────────────────────

    pub fn input(&mut self, field: Field, c: char) {
        match field {
            Field::Search => self.search_bar.search_text.push(c),
            Field::Email => self.login_form.email.push(c),
            Field::Password => self.login_form.password.push(c),
        }
    }

    pub fn backspace(&mut self, field: Field) {
        match field {
            Field::Search => self.search_bar.search_text.pop(),
            Field::Email => self.login_form.email.pop(),
            Field::Password => self.login_form.password.pop(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Focus
    // ─────────────────────────────────────────────────────────────────────────

    /// Focus targets currently on the page, in page order
    pub fn focus_ring(&self) -> Vec<Focus> {
        let mut ring = vec![Focus::MenuToggle];
        if self.app_bar.menu_open {
            ring.extend(NavEntry::all().map(Focus::MenuEntry));
        }
        ring.extend([
            Focus::SearchField,
            Focus::SearchButton,
            Focus::EmailField,
            Focus::PasswordField,
            Focus::LoginButton,
        ]);
        ring.extend(Tab::all().map(Focus::Tab));
        if let Panel::List(_) = self.panel() {
            ring.extend((0..self.swipe_list.items().len()).map(Focus::Row));
        }
        ring
    }

    pub fn focus_on(&mut self, target: Focus) {
        self.focus = target;
        self.follow_focus = true;
    }

    pub fn focus_next(&mut self) {
        let ring = self.focus_ring();
        let next = match ring.iter().position(|f| *f == self.focus) {
            Some(i) => ring[(i + 1) % ring.len()],
            None => Focus::default(),
        };
        self.focus_on(next);
    }

    pub fn focus_prev(&mut self) {
        let ring = self.focus_ring();
        let prev = match ring.iter().position(|f| *f == self.focus) {
            Some(0) | None => ring[ring.len() - 1],
            Some(i) => ring[i - 1],
        };
        self.focus_on(prev);
    }

    /// Put focus back on the menu toggle if its target left the page
    fn normalize_focus(&mut self) {
        if !self.focus_ring().contains(&self.focus) {
            self.focus_on(Focus::default());
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────────────────────

    fn max_scroll(&self) -> u16 {
        self.layout
            .as_ref()
            .map(|l| l.height().saturating_sub(self.viewport.height))
            .unwrap_or(0)
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.scroll = self.scroll.saturating_add(rows).min(self.max_scroll());
    }

    fn page_rows(&self) -> u16 {
        self.viewport.height.saturating_sub(1).max(1)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Pointer
    // ─────────────────────────────────────────────────────────────────────────

    /// Target under a screen position, using the last drawn layout
    pub fn target_at_screen(&self, column: u16, row: u16) -> Option<Focus> {
        if !contains(self.viewport, column, row) {
            return None;
        }
        let layout = self.layout.as_ref()?;
        layout.target_at(column - self.viewport.x, row - self.viewport.y + self.scroll)
    }

    /// Pointer moved; report enter/leave of the menu toggle
    fn hover_at(&self, column: u16, row: u16) -> Option<Action> {
        if !self.hover_enabled {
            return None;
        }
        let over_toggle = self.target_at_screen(column, row) == Some(Focus::MenuToggle);
        (over_toggle != self.app_bar.hovered).then_some(Action::SetHovered(over_toggle))
    }

    pub fn begin_press(&mut self, target: Focus, at: Instant) {
        self.press = Some(PendingPress {
            target,
            started: at,
            fired: false,
        });
    }

    /// Fire a long press once the button has been held long enough
    pub fn poll_long_press(&mut self, now: Instant) -> Option<Action> {
        let long_press = self.long_press;
        let press = self.press.as_mut()?;
        if press.fired || now.saturating_duration_since(press.started) < long_press {
            return None;
        }
        press.fired = true;
        Some(Action::LongPress(press.target))
    }

    /// Button released over `target`
    ///
    /// Releasing away from the pressed target cancels the press.
    pub fn end_press(&mut self, target: Option<Focus>, at: Instant) -> Option<Action> {
        let press = self.press.take()?;
        if press.fired || target != Some(press.target) {
            return None;
        }
        if at.saturating_duration_since(press.started) >= self.long_press {
            Some(Action::LongPress(press.target))
        } else {
            Some(Action::Press(press.target))
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    /// Render the whole page into a page-sized buffer
    fn render_page(&self, layout: &PageLayout, buf: &mut Buffer) {
        self.app_bar.render(layout, buf, self.focus);
        self.search_bar.render(layout, buf, self.focus);
        for divider in &layout.dividers {
            Paragraph::new("─".repeat(divider.width as usize))
                .style(Style::default().fg(Color::DarkGray))
                .render(*divider, buf);
        }
        self.login_form.render(layout, buf, self.focus);
        render_tab_strip(layout, buf, self.active_tab, self.focus);

        let panel = self.panel();
        Paragraph::new(Line::from(Span::styled(
            panel.heading(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .render(layout.heading, buf);

        match panel {
            Panel::Cards(recipes) => {
                for (recipe, area) in recipes.iter().zip(&layout.cards) {
                    Card::new(recipe.name, recipe.image).render(*area, buf);
                }
            }
            Panel::List(_) => self.swipe_list.render(&layout.rows, buf, self.focus),
            Panel::Text(text) => Paragraph::new(text).render(layout.panel, buf),
        }

        Footer.render(layout.footer, buf);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for HomeComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Text fields swallow printable keys
        if let Some(field) = self.focus.field() {
            let typed = match key.code {
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    Some(Action::Input(field, c))
                }
                KeyCode::Backspace => Some(Action::Backspace(field)),
                KeyCode::Enter => Some(Action::FocusNext),
                _ => None,
            };
            if typed.is_some() {
                return Ok(typed);
            }
        }

        let action = match key.code {
            // Focus
            KeyCode::Tab => Some(Action::FocusNext),
            KeyCode::BackTab => Some(Action::FocusPrev),

            // Activation
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Press(self.focus)),
            KeyCode::Char('l') if matches!(self.focus, Focus::Row(_)) => {
                Some(Action::LongPress(self.focus))
            }

            // Scrolling
            KeyCode::Up => Some(Action::ScrollUp),
            KeyCode::Down => Some(Action::ScrollDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::PageDown => Some(Action::PageDown),

            // Modals
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),

            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let action = match mouse.kind {
            MouseEventKind::Moved => self.hover_at(mouse.column, mouse.row),
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(target) = self.target_at_screen(mouse.column, mouse.row) {
                    self.begin_press(target, Instant::now());
                }
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let target = self.target_at_screen(mouse.column, mouse.row);
                self.end_press(target, Instant::now())
            }
            MouseEventKind::ScrollUp => Some(Action::ScrollUp),
            MouseEventKind::ScrollDown => Some(Action::ScrollDown),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Tick => return Ok(self.poll_long_press(Instant::now())),

            Action::FocusNext => self.focus_next(),
            Action::FocusPrev => self.focus_prev(),
            Action::Press(target) => {
                self.focus_on(target);
                return Ok(target.activation());
            }
            Action::LongPress(target) => {
                self.focus_on(target);
                return Ok(target.long_activation());
            }

            Action::ScrollUp => self.scroll_up(1),
            Action::ScrollDown => self.scroll_down(1),
            Action::PageUp => self.scroll_up(self.page_rows()),
            Action::PageDown => self.scroll_down(self.page_rows()),

            Action::ToggleMenu => self.toggle_menu(),
            Action::SetHovered(hovered) => self.set_hovered(hovered),
            Action::Input(field, c) => self.input(field, c),
            Action::Backspace(field) => self.backspace(field),
            Action::SelectTab(tab) => self.select_tab(tab),

            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        self.viewport = area;
        let layout = PageLayout::new(area.width, self.app_bar.menu_open, self.panel());

        let mut page = Buffer::empty(layout.area());
        self.render_page(&layout, &mut page);

        if self.follow_focus {
            if let Some(rect) = layout.rect_of(self.focus) {
                self.scroll = scroll_to_show(self.scroll, area.height, rect);
            }
            self.follow_focus = false;
        }
        let max_scroll = layout.height().saturating_sub(area.height);
        self.scroll = self.scroll.min(max_scroll);

        blit(&page, frame.buffer_mut(), area, self.scroll);

        if max_scroll > 0 {
            let mut scrollbar_state = ScrollbarState::new(max_scroll as usize)
                .position(self.scroll as usize)
                .viewport_content_length(area.height as usize);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                area.inner(Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        self.layout = Some(layout);
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rendering Functions
// ═══════════════════════════════════════════════════════════════════════════════

/// Smallest scroll change that brings `rect` into a viewport of `height` rows
fn scroll_to_show(scroll: u16, height: u16, rect: Rect) -> u16 {
    if rect.y < scroll {
        rect.y
    } else if rect.bottom() > scroll.saturating_add(height) {
        rect.bottom().saturating_sub(height).min(rect.y)
    } else {
        scroll
    }
}

/// Copy the visible window of the page into the frame
fn blit(page: &Buffer, dst: &mut Buffer, area: Rect, scroll: u16) {
    let width = area.width.min(page.area.width);
    for row in 0..area.height {
        let src_y = scroll + row;
        if src_y >= page.area.height {
            break;
        }
        for col in 0..width {
            let cell = page.content[page.index_of(col, src_y)].clone();
            let dst_index = dst.index_of(area.x + col, area.y + row);
            dst.content[dst_index] = cell;
        }
    }
}

fn render_tab_strip(layout: &PageLayout, buf: &mut Buffer, active: Tab, focus: Focus) {
    Block::default()
        .style(Style::default().bg(Color::Rgb(191, 219, 254)))
        .render(layout.tabs, buf);

    for (tab, cell) in &layout.tab_cells {
        let mut style = Style::default().add_modifier(Modifier::BOLD);
        style = if *tab == active {
            style
                .fg(Color::Rgb(29, 78, 216))
                .add_modifier(Modifier::UNDERLINED)
        } else {
            style.fg(Color::Rgb(59, 130, 246))
        };
        if focus == Focus::Tab(*tab) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let label_row = Rect::new(cell.x, cell.y + cell.height / 2, cell.width, 1);
        Paragraph::new(Line::from(Span::styled(tab.label(), style)))
            .alignment(Alignment::Center)
            .render(label_row, buf);
    }
}

/// Key hints for the current focus
pub fn render_help_bar(frame: &mut Frame, area: Rect, home: &HomeComponent) {
    let key = |k: &'static str, color: Color| {
        Span::styled(k, Style::default().fg(color).add_modifier(Modifier::BOLD))
    };

    let mut help_spans = if home.focus.field().is_some() {
        vec![
            Span::raw(" Typing  "),
            key(" Enter ", Color::Green),
            Span::raw("Next field  "),
            key(" Tab ", Color::Cyan),
            Span::raw("Next  "),
        ]
    } else if matches!(home.focus, Focus::Row(_)) {
        vec![
            key(" Enter ", Color::Green),
            Span::raw("Tap  "),
            key(" l ", Color::Green),
            Span::raw("Long press  "),
            key(" Tab ", Color::Cyan),
            Span::raw("Next  "),
        ]
    } else {
        vec![
            key(" Tab ", Color::Cyan),
            Span::raw("Next  "),
            key(" Enter ", Color::Green),
            Span::raw("Press  "),
            key(" ↑↓ ", Color::Cyan),
            Span::raw("Scroll  "),
            key(" ? ", Color::White),
            Span::raw("Help  "),
            key(" q ", Color::Yellow),
            Span::raw("Quit"),
        ]
    };
    if home.focus.field().is_some() {
        help_spans.extend([key(" F1 ", Color::White), Span::raw("Help")]);
    }

    let paragraph = Paragraph::new(Line::from(help_spans)).alignment(Alignment::Left);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(home: &mut HomeComponent, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                home.draw(f, area).unwrap();
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_initial_state() {
        let home = HomeComponent::new();
        assert_eq!(home.active_tab, Tab::Cards);
        assert_eq!(home.active_tab.index(), 0);
        assert!(!home.app_bar.menu_open);
        assert!(!home.app_bar.hovered);
        assert_eq!(home.search_bar.search_text.value(), "");
        assert_eq!(home.login_form.email.value(), "");
        assert_eq!(home.login_form.password.value(), "");
        assert_eq!(home.login_form.password_error, "");
        assert_eq!(home.focus, Focus::MenuToggle);
    }

    #[test]
    fn test_cards_render_in_order() {
        let mut home = HomeComponent::new();
        let content = render(&mut home, 80, 80);

        assert!(content.contains("Cards with Images"));
        let positions: Vec<usize> = ["Spaghetti Carbonara", "Chicken Alfredo", "Caesar Salad"]
            .iter()
            .map(|name| {
                assert_eq!(content.matches(name).count(), 1);
                content.find(name).unwrap()
            })
            .collect();
        assert!(positions[0] < positions[1] && positions[1] < positions[2]);
        assert_eq!(content.matches("▨ image").count(), 3);
    }

    #[test]
    fn test_exactly_one_panel_renders() {
        let mut home = HomeComponent::new();

        home.select_tab(Tab::SwipeList);
        let content = render(&mut home, 80, 80);
        assert!(content.contains("Swipe List"));
        assert!(content.contains("Garlic"));
        assert!(!content.contains("Cards with Images"));
        assert!(!content.contains("Other Content"));

        home.select_tab(Tab::Other);
        let content = render(&mut home, 80, 80);
        assert!(content.contains("Other Content"));
        assert!(content.contains("This is additional content for Tab 3."));
        assert!(!content.contains("Swipe List"));
        assert!(!content.contains("Spaghetti Carbonara"));
    }

    #[test]
    fn test_selecting_active_tab_is_noop() {
        let mut home = HomeComponent::new();
        home.select_tab(Tab::SwipeList);
        let first = render(&mut home, 80, 80);
        home.select_tab(Tab::SwipeList);
        let second = render(&mut home, 80, 80);
        assert_eq!(home.active_tab, Tab::SwipeList);
        assert_eq!(first, second);
    }

    #[test]
    fn test_out_of_range_tab_index_is_rejected() {
        let mut home = HomeComponent::new();
        assert!(home.select_tab_index(2));
        assert_eq!(home.active_tab, Tab::Other);
        assert!(!home.select_tab_index(3));
        assert_eq!(home.active_tab, Tab::Other);
    }

    #[test]
    fn test_tab_switch_keeps_section_state() {
        let mut home = HomeComponent::new();
        home.toggle_menu();
        home.input(Field::Search, 'x');
        home.input(Field::Email, 'a');
        home.input(Field::Password, 'b');

        for tab in [Tab::SwipeList, Tab::Other, Tab::Cards] {
            home.select_tab(tab);
            assert!(home.app_bar.menu_open);
            assert_eq!(home.search_bar.search_text.value(), "x");
            assert_eq!(home.login_form.email.value(), "a");
            assert_eq!(home.login_form.password.value(), "b");
        }
    }

    #[test]
    fn test_focus_ring_follows_page() {
        let mut home = HomeComponent::new();
        assert_eq!(home.focus_ring().len(), 9);

        home.toggle_menu();
        home.select_tab(Tab::SwipeList);
        let ring = home.focus_ring();
        assert_eq!(ring.len(), 15);
        assert_eq!(ring[1], Focus::MenuEntry(NavEntry::Home));
        assert_eq!(ring[ring.len() - 1], Focus::Row(2));
    }

    #[test]
    fn test_focus_wraps() {
        let mut home = HomeComponent::new();
        home.focus_prev();
        assert_eq!(home.focus, Focus::Tab(Tab::Other));
        home.focus_next();
        assert_eq!(home.focus, Focus::MenuToggle);
        home.focus_next();
        assert_eq!(home.focus, Focus::SearchField);
    }

    #[test]
    fn test_focus_falls_back_when_target_disappears() {
        let mut home = HomeComponent::new();
        home.toggle_menu();
        home.focus_on(Focus::MenuEntry(NavEntry::Settings));
        home.toggle_menu();
        assert_eq!(home.focus, Focus::MenuToggle);

        home.select_tab(Tab::SwipeList);
        home.focus_on(Focus::Row(1));
        home.select_tab(Tab::Cards);
        assert_eq!(home.focus, Focus::MenuToggle);
    }

    #[test]
    fn test_typing_into_focused_field() {
        let mut home = HomeComponent::new();
        home.focus_on(Focus::EmailField);

        for c in "me@x.io".chars() {
            let action = home.handle_key_event(key(KeyCode::Char(c))).unwrap();
            assert_eq!(action, Some(Action::Input(Field::Email, c)));
            home.update(action.unwrap()).unwrap();
        }
        let action = home.handle_key_event(key(KeyCode::Backspace)).unwrap().unwrap();
        home.update(action).unwrap();
        assert_eq!(home.login_form.email.value(), "me@x.i");

        // 'q' is text here, not quit
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('q'))).unwrap(),
            Some(Action::Input(Field::Email, 'q'))
        );
        assert_eq!(
            home.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::FocusNext)
        );
    }

    #[test]
    fn test_press_resolves_to_target_action() {
        let mut home = HomeComponent::new();
        assert_eq!(
            home.handle_key_event(key(KeyCode::Enter)).unwrap(),
            Some(Action::Press(Focus::MenuToggle))
        );
        assert_eq!(
            home.update(Action::Press(Focus::Tab(Tab::Other))).unwrap(),
            Some(Action::SelectTab(Tab::Other))
        );
        assert_eq!(home.focus, Focus::Tab(Tab::Other));
        assert_eq!(home.update(Action::Press(Focus::EmailField)).unwrap(), None);
        assert_eq!(home.focus, Focus::EmailField);
    }

    #[test]
    fn test_long_press_key_only_on_rows() {
        let mut home = HomeComponent::new();
        assert_eq!(home.handle_key_event(key(KeyCode::Char('l'))).unwrap(), None);

        home.select_tab(Tab::SwipeList);
        home.focus_on(Focus::Row(1));
        assert_eq!(
            home.handle_key_event(key(KeyCode::Char('l'))).unwrap(),
            Some(Action::LongPress(Focus::Row(1)))
        );
        assert_eq!(
            home.update(Action::LongPress(Focus::Row(1))).unwrap(),
            Some(Action::LongPressItem(1))
        );
    }

    #[test]
    fn test_short_press_fires_on_release() {
        let mut home = HomeComponent::new();
        let t0 = Instant::now();
        home.begin_press(Focus::Row(0), t0);
        assert_eq!(home.poll_long_press(t0 + Duration::from_millis(100)), None);
        assert_eq!(
            home.end_press(Some(Focus::Row(0)), t0 + Duration::from_millis(150)),
            Some(Action::Press(Focus::Row(0)))
        );
    }

    #[test]
    fn test_long_press_fires_while_held() {
        let mut home = HomeComponent::new();
        let t0 = Instant::now();
        home.begin_press(Focus::Row(2), t0);
        assert_eq!(
            home.poll_long_press(t0 + Duration::from_millis(600)),
            Some(Action::LongPress(Focus::Row(2)))
        );
        // Fires once, and the release is swallowed
        assert_eq!(home.poll_long_press(t0 + Duration::from_millis(700)), None);
        assert_eq!(
            home.end_press(Some(Focus::Row(2)), t0 + Duration::from_millis(800)),
            None
        );
    }

    #[test]
    fn test_release_elsewhere_cancels() {
        let mut home = HomeComponent::new();
        let t0 = Instant::now();
        home.begin_press(Focus::LoginButton, t0);
        assert_eq!(home.end_press(Some(Focus::SearchButton), t0), None);
        home.begin_press(Focus::LoginButton, t0);
        assert_eq!(home.end_press(None, t0), None);
    }

    #[test]
    fn test_click_on_toggle() {
        let mut home = HomeComponent::new();
        render(&mut home, 80, 80);

        let down = home
            .handle_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 78, 1))
            .unwrap();
        assert_eq!(down, None);
        let up = home
            .handle_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 78, 1))
            .unwrap();
        assert_eq!(up, Some(Action::Press(Focus::MenuToggle)));
    }

    #[test]
    fn test_hover_enter_and_leave() {
        let mut home = HomeComponent::new();
        render(&mut home, 80, 80);

        let enter = home
            .handle_mouse_event(mouse(MouseEventKind::Moved, 78, 1))
            .unwrap();
        assert_eq!(enter, Some(Action::SetHovered(true)));
        home.update(enter.unwrap()).unwrap();
        assert!(home.app_bar.hovered);

        // Still over the toggle: no new event
        let still = home
            .handle_mouse_event(mouse(MouseEventKind::Moved, 77, 1))
            .unwrap();
        assert_eq!(still, None);

        let leave = home
            .handle_mouse_event(mouse(MouseEventKind::Moved, 10, 10))
            .unwrap();
        assert_eq!(leave, Some(Action::SetHovered(false)));
    }

    #[test]
    fn test_hover_can_be_disabled() {
        let config = Config {
            hover_highlight: false,
            ..Config::default()
        };
        let mut home = HomeComponent::with_config(&config);
        render(&mut home, 80, 80);

        let moved = home
            .handle_mouse_event(mouse(MouseEventKind::Moved, 78, 1))
            .unwrap();
        assert_eq!(moved, None);
        home.update(Action::SetHovered(true)).unwrap();
        assert!(!home.app_bar.hovered);
    }

    #[test]
    fn test_scroll_follows_focus() {
        let mut home = HomeComponent::new();
        render(&mut home, 80, 20);
        assert_eq!(home.scroll, 0);

        home.focus_on(Focus::Tab(Tab::Other));
        let content = render(&mut home, 80, 20);
        assert!(home.scroll > 0);
        assert!(content.contains("Tab 3"));

        home.focus_on(Focus::MenuToggle);
        render(&mut home, 80, 20);
        assert_eq!(home.scroll, 0);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut home = HomeComponent::new();
        render(&mut home, 80, 20);
        for _ in 0..500 {
            home.update(Action::PageDown).unwrap();
        }
        let content = render(&mut home, 80, 20);
        let layout = PageLayout::new(80, false, Tab::Cards.panel());
        assert_eq!(home.scroll, layout.height() - 20);
        assert!(content.contains("info@recipesapp.com"));

        home.update(Action::PageUp).unwrap();
        assert!(home.scroll < layout.height() - 20);
    }

    #[test]
    fn test_scroll_to_show() {
        let rect = Rect::new(0, 30, 10, 3);
        assert_eq!(scroll_to_show(0, 20, rect), 13);
        assert_eq!(scroll_to_show(40, 20, rect), 30);
        assert_eq!(scroll_to_show(20, 20, rect), 20);
    }
}
