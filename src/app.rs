//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! App is intentionally lean - it routes actions and owns the modal stack
//! that acknowledgements are raised onto.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    calculate_screen_layout, render_help_bar, AlertDialog, HelpDialog, HomeComponent, QuitDialog,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{layout::Rect, Frame};

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Loaded configuration
    pub config: Config,

    /// Modal overlay stack; also the notifier every stub reports to
    pub modals: ModalStack,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    pub alert_dialog: AlertDialog,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            home: HomeComponent::with_config(&config),
            config,
            modals: ModalStack::new(),
            should_quit: false,
            alert_dialog: AlertDialog,
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        tracing::info!(
            tick_rate_ms = self.config.tick_rate_ms,
            mouse = self.config.mouse,
            "recipes page ready"
        );
        self.home.init()
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        if let Some(modal) = self.modals.top().cloned() {
            self.handle_modal_key_event(&modal, key)
        } else if key.code == KeyCode::F(1) {
            Ok(Some(Action::OpenHelp))
        } else {
            self.home.handle_key_event(key)
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        match self.modals.top() {
            None => self.home.handle_mouse_event(mouse),
            Some(Modal::Alert { .. })
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) =>
            {
                Ok(Some(Action::CloseModal))
            }
            Some(_) => Ok(None),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::ForceQuit => {
                tracing::info!("quitting");
                self.should_quit = true;
            }
            Action::Resize(_, _) => {}

            // ─────────────────────────────────────────────────────────────────
            // Stubs (acknowledged through the modal stack)
            // ─────────────────────────────────────────────────────────────────
            Action::SelectNavEntry(entry) => {
                self.home.app_bar.select_entry(entry, &mut self.modals);
            }
            Action::SubmitSearch => self.home.search_bar.submit(&mut self.modals),
            Action::SubmitLogin => self.home.login_form.submit(&mut self.modals),
            Action::TapItem(index) => self.home.swipe_list.tap(index, &mut self.modals),
            Action::LongPressItem(index) => {
                self.home.swipe_list.long_press(index, &mut self.modals);
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),
            Action::OpenHelp => {
                if self.modals.top() != Some(&Modal::Help) {
                    self.modals.push(Modal::Help);
                }
            }
            Action::CloseModal => {
                self.modals.pop();
            }

            // ─────────────────────────────────────────────────────────────────
            // Everything else belongs to the page
            // ─────────────────────────────────────────────────────────────────
            _ => return self.home.update(action),
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = calculate_screen_layout(area);

        self.home.draw(frame, layout.page)?;
        render_help_bar(frame, layout.help, &self.home);

        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Helper Methods
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::Alert { .. } => self.alert_dialog.handle_key_event(key),
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::Alert { message } => {
                self.alert_dialog.draw_with_message(frame, area, message)?;
            }
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::Help => self.help_dialog.draw(frame, area)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::login_form::{LOGIN_SUCCESS, PASSWORD_TOO_SHORT};
    use crate::components::search_bar::SEARCH_ACK;
    use crate::model::{Focus, NavEntry, Tab};
    use ratatui::{backend::TestBackend, Terminal};

    /// Feed an action through the app until no follow-up remains
    fn dispatch(app: &mut App, action: Action) {
        let mut current = Some(action);
        while let Some(a) = current {
            current = app.update(a).unwrap();
        }
    }

    fn press_key(app: &mut App, code: KeyCode) {
        if let Some(action) = app
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
        {
            dispatch(app, action);
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press_key(app, KeyCode::Char(c));
        }
    }

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 60)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                app.draw(f, area).unwrap();
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

    fn top_alert(app: &App) -> Option<&str> {
        match app.modals.top() {
            Some(Modal::Alert { message }) => Some(message.as_str()),
            _ => None,
        }
    }

    #[test]
    fn test_menu_toggle_parity() {
        let mut app = App::default();
        for i in 1..=4 {
            dispatch(&mut app, Action::Press(Focus::MenuToggle));
            assert_eq!(app.home.app_bar.menu_open, i % 2 == 1);
        }
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_menu_entry_is_a_stub() {
        let mut app = App::default();
        dispatch(&mut app, Action::ToggleMenu);
        dispatch(&mut app, Action::Press(Focus::MenuEntry(NavEntry::Profile)));

        assert_eq!(top_alert(&app), Some("Go to Profile"));
        assert!(app.home.app_bar.menu_open);
        assert_eq!(app.home.active_tab, Tab::Cards);
    }

    #[test]
    fn test_login_flow_through_keys() {
        let mut app = App::default();
        app.home.focus_on(Focus::PasswordField);
        type_text(&mut app, "abc");
        dispatch(&mut app, Action::Press(Focus::LoginButton));
        assert_eq!(app.home.login_form.password_error, PASSWORD_TOO_SHORT);
        assert!(app.modals.is_empty());

        app.home.focus_on(Focus::PasswordField);
        type_text(&mut app, "d");
        dispatch(&mut app, Action::Press(Focus::LoginButton));
        assert_eq!(app.home.login_form.password_error, "");
        assert_eq!(top_alert(&app), Some(LOGIN_SUCCESS));
    }

    #[test]
    fn test_search_acknowledges_any_text() {
        let mut app = App::default();
        dispatch(&mut app, Action::Press(Focus::SearchButton));
        assert_eq!(top_alert(&app), Some(SEARCH_ACK));
        press_key(&mut app, KeyCode::Enter);
        assert!(app.modals.is_empty());

        app.home.focus_on(Focus::SearchField);
        type_text(&mut app, "pasta");
        assert_eq!(app.home.search_bar.search_text.value(), "pasta");
        dispatch(&mut app, Action::Press(Focus::SearchButton));
        assert_eq!(top_alert(&app), Some(SEARCH_ACK));
        assert_eq!(app.home.search_bar.search_text.value(), "pasta");
    }

    #[test]
    fn test_swipe_rows_acknowledge() {
        let mut app = App::default();
        dispatch(&mut app, Action::Press(Focus::Tab(Tab::SwipeList)));
        assert_eq!(app.home.active_tab, Tab::SwipeList);

        dispatch(&mut app, Action::Press(Focus::Row(1)));
        assert_eq!(top_alert(&app), Some("You clicked Garlic"));

        dispatch(&mut app, Action::LongPress(Focus::Row(1)));
        assert_eq!(top_alert(&app), Some("Swipe action simulated for Garlic"));
        assert_eq!(app.modals.len(), 2);
    }

    #[test]
    fn test_alerts_stack_in_order() {
        let mut app = App::default();
        dispatch(&mut app, Action::SubmitSearch);
        dispatch(&mut app, Action::TapItem(0));
        assert_eq!(top_alert(&app), Some("You clicked Tomatoes"));
        dispatch(&mut app, Action::CloseModal);
        assert_eq!(top_alert(&app), Some(SEARCH_ACK));
    }

    #[test]
    fn test_modal_captures_keys() {
        let mut app = App::default();
        dispatch(&mut app, Action::SubmitSearch);

        // 'q' is ignored by an alert, so the page must not see it
        press_key(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.len(), 1);
        press_key(&mut app, KeyCode::Esc);
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_quit_confirmation() {
        let mut app = App::default();
        press_key(&mut app, KeyCode::Char('q'));
        assert_eq!(app.modals.top(), Some(&Modal::QuitConfirm));
        press_key(&mut app, KeyCode::Char('n'));
        assert!(app.modals.is_empty());
        assert!(!app.should_quit);

        press_key(&mut app, KeyCode::Char('q'));
        press_key(&mut app, KeyCode::Char('y'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut app = App::default();
        dispatch(&mut app, Action::OpenHelp);
        let action = app
            .handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert_eq!(action, Some(Action::ForceQuit));
    }

    #[test]
    fn test_f1_opens_help_from_text_field() {
        let mut app = App::default();
        app.home.focus_on(Focus::EmailField);
        press_key(&mut app, KeyCode::F(1));
        assert_eq!(app.modals.top(), Some(&Modal::Help));
        press_key(&mut app, KeyCode::Char('?'));
        assert!(app.modals.is_empty());
    }

    #[test]
    fn test_click_dismisses_alert() {
        let mut app = App::default();
        dispatch(&mut app, Action::SubmitSearch);
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 3,
            modifiers: KeyModifiers::NONE,
        };
        let action = app.handle_mouse_event(click).unwrap();
        assert_eq!(action, Some(Action::CloseModal));
    }

    #[test]
    fn test_draw_shows_page_help_bar_and_alert() {
        let mut app = App::default();
        let content = render(&mut app);
        assert!(content.contains("Recipes"));
        assert!(content.contains("Cards with Images"));
        assert!(content.contains("Help"));

        dispatch(&mut app, Action::TapItem(2));
        let content = render(&mut app);
        assert!(content.contains("You clicked Pasta"));
    }
}
