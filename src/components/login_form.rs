//! Login form - email, masked password and a length check on submit

use crate::components::button;
use crate::components::layout::PageLayout;
use crate::components::text_input::TextField;
use crate::model::Focus;
use crate::notify::Notifier;
use ratatui::{
    buffer::Buffer,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub const PASSWORD_MIN_LEN: usize = 4;
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 4 characters long";
pub const LOGIN_SUCCESS: &str = "Login successful";

/// Login form state
///
/// `password_error` is empty unless the latest submit failed the length check.
#[derive(Debug)]
pub struct LoginForm {
    pub email: TextField,
    pub password: TextField,
    pub password_error: String,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Password length in UTF-16 code units, the way a browser counts it
fn password_len(password: &str) -> usize {
    password.encode_utf16().count()
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            email: TextField::new("Email"),
            password: TextField::masked("Password"),
            password_error: String::new(),
        }
    }

    /// Validate the password and acknowledge a successful login
    ///
    /// Only the password length is checked. Fields are never cleared.
    pub fn submit(&mut self, notifier: &mut dyn Notifier) {
        if password_len(self.password.value()) < PASSWORD_MIN_LEN {
            tracing::debug!("login rejected: password too short");
            self.password_error = PASSWORD_TOO_SHORT.to_string();
        } else {
            self.password_error.clear();
            notifier.notify(LOGIN_SUCCESS);
        }
    }

    pub fn render(&self, layout: &PageLayout, buf: &mut Buffer, focus: Focus) {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                " Login ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))
            .render(layout.login, buf);

        self.email
            .render(layout.email_field, buf, focus == Focus::EmailField);
        self.password
            .render(layout.password_field, buf, focus == Focus::PasswordField);

        if !self.password_error.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                self.password_error.as_str(),
                Style::default().fg(Color::Red),
            )))
            .render(layout.password_error, buf);
        }

        button::render_inline("Login", layout.login_button, buf, focus == Focus::LoginButton);
    }
}
