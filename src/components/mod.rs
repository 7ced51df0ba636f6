//! UI Components
//!
//! Screen-level components (the page root and the dialogs) implement
//! `Component`. Page sections own their state and render into the page
//! buffer the page root hands them.

pub mod alert_dialog;
pub mod app_bar;
pub mod button;
pub mod card;
pub mod footer;
pub mod help_dialog;
pub mod home;
pub mod layout;
pub mod login_form;
pub mod quit_dialog;
pub mod search_bar;
pub mod swipe_list;
pub mod text_input;

pub use alert_dialog::AlertDialog;
pub use app_bar::AppBar;
pub use help_dialog::HelpDialog;
pub use home::{render_help_bar, HomeComponent};
pub use layout::{calculate_screen_layout, centered_popup};
pub use login_form::LoginForm;
pub use quit_dialog::QuitDialog;
pub use search_bar::SearchBar;
pub use swipe_list::SwipeList;
