//! Action enum - All possible application actions
//!
//! Actions are discrete operations that the application can perform.
//! Components emit Actions in response to events, and the App processes
//! them to update state.

use crate::model::{Field, Focus, NavEntry, Tab};
use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick, drives long-press detection
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Focus & Pointer
    // ─────────────────────────────────────────────────────────────────────────
    /// Move focus to the next target
    FocusNext,
    /// Move focus to the previous target
    FocusPrev,
    /// Focus a target and activate it
    Press(Focus),
    /// Focus a target and long-activate it
    LongPress(Focus),

    // ─────────────────────────────────────────────────────────────────────────
    // Scrolling
    // ─────────────────────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,

    // ─────────────────────────────────────────────────────────────────────────
    // App Bar
    // ─────────────────────────────────────────────────────────────────────────
    /// Open or close the navigation menu
    ToggleMenu,
    /// Pointer entered (true) or left (false) the menu toggle
    SetHovered(bool),
    /// Menu entry was activated
    SelectNavEntry(NavEntry),

    // ─────────────────────────────────────────────────────────────────────────
    // Text Fields
    // ─────────────────────────────────────────────────────────────────────────
    /// Append a character to a field
    Input(Field, char),
    /// Remove the last character of a field
    Backspace(Field),

    // ─────────────────────────────────────────────────────────────────────────
    // Forms
    // ─────────────────────────────────────────────────────────────────────────
    SubmitSearch,
    SubmitLogin,

    // ─────────────────────────────────────────────────────────────────────────
    // Tabs & Panels
    // ─────────────────────────────────────────────────────────────────────────
    SelectTab(Tab),
    /// Swipe list row tapped, by position
    TapItem(usize),
    /// Swipe list row long-pressed, by position
    LongPressItem(usize),

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    OpenQuitDialog,
    OpenHelp,
    /// Close the current modal
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::FocusNext => write!(f, "FocusNext"),
            Action::FocusPrev => write!(f, "FocusPrev"),
            Action::Press(target) => write!(f, "Press({:?})", target),
            Action::LongPress(target) => write!(f, "LongPress({:?})", target),
            Action::ScrollUp => write!(f, "ScrollUp"),
            Action::ScrollDown => write!(f, "ScrollDown"),
            Action::PageUp => write!(f, "PageUp"),
            Action::PageDown => write!(f, "PageDown"),
            Action::ToggleMenu => write!(f, "ToggleMenu"),
            Action::SetHovered(hovered) => write!(f, "SetHovered({})", hovered),
            Action::SelectNavEntry(entry) => write!(f, "SelectNavEntry({})", entry.label()),
            Action::Input(field, c) => write!(f, "Input({:?}, '{}')", field, c),
            Action::Backspace(field) => write!(f, "Backspace({:?})", field),
            Action::SubmitSearch => write!(f, "SubmitSearch"),
            Action::SubmitLogin => write!(f, "SubmitLogin"),
            Action::SelectTab(tab) => write!(f, "SelectTab({})", tab.label()),
            Action::TapItem(index) => write!(f, "TapItem({})", index),
            Action::LongPressItem(index) => write!(f, "LongPressItem({})", index),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}

impl Focus {
    /// Action fired when this target is pressed
    ///
    /// Text fields only take focus, so they have none.
    pub fn activation(&self) -> Option<Action> {
        match *self {
            Focus::MenuToggle => Some(Action::ToggleMenu),
            Focus::MenuEntry(entry) => Some(Action::SelectNavEntry(entry)),
            Focus::SearchButton => Some(Action::SubmitSearch),
            Focus::LoginButton => Some(Action::SubmitLogin),
            Focus::Tab(tab) => Some(Action::SelectTab(tab)),
            Focus::Row(index) => Some(Action::TapItem(index)),
            Focus::SearchField | Focus::EmailField | Focus::PasswordField => None,
        }
    }

    /// Action fired when this target is held down
    ///
    /// Only swipe list rows distinguish a long press; everything else
    /// treats it as a normal press.
    pub fn long_activation(&self) -> Option<Action> {
        match *self {
            Focus::Row(index) => Some(Action::LongPressItem(index)),
            _ => self.activation(),
        }
    }
}
