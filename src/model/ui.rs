//! UI state - tabs, panels and focus targets
//!
//! The component structs own the values; these are the shared vocabulary
//! types they are expressed in.

use super::recipe::{Recipe, SwipeItem};

/// Tab selection in the tab strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Cards,
    SwipeList,
    Other,
}

impl Tab {
    pub fn all() -> [Tab; 3] {
        [Tab::Cards, Tab::SwipeList, Tab::Other]
    }

    /// Tab for a zero-based index, `None` when out of range
    pub fn from_index(index: usize) -> Option<Tab> {
        Self::all().get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            Tab::Cards => 0,
            Tab::SwipeList => 1,
            Tab::Other => 2,
        }
    }

    /// Label on the tab button
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Cards => "Tab 1",
            Tab::SwipeList => "Tab 2",
            Tab::Other => "Tab 3",
        }
    }

    /// Content panel rendered while this tab is active
    pub fn panel(&self) -> Panel {
        match self {
            Tab::Cards => Panel::Cards(Recipe::catalog()),
            Tab::SwipeList => Panel::List(SwipeItem::all()),
            Tab::Other => Panel::Text("This is additional content for Tab 3."),
        }
    }
}

/// The one content block under the tab strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Cards(&'static [Recipe]),
    List(&'static [SwipeItem]),
    Text(&'static str),
}

impl Panel {
    pub fn heading(&self) -> &'static str {
        match self {
            Panel::Cards(_) => "Cards with Images",
            Panel::List(_) => "Swipe List",
            Panel::Text(_) => "Other Content",
        }
    }
}

/// Entries of the app bar navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEntry {
    Home,
    Profile,
    Settings,
}

impl NavEntry {
    pub fn all() -> [NavEntry; 3] {
        [NavEntry::Home, NavEntry::Profile, NavEntry::Settings]
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavEntry::Home => "Home",
            NavEntry::Profile => "Profile",
            NavEntry::Settings => "Settings",
        }
    }
}

/// Editable text fields on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Search,
    Email,
    Password,
}

/// Anything on the page that can take keyboard focus or a click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    MenuToggle,
    MenuEntry(NavEntry),
    SearchField,
    SearchButton,
    EmailField,
    PasswordField,
    LoginButton,
    Tab(Tab),
    /// Row of the swipe list, by position
    Row(usize),
}

impl Focus {
    /// The text field behind this target, if it is one
    pub fn field(&self) -> Option<Field> {
        match self {
            Focus::SearchField => Some(Field::Search),
            Focus::EmailField => Some(Field::Email),
            Focus::PasswordField => Some(Field::Password),
            _ => None,
        }
    }
}
