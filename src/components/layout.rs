//! Layout calculations for the UI
//!
//! The page is laid out at its full height in its own coordinate space
//! (origin at 0,0). The same `PageLayout` is used to render the page and to
//! hit-test mouse events, so both always agree.

use crate::model::{Focus, NavEntry, Panel, Tab};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const APP_BAR_HEIGHT: u16 = 3;
pub const MENU_TOGGLE_WIDTH: u16 = 5;
pub const MENU_HEIGHT: u16 = 5;
pub const FIELD_HEIGHT: u16 = 3;
pub const SEARCH_HEIGHT: u16 = FIELD_HEIGHT;
/// Border, two fields, error line and button
pub const LOGIN_HEIGHT: u16 = 2 + FIELD_HEIGHT * 2 + 1 + 1;
pub const TABS_HEIGHT: u16 = 3;
pub const DIVIDER_HEIGHT: u16 = 1;
pub const HEADING_HEIGHT: u16 = 2;
pub const IMAGE_HEIGHT: u16 = 5;
/// Border, image and name label
pub const CARD_HEIGHT: u16 = 2 + IMAGE_HEIGHT + 1;
pub const ROW_HEIGHT: u16 = 3;
pub const TEXT_PANEL_HEIGHT: u16 = 1;
pub const FOOTER_HEIGHT: u16 = 4;

/// Horizontal padding around the page body
const BODY_PADDING: u16 = 1;

/// Screen split between the scrolling page and the help bar
pub struct ScreenLayout {
    pub page: Rect,
    pub help: Rect,
}

/// Every section and interactive target of the page, in page coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLayout {
    pub app_bar: Rect,
    pub menu_toggle: Rect,
    pub menu: Option<Rect>,
    pub menu_entries: Vec<(NavEntry, Rect)>,
    pub search: Rect,
    pub search_field: Rect,
    pub search_button: Rect,
    pub dividers: Vec<Rect>,
    pub login: Rect,
    pub email_field: Rect,
    pub password_field: Rect,
    pub password_error: Rect,
    pub login_button: Rect,
    pub tabs: Rect,
    pub tab_cells: Vec<(Tab, Rect)>,
    pub heading: Rect,
    pub panel: Rect,
    /// One rect per card, empty unless the cards panel is showing
    pub cards: Vec<Rect>,
    /// One rect per swipe list row, empty unless the list panel is showing
    pub rows: Vec<Rect>,
    pub footer: Rect,
    width: u16,
    height: u16,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Split the terminal into the page viewport and a one-line help bar
pub fn calculate_screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    ScreenLayout {
        page: chunks[0],
        help: chunks[1],
    }
}

/// Height of the content below the panel heading
pub fn panel_height(panel: Panel) -> u16 {
    match panel {
        Panel::Cards(recipes) => recipes.len() as u16 * CARD_HEIGHT,
        Panel::List(items) => items.len() as u16 * ROW_HEIGHT,
        Panel::Text(_) => TEXT_PANEL_HEIGHT,
    }
}

fn pad_x(rect: Rect, padding: u16) -> Rect {
    Rect::new(
        rect.x + padding.min(rect.width / 2),
        rect.y,
        rect.width.saturating_sub(padding * 2),
        rect.height,
    )
}

/// Stack of fixed-height sections, top to bottom
struct Column {
    width: u16,
    y: u16,
}

impl Column {
    fn take(&mut self, height: u16) -> Rect {
        let rect = Rect::new(0, self.y, self.width, height);
        self.y += height;
        rect
    }
}

impl PageLayout {
    pub fn new(width: u16, menu_open: bool, panel: Panel) -> PageLayout {
        let mut column = Column { width, y: 0 };
        let mut dividers = Vec::new();

        // App bar, toggle on the right edge
        let app_bar = column.take(APP_BAR_HEIGHT);
        let toggle_width = MENU_TOGGLE_WIDTH.min(width);
        let menu_toggle = Rect::new(
            app_bar.right().saturating_sub(toggle_width),
            app_bar.y,
            toggle_width,
            app_bar.height,
        );

        let (menu, menu_entries) = if menu_open {
            let menu = column.take(MENU_HEIGHT);
            let entries_area = pad_x(menu, 2);
            let entries = NavEntry::all()
                .into_iter()
                .enumerate()
                .map(|(i, entry)| {
                    let rect = Rect::new(entries_area.x, menu.y + 1 + i as u16, entries_area.width, 1);
                    (entry, rect)
                })
                .collect();
            (Some(menu), entries)
        } else {
            (None, Vec::new())
        };

        // Search row: field takes 80%, button the rest
        let search = pad_x(column.take(SEARCH_HEIGHT), BODY_PADDING);
        let search_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(80), Constraint::Min(0)])
            .split(search);
        let search_field = search_chunks[0];
        let search_button = search_chunks[1];

        dividers.push(pad_x(column.take(DIVIDER_HEIGHT), BODY_PADDING));

        // Login block
        let login = pad_x(column.take(LOGIN_HEIGHT), BODY_PADDING);
        let login_inner = pad_x(
            Rect::new(login.x, login.y + 1, login.width, login.height.saturating_sub(2)),
            1,
        );
        let email_field = Rect::new(login_inner.x, login_inner.y, login_inner.width, FIELD_HEIGHT);
        let password_field = Rect::new(
            login_inner.x,
            email_field.bottom(),
            login_inner.width,
            FIELD_HEIGHT,
        );
        let password_error = Rect::new(login_inner.x, password_field.bottom(), login_inner.width, 1);
        let login_button = Rect::new(login_inner.x, password_error.bottom(), login_inner.width, 1);

        dividers.push(pad_x(column.take(DIVIDER_HEIGHT), BODY_PADDING));

        // Tab strip, three equal cells
        let tabs = pad_x(column.take(TABS_HEIGHT), BODY_PADDING);
        let tab_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(tabs);
        let tab_cells = Tab::all()
            .into_iter()
            .zip(tab_chunks.iter().copied())
            .collect();

        dividers.push(pad_x(column.take(DIVIDER_HEIGHT), BODY_PADDING));

        // Active panel
        let heading = pad_x(column.take(HEADING_HEIGHT), BODY_PADDING);
        let panel_rect = pad_x(column.take(panel_height(panel)), BODY_PADDING);
        let stack = |count: usize, item_height: u16| -> Vec<Rect> {
            (0..count)
                .map(|i| {
                    Rect::new(
                        panel_rect.x,
                        panel_rect.y + i as u16 * item_height,
                        panel_rect.width,
                        item_height,
                    )
                })
                .collect()
        };
        let (cards, rows) = match panel {
            Panel::Cards(recipes) => (stack(recipes.len(), CARD_HEIGHT), Vec::new()),
            Panel::List(items) => (Vec::new(), stack(items.len(), ROW_HEIGHT)),
            Panel::Text(_) => (Vec::new(), Vec::new()),
        };

        let footer = column.take(FOOTER_HEIGHT);

        PageLayout {
            app_bar,
            menu_toggle,
            menu,
            menu_entries,
            search,
            search_field,
            search_button,
            dividers,
            login,
            email_field,
            password_field,
            password_error,
            login_button,
            tabs,
            tab_cells,
            heading,
            panel: panel_rect,
            cards,
            rows,
            footer,
            width,
            height: column.y,
        }
    }

    /// Full page height
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The whole page, for sizing the off-screen buffer
    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Interactive targets in page order, with their hit areas
    pub fn targets(&self) -> Vec<(Focus, Rect)> {
        let mut targets = vec![(Focus::MenuToggle, self.menu_toggle)];
        targets.extend(
            self.menu_entries
                .iter()
                .map(|(entry, rect)| (Focus::MenuEntry(*entry), *rect)),
        );
        targets.extend([
            (Focus::SearchField, self.search_field),
            (Focus::SearchButton, self.search_button),
            (Focus::EmailField, self.email_field),
            (Focus::PasswordField, self.password_field),
            (Focus::LoginButton, self.login_button),
        ]);
        targets.extend(self.tab_cells.iter().map(|(tab, rect)| (Focus::Tab(*tab), *rect)));
        targets.extend(
            self.rows
                .iter()
                .enumerate()
                .map(|(i, rect)| (Focus::Row(i), *rect)),
        );
        targets
    }

    /// Target under a page-space position
    pub fn target_at(&self, x: u16, y: u16) -> Option<Focus> {
        self.targets()
            .into_iter()
            .find(|(_, rect)| contains(*rect, x, y))
            .map(|(focus, _)| focus)
    }

    /// Hit area of a target, if it is on the page
    pub fn rect_of(&self, focus: Focus) -> Option<Rect> {
        self.targets()
            .into_iter()
            .find(|(target, _)| *target == focus)
            .map(|(_, rect)| rect)
    }
}

pub fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}
