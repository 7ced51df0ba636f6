//! Literal page data
//!
//! Everything the page shows is hard-coded here. Nothing is fetched or saved.

/// A recipe shown as a card in the first tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    pub key: &'static str,
    pub name: &'static str,
    /// Image URI, relative to the web root it is served from
    pub image: &'static str,
}

/// An entry of the swipe list demo in the second tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeItem {
    pub key: &'static str,
    pub name: &'static str,
}

const RECIPES: [Recipe; 3] = [
    Recipe {
        key: "1",
        name: "Spaghetti Carbonara",
        image: "/spaghetti.jpg",
    },
    Recipe {
        key: "2",
        name: "Chicken Alfredo",
        image: "/alfredo.jpg",
    },
    Recipe {
        key: "3",
        name: "Caesar Salad",
        image: "/salad.jpg",
    },
];

const SWIPE_ITEMS: [SwipeItem; 3] = [
    SwipeItem {
        key: "1",
        name: "Tomatoes",
    },
    SwipeItem {
        key: "2",
        name: "Garlic",
    },
    SwipeItem {
        key: "3",
        name: "Pasta",
    },
];

impl Recipe {
    /// All recipes in declaration order
    pub fn catalog() -> &'static [Recipe] {
        &RECIPES
    }
}

impl SwipeItem {
    /// All swipe list items in declaration order
    pub fn all() -> &'static [SwipeItem] {
        &SWIPE_ITEMS
    }
}
