//! View Coordinator
//!
//! Tracks which screen is visible and the selected product. The selection is
//! a lookup key into the static catalog rather than an owned product.

use crate::models::ProductId;
use tracing::debug;

/// Visible screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    CategoryListing,
    ProductDetail,
}

/// Navigation requests from the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Open the full product listing
    BrowseProducts,
    /// Show one product's details
    SelectProduct(ProductId),
    /// Leave the detail screen
    Back,
    /// Return to the landing screen
    GoHome,
}

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    screen: Screen,
    selected: Option<ProductId>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Selected product, set only while on the detail screen
    pub fn selected(&self) -> Option<ProductId> {
        self.selected
    }

    /// Apply a navigation action and return the resulting screen
    pub fn apply(&mut self, action: NavAction) -> Screen {
        match action {
            NavAction::BrowseProducts => {
                self.screen = Screen::CategoryListing;
                self.selected = None;
            }
            NavAction::SelectProduct(id) => {
                self.screen = Screen::ProductDetail;
                self.selected = Some(id);
            }
            NavAction::Back => {
                // Not a back-stack: leaving details always lands on Home.
                if self.screen == Screen::ProductDetail {
                    self.screen = Screen::Home;
                    self.selected = None;
                }
            }
            NavAction::GoHome => {
                self.screen = Screen::Home;
                self.selected = None;
            }
        }
        debug!("Navigation {:?} -> {:?}", action, self.screen);
        self.screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_home() {
        let nav = Navigator::new();
        assert_eq!(nav.screen(), Screen::Home);
        assert!(nav.selected().is_none());
    }

    #[test]
    fn test_browse_then_select_then_back() {
        let mut nav = Navigator::new();
        assert_eq!(nav.apply(NavAction::BrowseProducts), Screen::CategoryListing);
        assert_eq!(nav.apply(NavAction::SelectProduct(ProductId(3))), Screen::ProductDetail);
        assert_eq!(nav.selected(), Some(ProductId(3)));

        assert_eq!(nav.apply(NavAction::Back), Screen::Home);
        assert!(nav.selected().is_none());
    }

    #[test]
    fn test_select_from_any_state() {
        let mut nav = Navigator::new();
        assert_eq!(nav.apply(NavAction::SelectProduct(ProductId(1))), Screen::ProductDetail);
        assert_eq!(nav.apply(NavAction::SelectProduct(ProductId(2))), Screen::ProductDetail);
        assert_eq!(nav.selected(), Some(ProductId(2)));
    }

    #[test]
    fn test_go_home_clears_selection() {
        let mut nav = Navigator::new();
        nav.apply(NavAction::SelectProduct(ProductId(1)));
        assert_eq!(nav.apply(NavAction::GoHome), Screen::Home);
        assert!(nav.selected().is_none());

        nav.apply(NavAction::BrowseProducts);
        assert_eq!(nav.apply(NavAction::GoHome), Screen::Home);
    }

    #[test]
    fn test_back_outside_detail_is_noop() {
        let mut nav = Navigator::new();
        nav.apply(NavAction::BrowseProducts);
        assert_eq!(nav.apply(NavAction::Back), Screen::CategoryListing);
    }
}
