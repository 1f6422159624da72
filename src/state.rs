//! Storefront State
//!
//! The single state object shared with every consumer. All mutation goes
//! through [`StoreState::apply`], which routes actions to the cart, the
//! navigator and the filter inputs; consumers read through the accessors.

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::models::{Money, Product, ProductId};
use crate::view::{NavAction, Navigator, Screen};
use tracing::warn;

pub const DEFAULT_FEATURED_COUNT: usize = 4;

/// User-triggered state changes
#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    Navigate(NavAction),
    SetQuery(String),
    /// Empty string clears the category constraint
    SetCategory(String),
    AddToCart(ProductId),
    SetQuantity(ProductId, i64),
    OpenCart,
    CloseCart,
}

#[derive(Debug, Clone)]
pub struct StoreState {
    catalog: Catalog,
    cart: Cart,
    navigator: Navigator,
    query: String,
    category: String,
    cart_open: bool,
    featured_count: usize,
}

impl StoreState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            navigator: Navigator::new(),
            query: String::new(),
            category: String::new(),
            cart_open: false,
            featured_count: DEFAULT_FEATURED_COUNT,
        }
    }

    pub fn with_featured_count(mut self, count: usize) -> Self {
        self.featured_count = count;
        self
    }

    pub fn apply(&mut self, action: StoreAction) {
        match action {
            StoreAction::Navigate(nav) => {
                if let NavAction::SelectProduct(id) = nav {
                    if self.catalog.get(id).is_none() {
                        warn!("Ignoring selection of unknown product {}", id);
                        return;
                    }
                }
                self.navigator.apply(nav);
            }
            StoreAction::SetQuery(query) => self.query = query,
            StoreAction::SetCategory(category) => self.category = category,
            StoreAction::AddToCart(id) => match self.catalog.get(id) {
                Some(product) => {
                    self.cart.add(product);
                    self.cart_open = true;
                }
                None => warn!("Ignoring add of unknown product {}", id),
            },
            StoreAction::SetQuantity(id, quantity) => self.cart.set_quantity(id, quantity),
            StoreAction::OpenCart => self.cart_open = true,
            StoreAction::CloseCart => self.cart_open = false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn screen(&self) -> Screen {
        self.navigator.screen()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.navigator.selected().and_then(|id| self.catalog.get(id))
    }

    /// Products passing the current query and category
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog.filter(&self.query, &self.category)
    }

    /// The leading slice of the visible products shown on the home screen
    pub fn featured_products(&self) -> Vec<&Product> {
        let mut products = self.visible_products();
        products.truncate(self.featured_count);
        products
    }

    /// Products listed on the current screen
    pub fn listed_products(&self) -> Vec<&Product> {
        match self.screen() {
            Screen::Home => self.featured_products(),
            Screen::CategoryListing => self.visible_products(),
            Screen::ProductDetail => self.selected_product().into_iter().collect(),
        }
    }

    pub fn cart_total(&self) -> Money {
        self.cart.total()
    }

    pub fn cart_count(&self) -> u64 {
        self.cart.count()
    }
}
