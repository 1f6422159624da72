//! TUI Widgets
//!
//! Product list and detail panes, the cart drawer and the checkout form.

mod cart;
mod checkout;
mod products;

pub use cart::render_cart;
pub use checkout::render_checkout;
pub use products::{render_product_detail, render_product_list};
