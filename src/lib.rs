// Storefront - catalog browsing, a shopping cart and payment-widget checkout

pub mod config;
pub mod models;
pub mod types;
pub mod catalog;   // Static product catalog and the catalog filter
pub mod cart;
pub mod view;      // Screen state machine
pub mod state;
pub mod checkout;
pub mod payment;   // External payment widget boundary
pub mod utils;
pub mod tui;       // Terminal User Interface

// Re-exports for convenience
pub use cart::Cart;
pub use catalog::Catalog;
pub use config::Config;
pub use state::{StoreAction, StoreState};

use types::AppResult;

/// Load the configured catalog, or the built-in one when no path is set
pub async fn load_catalog(config: &config::CatalogConfig) -> AppResult<Catalog> {
    let catalog = match &config.path {
        Some(path) => Catalog::load(path).await?,
        None => Catalog::builtin()?,
    };
    Ok(catalog)
}
