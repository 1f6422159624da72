// Error types and result aliases

use crate::models::ProductId;

/// Errors raised while loading the static catalog
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid price: {0} (prices must be finite and non-negative)")]
    InvalidPrice(f64),

    #[error("Duplicate product id: {0}")]
    DuplicateProduct(ProductId),
}

/// Errors raised by the checkout form and its payment hand-off
#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("Missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Payment widget error: {0}")]
    Payment(String),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
