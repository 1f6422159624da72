//! Catalog Filter
//!
//! Pure selection over the product list by free-text query and category.

use crate::models::Product;

/// Select the products matching `query` and `category`, in catalog order.
///
/// The query is a case-insensitive substring match against the name and
/// description. An empty query matches everything; an empty category matches
/// every category. A category absent from the catalog yields an empty result.
pub fn filter_products<'a>(products: &'a [Product], query: &str, category: &str) -> Vec<&'a Product> {
    let needle = query.to_lowercase();

    products
        .iter()
        .filter(|p| category.is_empty() || p.category == category)
        .filter(|p| needle.is_empty() || matches_query(p, &needle))
        .collect()
}

fn matches_query(product: &Product, needle: &str) -> bool {
    product.name.to_lowercase().contains(needle) || product.description.to_lowercase().contains(needle)
}
