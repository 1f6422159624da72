// Core storefront models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;

use crate::types::CatalogError;

/// Stable product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        ProductId(id)
    }
}

/// A non-negative monetary amount, held in minor units (cents).
///
/// Catalog files carry prices as decimal major units (`129.99`); they are
/// rounded to the nearest cent on the way in and always display with two
/// decimal places, which is also the format handed to the payment widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Create an amount from minor units
    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    /// Create an amount from decimal major units
    pub fn from_major(amount: f64) -> Result<Self, CatalogError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CatalogError::InvalidPrice(amount));
        }
        let cents = (amount * 100.0).round();
        // u64::MAX as f64 rounds up to 2^64, which is already out of range
        if cents >= u64::MAX as f64 {
            return Err(CatalogError::InvalidPrice(amount));
        }
        Ok(Money(cents as u64))
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Price of `quantity` units
    pub fn times(&self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(quantity)))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("{}.{:02}", self.0 / 100, self.0 % 100))
    }
}

impl TryFrom<f64> for Money {
    type Error = CatalogError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Money::from_major(value)
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> Self {
        money.0 as f64 / 100.0
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        Money(iter.fold(0u64, |acc, m| acc.saturating_add(m.0)))
    }
}

/// A purchasable product. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,
}

/// A product snapshot paired with a positive quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    #[serde(flatten)]
    pub product: Product,
    pub quantity: u32,
}

impl CartLineItem {
    pub fn new(product: Product) -> Self {
        Self { product, quantity: 1 }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Price times quantity
    pub fn subtotal(&self) -> Money {
        self.product.price.times(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_rounds_to_cents() {
        assert_eq!(Money::from_major(129.99).unwrap().cents(), 12999);
        assert_eq!(Money::from_major(0.1 + 0.2).unwrap().cents(), 30);
        assert_eq!(Money::from_major(40.0).unwrap().to_string(), "40.00");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
    }

    #[test]
    fn test_money_rejects_negative_and_nan() {
        assert!(matches!(Money::from_major(-1.0), Err(CatalogError::InvalidPrice(_))));
        assert!(Money::from_major(f64::NAN).is_err());
        assert!(Money::from_major(f64::INFINITY).is_err());
        assert!(matches!(Money::from_major(1e300), Err(CatalogError::InvalidPrice(_))));
        assert!(Money::from_major(1.9e17).is_err());
        assert!(Money::from_major(1.8e17).is_ok());
    }

    #[test]
    fn test_product_from_json() {
        let json = r#"{"id":7,"name":"Lamp","price":19.5,"category":"Home","description":"Warm light"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId(7));
        assert_eq!(product.price, Money::from_cents(1950));
        assert_eq!(product.image, "");
        assert!(product.rating.is_none());

        let bad = r#"{"id":8,"name":"Bad","price":-2,"category":"Home"}"#;
        assert!(serde_json::from_str::<Product>(bad).is_err());
    }

    #[test]
    fn test_line_item_flattens_product() {
        let product: Product =
            serde_json::from_str(r#"{"id":1,"name":"Cap","price":10,"category":"A"}"#).unwrap();
        let mut item = CartLineItem::new(product);
        item.quantity = 3;

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["quantity"], 3);
        assert_eq!(item.subtotal(), Money::from_cents(3000));
    }
}
