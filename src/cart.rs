//! Cart Store
//!
//! In-memory line items keyed by product id. Every operation is total: out of
//! range quantities are normalised (zero or less removes the line) instead of
//! being rejected. Totals are always recomputed from the line items.

use crate::models::{CartLineItem, Money, Product, ProductId};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`, creating its line item on first add
    pub fn add(&mut self, product: &Product) {
        match self.items.iter_mut().find(|item| item.id() == product.id) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(1);
                debug!("Cart: product {} quantity -> {}", product.id, item.quantity);
            }
            None => {
                self.items.push(CartLineItem::new(product.clone()));
                debug!("Cart: added product {}", product.id);
            }
        }
    }

    /// Replace the quantity of a line item. Zero or less removes it; unknown
    /// ids are ignored.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) {
        if quantity <= 0 {
            let before = self.items.len();
            self.items.retain(|item| item.id() != id);
            if self.items.len() != before {
                debug!("Cart: removed product {}", id);
            }
            return;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(item) = self.items.iter_mut().find(|item| item.id() == id) {
            item.quantity = quantity;
            debug!("Cart: product {} quantity -> {}", id, quantity);
        }
    }

    /// Sum of price x quantity across all line items
    pub fn total(&self) -> Money {
        self.items.iter().map(CartLineItem::subtotal).sum()
    }

    /// Sum of quantities (badge count)
    pub fn count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn get(&self, id: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn product(id: u32, dollars: u64) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Product {}", id),
            price: Money::from_cents(dollars * 100),
            category: "A".to_string(),
            description: String::new(),
            image: String::new(),
            rating: None,
            stock: None,
        }
    }

    fn expected_total(cart: &Cart) -> Money {
        Money::from_cents(
            cart.items()
                .iter()
                .map(|i| i.product.price.cents() * u64::from(i.quantity))
                .sum(),
        )
    }

    #[test]
    fn test_add_same_product_twice_merges() {
        let mut cart = Cart::new();
        let p = product(2, 20);
        cart.add(&p);
        cart.add(&p);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(ProductId(2)).unwrap().quantity, 2);
        assert_eq!(cart.total(), Money::from_cents(4000));
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&product(3, 1));
        cart.add(&product(1, 1));
        cart.add(&product(3, 1));

        let ids: Vec<u32> = cart.items().iter().map(|i| i.id().0).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_set_quantity_replaces() {
        let mut cart = Cart::new();
        cart.add(&product(1, 10));
        cart.set_quantity(ProductId(1), 5);

        assert_eq!(cart.get(ProductId(1)).unwrap().quantity, 5);
        assert_eq!(cart.total(), Money::from_cents(5000));
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add(&product(1, 10));
        cart.add(&product(2, 20));
        cart.set_quantity(ProductId(2), 3);
        let before = cart.count();

        cart.set_quantity(ProductId(2), 0);
        assert!(cart.get(ProductId(2)).is_none());
        assert_eq!(cart.count(), before - 3);

        cart.set_quantity(ProductId(1), -4);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::ZERO);
    }

    #[test]
    fn test_set_quantity_unknown_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, 10));

        cart.set_quantity(ProductId(42), 0);
        cart.set_quantity(ProductId(42), 7);

        assert_eq!(cart.len(), 1);
        assert!(cart.get(ProductId(42)).is_none());
        assert_eq!(cart.count(), 1);
    }

    #[test]
    fn test_total_tracks_every_mutation() {
        let mut cart = Cart::new();
        let a = product(1, 10);
        let b = product(2, 7);

        cart.add(&a);
        assert_eq!(cart.total(), expected_total(&cart));
        cart.add(&b);
        assert_eq!(cart.total(), expected_total(&cart));
        cart.set_quantity(a.id, 4);
        assert_eq!(cart.total(), expected_total(&cart));
        cart.add(&b);
        assert_eq!(cart.total(), expected_total(&cart));
        cart.set_quantity(b.id, 0);
        assert_eq!(cart.total(), expected_total(&cart));
        assert_eq!(cart.total(), Money::from_cents(4000));
    }

    #[test]
    fn test_huge_quantity_saturates() {
        let mut cart = Cart::new();
        cart.add(&product(1, 1));
        cart.set_quantity(ProductId(1), i64::MAX);
        assert_eq!(cart.get(ProductId(1)).unwrap().quantity, u32::MAX);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u32),
        SetQuantity(u32, i64),
    }

    // Ids 0..8 are purchasable; 8..12 never reach the cart
    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u32..8).prop_map(Op::Add),
            (0u32..12, -3i64..6).prop_map(|(id, qty)| Op::SetQuantity(id, qty)),
        ]
    }

    proptest! {
        #[test]
        fn totals_follow_line_items(ops in prop::collection::vec(arb_op(), 0..60)) {
            let products: Vec<Product> = (0..8).map(|id| product(id, u64::from(id) + 1)).collect();
            let mut cart = Cart::new();

            for op in ops {
                match op {
                    Op::Add(id) => cart.add(&products[id as usize]),
                    Op::SetQuantity(id, qty) => {
                        let prior = cart.get(ProductId(id)).map(|i| u64::from(i.quantity));
                        let count_before = cart.count();
                        cart.set_quantity(ProductId(id), qty);
                        match prior {
                            Some(prior) if qty <= 0 => {
                                prop_assert_eq!(cart.count(), count_before - prior);
                                prop_assert!(cart.get(ProductId(id)).is_none());
                            }
                            None => prop_assert_eq!(cart.count(), count_before),
                            _ => {}
                        }
                    }
                }

                prop_assert_eq!(cart.total(), expected_total(&cart));
                let quantities: u64 = cart.items().iter().map(|i| u64::from(i.quantity)).sum();
                prop_assert_eq!(cart.count(), quantities);
                prop_assert!(cart.items().iter().all(|i| i.quantity > 0));

                let distinct: HashSet<ProductId> = cart.items().iter().map(CartLineItem::id).collect();
                prop_assert_eq!(distinct.len(), cart.len());
            }
        }
    }
}
