//! # Cart
//!
//! Session-scoped staging area of requested (product, quantity) pairs.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Caller                      Cart                    State change       │
//! │  ──────                      ────                    ────────────       │
//! │                                                                         │
//! │  limit = stock - staged ───► add(p, qty, limit) ───► line.qty += qty    │
//! │                                                                         │
//! │  Show cart ────────────────► items() / total() ────► (read only)        │
//! │                                                                         │
//! │  Checkout ok / reset ──────► clear() ──────────────► lines.clear()      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart never talks to the catalog. The caller passes the availability
//! limit, so repeated adds cannot exceed true stock and the cart stays
//! testable on its own.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, ProductId};
use crate::MAX_STOCK;

/// A staged product and its requested quantity.
///
/// The product's id, name and unit price are captured when the line is
/// created; the cart never mutates the product itself.
///
/// The unit price is frozen at the first add: later adds of the same product
/// only raise the quantity, and the receipt is priced from this snapshot.
/// Product prices cannot change after construction, so the snapshot always
/// equals the catalog price at commit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    product_id: ProductId,
    name: String,
    unit_price: Money,
    quantity: i64,
}

impl CartLine {
    fn from_product(product: &Product, quantity: i64) -> Self {
        CartLine {
            product_id: product.id(),
            name: product.name().to_string(),
            unit_price: product.price(),
            quantity,
        }
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Quantity × unit price.
    pub fn subtotal(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Every line's quantity is > 0
/// - A product appears at most once (adding again increases the quantity)
/// - Lines iterate in ascending product id order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: BTreeMap<ProductId, CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Staged quantity for a product, or 0 if it is not in the cart.
    pub fn quantity_of(&self, id: ProductId) -> i64 {
        self.lines.get(&id).map_or(0, CartLine::quantity)
    }

    /// Stages `quantity` units of `product`.
    ///
    /// `available_limit` is computed by the caller as stock minus the quantity
    /// already staged for this product. A line never exceeds [`MAX_STOCK`]
    /// units whatever limit is passed.
    ///
    /// ## Errors
    /// - `InvalidQuantity` if `quantity <= 0`
    /// - `ExceedsAvailable` if `quantity > available_limit`
    ///
    /// On error the cart is unchanged.
    pub fn add(&mut self, product: &Product, quantity: i64, available_limit: i64) -> CoreResult<()> {
        if quantity <= 0 {
            return Err(CoreError::InvalidQuantity { quantity });
        }

        let limit = available_limit.min(MAX_STOCK - self.quantity_of(product.id()));
        if quantity > limit {
            return Err(CoreError::ExceedsAvailable {
                product_id: product.id(),
                available: limit.max(0),
                requested: quantity,
            });
        }

        let line = self
            .lines
            .entry(product.id())
            .and_modify(|line| line.quantity += quantity)
            .or_insert_with(|| CartLine::from_product(product, quantity));

        debug!(product_id = %product.id(), added = quantity, staged = line.quantity, "Cart line updated");
        Ok(())
    }

    /// Lines in ascending product id order.
    pub fn items(&self) -> impl Iterator<Item = &CartLine> + '_ {
        self.lines.values()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.values().map(CartLine::quantity).sum()
    }

    /// Sum of line subtotals. Recomputed on every call.
    pub fn total(&self) -> Money {
        self.lines.values().map(CartLine::subtotal).sum()
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_product(id: u32, price_cents: i64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {}", id),
            Money::from_cents(price_cents),
            100,
        )
        .unwrap()
    }

    #[test]
    fn test_add_creates_line() {
        let mut cart = Cart::new();
        let product = test_product(1, 10000);

        cart.add(&product, 3, 5).unwrap();

        assert_eq!(cart.quantity_of(ProductId::new(1)), 3);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total().cents(), 30000);
    }

    #[test]
    fn test_add_same_product_increases_quantity() {
        let mut cart = Cart::new();
        let product = test_product(1, 10000);

        cart.add(&product, 3, 5).unwrap();
        cart.add(&product, 2, 2).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(ProductId::new(1)), 5);
        assert_eq!(cart.total().cents(), 50000);
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        let product = test_product(1, 100);

        assert_eq!(
            cart.add(&product, 0, 5),
            Err(CoreError::InvalidQuantity { quantity: 0 })
        );
        assert_eq!(
            cart.add(&product, -1, 5),
            Err(CoreError::InvalidQuantity { quantity: -1 })
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_rejects_quantity_over_limit() {
        let mut cart = Cart::new();
        let product = test_product(1, 10000);

        assert_eq!(
            cart.add(&product, 6, 5),
            Err(CoreError::ExceedsAvailable {
                product_id: ProductId::new(1),
                available: 5,
                requested: 6,
            })
        );
        assert_eq!(cart.quantity_of(ProductId::new(1)), 0);
    }

    #[test]
    fn test_items_are_ordered_by_id() {
        let mut cart = Cart::new();
        cart.add(&test_product(5, 100), 1, 10).unwrap();
        cart.add(&test_product(2, 100), 1, 10).unwrap();
        cart.add(&test_product(4, 100), 1, 10).unwrap();

        let ids: Vec<u32> = cart.items().map(|l| l.product_id().get()).collect();
        assert_eq!(ids, vec![2, 4, 5]);
    }

    #[test]
    fn test_line_snapshot_fields() {
        let mut cart = Cart::new();
        cart.add(&test_product(3, 69900), 2, 5).unwrap();

        let line = cart.items().next().unwrap();
        assert_eq!(line.name(), "Product 3");
        assert_eq!(line.unit_price().cents(), 69900);
        assert_eq!(line.subtotal().cents(), 139800);
    }

    #[test]
    fn test_price_is_frozen_at_first_add() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 500), 1, 10).unwrap();
        // Same id, different price: the staged line keeps the first snapshot.
        cart.add(&test_product(1, 900), 2, 9).unwrap();

        let line = cart.items().next().unwrap();
        assert_eq!(line.unit_price().cents(), 500);
        assert_eq!(cart.total().cents(), 1500);
    }

    #[test]
    fn test_line_quantity_is_capped() {
        let mut cart = Cart::new();
        let product = Product::new(
            ProductId::new(1),
            "Priciest",
            Money::from_cents(crate::MAX_PRICE_CENTS),
            MAX_STOCK,
        )
        .unwrap();

        cart.add(&product, MAX_STOCK, i64::MAX).unwrap();
        assert_eq!(
            cart.add(&product, 1, i64::MAX),
            Err(CoreError::ExceedsAvailable {
                product_id: ProductId::new(1),
                available: 0,
                requested: 1,
            })
        );
        assert_eq!(cart.total().cents(), crate::MAX_PRICE_CENTS * MAX_STOCK);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&test_product(1, 999), 2, 5).unwrap();
        assert!(!cart.is_empty());

        cart.clear();

        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
        assert_eq!(cart.total_quantity(), 0);
    }

    proptest! {
        /// Property: a valid add raises quantity_of by exactly the added amount
        /// and total() stays equal to the sum of quantity × price.
        #[test]
        fn add_accumulates_and_total_matches(
            adds in proptest::collection::vec((1u32..6, 1i64..20), 1..30),
            prices in proptest::collection::vec(0i64..100_000, 5),
        ) {
            let mut cart = Cart::new();

            for (id, qty) in adds {
                let price = prices[(id - 1) as usize];
                let product = test_product(id, price);
                let before = cart.quantity_of(product.id());

                cart.add(&product, qty, qty).unwrap();

                prop_assert_eq!(cart.quantity_of(product.id()), before + qty);

                let expected: i64 = cart
                    .items()
                    .map(|l| l.quantity() * l.unit_price().cents())
                    .sum();
                prop_assert_eq!(cart.total().cents(), expected);
                prop_assert!(cart.items().all(|l| l.quantity() > 0));
            }
        }

        /// Property: read operations never mutate the cart.
        #[test]
        fn reads_do_not_mutate(qty in 1i64..50) {
            let mut cart = Cart::new();
            cart.add(&test_product(1, 250), qty, qty).unwrap();
            let snapshot = cart.clone();

            let _ = cart.quantity_of(ProductId::new(1));
            let _ = cart.items().count();
            let _ = cart.total();
            let _ = cart.is_empty();

            prop_assert_eq!(cart, snapshot);
        }
    }
}
