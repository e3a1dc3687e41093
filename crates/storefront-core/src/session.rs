//! # Shopping Session
//!
//! One user's view of the store: the live catalog, a cart and the checkout
//! with its sales log.
//!
//! ```text
//! ┌──────────────────────────── Session ────────────────────────────┐
//! │                                                                 │
//! │   Catalog ◄──── available(id) = max(0, stock - staged) ───┐     │
//! │      ▲                                                    │     │
//! │      │ decrease_stock                                     │     │
//! │      │                                                    │     │
//! │   Checkout ──── commit ────► Cart ◄── add_to_cart(id, qty)┘     │
//! │      │                                                          │
//! │      └──► SalesLog                                              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use tracing::info;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::checkout::Checkout;
use crate::error::{CoreError, CoreResult};
use crate::sales::SalesLog;
use crate::types::{ProductId, Receipt};

/// Owns everything a single shopper touches.
#[derive(Debug, Clone)]
pub struct Session {
    catalog: Catalog,
    cart: Cart,
    checkout: Checkout,
}

impl Session {
    /// Starts a session with an empty cart and an empty sales log.
    pub fn new(catalog: Catalog) -> Self {
        info!(products = catalog.len(), "Session started");
        Session {
            catalog,
            cart: Cart::new(),
            checkout: Checkout::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn sales(&self) -> &SalesLog {
        self.checkout.sales()
    }

    /// Units of `id` that can still be added to the cart.
    ///
    /// ## Errors
    /// `ProductNotFound` if `id` is not in the catalog.
    pub fn available(&self, id: ProductId) -> CoreResult<i64> {
        let product = self.catalog.get(id).ok_or(CoreError::ProductNotFound(id))?;
        Ok((product.stock() - self.cart.quantity_of(id)).max(0))
    }

    /// Stages `quantity` units of `id`, bounded by [`Session::available`].
    pub fn add_to_cart(&mut self, id: ProductId, quantity: i64) -> CoreResult<()> {
        let limit = self.available(id)?;
        let product = self.catalog.get(id).ok_or(CoreError::ProductNotFound(id))?;
        self.cart.add(product, quantity, limit)
    }

    /// Commits the cart. On error the cart is kept for correction.
    pub fn checkout(&mut self) -> CoreResult<Receipt> {
        self.checkout.commit(&mut self.catalog, &mut self.cart)
    }

    /// Drops every staged line without touching stock.
    pub fn reset_cart(&mut self) {
        self.cart.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::Product;

    fn session() -> Session {
        let products = [
            Product::new(ProductId::new(1), "Monitor", Money::from_cents(10000), 5).unwrap(),
            Product::new(ProductId::new(2), "Cable", Money::from_cents(500), 0).unwrap(),
        ];
        Session::new(Catalog::new(products).unwrap())
    }

    #[test]
    fn test_available_subtracts_staged_quantity() {
        let mut session = session();
        assert_eq!(session.available(ProductId::new(1)), Ok(5));

        session.add_to_cart(ProductId::new(1), 3).unwrap();
        assert_eq!(session.available(ProductId::new(1)), Ok(2));
        assert_eq!(session.available(ProductId::new(2)), Ok(0));
        assert_eq!(
            session.available(ProductId::new(9)),
            Err(CoreError::ProductNotFound(ProductId::new(9)))
        );
    }

    #[test]
    fn test_add_to_cart_respects_limit() {
        let mut session = session();
        session.add_to_cart(ProductId::new(1), 3).unwrap();

        assert_eq!(
            session.add_to_cart(ProductId::new(1), 3),
            Err(CoreError::ExceedsAvailable {
                product_id: ProductId::new(1),
                available: 2,
                requested: 3,
            })
        );
        session.add_to_cart(ProductId::new(1), 2).unwrap();
        assert_eq!(session.cart().quantity_of(ProductId::new(1)), 5);
        assert_eq!(session.available(ProductId::new(1)), Ok(0));
    }

    #[test]
    fn test_add_to_cart_unknown_product() {
        let mut session = session();
        assert_eq!(
            session.add_to_cart(ProductId::new(42), 1),
            Err(CoreError::ProductNotFound(ProductId::new(42)))
        );
        assert!(session.cart().is_empty());
    }

    #[test]
    fn test_checkout_flow() {
        let mut session = session();
        assert_eq!(session.checkout(), Err(CoreError::EmptyCart));

        session.add_to_cart(ProductId::new(1), 5).unwrap();
        let receipt = session.checkout().unwrap();

        assert_eq!(receipt.total(), Money::from_major_minor(500, 0));
        assert!(session.cart().is_empty());
        assert!(session.catalog().get(ProductId::new(1)).unwrap().is_sold_out());
        assert_eq!(session.sales().len(), 1);
        assert_eq!(session.available(ProductId::new(1)), Ok(0));
    }

    #[test]
    fn test_reset_cart_keeps_stock() {
        let mut session = session();
        session.add_to_cart(ProductId::new(1), 4).unwrap();

        session.reset_cart();

        assert!(session.cart().is_empty());
        assert_eq!(session.catalog().get(ProductId::new(1)).unwrap().stock(), 5);
        assert!(session.sales().is_empty());
    }
}
