//! # Checkout
//!
//! Finalizes a cart into a stock decrement plus an immutable receipt.
//!
//! ## Commit Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout::commit(catalog, cart)                      │
//! │                                                                         │
//! │  1. cart empty? ───────────────────────────────► Err(EmptyCart)         │
//! │                                                                         │
//! │  2. CHECK  every line: catalog.check_stock ─────► first error aborts,   │
//! │                                                   nothing mutated       │
//! │                                                                         │
//! │  3. APPLY  every line: catalog.decrease_stock                           │
//! │                                                                         │
//! │  4. snapshot lines + cart.total() ─► Receipt ─► sales log               │
//! │                                                                         │
//! │  5. cart.clear(), return Receipt                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Session States
//! ```text
//! Browsing ──add──► CartStaged ──commit ok──► Browsing
//!                       │  ▲
//!                       └──┘ commit fails (cart kept for correction)
//! ```
//!
//! The check and apply phases run back to back with exclusive access to the
//! catalog, so a commit either decrements every line or none of them. A
//! multi-session extension must hold one lock across both phases.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::sales::SalesLog;
use crate::types::{Receipt, ReceiptLine};

/// Commits carts and owns the resulting sales log.
#[derive(Debug, Clone, Default)]
pub struct Checkout {
    sales: SalesLog,
}

impl Checkout {
    /// Creates a checkout with an empty sales log.
    pub fn new() -> Self {
        Checkout::default()
    }

    /// Receipts committed so far.
    pub fn sales(&self) -> &SalesLog {
        &self.sales
    }

    /// Commits `cart` against `catalog`, stamped with the current time.
    ///
    /// ## Errors
    /// - `EmptyCart` if there is nothing to buy
    /// - `ProductNotFound`, `InvalidAmount` or `InsufficientStock` from the
    ///   first line that cannot be fulfilled
    ///
    /// On error neither the catalog, the cart nor the sales log change.
    pub fn commit(&mut self, catalog: &mut Catalog, cart: &mut Cart) -> CoreResult<Receipt> {
        self.commit_at(catalog, cart, Utc::now())
    }

    /// [`Checkout::commit`] with an explicit timestamp.
    pub fn commit_at(
        &mut self,
        catalog: &mut Catalog,
        cart: &mut Cart,
        at: DateTime<Utc>,
    ) -> CoreResult<Receipt> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        for line in cart.items() {
            if let Err(err) = catalog.check_stock(line.product_id(), line.quantity()) {
                warn!(product_id = %line.product_id(), error = %err, "Checkout rejected");
                return Err(err);
            }
        }

        for line in cart.items() {
            catalog.decrease_stock(line.product_id(), line.quantity())?;
        }

        let lines: Vec<ReceiptLine> = cart
            .items()
            .map(|line| ReceiptLine {
                product_id: line.product_id(),
                name: line.name().to_string(),
                quantity: line.quantity(),
                unit_price: line.unit_price(),
            })
            .collect();
        let total = cart.total();

        let receipt = Receipt::new(self.sales.next_number(), at, lines, total);
        self.sales.append(receipt.clone());
        cart.clear();

        info!(
            receipt_id = %receipt.id(),
            number = receipt.number(),
            lines = receipt.lines().len(),
            total = %receipt.total(),
            "Purchase committed"
        );

        Ok(receipt)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
