//! # Domain Types
//!
//! Core domain types shared by the catalog, cart and checkout.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │    Product      │   │    Receipt      │   │  ReceiptLine    │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  id (≥ 1)       │   │  id (UUID)      │   │  product_id     │        │
//! │  │  name           │   │  number         │   │  name (frozen)  │        │
//! │  │  price          │   │  created_at     │   │  quantity       │        │
//! │  │  stock (≥ 0)    │   │  lines, total   │   │  unit_price     │        │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are validated on construction. Receipts are built only by
//! [`Checkout`](crate::checkout::Checkout) and are immutable afterwards.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_price, validate_product_id, validate_product_name, validate_stock};

// =============================================================================
// Product Id
// =============================================================================

/// Caller-assigned product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Wraps a raw id. Range checks happen in [`Product::new`].
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    /// Returns the raw id.
    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        ProductId(id)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Only the stock level changes during a session, and only through
/// [`Catalog::decrease_stock`](crate::catalog::Catalog::decrease_stock).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    stock: i64,
}

impl Product {
    /// Creates a validated product.
    ///
    /// ## Rules
    /// - id ≥ 1
    /// - name not blank (stored trimmed)
    /// - price ≥ 0
    /// - stock ≥ 0
    ///
    /// ```rust
    /// use storefront_core::{Money, Product, ProductId};
    ///
    /// let p = Product::new(ProductId::new(5), "SSD 1TB NVMe", Money::from_cents(32900), 12).unwrap();
    /// assert_eq!(p.stock(), 12);
    /// assert!(Product::new(ProductId::new(6), "Cable", Money::from_cents(-1), 1).is_err());
    /// ```
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        stock: i64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();

        validate_product_id(id.get())?;
        validate_product_name(&name)?;
        validate_price(price)?;
        validate_stock(stock)?;

        Ok(Product {
            id,
            name: name.trim().to_string(),
            price,
            stock,
        })
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Units currently in stock.
    #[inline]
    pub fn stock(&self) -> i64 {
        self.stock
    }

    /// True when no units are left.
    #[inline]
    pub fn is_sold_out(&self) -> bool {
        self.stock == 0
    }

    /// Removes `amount` units. Callers have already checked the amount.
    pub(crate) fn take_stock(&mut self, amount: i64) {
        debug_assert!(amount > 0 && amount <= self.stock);
        self.stock -= amount;
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A receipt line, frozen at commit time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    /// Product the line was sold from.
    pub product_id: ProductId,
    /// Product name at time of sale.
    pub name: String,
    /// Units sold.
    pub quantity: i64,
    /// Unit price at time of sale.
    pub unit_price: Money,
}

impl ReceiptLine {
    /// Quantity × unit price.
    #[inline]
    pub fn subtotal(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// Immutable record of a completed purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    id: Uuid,
    number: u32,
    created_at: DateTime<Utc>,
    lines: Vec<ReceiptLine>,
    total: Money,
}

impl Receipt {
    pub(crate) fn new(
        number: u32,
        created_at: DateTime<Utc>,
        lines: Vec<ReceiptLine>,
        total: Money,
    ) -> Self {
        Receipt {
            id: Uuid::new_v4(),
            number,
            created_at,
            lines,
            total,
        }
    }

    /// Unique receipt identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Position of this receipt in the session's sales log, starting at 1.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// When the purchase was committed.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Lines in ascending product id order.
    pub fn lines(&self) -> &[ReceiptLine] {
        &self.lines
    }

    /// Amount paid.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Total number of units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
