//! # storefront-core: Catalog, Cart and Checkout
//!
//! Business logic for a single-user, in-memory shop. Pure data structures and
//! functions: the console, files and the terminal all live in the app crate.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                  storefront-cli (console shell)                 │    │
//! │  │   menu ──► parse input ──► Session call ──► render tables       │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │ typed, already-parsed values           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐    │    │
//! │  │   │  catalog  │  │   cart    │  │ checkout  │  │   money   │    │    │
//! │  │   │  Product  │  │ CartLine  │  │  Receipt  │  │   Money   │    │    │
//! │  │   │   stock   │  │  totals   │  │ SalesLog  │  │  (cents)  │    │    │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘    │    │
//! │  │                                                                 │    │
//! │  │   NO I/O • NO FILES • NO TERMINAL • IN-MEMORY ONLY              │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - Products and live stock
//! - [`cart`] - Staged purchases
//! - [`checkout`] - All-or-nothing commit producing receipts
//! - [`session`] - One shopper's catalog, cart and sales log
//! - [`money`] - Integer minor-unit money
//! - [`types`] - Product and receipt types
//! - [`error`] / [`validation`] - Error taxonomy and seed validation
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{Catalog, Money, Product, ProductId, Session};
//!
//! let monitor = Product::new(ProductId::new(1), "Monitor", Money::from_cents(10000), 5).unwrap();
//! let mut session = Session::new(Catalog::new([monitor]).unwrap());
//!
//! session.add_to_cart(ProductId::new(1), 3).unwrap();
//! session.add_to_cart(ProductId::new(1), 2).unwrap();
//! let receipt = session.checkout().unwrap();
//!
//! assert_eq!(receipt.total(), Money::from_major_minor(500, 0));
//! assert_eq!(session.catalog().get(ProductId::new(1)).unwrap().stock(), 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod sales;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine};
pub use catalog::Catalog;
pub use checkout::Checkout;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use sales::SalesLog;
pub use session::Session;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Longest accepted product name, in characters.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Highest accepted unit price, in cents (1,000,000.00).
pub const MAX_PRICE_CENTS: i64 = 100_000_000;

/// Highest accepted stock level for a single product.
pub const MAX_STOCK: i64 = 100_000;

/// Most products a catalog may hold.
///
/// Together with [`MAX_PRICE_CENTS`] and [`MAX_STOCK`] this bounds every line
/// subtotal, cart total and session revenue to at most 10^17 cents, well
/// inside `i64`.
pub const MAX_CATALOG_PRODUCTS: usize = 10_000;
