//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                     │
//! │  ├── CoreError        - Catalog, cart and checkout rule violations      │
//! │  └── ValidationError  - Invalid product / seed input                    │
//! │                                                                         │
//! │  storefront-cli errors (app)                                            │
//! │  └── CliError         - Config, seed file and console failures          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → message on screen       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error is recoverable and local. The core never retries; re-prompting
//! the user is the caller's decision.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Catalog, cart and checkout errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No product with this id exists in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// A stock decrement was requested with a zero or negative amount.
    #[error("Amount must be positive, got {amount}")]
    InvalidAmount { amount: i64 },

    /// A cart add was requested with a zero or negative quantity.
    #[error("Quantity must be positive, got {quantity}")]
    InvalidQuantity { quantity: i64 },

    /// The catalog holds fewer units than requested.
    ///
    /// ## When This Occurs
    /// ```text
    /// Cart: product 3 x 4
    ///      │
    ///      ▼
    /// commit() checks stock: available=2
    ///      │
    ///      ▼
    /// InsufficientStock { product_id: 3, available: 2, requested: 4 }
    ///      │
    ///      ▼
    /// Cart is kept so the user can adjust it
    /// ```
    #[error("Insufficient stock for product {product_id}: available {available}, requested {requested}")]
    InsufficientStock {
        product_id: ProductId,
        available: i64,
        requested: i64,
    },

    /// A cart add asked for more than the caller-computed availability limit.
    #[error("Cannot add {requested}: only {available} available")]
    ExceedsAvailable {
        product_id: ProductId,
        available: i64,
        requested: i64,
    },

    /// Checkout was attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for products and catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Duplicate value (e.g., two products with the same id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            product_id: ProductId::new(3),
            available: 2,
            requested: 4,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for product 3: available 2, requested 4"
        );

        let err = CoreError::ExceedsAvailable {
            product_id: ProductId::new(1),
            available: 5,
            requested: 6,
        };
        assert_eq!(err.to_string(), "Cannot add 6: only 5 available");

        assert_eq!(
            CoreError::ProductNotFound(ProductId::new(99)).to_string(),
            "Product not found: 99"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Negative {
            field: "stock".to_string(),
        };
        assert_eq!(err.to_string(), "stock must not be negative");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
