//! # Catalog
//!
//! The owned collection of purchasable products and their live stock.
//!
//! `decrease_stock` is the only mutator in the system. It is called by
//! [`Checkout`](crate::checkout::Checkout) once every cart line has passed
//! [`Catalog::check_stock`].

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{Product, ProductId};
use crate::MAX_CATALOG_PRODUCTS;

/// Products keyed by id, iterated in ascending id order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: BTreeMap<ProductId, Product>,
}

impl Catalog {
    /// Builds a catalog from seed products.
    ///
    /// ## Errors
    /// - `ValidationError::Duplicate` if two products share an id
    /// - `ValidationError::OutOfRange` if there are more than
    ///   [`MAX_CATALOG_PRODUCTS`] products
    pub fn new(products: impl IntoIterator<Item = Product>) -> Result<Self, ValidationError> {
        let mut map = BTreeMap::new();

        for product in products {
            let id = product.id();
            if map.insert(id, product).is_some() {
                return Err(ValidationError::Duplicate {
                    field: "product id".to_string(),
                    value: id.to_string(),
                });
            }
            if map.len() > MAX_CATALOG_PRODUCTS {
                return Err(ValidationError::OutOfRange {
                    field: "product count".to_string(),
                    min: 0,
                    max: MAX_CATALOG_PRODUCTS as i64,
                });
            }
        }

        Ok(Catalog { products: map })
    }

    /// Products in ascending id order.
    pub fn list(&self) -> impl Iterator<Item = &Product> + '_ {
        self.products.values()
    }

    /// Looks up a product.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Checks that `amount` units of `id` could be taken, without taking them.
    ///
    /// ## Errors
    /// - `ProductNotFound` if `id` is unknown
    /// - `InvalidAmount` if `amount <= 0`
    /// - `InsufficientStock` if stock < `amount`
    pub fn check_stock(&self, id: ProductId, amount: i64) -> CoreResult<&Product> {
        let product = self.get(id).ok_or(CoreError::ProductNotFound(id))?;

        if amount <= 0 {
            return Err(CoreError::InvalidAmount { amount });
        }

        if product.stock() < amount {
            return Err(CoreError::InsufficientStock {
                product_id: id,
                available: product.stock(),
                requested: amount,
            });
        }

        Ok(product)
    }

    /// Removes `amount` units of `id` from stock.
    ///
    /// Fails with the same errors as [`Catalog::check_stock`]; on failure the
    /// stock is unchanged.
    pub fn decrease_stock(&mut self, id: ProductId, amount: i64) -> CoreResult<()> {
        self.check_stock(id, amount)?;

        let product = self
            .products
            .get_mut(&id)
            .ok_or(CoreError::ProductNotFound(id))?;
        product.take_stock(amount);

        debug!(product_id = %id, amount, remaining = product.stock(), "Stock decreased");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
