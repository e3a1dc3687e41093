//! Catalog seeding: the built-in demo products or a JSON file.
//!
//! ```json
//! { "products": [ { "id": 1, "name": "Mechanical Keyboard", "price_cents": 14990, "stock": 10 } ] }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use storefront_core::{Catalog, Money, Product, ProductId};
use tracing::{info, warn};

use crate::error::{CliError, CliResult};

/// One product as written in a seed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedProduct {
    pub id: u32,
    pub name: String,
    pub price_cents: i64,
    pub stock: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedFile {
    pub products: Vec<SeedProduct>,
}

/// The five products the shop opens with when no file is given.
pub fn default_products() -> Vec<SeedProduct> {
    let seed = |id, name: &str, price_cents, stock| SeedProduct {
        id,
        name: name.to_string(),
        price_cents,
        stock,
    };

    vec![
        seed(1, "Mechanical Keyboard", 14990, 10),
        seed(2, "Wireless Mouse", 7950, 15),
        seed(3, "24\" FHD Monitor", 69900, 5),
        seed(4, "Bluetooth Headphones", 19990, 8),
        seed(5, "SSD 1TB NVMe", 32900, 12),
    ]
}

pub fn default_catalog() -> CliResult<Catalog> {
    build_catalog(default_products())
}

/// Reads a catalog from a JSON seed file.
pub fn load_catalog(path: &Path) -> CliResult<Catalog> {
    let contents = std::fs::read_to_string(path).map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog(&contents)?;
    info!(path = %path.display(), products = catalog.len(), "Catalog loaded");
    Ok(catalog)
}

pub fn parse_catalog(json: &str) -> CliResult<Catalog> {
    let file: SeedFile = serde_json::from_str(json)?;
    build_catalog(file.products)
}

fn build_catalog(seeds: Vec<SeedProduct>) -> CliResult<Catalog> {
    let products = seeds
        .into_iter()
        .map(|s| {
            Product::new(
                ProductId::new(s.id),
                s.name,
                Money::from_cents(s.price_cents),
                s.stock,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    let catalog = Catalog::new(products)?;
    if catalog.is_empty() {
        warn!("Catalog has no products");
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use storefront_core::ValidationError;

    #[test]
    fn test_default_catalog() {
        let catalog = default_catalog().unwrap();
        let ids: Vec<u32> = catalog.list().map(|p| p.id().get()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        let monitor = catalog.get(ProductId::new(3)).unwrap();
        assert_eq!(monitor.price().cents(), 69900);
        assert_eq!(monitor.stock(), 5);
    }

    #[test]
    fn test_parse_catalog() {
        let catalog = parse_catalog(
            r#"{ "products": [
                { "id": 7, "name": "Cable", "price_cents": 500, "stock": 0 },
                { "id": 2, "name": "Hub", "price_cents": 2500, "stock": 3 }
            ] }"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.get(ProductId::new(7)).unwrap().is_sold_out());
    }

    #[test]
    fn test_parse_rejects_invalid_products() {
        let negative = parse_catalog(
            r#"{ "products": [ { "id": 1, "name": "Cable", "price_cents": -1, "stock": 1 } ] }"#,
        );
        assert!(matches!(
            negative,
            Err(CliError::InvalidCatalog(ValidationError::Negative { .. }))
        ));

        let duplicate = parse_catalog(
            r#"{ "products": [
                { "id": 1, "name": "A", "price_cents": 1, "stock": 1 },
                { "id": 1, "name": "B", "price_cents": 1, "stock": 1 }
            ] }"#,
        );
        assert!(matches!(
            duplicate,
            Err(CliError::InvalidCatalog(ValidationError::Duplicate { .. }))
        ));
    }

    #[test]
    fn test_parse_rejects_out_of_range_values() {
        let huge_price = parse_catalog(
            r#"{ "products": [ { "id": 1, "name": "Gold", "price_cents": 5000000000000000000, "stock": 2 } ] }"#,
        );
        assert!(matches!(
            huge_price,
            Err(CliError::InvalidCatalog(ValidationError::OutOfRange { .. }))
        ));

        let huge_stock = parse_catalog(
            r#"{ "products": [ { "id": 1, "name": "Bolt", "price_cents": 10, "stock": 9223372036854775807 } ] }"#,
        );
        assert!(matches!(
            huge_stock,
            Err(CliError::InvalidCatalog(ValidationError::OutOfRange { .. }))
        ));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(parse_catalog("{"), Err(CliError::InvalidSeed(_))));
        assert!(matches!(
            parse_catalog(r#"{ "products": [ { "id": 1, "name": "A", "price": 1, "stock": 1 } ] }"#),
            Err(CliError::InvalidSeed(_))
        ));
    }

    #[test]
    fn test_load_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let seed = SeedFile {
            products: default_products(),
        };
        write!(file, "{}", serde_json::to_string(&seed).unwrap()).unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 5);
    }
}
