//! Product catalog types.
//!
//! The catalog is read-only for this crate: it is built once from a
//! product list fetched elsewhere, and every lookup afterwards resolves
//! against that snapshot.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Customer rating for a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProductRating {
    /// Average stars, 0.0 to 5.0.
    pub stars: f32,
    /// Number of ratings.
    pub count: u32,
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Image URL or path.
    pub image: String,
    /// Customer rating.
    pub rating: ProductRating,
    /// Unit price.
    pub price: Money,
    /// Keywords for search and delivery eligibility.
    pub keywords: Vec<String>,
}

impl Product {
    /// Check whether the product carries the given keyword.
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k.eq_ignore_ascii_case(keyword))
    }
}

/// An immutable snapshot of the product catalog.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Build a catalog from an externally-fetched product list.
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// All products, in catalog order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Filter products by a search query.
    ///
    /// Matches case-insensitively against the product name and the joined
    /// keyword list. An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.products.iter().collect();
        }
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.keywords.join(" ").to_lowercase().contains(&needle)
            })
            .collect()
    }
}
