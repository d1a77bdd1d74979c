//! Read-only catalog store with point lookup and storefront queries.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::models::Product;

/// Maximum number of related products returned for a product page.
const RELATED_LIMIT: usize = 4;

/// Seed catalog compiled into the binary; used when no data file is found.
const EMBEDDED_CATALOG: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/products.json"));

/// Sort orders accepted by the product listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Featured products first, catalog order otherwise
    #[default]
    Featured,
    /// Cheapest first
    PriceLow,
    /// Most expensive first
    PriceHigh,
    /// Highest rated first
    Rating,
}

/// Filters applied by the product listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListFilter {
    /// Case-insensitive category equality
    pub category: Option<String>,

    /// Case-insensitive substring match over name, description and category
    pub q: Option<String>,

    /// Sort order (defaults to featured-first)
    #[serde(default)]
    pub sort: SortKey,
}

/// In-memory product catalog keyed by product id.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from an already-deserialized product list.
    pub fn from_products(products: Vec<Product>) -> Self {
        let index = products
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        Self { products, index }
    }

    /// Parses a catalog from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::from_products(serde_json::from_str(json)?))
    }

    /// Loads `products.json` from the data directory, falling back to the
    /// embedded seed catalog when the file is missing or unreadable.
    pub async fn load_or_default(data_dir: &Path) -> Self {
        let path = data_dir.join("products.json");
        match tokio::fs::read_to_string(&path).await {
            Ok(json) => match Self::from_json(&json) {
                Ok(catalog) => {
                    tracing::info!(
                        path = %path.display(),
                        products = catalog.len(),
                        "loaded catalog"
                    );
                    return catalog;
                }
                Err(e) => tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "invalid catalog file, using embedded catalog"
                ),
            },
            Err(_) => tracing::info!(
                path = %path.display(),
                "no catalog file, using embedded catalog"
            ),
        }
        Self::embedded()
    }

    /// The compiled-in seed catalog.
    pub fn embedded() -> Self {
        Self::from_json(EMBEDDED_CATALOG).expect("embedded catalog is valid JSON")
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Point lookup by product id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.index.get(id).map(|&i| &self.products[i])
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Up to four products sharing the category of `id`, excluding the
    /// product itself. Unknown ids yield an empty list.
    pub fn related(&self, id: &str) -> Vec<&Product> {
        let Some(product) = self.get(id) else {
            return Vec::new();
        };
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(RELATED_LIMIT)
            .collect()
    }

    /// Distinct category names in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(product.category.as_str());
            }
        }
        seen
    }

    /// Filtered, sorted product listing.
    pub fn search(&self, filter: &ListFilter) -> Vec<&Product> {
        let mut result: Vec<&Product> = self.products.iter().collect();

        if let Some(category) = filter.category.as_deref() {
            result.retain(|p| p.category.eq_ignore_ascii_case(category));
        }

        if let Some(q) = filter.q.as_deref() {
            let q = q.to_lowercase();
            result.retain(|p| {
                p.name.to_lowercase().contains(&q)
                    || p.description.to_lowercase().contains(&q)
                    || p.category.to_lowercase().contains(&q)
            });
        }

        // Stable sorts, so ties keep catalog order.
        match filter.sort {
            SortKey::PriceLow => result.sort_by(|a, b| a.price.cmp(&b.price)),
            SortKey::PriceHigh => result.sort_by(|a, b| b.price.cmp(&a.price)),
            SortKey::Rating => result.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            SortKey::Featured => result.sort_by_key(|p| !p.featured),
        }

        result
    }
}
