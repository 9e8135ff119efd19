//! Immutable product catalog with lookup indexes.

use std::collections::HashMap;

use sunglasses_core::{BrandId, ProductId};

use crate::models::{Brand, Product};

/// The product catalog, built once at startup.
///
/// Lookups serve requests directly, so the catalog indexes brands by
/// name and products by id up front. Listings and search results keep
/// dataset file order. If the dataset carries duplicate names or ids,
/// the indexes keep the first occurrence, matching a linear scan.
pub struct Catalog {
    brands: Vec<Brand>,
    products: Vec<Product>,
    brands_by_name: HashMap<String, usize>,
    products_by_id: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build the catalog and its indexes from the dataset collections.
    #[must_use]
    pub fn new(brands: Vec<Brand>, products: Vec<Product>) -> Self {
        let mut brands_by_name = HashMap::new();
        for (idx, brand) in brands.iter().enumerate() {
            brands_by_name.entry(brand.name.clone()).or_insert(idx);
        }

        let mut products_by_id = HashMap::new();
        for (idx, product) in products.iter().enumerate() {
            products_by_id.entry(product.id.clone()).or_insert(idx);
        }

        Self {
            brands,
            products,
            brands_by_name,
            products_by_id,
        }
    }

    /// Look up a brand by its exact, case-sensitive name.
    #[must_use]
    pub fn brand_by_name(&self, name: &str) -> Option<&Brand> {
        self.brands_by_name
            .get(name)
            .and_then(|&idx| self.brands.get(idx))
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.products_by_id
            .get(id)
            .and_then(|&idx| self.products.get(idx))
    }

    /// All products of one brand, in dataset order.
    #[must_use]
    pub fn products_by_brand(&self, brand_id: &BrandId) -> Vec<Product> {
        self.products
            .iter()
            .filter(|product| &product.category_id == brand_id)
            .cloned()
            .collect()
    }

    /// Products whose name or description contains the term,
    /// case-insensitively, in dataset order.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<Product> {
        let needle = term.to_lowercase();
        self.products
            .iter()
            .filter(|product| {
                product.name.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    /// All brands, in dataset order.
    #[must_use]
    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    /// All products, in dataset order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}
