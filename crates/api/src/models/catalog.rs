//! Catalog types loaded from the seed dataset.
//!
//! Brands and products are read once at startup and never change while
//! the server runs. Their serde shape mirrors the dataset files, so a
//! product serialized into a response is byte-for-byte the dataset entry.

use serde::{Deserialize, Serialize};

use sunglasses_core::{BrandId, ProductId};

/// A sunglasses brand.
///
/// Products reference brands through their `category_id` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: BrandId,
    pub name: String,
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    /// The brand this product belongs to.
    pub category_id: BrandId,
    pub name: String,
    pub description: String,
    /// Whole-dollar price, kept numeric as in the dataset.
    pub price: u32,
    pub image_urls: Vec<String>,
}
