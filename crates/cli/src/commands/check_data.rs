//! Dataset integrity checks.
//!
//! The server trusts the dataset it loads at startup; this command
//! catches a broken dataset before it ships. Files are loaded through
//! the same path the server uses, then cross-checked for referential
//! integrity and uniqueness.

use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;
use tracing::{error, info};

use sunglasses_api::store::Dataset;
use sunglasses_core::{BrandId, Email, ProductId};

/// A single integrity violation in the dataset.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Violation {
    #[error("product {product_id} references unknown brand {brand_id}")]
    UnknownBrand {
        product_id: ProductId,
        brand_id: BrandId,
    },

    #[error("cart entry {product_id} for {email} references an unknown product")]
    UnknownCartProduct { email: Email, product_id: ProductId },

    #[error("duplicate brand id: {0}")]
    DuplicateBrandId(BrandId),

    #[error("duplicate brand name: {0}")]
    DuplicateBrandName(String),

    #[error("duplicate product id: {0}")]
    DuplicateProductId(ProductId),

    #[error("duplicate user email: {0}")]
    DuplicateEmail(Email),

    #[error("duplicate username: {0}")]
    DuplicateUsername(String),
}

/// Load the dataset and verify its integrity.
///
/// # Errors
///
/// Returns an error if the dataset cannot be loaded or any integrity
/// violation is found.
pub fn check(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    info!(dir = %data_dir.display(), "Loading dataset");

    let dataset = Dataset::load(data_dir)?;

    let violations = find_violations(&dataset);

    if !violations.is_empty() {
        error!("Dataset validation failed:");
        for violation in &violations {
            error!("  - {violation}");
        }
        return Err(format!("{} integrity violations found", violations.len()).into());
    }

    info!("Dataset OK");
    info!("  Brands: {}", dataset.brands.len());
    info!("  Products: {}", dataset.products.len());
    info!("  Users: {}", dataset.users.len());

    Ok(())
}

/// Cross-check references and uniqueness over a loaded dataset.
#[must_use]
pub fn find_violations(dataset: &Dataset) -> Vec<Violation> {
    let mut violations = Vec::new();

    let mut brand_ids = HashSet::new();
    let mut brand_names = HashSet::new();
    for brand in &dataset.brands {
        if !brand_ids.insert(&brand.id) {
            violations.push(Violation::DuplicateBrandId(brand.id.clone()));
        }
        if !brand_names.insert(brand.name.as_str()) {
            violations.push(Violation::DuplicateBrandName(brand.name.clone()));
        }
    }

    let mut product_ids = HashSet::new();
    for product in &dataset.products {
        if !product_ids.insert(&product.id) {
            violations.push(Violation::DuplicateProductId(product.id.clone()));
        }
        if !brand_ids.contains(&product.category_id) {
            violations.push(Violation::UnknownBrand {
                product_id: product.id.clone(),
                brand_id: product.category_id.clone(),
            });
        }
    }

    let mut emails = HashSet::new();
    let mut usernames = HashSet::new();
    for user in &dataset.users {
        if !emails.insert(&user.email) {
            violations.push(Violation::DuplicateEmail(user.email.clone()));
        }
        if !usernames.insert(user.login.username.as_str()) {
            violations.push(Violation::DuplicateUsername(user.login.username.clone()));
        }
        for entry in &user.cart {
            if !product_ids.contains(&entry.id) {
                violations.push(Violation::UnknownCartProduct {
                    email: user.email.clone(),
                    product_id: entry.id.clone(),
                });
            }
        }
    }

    violations
}
