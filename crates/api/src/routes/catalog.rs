//! Catalog route handlers: brand listing and keyword search.
//!
//! Both endpoints are public and read-only. Brand existence gates the
//! brand listing's 404; an existing brand with no products still
//! returns 200 with an empty array.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use crate::error::{ApiError, Result};
use crate::models::Product;
use crate::state::AppState;

/// Query parameters for the brand listing.
#[derive(Debug, Deserialize)]
pub struct BrandsQuery {
    #[serde(default)]
    pub brand: String,
}

/// Query parameters for product search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: String,
}

/// List all products for one brand, matched by exact name.
#[instrument(skip(state))]
pub async fn brands(
    State(state): State<AppState>,
    Query(query): Query<BrandsQuery>,
) -> Result<Json<Vec<Product>>> {
    if query.brand.is_empty() {
        return Err(ApiError::BadRequest(
            "Brand name required in query".to_string(),
        ));
    }

    let brand = state
        .catalog()
        .brand_by_name(&query.brand)
        .ok_or_else(|| ApiError::NotFound("Brand not found".to_string()))?;

    Ok(Json(state.catalog().products_by_brand(&brand.id)))
}

/// Search products by case-insensitive substring over name and description.
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<Product>>> {
    if query.search.is_empty() {
        return Err(ApiError::BadRequest("Search query required".to_string()));
    }

    let matches = state.catalog().search(&query.search);
    if matches.is_empty() {
        return Err(ApiError::NotFound(
            "No sunglasses match your search".to_string(),
        ));
    }

    Ok(Json(matches))
}
