//! Cart route handlers.
//!
//! Every cart route resolves the `X-Authentication` token before
//! looking at anything else, so an invalid token always answers 401
//! even when the product id is bogus too.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use tracing::instrument;

use sunglasses_core::ProductId;

use crate::error::{ApiError, Result};
use crate::middleware::{AuthToken, require_session};
use crate::models::Product;
use crate::state::AppState;

/// JSON body returned by the cart mutation endpoints.
#[derive(Debug, Serialize)]
pub struct CartMessage {
    pub message: String,
}

/// Current user's cart contents, in stored order.
#[instrument(skip(state, token))]
pub async fn show(
    State(state): State<AppState>,
    AuthToken(token): AuthToken,
) -> Result<Json<Vec<Product>>> {
    let session = require_session(&state, token.as_deref(), "Login required to view cart")?;

    let cart = state.users().cart(&session.email)?;
    Ok(Json(cart))
}

/// Add a product to the current user's cart.
///
/// Adding a product already in the cart appends a second entry.
#[instrument(skip(state, token))]
pub async fn add(
    State(state): State<AppState>,
    AuthToken(token): AuthToken,
    Path(item_id): Path<ProductId>,
) -> Result<Json<CartMessage>> {
    let session = require_session(
        &state,
        token.as_deref(),
        "Login required to add items to cart",
    )?;

    let product = state
        .catalog()
        .product_by_id(&item_id)
        .ok_or_else(|| ApiError::NotFound("Invalid product id".to_string()))?
        .clone();

    state.users().add_to_cart(&session.email, product)?;

    Ok(Json(CartMessage {
        message: format!("Item {item_id} added to cart"),
    }))
}

/// Remove the first matching product from the current user's cart.
#[instrument(skip(state, token))]
pub async fn remove(
    State(state): State<AppState>,
    AuthToken(token): AuthToken,
    Path(item_id): Path<ProductId>,
) -> Result<Json<CartMessage>> {
    let session = require_session(
        &state,
        token.as_deref(),
        "Login required to delete items from cart",
    )?;

    if state.catalog().product_by_id(&item_id).is_none() {
        return Err(ApiError::NotFound("Invalid product id".to_string()));
    }

    let removed = state.users().remove_from_cart(&session.email, &item_id)?;
    if !removed {
        return Err(ApiError::NotFound("Product not found in cart".to_string()));
    }

    Ok(Json(CartMessage {
        message: format!("Item with product id {item_id} deleted from cart"),
    }))
}
