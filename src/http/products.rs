//! Product REST handlers.
//!
//! | Method | Path            | Registry call |
//! |--------|-----------------|---------------|
//! | GET    | /products       | list          |
//! | GET    | /products/{id}  | get           |
//! | POST   | /products       | create        |
//! | PUT    | /products/{id}  | update        |
//! | DELETE | /products/{id}  | delete        |

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::registry::{Product, ProductId};

/// Body accepted by create and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductRequest {
    /// Missing field decodes as empty and is rejected by the validator.
    #[serde(default)]
    pub product_name: String,
}

fn parse_id(raw: &str) -> Result<ProductId, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidId(raw.to_string()))
}

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.read()?.list();
    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id(&raw_id)?;
    let product = state.read()?.get(id)?;
    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let Json(request) = body?;
    let product = state.write()?.create(&request.product_name)?;
    Ok(Json(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id(&raw_id)?;
    let mut registry = state.write()?;

    // An unknown id is reported before a bad body.
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            registry.get(id)?;
            return Err(rejection.into());
        }
    };

    let product = registry.update(id, &request.product_name)?;
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id(&raw_id)?;
    let product = state.write()?.delete(id)?;
    Ok(Json(product))
}
