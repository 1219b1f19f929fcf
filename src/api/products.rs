//! Product Endpoints
//!
//! One async wrapper per backend operation under `/products`.

use super::{error_from, fetch_json, send, ApiError};
use crate::models::{Product, ProductInput, ProductPage, StockAdjustment};
use crate::query::ListFilters;

pub const API_BASE: &str = "/products";

/// List one page of products with the given filters.
pub async fn list(filters: &ListFilters, page: u32) -> Result<ProductPage, ApiError> {
    let url = format!("{}?{}", API_BASE, filters.to_query(page));
    fetch_json("GET", &url, None).await
}

/// Load a single product by id.
pub async fn get(id: i64) -> Result<Product, ApiError> {
    fetch_json("GET", &format!("{}/{}", API_BASE, id), None).await
}

/// Method and path for the save operation: no editing id means a create
/// against the base path, an editing id means an update against `/{id}`.
pub fn save_route(editing: Option<i64>) -> (&'static str, String) {
    match editing {
        Some(id) => ("PUT", format!("{}/{}", API_BASE, id)),
        None => ("POST", API_BASE.to_string()),
    }
}

/// Create or update a product, per [`save_route`].
pub async fn save(editing: Option<i64>, input: &ProductInput) -> Result<Product, ApiError> {
    let (method, url) = save_route(editing);
    let body = serde_json::to_string(input).map_err(|e| ApiError::decode(e.to_string()))?;
    fetch_json(method, &url, Some(body)).await
}

/// Delete succeeds on 204 No Content or any other success status.
pub fn delete_succeeded(ok: bool, status: u16) -> bool {
    ok || status == 204
}

/// Remove a product by id.
pub async fn delete(id: i64) -> Result<(), ApiError> {
    let response = send("DELETE", &format!("{}/{}", API_BASE, id), None).await?;
    if !delete_succeeded(response.ok(), response.status()) {
        return Err(error_from(&response).await);
    }
    Ok(())
}

/// Apply a signed stock delta, returning the updated product.
pub async fn adjust_stock(id: i64, delta: i32) -> Result<Product, ApiError> {
    let body = serde_json::to_string(&StockAdjustment { delta })
        .map_err(|e| ApiError::decode(e.to_string()))?;
    fetch_json("PATCH", &format!("{}/{}/stock", API_BASE, id), Some(body)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_route_creates_without_editing_id() {
        assert_eq!(save_route(None), ("POST", "/products".to_string()));
    }

    #[test]
    fn test_save_route_updates_with_editing_id() {
        assert_eq!(save_route(Some(7)), ("PUT", "/products/7".to_string()));
    }

    #[test]
    fn test_delete_accepts_no_content_and_other_success() {
        assert!(delete_succeeded(false, 204));
        assert!(delete_succeeded(true, 200));
        assert!(!delete_succeeded(false, 404));
        assert!(!delete_succeeded(false, 500));
    }
}
