//! Frontend Models
//!
//! Data structures matching the backend product API (camelCase JSON).

use serde::{Deserialize, Serialize};

/// Product record as returned by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub category: Option<String>,
    pub stock_quantity: i32,
    pub active: bool,
}

/// One page of the product listing
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    #[serde(default)]
    pub content: Vec<Product>,
    #[serde(default = "default_total_pages")]
    pub total_pages: u32,
}

fn default_total_pages() -> u32 {
    1
}

/// Request body for create and update
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Option<String>,
    pub stock_quantity: i32,
    pub active: bool,
}

impl ProductInput {
    /// Build the request body from raw form field values.
    ///
    /// Numbers parse leniently: unparseable input becomes 0. A blank
    /// category is sent as null, not as an empty string.
    pub fn from_fields(
        name: &str,
        description: &str,
        price: &str,
        category: &str,
        stock: &str,
        active: bool,
    ) -> Self {
        let category = category.trim();
        Self {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            price: price.trim().parse().unwrap_or(0.0),
            category: (!category.is_empty()).then(|| category.to_string()),
            stock_quantity: stock.trim().parse().unwrap_or(0),
            active,
        }
    }
}

/// Body for the stock adjustment endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockAdjustment {
    pub delta: i32,
}

/// Error body convention of the backend; anything unparseable is tolerated
/// as "no message"
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Price column formatting: `R$ 9.50`
pub fn format_price(value: f64) -> String {
    format!("R$ {:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_pads_cents() {
        assert_eq!(format_price(9.5), "R$ 9.50");
        assert_eq!(format_price(0.0), "R$ 0.00");
        assert_eq!(format_price(1234.0), "R$ 1234.00");
    }

    #[test]
    fn test_product_deserializes_without_optional_fields() {
        let json = r#"{"id":1,"name":"<b>X</b>","price":9.5,"stockQuantity":3,"active":true}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.name, "<b>X</b>");
        assert_eq!(product.description, None);
        assert_eq!(product.category, None);
        assert_eq!(product.stock_quantity, 3);
        assert!(product.active);
    }

    #[test]
    fn test_page_defaults() {
        let page: ProductPage = serde_json::from_str("{}").unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_pages, 1);

        let json = r#"{"content":[{"id":1,"name":"a","price":1.0,"stockQuantity":0,"active":false}],"totalPages":4}"#;
        let page: ProductPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.total_pages, 4);
    }

    #[test]
    fn test_input_blank_category_is_null() {
        let input = ProductInput::from_fields("Café", "", "9.9", "  ", "5", true);
        assert_eq!(input.category, None);
        let body = serde_json::to_string(&input).unwrap();
        assert!(body.contains(r#""category":null"#));
    }

    #[test]
    fn test_input_lenient_number_parsing() {
        let input = ProductInput::from_fields("x", "", "abc", "Bebidas", "3.5", false);
        assert_eq!(input.price, 0.0);
        assert_eq!(input.stock_quantity, 0);
        assert_eq!(input.category.as_deref(), Some("Bebidas"));

        let input = ProductInput::from_fields("x", "", " 12.5 ", "", "7", true);
        assert_eq!(input.price, 12.5);
        assert_eq!(input.stock_quantity, 7);
    }

    #[test]
    fn test_input_serializes_camel_case() {
        let input = ProductInput::from_fields("x", "d", "1", "c", "2", true);
        let body = serde_json::to_string(&input).unwrap();
        assert!(body.contains(r#""stockQuantity":2"#));
    }
}
