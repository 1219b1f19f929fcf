//! Catalog Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the data the
//! table and pager render.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Product;

/// Listing state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct CatalogState {
    /// Products on the current page
    pub products: Vec<Product>,
    /// Total page count reported by the backend
    pub total_pages: u32,
    /// Zero-based index of the current page
    pub page: u32,
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            total_pages: 1,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogState>;

/// Get the catalog store from context
pub fn use_catalog_store() -> CatalogStore {
    expect_context::<CatalogStore>()
}

/// Replace the page contents after a successful list call
pub fn store_apply_page(store: &CatalogStore, products: Vec<Product>, total_pages: u32) {
    *store.products().write() = products;
    *store.total_pages().write() = total_pages.max(1);
}

/// Move to another page; the list effect reacts to this field
pub fn store_set_page(store: &CatalogStore, page: u32) {
    *store.page().write() = page;
}
